use log::warn;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};
use crate::adder::error::AdderError;

/// One line of the target file: `[YYYY-MM-DD HH:MM:SS] text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub timestamp: PrimitiveDateTime,
    pub text: String,
}

impl Entry {
    pub fn new(timestamp: PrimitiveDateTime, text: impl Into<String>) -> Entry {
        Entry { timestamp, text: text.into() }
    }

    /// Renders the entry without a line terminator. The text is written
    /// verbatim, embedded newlines included.
    pub fn line(&self) -> Result<String, AdderError> {
        let fmt = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
        let ts = self.timestamp.format(&fmt)
            .map_err(|e| AdderError::Format { source: e })?;
        Ok(format!("[{}] {}", ts, self.text))
    }
}

/// Current wall-clock time in the local timezone.
pub fn local_now() -> PrimitiveDateTime {
    // now_local refuses when the offset cannot be read soundly (multi-threaded unix processes)
    let now = OffsetDateTime::now_local().unwrap_or_else(|e| {
        warn!("local time offset unavailable ({}), falling back to UTC", e);
        OffsetDateTime::now_utc()
    });
    PrimitiveDateTime::new(now.date(), now.time())
}
