pub mod config;
pub mod entry;
pub mod error;
pub mod prompt;
pub mod writer;

use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;
use log::debug;
use time::PrimitiveDateTime;
use crate::adder::config::Config;
use crate::adder::entry::Entry;
use crate::adder::error::AdderError;

/// Runs one invocation against the real process arguments, stdin, stdout and clock.
pub fn start() -> Result<(), AdderError> {
    let cfg = Config::from_args(env::args_os().skip(1));
    debug!("{:?}", &cfg);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(cfg, &mut stdin.lock(), &mut stdout.lock(), entry::local_now)
}

/// Appends `data` (or a prompted line when `None`) to `filename`.
pub fn add_data<P: AsRef<Path>>(filename: P, data: Option<String>) -> Result<(), AdderError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(Config::new(filename, data), &mut stdin.lock(), &mut stdout.lock(), entry::local_now)
}

/// Prompt if needed, stamp, append, confirm. `clock` is called after the
/// data is known.
pub fn run<R, W, C>(cfg: Config, input: &mut R, output: &mut W, clock: C) -> Result<(), AdderError>
where
    R: BufRead,
    W: Write,
    C: FnOnce() -> PrimitiveDateTime,
{
    let data = match cfg.data {
        Some(d) => d,
        None => prompt::read_data(input, output)?,
    };

    let entry = Entry::new(clock(), data);
    writer::append_entry(&cfg.filename, &entry)?;

    writeln!(output, "Data added to {}", cfg.filename.display())
        .and_then(|_| output.flush())
        .map_err(|e| AdderError::Output { source: e })
}
