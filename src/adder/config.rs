use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const DEFAULT_FILENAME: &str = "data.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub filename: PathBuf,
    pub data: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config { filename: PathBuf::from(DEFAULT_FILENAME), data: None }
    }
}

impl Config {
    pub fn new<P: AsRef<Path>>(filename: P, data: Option<String>) -> Config {
        Config { filename: filename.as_ref().to_path_buf(), data }
    }

    /// Builds the invocation config from the arguments after the program name.
    /// Every argument is text; they are joined with single spaces. With no
    /// arguments `data` stays `None` and the caller has to prompt for it.
    pub fn from_args<I>(args: I) -> Config
    where
        I: IntoIterator<Item = OsString>,
    {
        let words: Vec<String> = args.into_iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();

        let data = if words.is_empty() {
            None
        } else {
            Some(words.join(" "))
        };

        Config { data, ..Config::default() }
    }
}
