use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdderError {
    #[error("opening {path} for append")]
    Open {
        #[source]
        source: io::Error,
        path: String,
    },
    #[error("writing entry to {path}")]
    Write {
        #[source]
        source: io::Error,
        path: String,
    },
    #[error("reading data from standard input")]
    Prompt {
        #[source]
        source: io::Error,
    },
    #[error("writing to standard output")]
    Output {
        #[source]
        source: io::Error,
    },
    #[error("formatting timestamp")]
    Format {
        #[source]
        source: time::error::Format,
    },
}
