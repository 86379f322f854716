use anyhow::Context;
use add_data_rs::adder;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

fn main() -> anyhow::Result<()> {
    // stdout carries the prompt and the confirmation only
    TermLogger::init(LevelFilter::Warn, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)
        .context("initializing logger")?;

    adder::start()?;

    Ok(())
}
