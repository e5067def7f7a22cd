// crates/cli/src/lib.rs
pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod options;
pub mod parsers;
pub mod presentation;

use crate::config::Config;
use crate::error::Result;
use std::io::Write;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Summarize the configured input and write the report to stdout.
///
/// Nothing is written unless every column summarized successfully.
///
/// # Errors
///
/// Returns the engine failure, or a rendering/write error.
pub fn execute(config: &Config) -> Result<()> {
    let reports = colstat_engine::run(config)?;
    let rendered = presentation::render(&reports, config.format)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
