// crates/cli/src/config.rs
use crate::args::Args;
pub use colstat_engine::config::{Config, ConfigBuilder};

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            input: args.input,
            delimiter: args.delimiter,
            format: args.format.into(),
        }
    }
}
