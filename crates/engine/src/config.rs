use crate::error::{EngineError, Result};
use crate::options::OutputFormat;
use derive_builder::Builder;
use std::path::PathBuf;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    /// `None` reads from standard input.
    #[builder(default)]
    pub input: Option<PathBuf>,
    #[builder(default = "','")]
    pub delimiter: char,
    #[builder(default)]
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: None,
            delimiter: ',',
            format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Rejects delimiters that would collide with header annotation syntax.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidDelimiter`] for parentheses, quotes and
    /// line terminators.
    pub fn validate(&self) -> Result<()> {
        match self.delimiter {
            '(' | ')' | '"' | '\n' | '\r' => Err(EngineError::InvalidDelimiter(self.delimiter)),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_match_default() {
        let built = ConfigBuilder::default().build().unwrap();
        assert_eq!(built.delimiter, ',');
        assert_eq!(built.format, OutputFormat::Text);
        assert!(built.input.is_none());
    }

    #[test]
    fn validate_rejects_paren_delimiter() {
        let config = ConfigBuilder::default().delimiter('(').build().unwrap();
        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidDelimiter('('))
        ));
        assert!(Config::default().validate().is_ok());
    }
}
