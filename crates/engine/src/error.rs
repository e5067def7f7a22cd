use std::path::PathBuf;
use thiserror::Error;

/// Failures raised by a single column accumulator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatError {
    #[error("failed to parse '{value}' as a number")]
    Parse { value: String },

    #[error("column has no non-null values")]
    EmptyColumn,

    #[error("average is undefined: column has no non-null numbers")]
    DegenerateAverage,
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("input is empty: missing header line")]
    MissingHeader,

    #[error("Invalid header: {0}")]
    HeaderFormat(String),

    #[error("Column '{column}'{}: {source}", .line.map(|l| format!(" at line {l}")).unwrap_or_default())]
    Column {
        column: String,
        line: Option<usize>,
        #[source]
        source: StatError,
    },

    #[error("Failed to read input '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid delimiter {0:?}")]
    InvalidDelimiter(char),
}

impl EngineError {
    pub(crate) fn io(path: Option<&std::path::Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.map_or_else(|| PathBuf::from("<input>"), std::path::Path::to_path_buf),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
