use serde::{Deserialize, Serialize};

/// Output formats understood by the report renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

/// Declared type of a column, taken from its `(annotation)` in the header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Number,
    #[default]
    Text,
}

impl ColumnType {
    /// Only the exact annotation `number` selects the numeric accumulator.
    pub fn from_annotation(annotation: Option<&str>) -> Self {
        match annotation {
            Some("number") => Self::Number,
            _ => Self::Text,
        }
    }
}
