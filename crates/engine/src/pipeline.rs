use crate::error::{EngineError, Result};
use crate::header::{self, ColumnSpec};
use crate::options::ColumnType;
use crate::stats::{Accumulator, Stat, Summary};
use serde::Serialize;

/// One header column together with its running accumulator.
#[derive(Debug, Clone)]
pub struct Column {
    pub spec: ColumnSpec,
    pub accumulator: Accumulator,
}

/// Summary of one column, in header order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnReport {
    pub name: String,
    #[serde(flatten)]
    pub summary: Summary,
}

/// Routes each row's fields positionally to the column accumulators.
#[derive(Debug, Clone)]
pub struct Pipeline {
    columns: Vec<Column>,
    delimiter: char,
    rows: usize,
}

impl Pipeline {
    pub fn new(specs: Vec<ColumnSpec>, delimiter: char) -> Self {
        let columns = specs
            .into_iter()
            .map(|spec| Column {
                accumulator: Accumulator::for_type(spec.column_type),
                spec,
            })
            .collect();
        Self {
            columns,
            delimiter,
            rows: 0,
        }
    }

    /// Build a pipeline from the raw header line.
    ///
    /// # Errors
    ///
    /// Propagates [`EngineError::HeaderFormat`] from header parsing.
    pub fn from_header(line: &str, delimiter: char) -> Result<Self> {
        let specs = header::parse_header(line, delimiter)?;
        log::debug!(
            "header declares {} column(s): {:?}",
            specs.len(),
            specs
                .iter()
                .map(|s| (s.name.as_str(), s.column_type))
                .collect::<Vec<_>>()
        );
        for spec in &specs {
            if let (Some(annotation), ColumnType::Text) = (&spec.annotation, spec.column_type) {
                log::debug!(
                    "column '{}': annotation '({annotation})' is not `number`, using text statistics",
                    spec.name
                );
            }
        }
        Ok(Self::new(specs, delimiter))
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Number of data rows fed so far.
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Feed one data row. `line_no` is the 1-based input line, used for errors.
    ///
    /// Short rows leave the trailing columns untouched; extra fields are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Column`] when a numeric field does not parse.
    pub fn feed_row(&mut self, line_no: usize, line: &str) -> Result<()> {
        let delimiter = self.delimiter;
        let mut fields = line
            .trim_end_matches(|c: char| c.is_whitespace() && c != delimiter)
            .split(delimiter);
        let mut supplied = 0;

        for (column, field) in self.columns.iter_mut().zip(fields.by_ref()) {
            column
                .accumulator
                .update(field)
                .map_err(|source| EngineError::Column {
                    column: column.spec.name.clone(),
                    line: Some(line_no),
                    source,
                })?;
            supplied += 1;
        }

        if supplied < self.columns.len() {
            log::trace!(
                "line {line_no}: {supplied} of {} field(s) supplied",
                self.columns.len()
            );
        }
        let extra = fields.count();
        if extra > 0 {
            log::warn!("line {line_no}: ignoring {extra} field(s) beyond the header");
        }

        self.rows += 1;
        Ok(())
    }

    /// Summarize every column in header order. Can be called repeatedly.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Column`] for the first column with no non-null values.
    pub fn summarize(&self) -> Result<Vec<ColumnReport>> {
        self.columns
            .iter()
            .map(|column| {
                let summary = column
                    .accumulator
                    .summarize()
                    .map_err(|source| EngineError::Column {
                        column: column.spec.name.clone(),
                        line: None,
                        source,
                    })?;
                Ok(ColumnReport {
                    name: column.spec.name.clone(),
                    summary,
                })
            })
            .collect()
    }
}
