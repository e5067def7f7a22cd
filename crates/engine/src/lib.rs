// crates/engine/src/lib.rs
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub mod config;
pub mod error;
pub mod header;
pub mod options;
pub mod pipeline;
pub mod stats;

use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::pipeline::{ColumnReport, Pipeline};

/// Run the column statistics engine over the configured input.
///
/// # Errors
///
/// Any header, parse, empty-column or I/O failure aborts the run; no partial
/// result is returned.
pub fn run(config: &Config) -> Result<Vec<ColumnReport>> {
    config.validate()?;
    match &config.input {
        Some(path) => {
            let file = File::open(path).map_err(|e| EngineError::io(Some(path.as_path()), e))?;
            process(BufReader::new(file), config.delimiter, Some(path.as_path()))
        }
        None => process(std::io::stdin().lock(), config.delimiter, Some(Path::new("<stdin>"))),
    }
}

/// Summarize an already opened reader: header line first, data rows after.
///
/// # Errors
///
/// See [`run`].
pub fn summarize_reader<R: BufRead>(reader: R, delimiter: char) -> Result<Vec<ColumnReport>> {
    process(reader, delimiter, None)
}

fn process<R: BufRead>(reader: R, delimiter: char, path: Option<&Path>) -> Result<Vec<ColumnReport>> {
    let mut lines = reader.lines();

    let header = lines
        .next()
        .ok_or(EngineError::MissingHeader)?
        .map_err(|e| EngineError::io(path, e))?;
    let mut pipeline = Pipeline::from_header(&header, delimiter)?;

    // The header is line 1.
    for (line_no, line) in (2..).zip(lines) {
        let line = line.map_err(|e| EngineError::io(path, e))?;
        pipeline.feed_row(line_no, &line)?;
    }
    log::debug!("read {} data row(s)", pipeline.rows());

    pipeline.summarize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StatError;
    use crate::stats::Summary;
    use std::io::Cursor;

    #[test]
    fn summarizes_reader() {
        let input = "tag\nx\nxx\nx\n";
        let reports = summarize_reader(Cursor::new(input), ',').unwrap();
        assert_eq!(reports.len(), 1);
        match &reports[0].summary {
            Summary::Text(s) => {
                assert_eq!(s.count, 3);
                assert_eq!((s.shortest.as_str(), s.num_shortest), ("x", 2));
                assert_eq!((s.longest.as_str(), s.num_longest), ("xx", 1));
            }
            Summary::Number(_) => panic!("expected text summary"),
        }
    }

    #[test]
    fn empty_input_has_no_header() {
        assert!(matches!(
            summarize_reader(Cursor::new(""), ','),
            Err(EngineError::MissingHeader)
        ));
    }

    #[test]
    fn header_only_number_column_is_degenerate() {
        let err = summarize_reader(Cursor::new("n(number)\n"), ',').unwrap_err();
        assert!(matches!(
            err,
            EngineError::Column {
                source: StatError::DegenerateAverage,
                ..
            }
        ));
    }

    #[test]
    fn run_reports_missing_file() {
        let config = crate::config::ConfigBuilder::default()
            .input(std::path::PathBuf::from("/definitely/not/here.csv"))
            .build()
            .unwrap();
        let err = run(&config).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.csv"));
    }
}
