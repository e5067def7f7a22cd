// crates/cli/src/presentation.rs
use crate::error::Result;
use colstat_engine::options::OutputFormat;
use colstat_engine::pipeline::ColumnReport;
use std::fmt::Write;

/// Render column reports in header order.
///
/// # Errors
///
/// Fails only when structured serialization fails.
pub fn render(reports: &[ColumnReport], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(reports)),
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(reports)?;
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Yaml => Ok(serde_yaml::to_string(reports)?),
    }
}

/// `name:` heading, the summary lines, then a blank separator per column.
pub fn render_text(reports: &[ColumnReport]) -> String {
    let mut out = String::new();
    for report in reports {
        let _ = writeln!(out, "{}:", report.name);
        for line in report.summary.lines() {
            let _ = writeln!(out, "{line}");
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use colstat_engine::summarize_reader;
    use std::io::Cursor;

    fn reports(input: &str) -> Vec<ColumnReport> {
        summarize_reader(Cursor::new(input), ',').unwrap()
    }

    #[test]
    fn text_blocks() {
        let out = render_text(&reports("name,age(number)\nalice,30\nbob,25\n"));
        let expected = "\
name:
 count:                  2
 null count:             0
 count(shortest str):    1 bob
 count(longest str):     1 alice
 average length:         4.00

age:
 count:      2
 null_count: 0
 min:        25.000
 max:        30.000
 total:      55.000
 avg:        27.500

";
        assert_eq!(out, expected);
    }

    #[test]
    fn json_is_tagged_by_type() {
        let out = render(&reports("tag,n(number)\nx,1\n"), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["name"], "tag");
        assert_eq!(value[0]["type"], "text");
        assert_eq!(value[0]["shortest"], "x");
        assert_eq!(value[1]["type"], "number");
        assert_eq!(value[1]["total"], 1.0);
    }

    #[test]
    fn yaml_lists_columns() {
        let out = render(&reports("n(number)\n2\n"), OutputFormat::Yaml).unwrap();
        assert!(out.contains("name: n"));
        assert!(out.contains("type: number"));
    }
}
