//! Header line parsing.
//!
//! Each delimited field of the header becomes one column. A field may carry a
//! single parenthesized type annotation anywhere in its text, e.g.
//! `age(number)` or `"age" (number)`. Quotes are dropped from names and
//! delimiters inside parentheses never split a field, so names and types are
//! paired in one pass and can not drift out of alignment.

use crate::error::{EngineError, Result};
use crate::options::ColumnType;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static ANNOTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^)]*)\)").expect("annotation pattern is valid"));

/// A column declared by the header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    /// Raw annotation text between the parentheses, if any.
    #[serde(skip)]
    pub annotation: Option<String>,
}

/// Parse a header line into ordered column declarations.
///
/// # Errors
///
/// Returns [`EngineError::HeaderFormat`] for unbalanced or nested
/// parentheses and for fields carrying more than one annotation.
pub fn parse_header(line: &str, delimiter: char) -> Result<Vec<ColumnSpec>> {
    let line = line.trim_end_matches(['\r', '\n']);
    split_fields(line, delimiter)?
        .into_iter()
        .enumerate()
        .map(|(index, field)| parse_field(index, field))
        .collect()
}

fn split_fields(line: &str, delimiter: char) -> Result<Vec<&str>> {
    let mut fields = Vec::new();
    let mut open: Option<usize> = None;
    let mut start = 0;

    for (idx, ch) in line.char_indices() {
        match ch {
            '(' => {
                if let Some(at) = open {
                    return Err(EngineError::HeaderFormat(format!(
                        "nested '(' at byte {idx} (group opened at byte {at})"
                    )));
                }
                open = Some(idx);
            }
            ')' => {
                if open.take().is_none() {
                    return Err(EngineError::HeaderFormat(format!(
                        "unmatched ')' at byte {idx}"
                    )));
                }
            }
            c if c == delimiter && open.is_none() => {
                fields.push(&line[start..idx]);
                start = idx + c.len_utf8();
            }
            _ => {}
        }
    }

    if let Some(at) = open {
        return Err(EngineError::HeaderFormat(format!(
            "unclosed '(' at byte {at}"
        )));
    }
    fields.push(&line[start..]);
    Ok(fields)
}

fn parse_field(index: usize, field: &str) -> Result<ColumnSpec> {
    let mut annotations = ANNOTATION.captures_iter(field).map(|caps| caps[1].to_string());
    let annotation = annotations.next();
    if annotations.next().is_some() {
        return Err(EngineError::HeaderFormat(format!(
            "field {} ('{}') has more than one type annotation",
            index + 1,
            field.trim()
        )));
    }

    let name = ANNOTATION.replace_all(field, "").replace('"', "").trim().to_string();
    let column_type = ColumnType::from_annotation(annotation.as_deref());

    Ok(ColumnSpec {
        name,
        column_type,
        annotation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(specs: &[ColumnSpec]) -> Vec<&str> {
        specs.iter().map(|s| s.name.as_str()).collect()
    }

    fn types(specs: &[ColumnSpec]) -> Vec<ColumnType> {
        specs.iter().map(|s| s.column_type).collect()
    }

    #[test]
    fn plain_names_default_to_text() {
        let specs = parse_header("name, city ,zip\n", ',').unwrap();
        assert_eq!(names(&specs), ["name", "city", "zip"]);
        assert_eq!(types(&specs), [ColumnType::Text; 3]);
    }

    #[test]
    fn number_annotation_selects_number() {
        let specs = parse_header("name,age(number)", ',').unwrap();
        assert_eq!(names(&specs), ["name", "age"]);
        assert_eq!(types(&specs), [ColumnType::Text, ColumnType::Number]);
        assert_eq!(specs[1].annotation.as_deref(), Some("number"));
    }

    #[test]
    fn annotation_pairs_with_its_own_field() {
        // The annotated field is not the first one: types must not shift left.
        let specs = parse_header("id,label,score(number)", ',').unwrap();
        assert_eq!(
            types(&specs),
            [ColumnType::Text, ColumnType::Text, ColumnType::Number]
        );
    }

    #[test]
    fn other_annotations_are_text() {
        let specs = parse_header("a(text),b(Number),c( number ),d()", ',').unwrap();
        assert_eq!(types(&specs), [ColumnType::Text; 4]);
        assert_eq!(specs[3].annotation.as_deref(), Some(""));
    }

    #[test]
    fn quotes_are_stripped() {
        let specs = parse_header("\"first name\",\"age\"(number)\r\n", ',').unwrap();
        assert_eq!(names(&specs), ["first name", "age"]);
        assert_eq!(specs[1].column_type, ColumnType::Number);
    }

    #[test]
    fn delimiter_inside_parentheses_does_not_split() {
        let specs = parse_header("pair(a,b),n(number)", ',').unwrap();
        assert_eq!(names(&specs), ["pair", "n"]);
        assert_eq!(specs[0].annotation.as_deref(), Some("a,b"));
    }

    #[test]
    fn custom_delimiter() {
        let specs = parse_header("x(number);y", ';').unwrap();
        assert_eq!(names(&specs), ["x", "y"]);
        assert_eq!(types(&specs), [ColumnType::Number, ColumnType::Text]);
    }

    #[test]
    fn empty_header_is_one_unnamed_column() {
        let specs = parse_header("", ',').unwrap();
        assert_eq!(names(&specs), [""]);
    }

    #[test]
    fn rejects_malformed_parentheses() {
        for header in ["a(number,b", "a)number(", "a((number))", "a(number)(text)"] {
            assert!(
                matches!(parse_header(header, ','), Err(EngineError::HeaderFormat(_))),
                "{header} should be rejected"
            );
        }
    }
}
