//! Per-column accumulators.

use crate::error::StatError;
use crate::options::ColumnType;
use hashbrown::HashMap;
use serde::Serialize;

/// Common capability of every column accumulator.
pub trait Stat {
    /// Feed one raw field value. The empty string is a null.
    ///
    /// # Errors
    ///
    /// Numeric accumulators fail with [`StatError::Parse`] on non-numeric text.
    fn update(&mut self, value: &str) -> Result<(), StatError>;

    /// Summarize everything seen so far. Does not change state.
    ///
    /// # Errors
    ///
    /// Fails when the column has no non-null values.
    fn summarize(&self) -> Result<Summary, StatError>;

    fn count(&self) -> usize;

    fn null_count(&self) -> usize;
}

/// Frequency of each distinct string seen in a text column.
#[derive(Debug, Clone, Default)]
pub struct TextStat {
    string_to_count: HashMap<String, usize>,
}

impl TextStat {
    pub fn new() -> Self {
        Self::default()
    }

    fn non_null(&self) -> impl Iterator<Item = (&String, usize)> {
        self.string_to_count
            .iter()
            .filter(|(s, _)| !s.is_empty())
            .map(|(s, &c)| (s, c))
    }
}

impl Stat for TextStat {
    fn update(&mut self, value: &str) -> Result<(), StatError> {
        if let Some(count) = self.string_to_count.get_mut(value) {
            *count += 1;
        } else {
            self.string_to_count.insert(value.to_owned(), 1);
        }
        Ok(())
    }

    fn summarize(&self) -> Result<Summary, StatError> {
        let count = self.count();
        let null_count = self.null_count();

        // Equal lengths break ties on the lexicographically smallest value.
        let (shortest, num_shortest) = self
            .non_null()
            .min_by(|(a, _), (b, _)| a.len().cmp(&b.len()).then_with(|| a.cmp(b)))
            .ok_or(StatError::EmptyColumn)?;
        let (longest, num_longest) = self
            .non_null()
            .min_by(|(a, _), (b, _)| b.len().cmp(&a.len()).then_with(|| a.cmp(b)))
            .ok_or(StatError::EmptyColumn)?;

        let total_len: usize = self.non_null().map(|(s, c)| s.len() * c).sum();
        #[allow(clippy::cast_precision_loss)]
        let average_length = total_len as f64 / (count - null_count) as f64;

        Ok(Summary::Text(TextSummary {
            count,
            null_count,
            shortest: shortest.clone(),
            num_shortest,
            longest: longest.clone(),
            num_longest,
            average_length,
        }))
    }

    fn count(&self) -> usize {
        self.string_to_count.values().sum()
    }

    fn null_count(&self) -> usize {
        self.string_to_count.get("").copied().unwrap_or(0)
    }
}

/// Running count, extremes and total of a numeric column.
#[derive(Debug, Clone)]
pub struct NumberStat {
    count: usize,
    null_count: usize,
    total: f64,
    least: f64,
    most: f64,
}

impl Default for NumberStat {
    fn default() -> Self {
        Self {
            count: 0,
            null_count: 0,
            total: 0.0,
            least: f64::INFINITY,
            most: f64::NEG_INFINITY,
        }
    }
}

impl NumberStat {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn least(&self) -> f64 {
        self.least
    }

    pub const fn most(&self) -> f64 {
        self.most
    }

    pub const fn total(&self) -> f64 {
        self.total
    }
}

impl Stat for NumberStat {
    fn update(&mut self, value: &str) -> Result<(), StatError> {
        if value.is_empty() {
            self.count += 1;
            self.null_count += 1;
            return Ok(());
        }

        // Padding around a number is tolerated; only a truly empty field is null.
        let num: f64 = value.trim_ascii().parse().map_err(|_| StatError::Parse {
            value: value.to_owned(),
        })?;
        self.count += 1;
        self.total += num;
        self.least = self.least.min(num);
        self.most = self.most.max(num);
        Ok(())
    }

    fn summarize(&self) -> Result<Summary, StatError> {
        let non_null = self.count - self.null_count;
        if non_null == 0 {
            return Err(StatError::DegenerateAverage);
        }

        #[allow(clippy::cast_precision_loss)]
        let average = self.total / non_null as f64;
        Ok(Summary::Number(NumberSummary {
            count: self.count,
            null_count: self.null_count,
            min: self.least,
            max: self.most,
            total: self.total,
            average,
        }))
    }

    fn count(&self) -> usize {
        self.count
    }

    fn null_count(&self) -> usize {
        self.null_count
    }
}

/// Accumulator chosen for a column by its declared type.
#[derive(Debug, Clone)]
pub enum Accumulator {
    Number(NumberStat),
    Text(TextStat),
}

impl Accumulator {
    pub fn for_type(column_type: ColumnType) -> Self {
        match column_type {
            ColumnType::Number => Self::Number(NumberStat::new()),
            ColumnType::Text => Self::Text(TextStat::new()),
        }
    }

    fn as_stat(&self) -> &dyn Stat {
        match self {
            Self::Number(s) => s,
            Self::Text(s) => s,
        }
    }

    fn as_stat_mut(&mut self) -> &mut dyn Stat {
        match self {
            Self::Number(s) => s,
            Self::Text(s) => s,
        }
    }
}

impl Stat for Accumulator {
    fn update(&mut self, value: &str) -> Result<(), StatError> {
        self.as_stat_mut().update(value)
    }

    fn summarize(&self) -> Result<Summary, StatError> {
        self.as_stat().summarize()
    }

    fn count(&self) -> usize {
        self.as_stat().count()
    }

    fn null_count(&self) -> usize {
        self.as_stat().null_count()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextSummary {
    pub count: usize,
    pub null_count: usize,
    pub shortest: String,
    pub num_shortest: usize,
    pub longest: String,
    pub num_longest: usize,
    pub average_length: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumberSummary {
    pub count: usize,
    pub null_count: usize,
    pub min: f64,
    pub max: f64,
    pub total: f64,
    pub average: f64,
}

/// Final state of one column, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Summary {
    Text(TextSummary),
    Number(NumberSummary),
}

impl Summary {
    /// Human-readable report lines, without the column heading.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::Text(s) => vec![
                format!(" count:                  {}", s.count),
                format!(" null count:             {}", s.null_count),
                format!(" count(shortest str):    {} {}", s.num_shortest, s.shortest),
                format!(" count(longest str):     {} {}", s.num_longest, s.longest),
                format!(" average length:         {:.2}", s.average_length),
            ],
            Self::Number(s) => vec![
                format!(" count:      {}", s.count),
                format!(" null_count: {}", s.null_count),
                format!(" min:        {:.3}", s.min),
                format!(" max:        {:.3}", s.max),
                format!(" total:      {:.3}", s.total),
                format!(" avg:        {:.3}", s.average),
            ],
        }
    }
}
