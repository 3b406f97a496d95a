//! Values shown in reports and how they become text

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::console::{Line, Span, Style};

/// Shown in place of a value the current tick does not carry
pub const PLACEHOLDER: &str = "---";

/// Content of a labelled field: a single value or a list of values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Rendered as-is
    Scalar(String),
    /// Rendered comma-separated
    List(Vec<String>),
}

impl FieldValue {
    /// A scalar from anything displayable
    #[must_use]
    pub fn scalar(value: impl fmt::Display) -> Self {
        Self::Scalar(value.to_string())
    }

    /// A list from any sequence of displayable items
    #[must_use]
    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: fmt::Display,
    {
        Self::List(items.into_iter().map(|v| v.to_string()).collect())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(value) => f.write_str(value),
            Self::List(items) => f.write_str(&items.join(", ")),
        }
    }
}

/// `"<icon> <title>: <value>"` with the icon and title in bold
#[must_use]
pub fn format_field(icon: &str, title: &str, value: &FieldValue) -> Line {
    Line::styled(format!("{icon} {title}"), Style::new().bold())
        .with(Span::raw(format!(": {value}")))
}

/// The value of a time variable at one tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimeValue {
    /// Counters such as update or epoch numbers
    Int(i64),
    /// Elapsed seconds and other fractional clocks
    Float(f64),
    /// Preformatted text such as a wall-clock string
    Text(String),
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => f.write_str(&format_float(*v)),
            Self::Text(v) => f.write_str(v),
        }
    }
}

impl From<i64> for TimeValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for TimeValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for TimeValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for TimeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for TimeValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Random seed identifier of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeedId {
    /// Numeric seed
    Number(i64),
    /// Named seed
    Text(String),
}

impl Default for SeedId {
    fn default() -> Self {
        Self::Text("no_seed_provided".to_string())
    }
}

impl fmt::Display for SeedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
        }
    }
}

impl From<i64> for SeedId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for SeedId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Format a float the way experiment logs print it: whole numbers keep a
/// trailing `.0`, non-finite values print as `nan`, `inf` and `-inf`, and
/// magnitudes outside `[1e-4, 1e16)` use exponent notation (`1e-05`,
/// `1.5e+16`).
#[must_use]
#[allow(clippy::float_cmp)]
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        return exponent_form(value);
    }
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Shortest exponent form with a signed, two-digit exponent
fn exponent_form(value: f64) -> String {
    let shortest = format!("{value:e}");
    let Some((mantissa, exponent)) = shortest.split_once('e') else {
        return shortest;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}

/// Round a stat to 3 decimals (ties to even) and format it
#[must_use]
pub fn format_stat(value: f64) -> String {
    if !value.is_finite() || value.abs() >= 1e15 {
        return format_float(value);
    }
    format_float((value * 1000.0).round_ties_even() / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_stat_rounds_to_three_decimals() {
        assert_eq!(format_stat(1.234_56), "1.235");
        assert_eq!(format_stat(0.1), "0.1");
        assert_eq!(format_stat(-2.000_4), "-2.0");
        assert_eq!(format_stat(3.0), "3.0");
        assert_eq!(format_stat(12.345_678), "12.346");
    }

    #[test]
    fn test_format_stat_non_finite() {
        assert_eq!(format_stat(f64::NAN), "nan");
        assert_eq!(format_stat(f64::INFINITY), "inf");
        assert_eq!(format_stat(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_format_float_keeps_trailing_zero() {
        assert_eq!(format_float(2.0), "2.0");
        assert_eq!(format_float(0.25), "0.25");
    }

    #[test]
    fn test_format_float_switches_to_exponent_at_extremes() {
        assert_eq!(format_float(1e-5), "1e-05");
        assert_eq!(format_float(-2.5e-7), "-2.5e-07");
        assert_eq!(format_float(1e16), "1e+16");
        assert_eq!(format_float(1.5e16), "1.5e+16");
        assert_eq!(format_float(1.5e300), "1.5e+300");
        assert_eq!(format_float(1e-4), "0.0001");
        assert_eq!(format_float(1e15), "1000000000000000.0");
        assert_eq!(format_float(0.0), "0.0");
    }

    #[test]
    fn test_time_value_display() {
        assert_eq!(TimeValue::Int(10).to_string(), "10");
        assert_eq!(TimeValue::Float(1.5).to_string(), "1.5");
        assert_eq!(TimeValue::from("12:00").to_string(), "12:00");
    }

    #[test]
    fn test_time_value_deserializes_untagged() {
        let values: Vec<TimeValue> = serde_json::from_str(r#"[3, 2.5, "epoch 1"]"#).unwrap();
        assert_eq!(
            values,
            vec![
                TimeValue::Int(3),
                TimeValue::Float(2.5),
                TimeValue::Text("epoch 1".to_string())
            ]
        );
    }

    #[test]
    fn test_seed_id_display_and_default() {
        assert_eq!(SeedId::Number(42).to_string(), "42");
        assert_eq!(SeedId::from("seed_a").to_string(), "seed_a");
        assert_eq!(SeedId::default().to_string(), "no_seed_provided");
    }

    #[test]
    fn test_field_value_list_joins_with_commas() {
        let value = FieldValue::list(["train_loss", "test_loss"]);
        assert_eq!(value.to_string(), "train_loss, test_loss");
        assert_eq!(FieldValue::list(Vec::<String>::new()).to_string(), "");
    }

    #[test]
    fn test_format_field_bolds_title() {
        let line = format_field("📖", "Log Dir", &FieldValue::scalar("experiments/"));
        assert_eq!(line.plain(), "📖 Log Dir: experiments/");
        assert!(line.spans[0].style.bold);
        assert!(!line.spans[1].style.bold);
    }
}
