use compact_str::CompactString;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use serde::{Deserialize, Serialize};

/// 2^63, the first `f64` above `i64::MAX`.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// The value of a metric as read from rule and metric files.
///
/// Values are totally ordered: numbers compare by their exact mathematical value
/// regardless of representation (`1 == 1.0`, `-0.0 == 0.0`), `NaN` sorts above every
/// other number and equals itself, and every number sorts below every text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Integer(i64),
    Decimal(f64),
    Text(CompactString),
}

impl Ord for MetricValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a.cmp(b),
            (Self::Decimal(a), Self::Decimal(b)) => cmp_decimals(*a, *b),
            (Self::Integer(a), Self::Decimal(b)) => cmp_integer_decimal(*a, *b),
            (Self::Decimal(a), Self::Integer(b)) => cmp_integer_decimal(*b, *a).reverse(),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Text(_), _) => Ordering::Greater,
            (_, Self::Text(_)) => Ordering::Less,
        }
    }
}

impl PartialOrd for MetricValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for MetricValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for MetricValue {}

impl Hash for MetricValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Integer(i) => {
                state.write_u8(0);
                i.hash(state);
            }
            Self::Decimal(d) => {
                if d.is_nan() {
                    state.write_u8(1);
                } else if let Some(i) = integral_value(*d) {
                    // must collide with the equal Integer
                    state.write_u8(0);
                    i.hash(state);
                } else {
                    state.write_u8(2);
                    d.to_bits().hash(state);
                }
            }
            Self::Text(s) => {
                state.write_u8(3);
                s.hash(state);
            }
        }
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Decimal(d) => write!(f, "{d}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for MetricValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for MetricValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for MetricValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for MetricValue {
    fn from(value: f64) -> Self {
        Self::Decimal(value)
    }
}

impl From<&str> for MetricValue {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl From<CompactString> for MetricValue {
    fn from(value: CompactString) -> Self {
        Self::Text(value)
    }
}

fn cmp_decimals(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            if a < b {
                Ordering::Less
            } else if a > b {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        }
    }
}

/// Exact comparison of an integer with a decimal, without rounding the integer.
fn cmp_integer_decimal(i: i64, d: f64) -> Ordering {
    if d.is_nan() || d >= I64_LIMIT {
        return Ordering::Less;
    }

    if d < -I64_LIMIT {
        return Ordering::Greater;
    }

    let whole = d.trunc();

    #[expect(clippy::cast_possible_truncation, reason = "whole is integral and within the i64 range")]
    let whole_int = whole as i64;

    match i.cmp(&whole_int) {
        Ordering::Equal => {
            let fraction = d - whole;
            if fraction > 0.0 {
                Ordering::Less
            } else if fraction < 0.0 {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        }
        ordering => ordering,
    }
}

/// Returns the integer equal to `d`, if there is one.
fn integral_value(d: f64) -> Option<i64> {
    if d.is_finite() && d.fract() == 0.0 && (-I64_LIMIT..I64_LIMIT).contains(&d) {
        #[expect(clippy::cast_possible_truncation, reason = "d is integral and within the i64 range")]
        let i = d as i64;
        Some(i)
    } else {
        None
    }
}
