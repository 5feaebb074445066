//! Proportional breakdowns (quotes, jobs, invoices)
//!
//! A breakdown partitions a total into named buckets, each with a count and
//! a display colour. Slices carry the share of each bucket and its chart label.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::JobdeskError;

/// Slices below this share (in percent) get no chart label
pub const MIN_LABEL_PERCENT: u64 = 5;

/// A display colour, serialized as `#rrggbb`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl FromStr for Rgb {
    type Err = JobdeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(JobdeskError::Validation(format!("Invalid colour: {}", s)));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| JobdeskError::Validation(format!("Invalid colour: {}", s)))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Rgb {
    type Error = JobdeskError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A named category with a count and a display colour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    pub name: String,
    pub count: u64,
    pub color: Rgb,
}

impl Bucket {
    pub fn new(name: impl Into<String>, count: u64, color: Rgb) -> Self {
        Self {
            name: name.into(),
            count,
            color,
        }
    }
}

/// One bucket's part of the chart
#[derive(Debug, Clone, PartialEq)]
pub struct Slice<'a> {
    pub bucket: &'a Bucket,
    /// Fraction of the total in `0.0..=1.0`
    pub share: f64,
    /// Share in whole percent, rounded to nearest
    pub percent: u64,
    /// Chart label, `None` when the slice is too thin to label
    pub label: Option<String>,
}

/// A titled set of buckets partitioning a total
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakdown {
    pub title: String,
    pub buckets: Vec<Bucket>,
}

impl Breakdown {
    pub fn new(title: impl Into<String>, buckets: Vec<Bucket>) -> Self {
        Self {
            title: title.into(),
            buckets,
        }
    }

    /// Sum of bucket counts, saturating at `u64::MAX`
    pub fn total(&self) -> u64 {
        self.buckets
            .iter()
            .fold(0u64, |sum, b| sum.saturating_add(b.count))
    }

    /// Sum of bucket counts, or `None` if it overflows
    pub fn checked_total(&self) -> Option<u64> {
        self.buckets
            .iter()
            .try_fold(0u64, |sum, b| sum.checked_add(b.count))
    }

    /// Per-bucket shares and labels, in bucket order
    pub fn slices(&self) -> Vec<Slice<'_>> {
        let total = self.total();
        self.buckets
            .iter()
            .map(|bucket| {
                if total == 0 {
                    return Slice {
                        bucket,
                        share: 0.0,
                        percent: 0,
                        label: None,
                    };
                }
                let (count, whole) = (u128::from(bucket.count), u128::from(total));
                let percent = u64::try_from((count * 100 + whole / 2) / whole).unwrap_or(100);
                // Compare exactly rather than on the rounded percent
                let label = (count * 100 >= u128::from(MIN_LABEL_PERCENT) * whole)
                    .then(|| format!("{}%", percent));
                Slice {
                    bucket,
                    share: bucket.count as f64 / total as f64,
                    percent,
                    label,
                }
            })
            .collect()
    }

    /// Reject empty titles, empty or duplicate bucket names, and totals past `u64::MAX`
    pub fn validate(&self) -> Result<(), JobdeskError> {
        if self.title.trim().is_empty() {
            return Err(JobdeskError::Validation(
                "Breakdown title cannot be empty".into(),
            ));
        }
        for (i, bucket) in self.buckets.iter().enumerate() {
            if bucket.name.trim().is_empty() {
                return Err(JobdeskError::Validation(format!(
                    "Bucket name cannot be empty in '{}'",
                    self.title
                )));
            }
            if self.buckets[..i].iter().any(|b| b.name == bucket.name) {
                return Err(JobdeskError::Validation(format!(
                    "Duplicate bucket '{}' in '{}'",
                    bucket.name, self.title
                )));
            }
        }
        if self.checked_total().is_none() {
            return Err(JobdeskError::Validation(format!(
                "Bucket counts in '{}' are too large",
                self.title
            )));
        }
        Ok(())
    }
}
