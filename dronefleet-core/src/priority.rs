//! Delivery priorities and their ordering.
//!
//! Priorities form a closed three-value set. The rank drives the presort
//! applied before any allocation strategy runs.
//!
//! # Examples
//! ```
//! use dronefleet_core::Priority;
//!
//! assert_eq!(Priority::High.rank(), 2);
//! assert_eq!("alta".parse::<Priority>(), Ok(Priority::High));
//! assert_eq!(Priority::Medium.to_string(), "medium");
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Urgency of a delivery order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "&'static str")
)]
pub enum Priority {
    /// Deliver when convenient.
    #[default]
    Low,
    /// Deliver ahead of low-priority orders.
    Medium,
    /// Deliver first.
    High,
}

/// Error returned when text does not name a known priority.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown priority '{input}' (expected low, medium or high)")]
pub struct PriorityParseError {
    /// The rejected input.
    pub input: String,
}

impl Priority {
    /// Every priority, lowest first.
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Ordinal rank used for sorting: `low = 0`, `medium = 1`, `high = 2`.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Low => 0,
            Self::Medium => 1,
            Self::High => 2,
        }
    }

    /// Return the priority as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Priority {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = PriorityParseError;

    /// Accepts the English names and the legacy Portuguese labels
    /// (`baixa`, `media`, `alta`), ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" | "baixa" => Ok(Self::Low),
            "medium" | "media" | "média" => Ok(Self::Medium),
            "high" | "alta" => Ok(Self::High),
            _ => Err(PriorityParseError {
                input: s.to_owned(),
            }),
        }
    }
}

impl TryFrom<String> for Priority {
    type Error = PriorityParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Priority> for &'static str {
    fn from(value: Priority) -> Self {
        value.as_str()
    }
}
