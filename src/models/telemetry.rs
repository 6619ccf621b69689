use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One sample of a generation/consumption series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub timestamp: DateTime<Utc>,
    pub kwh: f64,
}

/// Window requested by the dashboard charts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeriesRange {
    Day,
    Week,
    Month,
}

impl SeriesRange {
    /// Number of samples a provider should return for this window
    pub fn points(&self) -> usize {
        match self {
            SeriesRange::Day => 24,
            SeriesRange::Week => 7,
            SeriesRange::Month => 30,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SeriesRange::Day => "day",
            SeriesRange::Week => "week",
            SeriesRange::Month => "month",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "day" => Some(SeriesRange::Day),
            "week" => Some(SeriesRange::Week),
            "month" => Some(SeriesRange::Month),
            _ => None,
        }
    }

    pub fn all() -> Vec<SeriesRange> {
        vec![SeriesRange::Day, SeriesRange::Week, SeriesRange::Month]
    }
}
