//! Telemetry data provider
//!
//! The dashboard depends only on the `DataProvider` trait; the mock
//! implementation fabricates plausible series until a real pipeline
//! can be plugged in behind the same interface.

use chrono::{Duration, Timelike, Utc};
use rand::Rng;

use crate::models::{DataPoint, SeriesRange};

/// Source of ordered generation/consumption series for the dashboard charts
pub trait DataProvider {
    fn fetch_series(&self, range: SeriesRange) -> Vec<DataPoint>;
}

/// Fabricated telemetry with a rough day/night shape and random jitter
pub struct MockTelemetry {
    pub base_kwh: f64,
}

impl MockTelemetry {
    pub fn new(base_kwh: f64) -> Self {
        Self { base_kwh }
    }
}

impl DataProvider for MockTelemetry {
    fn fetch_series(&self, range: SeriesRange) -> Vec<DataPoint> {
        let mut rng = rand::thread_rng();
        let now = Utc::now();
        let (count, step) = match range {
            SeriesRange::Day => (range.points(), Duration::hours(1)),
            SeriesRange::Week | SeriesRange::Month => (range.points(), Duration::days(1)),
        };

        (0..count)
            .map(|i| {
                let timestamp = now - step * (count - 1 - i) as i32;
                // Solar-ish daily curve: peak at midday, nothing overnight
                let shape = match range {
                    SeriesRange::Day => {
                        let hour = timestamp.hour() as f64;
                        (std::f64::consts::PI * (hour - 6.0) / 12.0).sin().max(0.0)
                    }
                    _ => 0.6 + rng.gen_range(0.0..0.4),
                };
                let kwh = self.base_kwh * shape * (1.0 + rng.gen_range(-0.15..0.15));
                DataPoint {
                    timestamp,
                    kwh: kwh.max(0.0),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_is_ordered_and_sized() {
        let provider = MockTelemetry::new(40.0);
        for range in SeriesRange::all() {
            let series = provider.fetch_series(range);
            assert_eq!(series.len(), range.points());
            for pair in series.windows(2) {
                assert!(pair[0].timestamp < pair[1].timestamp);
            }
            assert!(series.iter().all(|p| p.kwh >= 0.0));
        }
    }
}
