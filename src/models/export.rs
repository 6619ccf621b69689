use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Wrapper serialized into the downloadable JSON file.
/// Pairs the submitted inputs with the computed results so a saved file
/// can be re-imported and displayed without recalculating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportEnvelope<I, R> {
    pub inputs: I,
    pub results: R,
    pub exported_at: DateTime<Utc>,
}

impl<I: Serialize, R: Serialize> ExportEnvelope<I, R> {
    pub fn new(inputs: I, results: R) -> Self {
        Self {
            inputs,
            results,
            exported_at: Utc::now(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// File name for a result download: `verdant-<domain>-<ISO-date>.json`
pub fn export_filename(domain: &str) -> String {
    export_filename_on(domain, Utc::now().date_naive())
}

pub fn export_filename_on(domain: &str, date: NaiveDate) -> String {
    format!("verdant-{}-{}.json", domain, date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        CarbonCategory, CarbonInput, CarbonResult, CategoryShare, Difficulty, ReductionAction,
        TrendPoint,
    };

    #[test]
    fn filename_uses_iso_date() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 27).unwrap();
        assert_eq!(
            export_filename_on("carbon", date),
            "verdant-carbon-2026-08-27.json"
        );
    }

    #[test]
    fn round_trip_is_lossless() {
        let result = CarbonResult {
            total_kg: 8421.337421,
            breakdown: vec![CategoryShare {
                category: CarbonCategory::Household,
                emissions_kg: 3000.123456789,
                percentage: 35.625,
            }],
            recommendations: vec![ReductionAction {
                action: "Switch to a renewable electricity plan".into(),
                category: CarbonCategory::Household,
                potential_savings_kg: 2700.111111,
                difficulty: Difficulty::Easy,
            }],
            trend: vec![TrendPoint {
                month: 1,
                projected_kg: 10105.604905,
                target_kg: 4210.6687105,
            }],
        };
        let envelope = ExportEnvelope::new(CarbonInput::default(), result);

        let json = envelope.to_json().unwrap();
        let restored: ExportEnvelope<CarbonInput, CarbonResult> =
            serde_json::from_str(&json).unwrap();

        // Every numeric field must match to floating-point equality
        assert_eq!(restored, envelope);
    }
}
