use serde::{Deserialize, Serialize};

use crate::models::CalcError;

/// Renewable technology options for the ROI calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnergyTechnology {
    Solar,
    Wind,
    Battery,
    Hybrid,
}

impl EnergyTechnology {
    /// Installed cost per watt of nameplate capacity, in dollars.
    /// Battery storage has no nameplate production so no cost-per-watt.
    pub fn cost_per_watt(&self) -> Option<f64> {
        match self {
            EnergyTechnology::Solar => Some(2.8),
            EnergyTechnology::Wind => Some(3.1),
            EnergyTechnology::Battery => None,
            EnergyTechnology::Hybrid => None,
        }
    }

    /// Fraction of nameplate capacity actually produced over a year
    pub fn capacity_factor(&self) -> f64 {
        match self {
            EnergyTechnology::Solar => 0.18,
            EnergyTechnology::Wind => 0.30,
            EnergyTechnology::Battery => 0.0,
            EnergyTechnology::Hybrid => 0.0,
        }
    }

    /// Expected service life used for lifetime savings and NPV
    pub fn lifespan_years(&self) -> u32 {
        match self {
            EnergyTechnology::Solar => 25,
            EnergyTechnology::Wind => 20,
            EnergyTechnology::Battery => 15,
            EnergyTechnology::Hybrid => 20,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EnergyTechnology::Solar => "solar",
            EnergyTechnology::Wind => "wind",
            EnergyTechnology::Battery => "battery",
            EnergyTechnology::Hybrid => "hybrid",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "solar" => Some(EnergyTechnology::Solar),
            "wind" => Some(EnergyTechnology::Wind),
            "battery" => Some(EnergyTechnology::Battery),
            "hybrid" => Some(EnergyTechnology::Hybrid),
            _ => None,
        }
    }

    pub fn all() -> Vec<EnergyTechnology> {
        vec![
            EnergyTechnology::Solar,
            EnergyTechnology::Wind,
            EnergyTechnology::Battery,
            EnergyTechnology::Hybrid,
        ]
    }
}

/// Geographic region supplying resource multipliers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Region {
    Southwest,
    Southeast,
    Northeast,
    Northwest,
    Midwest,
    NationalAverage,
}

impl Region {
    pub fn solar_multiplier(&self) -> f64 {
        match self {
            Region::Southwest => 1.3,
            Region::Southeast => 1.1,
            Region::Northeast => 0.9,
            Region::Northwest => 0.85,
            Region::Midwest => 1.0,
            Region::NationalAverage => 1.0,
        }
    }

    pub fn wind_multiplier(&self) -> f64 {
        match self {
            Region::Southwest => 0.9,
            Region::Southeast => 0.8,
            Region::Northeast => 1.1,
            Region::Northwest => 1.15,
            Region::Midwest => 1.25,
            Region::NationalAverage => 1.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Southwest => "southwest",
            Region::Southeast => "southeast",
            Region::Northeast => "northeast",
            Region::Northwest => "northwest",
            Region::Midwest => "midwest",
            Region::NationalAverage => "national average",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "southwest" => Some(Region::Southwest),
            "southeast" => Some(Region::Southeast),
            "northeast" => Some(Region::Northeast),
            "northwest" => Some(Region::Northwest),
            "midwest" => Some(Region::Midwest),
            "national average" => Some(Region::NationalAverage),
            _ => None,
        }
    }

    pub fn all() -> Vec<Region> {
        vec![
            Region::Southwest,
            Region::Southeast,
            Region::Northeast,
            Region::Northwest,
            Region::Midwest,
            Region::NationalAverage,
        ]
    }
}

/// Parameters for a single ROI projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentInput {
    /// Gross amount invested, before incentives ($1,000 - $1,000,000)
    pub amount: f64,
    pub technology: EnergyTechnology,
    pub region: Region,
    /// Retail electricity rate in $/kWh (0.05 - 0.50)
    pub electricity_rate: f64,
    /// Annual household consumption in kWh (1,000 - 100,000)
    pub annual_consumption_kwh: f64,
    /// Incentive / tax-credit percentage (0 - 50)
    pub incentive_pct: f64,
    /// Discount rate used for NPV; a default applies when absent
    pub financing_rate: Option<f64>,
    /// Loan term in years (1 - 30) when the purchase is financed
    pub financing_term_years: Option<u32>,
}

/// One row of the year-by-year amortization series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearCashflow {
    pub year: u32,
    pub savings: f64,
    pub cumulative: f64,
    pub discounted_cumulative: f64,
}

/// Projection output for one technology.
///
/// Payback, ROI and IRR are `None` when annual savings is not positive;
/// they have no defined value in that case and must render as "N/A".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentResult {
    pub technology: EnergyTechnology,
    pub net_investment: f64,
    pub annual_production_kwh: f64,
    pub annual_savings: f64,
    pub payback_years: Option<f64>,
    pub roi_pct: Option<f64>,
    pub npv: f64,
    /// annual savings / net investment. An approximation carried over from
    /// the product definition, not a root-solved internal rate of return.
    pub irr_approx: Option<f64>,
    pub lifespan_years: u32,
    pub cashflow: Vec<YearCashflow>,
}

impl InvestmentInput {
    /// Discount rate for NPV when no financing rate was entered
    pub const DEFAULT_DISCOUNT_RATE: f64 = 0.05;

    pub fn discount_rate(&self) -> f64 {
        self.financing_rate.unwrap_or(Self::DEFAULT_DISCOUNT_RATE)
    }
}

/// Range check shared by the investment form and the service boundary
pub fn check_range(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), CalcError> {
    if !value.is_finite() || value < min || value > max {
        return Err(CalcError::Validation {
            field,
            message: format!("must be between {} and {}", min, max),
        });
    }
    Ok(())
}
