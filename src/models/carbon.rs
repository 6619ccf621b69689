use serde::{Deserialize, Serialize};

/// A single flight entry in the transportation section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightEntry {
    pub distance_miles: f64,
    pub trips_per_year: f64,
}

/// User-supplied household, transportation and lifestyle figures.
/// Recreated fresh on every calculation; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarbonInput {
    // Household (monthly / daily usage)
    pub electricity_kwh: f64,
    pub electricity_source: ElectricitySource,
    pub natural_gas_therms: f64,
    pub water_gallons_per_day: f64,
    // Transportation (weekly mileage plus flights per year)
    pub vehicle: VehicleType,
    pub car_miles_per_week: f64,
    pub transit_miles_per_week: f64,
    pub flights: Vec<FlightEntry>,
    // Lifestyle
    pub diet: DietType,
    pub food_waste_pct: f64,
    pub shopping: ShoppingHabit,
    pub waste_lbs_per_week: f64,
    pub recycling: bool,
    pub composting: bool,
}

/// Top-level emission categories used for the breakdown chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CarbonCategory {
    Household,
    Transportation,
    Lifestyle,
}

impl CarbonCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            CarbonCategory::Household => "Household",
            CarbonCategory::Transportation => "Transportation",
            CarbonCategory::Lifestyle => "Lifestyle",
        }
    }
}

/// One slice of the emissions breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub category: CarbonCategory,
    pub emissions_kg: f64,
    /// Share of the total in percent. All zero when total emissions are zero.
    pub percentage: f64,
}

/// Qualitative effort rating attached to a reduction action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// A suggested way to cut emissions, ranked by absolute savings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReductionAction {
    pub action: String,
    pub category: CarbonCategory,
    pub potential_savings_kg: f64,
    pub difficulty: Difficulty,
}

/// One point of the synthetic 12-month trend series.
/// Cosmetic chart data interpolating toward a 50% reduction target,
/// not a forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub month: u32,
    pub projected_kg: f64,
    pub target_kg: f64,
}

/// Derived output of the footprint calculation. Lives only in UI state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarbonResult {
    /// Estimated annual emissions in kg CO2e
    pub total_kg: f64,
    pub breakdown: Vec<CategoryShare>,
    pub recommendations: Vec<ReductionAction>,
    pub trend: Vec<TrendPoint>,
}

/// Errors produced by the calculators
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalcError {
    #[error("{field}: {message}")]
    Validation { field: &'static str, message: String },
    #[error("{metric} is not defined for this input")]
    NotApplicable { metric: &'static str },
}

/// Diet choice mapped to a multiplier on the baseline food footprint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DietType {
    MeatHeavy,
    Average,
    Vegetarian,
    Vegan,
}

impl DietType {
    pub fn factor(&self) -> f64 {
        match self {
            DietType::MeatHeavy => 1.3,
            DietType::Average => 1.0,
            DietType::Vegetarian => 0.7,
            DietType::Vegan => 0.6,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DietType::MeatHeavy => "meat heavy",
            DietType::Average => "average",
            DietType::Vegetarian => "vegetarian",
            DietType::Vegan => "vegan",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "meat heavy" => Some(DietType::MeatHeavy),
            "average" => Some(DietType::Average),
            "vegetarian" => Some(DietType::Vegetarian),
            "vegan" => Some(DietType::Vegan),
            _ => None,
        }
    }

    pub fn all() -> Vec<DietType> {
        vec![
            DietType::MeatHeavy,
            DietType::Average,
            DietType::Vegetarian,
            DietType::Vegan,
        ]
    }
}

/// Vehicle choice mapped to a multiplier on per-mile car emissions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleType {
    Gasoline,
    Hybrid,
    Electric,
    NoCar,
}

impl VehicleType {
    pub fn factor(&self) -> f64 {
        match self {
            VehicleType::Gasoline => 1.0,
            VehicleType::Hybrid => 0.6,
            VehicleType::Electric => 0.3,
            VehicleType::NoCar => 0.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::Gasoline => "gasoline",
            VehicleType::Hybrid => "hybrid",
            VehicleType::Electric => "electric",
            VehicleType::NoCar => "no car",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "gasoline" => Some(VehicleType::Gasoline),
            "hybrid" => Some(VehicleType::Hybrid),
            "electric" => Some(VehicleType::Electric),
            "no car" => Some(VehicleType::NoCar),
            _ => None,
        }
    }

    pub fn all() -> Vec<VehicleType> {
        vec![
            VehicleType::Gasoline,
            VehicleType::Hybrid,
            VehicleType::Electric,
            VehicleType::NoCar,
        ]
    }
}

/// Electricity supply choice mapped to a multiplier on grid emissions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElectricitySource {
    Grid,
    Mixed,
    Renewable,
}

impl ElectricitySource {
    pub fn factor(&self) -> f64 {
        match self {
            ElectricitySource::Grid => 1.0,
            ElectricitySource::Mixed => 0.6,
            ElectricitySource::Renewable => 0.1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ElectricitySource::Grid => "grid",
            ElectricitySource::Mixed => "mixed",
            ElectricitySource::Renewable => "renewable",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "grid" => Some(ElectricitySource::Grid),
            "mixed" => Some(ElectricitySource::Mixed),
            "renewable" => Some(ElectricitySource::Renewable),
            _ => None,
        }
    }

    pub fn all() -> Vec<ElectricitySource> {
        vec![
            ElectricitySource::Grid,
            ElectricitySource::Mixed,
            ElectricitySource::Renewable,
        ]
    }
}

/// Shopping habit mapped to a multiplier on the baseline goods footprint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShoppingHabit {
    Minimal,
    Average,
    Frequent,
}

impl ShoppingHabit {
    pub fn factor(&self) -> f64 {
        match self {
            ShoppingHabit::Minimal => 0.5,
            ShoppingHabit::Average => 1.0,
            ShoppingHabit::Frequent => 1.5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShoppingHabit::Minimal => "minimal",
            ShoppingHabit::Average => "average",
            ShoppingHabit::Frequent => "frequent",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "minimal" => Some(ShoppingHabit::Minimal),
            "average" => Some(ShoppingHabit::Average),
            "frequent" => Some(ShoppingHabit::Frequent),
            _ => None,
        }
    }

    pub fn all() -> Vec<ShoppingHabit> {
        vec![
            ShoppingHabit::Minimal,
            ShoppingHabit::Average,
            ShoppingHabit::Frequent,
        ]
    }
}

impl Default for CarbonInput {
    fn default() -> Self {
        Self {
            electricity_kwh: 0.0,
            electricity_source: ElectricitySource::Grid,
            natural_gas_therms: 0.0,
            water_gallons_per_day: 0.0,
            vehicle: VehicleType::Gasoline,
            car_miles_per_week: 0.0,
            transit_miles_per_week: 0.0,
            flights: Vec::new(),
            diet: DietType::Average,
            food_waste_pct: 0.0,
            shopping: ShoppingHabit::Average,
            waste_lbs_per_week: 0.0,
            recycling: false,
            composting: false,
        }
    }
}
