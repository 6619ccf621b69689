//! Investment ROI projection
//!
//! System size is derived from the gross investment amount; incentives only
//! reduce the net cost. Payback, ROI and the IRR approximation are undefined
//! when annual savings is not positive and come back as `None`.

use crate::models::{
    check_range, CalcError, EnergyTechnology, InvestmentInput, InvestmentResult, Region,
    YearCashflow,
};

const HOURS_PER_YEAR: f64 = 8760.0;
/// Fraction of annual consumption a battery can shift to cheaper supply
const BATTERY_LOAD_SHIFT: f64 = 0.10;
// Hybrid systems blend the three technologies at a fixed split
const HYBRID_SOLAR_SHARE: f64 = 0.5;
const HYBRID_WIND_SHARE: f64 = 0.3;
const HYBRID_BATTERY_SHARE: f64 = 0.2;

/// Validate an ROI form snapshot against its documented ranges
pub fn validate(input: &InvestmentInput) -> Result<(), CalcError> {
    check_range("amount", input.amount, 1_000.0, 1_000_000.0)?;
    check_range("electricity_rate", input.electricity_rate, 0.05, 0.50)?;
    check_range(
        "annual_consumption_kwh",
        input.annual_consumption_kwh,
        1_000.0,
        100_000.0,
    )?;
    check_range("incentive_pct", input.incentive_pct, 0.0, 50.0)?;
    if let Some(rate) = input.financing_rate {
        check_range("financing_rate", rate, 0.0, 0.30)?;
    }
    if let Some(term) = input.financing_term_years {
        if !(1..=30).contains(&term) {
            return Err(CalcError::Validation {
                field: "financing_term_years",
                message: "must be between 1 and 30".into(),
            });
        }
    }
    Ok(())
}

/// Annual production in kWh for one technology at the given gross amount
fn annual_production(
    technology: EnergyTechnology,
    amount: f64,
    region: Region,
    annual_consumption_kwh: f64,
) -> f64 {
    match technology {
        EnergyTechnology::Solar => {
            let watts = amount / technology.cost_per_watt().unwrap_or(f64::MAX);
            watts * technology.capacity_factor() * region.solar_multiplier() * HOURS_PER_YEAR
                / 1000.0
        }
        EnergyTechnology::Wind => {
            let watts = amount / technology.cost_per_watt().unwrap_or(f64::MAX);
            watts * technology.capacity_factor() * region.wind_multiplier() * HOURS_PER_YEAR
                / 1000.0
        }
        EnergyTechnology::Battery => annual_consumption_kwh * BATTERY_LOAD_SHIFT,
        EnergyTechnology::Hybrid => {
            HYBRID_SOLAR_SHARE
                * annual_production(
                    EnergyTechnology::Solar,
                    amount,
                    region,
                    annual_consumption_kwh,
                )
                + HYBRID_WIND_SHARE
                    * annual_production(
                        EnergyTechnology::Wind,
                        amount,
                        region,
                        annual_consumption_kwh,
                    )
                + HYBRID_BATTERY_SHARE
                    * annual_production(
                        EnergyTechnology::Battery,
                        amount,
                        region,
                        annual_consumption_kwh,
                    )
        }
    }
}

/// Payback in years, undefined when there are no savings to pay it back
pub(crate) fn payback_years(net_investment: f64, annual_savings: f64) -> Option<f64> {
    (annual_savings > 0.0).then(|| net_investment / annual_savings)
}

/// Lifetime ROI in percent, undefined when annual savings is not positive
pub(crate) fn roi_pct(net_investment: f64, annual_savings: f64, lifespan: u32) -> Option<f64> {
    (annual_savings > 0.0).then(|| {
        let lifetime = annual_savings * lifespan as f64;
        (lifetime - net_investment) / net_investment * 100.0
    })
}

fn npv(net_investment: f64, annual_savings: f64, lifespan: u32, rate: f64) -> f64 {
    let discounted: f64 = (1..=lifespan)
        .map(|year| annual_savings / (1.0 + rate).powi(year as i32))
        .sum();
    -net_investment + discounted
}

fn cashflow(annual_savings: f64, lifespan: u32, rate: f64) -> Vec<YearCashflow> {
    let mut cumulative = 0.0;
    let mut discounted_cumulative = 0.0;
    (1..=lifespan)
        .map(|year| {
            cumulative += annual_savings;
            discounted_cumulative += annual_savings / (1.0 + rate).powi(year as i32);
            YearCashflow {
                year,
                savings: annual_savings,
                cumulative,
                discounted_cumulative,
            }
        })
        .collect()
}

fn project(input: &InvestmentInput, technology: EnergyTechnology) -> InvestmentResult {
    let net_investment = input.amount * (1.0 - input.incentive_pct / 100.0);
    let annual_production_kwh = annual_production(
        technology,
        input.amount,
        input.region,
        input.annual_consumption_kwh,
    );
    let annual_savings = annual_production_kwh * input.electricity_rate;
    let lifespan_years = technology.lifespan_years();
    let rate = input.discount_rate();

    InvestmentResult {
        technology,
        net_investment,
        annual_production_kwh,
        annual_savings,
        payback_years: payback_years(net_investment, annual_savings),
        roi_pct: roi_pct(net_investment, annual_savings, lifespan_years),
        npv: npv(net_investment, annual_savings, lifespan_years, rate),
        // Simplified approximation kept from the product definition;
        // not a root-solved IRR
        irr_approx: (annual_savings > 0.0).then(|| annual_savings / net_investment),
        lifespan_years,
        cashflow: cashflow(annual_savings, lifespan_years, rate),
    }
}

/// Run the projection for the selected technology
pub fn calculate(input: &InvestmentInput) -> Result<InvestmentResult, CalcError> {
    validate(input)?;
    Ok(project(input, input.technology))
}

/// Re-run the same formulas for every technology at the same input,
/// for the side-by-side comparison table
pub fn compare(input: &InvestmentInput) -> Result<Vec<InvestmentResult>, CalcError> {
    validate(input)?;
    Ok(EnergyTechnology::all()
        .into_iter()
        .map(|technology| project(input, technology))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solar_input() -> InvestmentInput {
        InvestmentInput {
            amount: 50_000.0,
            technology: EnergyTechnology::Solar,
            region: Region::Southwest,
            electricity_rate: 0.15,
            annual_consumption_kwh: 12_000.0,
            incentive_pct: 30.0,
            financing_rate: None,
            financing_term_years: None,
        }
    }

    #[test]
    fn documented_input_is_deterministic() {
        let a = calculate(&solar_input()).unwrap();
        let b = calculate(&solar_input()).unwrap();
        assert_eq!(a.annual_production_kwh, b.annual_production_kwh);
        assert_eq!(a.annual_savings, b.annual_savings);
        assert_eq!(a.payback_years, b.payback_years);
        assert_eq!(a.roi_pct, b.roi_pct);
        assert_eq!(a.npv, b.npv);

        // Spot-check the solar formula end to end:
        // watts = 50_000 / 2.8, kwh = watts * 0.18 * 1.3 * 8760 / 1000
        let watts = 50_000.0 / 2.8;
        let expected_kwh = watts * 0.18 * 1.3 * 8760.0 / 1000.0;
        assert!((a.annual_production_kwh - expected_kwh).abs() < 1e-6);
        assert!((a.annual_savings - expected_kwh * 0.15).abs() < 1e-6);
        assert!((a.net_investment - 35_000.0).abs() < 1e-9);
    }

    #[test]
    fn incentives_strictly_reduce_payback() {
        let mut previous = f64::MAX;
        for incentive in [0.0, 10.0, 20.0, 30.0] {
            let mut input = solar_input();
            input.incentive_pct = incentive;
            let result = calculate(&input).unwrap();
            // Production comes from the gross amount, so savings stay put
            let payback = result.payback_years.unwrap();
            assert!(payback < previous);
            previous = payback;
        }
    }

    #[test]
    fn incentives_do_not_change_annual_savings() {
        let mut zero = solar_input();
        zero.incentive_pct = 0.0;
        let mut thirty = solar_input();
        thirty.incentive_pct = 30.0;
        assert_eq!(
            calculate(&zero).unwrap().annual_savings,
            calculate(&thirty).unwrap().annual_savings
        );
    }

    #[test]
    fn consumption_boundaries_inclusive() {
        for (value, ok) in [(1_000.0, true), (100_000.0, true), (999.0, false), (100_001.0, false)]
        {
            let mut input = solar_input();
            input.annual_consumption_kwh = value;
            assert_eq!(validate(&input).is_ok(), ok, "consumption {value}");
        }
    }

    #[test]
    fn financing_term_bounds_apply_when_present() {
        for (term, ok) in [
            (None, true),
            (Some(1), true),
            (Some(30), true),
            (Some(0), false),
            (Some(31), false),
        ] {
            let mut input = solar_input();
            input.financing_term_years = term;
            assert_eq!(validate(&input).is_ok(), ok, "term {term:?}");
        }
    }

    #[test]
    fn zero_savings_metrics_are_not_applicable() {
        assert_eq!(payback_years(35_000.0, 0.0), None);
        assert_eq!(roi_pct(35_000.0, 0.0, 25), None);
        assert_eq!(payback_years(35_000.0, -10.0), None);
        assert!(payback_years(35_000.0, 5_000.0).is_some());
    }

    #[test]
    fn battery_savings_track_consumption() {
        let mut input = solar_input();
        input.technology = EnergyTechnology::Battery;
        let result = calculate(&input).unwrap();
        assert!((result.annual_production_kwh - 1_200.0).abs() < 1e-9);
        assert!((result.annual_savings - 180.0).abs() < 1e-9);
        assert_eq!(result.lifespan_years, 15);
    }

    #[test]
    fn hybrid_is_a_weighted_blend() {
        let input = solar_input();
        let solar = annual_production(
            EnergyTechnology::Solar,
            input.amount,
            input.region,
            input.annual_consumption_kwh,
        );
        let wind = annual_production(
            EnergyTechnology::Wind,
            input.amount,
            input.region,
            input.annual_consumption_kwh,
        );
        let battery = annual_production(
            EnergyTechnology::Battery,
            input.amount,
            input.region,
            input.annual_consumption_kwh,
        );
        let hybrid = annual_production(
            EnergyTechnology::Hybrid,
            input.amount,
            input.region,
            input.annual_consumption_kwh,
        );
        let expected = 0.5 * solar + 0.3 * wind + 0.2 * battery;
        assert!((hybrid - expected).abs() < 1e-9);
    }

    #[test]
    fn comparison_covers_every_technology() {
        let results = compare(&solar_input()).unwrap();
        assert_eq!(results.len(), 4);
        let technologies: Vec<_> = results.iter().map(|r| r.technology).collect();
        assert_eq!(technologies, EnergyTechnology::all());
        // Same net investment in every column
        assert!(results
            .iter()
            .all(|r| (r.net_investment - 35_000.0).abs() < 1e-9));
    }

    #[test]
    fn npv_discounts_at_the_financing_rate() {
        let mut input = solar_input();
        input.financing_rate = Some(0.08);
        let result = calculate(&input).unwrap();
        let expected: f64 = (1..=25)
            .map(|year| result.annual_savings / 1.08_f64.powi(year))
            .sum::<f64>()
            - result.net_investment;
        assert!((result.npv - expected).abs() < 1e-6);
        // Amortization series ends at the undiscounted lifetime total
        let last = result.cashflow.last().unwrap();
        assert!((last.cumulative - result.annual_savings * 25.0).abs() < 1e-6);
    }
}
