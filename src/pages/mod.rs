mod carbon_calculator;
mod case_studies;
mod dashboard;
mod home;
mod investment_calculator;
mod login;
mod pricing;

pub use carbon_calculator::CarbonCalculatorPage;
pub use case_studies::CaseStudiesPage;
pub use dashboard::DashboardPage;
pub use home::HomePage;
pub use investment_calculator::InvestmentCalculatorPage;
pub use login::LoginPage;
pub use pricing::PricingPage;
