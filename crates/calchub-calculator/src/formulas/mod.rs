//! Formula implementations, grouped the way the catalog groups
//! calculators.

pub mod auto;
pub mod conversion;
pub mod cooking;
pub mod date_time;
pub mod education;
pub mod environment;
pub mod finance;
pub mod geometry;
pub mod health;
pub mod home_improvement;
pub mod math;
pub mod physics;
pub mod statistics;

use std::sync::Arc;

use crate::clock::Clock;
use crate::formula::Formula;
use crate::random::RandomSource;

/// Constructs every built-in formula, wiring the environmental
/// capabilities into the few that need them.
pub fn all(clock: Arc<dyn Clock>, random: Arc<dyn RandomSource>) -> Vec<Box<dyn Formula>> {
    vec![
        // date & time
        Box::new(date_time::Age::new(clock.clone())),
        Box::new(date_time::AgeDifference),
        Box::new(date_time::DaysBetween),
        Box::new(date_time::DateAdd),
        Box::new(date_time::DayOfWeek),
        Box::new(date_time::LeapYear),
        Box::new(date_time::Countdown::new(clock.clone())),
        Box::new(date_time::NextBirthday::new(clock.clone())),
        Box::new(date_time::WorkDays),
        Box::new(date_time::TimeZone),
        Box::new(date_time::SleepHours),
        // health & fitness
        Box::new(health::Bmi),
        Box::new(health::Bmr),
        Box::new(health::BodyFat),
        Box::new(health::IdealWeight),
        Box::new(health::CaloriesBurned),
        Box::new(health::WaterIntake),
        Box::new(health::ProteinNeeds),
        Box::new(health::CarbsNeeds),
        Box::new(health::FiberNeeds),
        Box::new(health::HeartRate),
        Box::new(health::Pregnancy::new(clock)),
        Box::new(health::AlcoholUnits),
        // finance
        Box::new(finance::SimpleInterest),
        Box::new(finance::CompoundInterest),
        Box::new(finance::LoanPayment),
        Box::new(finance::CarLoan),
        Box::new(finance::Mortgage),
        Box::new(finance::Investment),
        Box::new(finance::InvestmentReturn),
        Box::new(finance::Retirement),
        Box::new(finance::SavingsGoal),
        Box::new(finance::Tax),
        Box::new(finance::Discount),
        Box::new(finance::TipCalculator),
        Box::new(finance::CurrencyConverter),
        Box::new(finance::LeaseVsBuy),
        // math & numbers
        Box::new(math::Percentage),
        Box::new(math::PercentageOf),
        Box::new(math::PercentageChange),
        Box::new(math::Factorial),
        Box::new(math::Fibonacci),
        Box::new(math::Gcd),
        Box::new(math::Lcm),
        Box::new(math::PrimeCheck),
        Box::new(math::Permutation),
        Box::new(math::Combination),
        Box::new(math::Quadratic),
        Box::new(math::Slope),
        Box::new(math::Distance),
        Box::new(math::Pythagorean),
        Box::new(math::RandomNumber::new(random)),
        Box::new(math::Binary),
        Box::new(math::Hex),
        Box::new(math::Octal),
        Box::new(math::RomanNumeral),
        // geometry
        Box::new(geometry::AreaCircle),
        Box::new(geometry::AreaRectangle),
        Box::new(geometry::AreaSquare),
        Box::new(geometry::AreaTriangle),
        Box::new(geometry::AreaTrapezoid),
        Box::new(geometry::VolumeCube),
        Box::new(geometry::VolumeSphere),
        Box::new(geometry::VolumeCylinder),
        // unit conversion
        Box::new(conversion::UnitConverter::length()),
        Box::new(conversion::UnitConverter::weight()),
        Box::new(conversion::UnitTemperature),
        Box::new(conversion::UnitConverter::volume()),
        Box::new(conversion::UnitConverter::time()),
        Box::new(conversion::UnitConverter::speed()),
        Box::new(conversion::UnitConverter::energy()),
        Box::new(conversion::UnitConverter::power()),
        Box::new(conversion::UnitConverter::pressure()),
        Box::new(conversion::UnitConverter::area()),
        // physics
        Box::new(physics::Speed),
        Box::new(physics::Acceleration),
        Box::new(physics::Force),
        Box::new(physics::Momentum),
        Box::new(physics::KineticEnergy),
        Box::new(physics::PotentialEnergy),
        Box::new(physics::Work),
        Box::new(physics::PowerPhysics),
        Box::new(physics::PressurePhysics),
        Box::new(physics::Density),
        // statistics
        Box::new(statistics::Mean),
        Box::new(statistics::Median),
        Box::new(statistics::Mode),
        Box::new(statistics::Variance),
        Box::new(statistics::StandardDeviation),
        Box::new(statistics::Correlation),
        // education
        Box::new(education::Gpa),
        Box::new(education::Cgpa),
        Box::new(education::Grade),
        Box::new(education::FinalGrade),
        Box::new(education::TestScore),
        // home & DIY
        Box::new(home_improvement::PaintNeeded),
        Box::new(home_improvement::Flooring),
        Box::new(home_improvement::TileNeeded),
        Box::new(home_improvement::Fence),
        Box::new(home_improvement::Concrete),
        Box::new(home_improvement::Roofing),
        Box::new(home_improvement::SolarPanels),
        // automotive
        Box::new(auto::FuelEconomy),
        Box::new(auto::FuelEfficiency),
        Box::new(auto::FuelCost),
        Box::new(auto::TireSize),
        // environment
        Box::new(environment::CarbonFootprint),
        Box::new(environment::TreeOffset),
        Box::new(environment::Recycling),
        Box::new(environment::ElectricityCost),
        // cooking
        Box::new(cooking::RecipeScaler),
        Box::new(cooking::CookingTime),
        Box::new(cooking::OvenTemp),
    ]
}
