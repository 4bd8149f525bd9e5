//! Financial calculators. Rates arrive as annual percentages; the
//! annuity-style formulas all fall back to plain linear division when
//! the rate is zero so the annuity factor never divides by zero.

use crate::error::{EvalError, EvalResult};
use crate::formula::Formula;
use crate::inputs::InputBag;

fn positive(inputs: &InputBag, field: &str) -> EvalResult<f64> {
    let value = inputs.get_f64(field)?;
    if value <= 0.0 {
        return Err(EvalError::domain(format!("{field} must be greater than zero")));
    }
    Ok(value)
}

fn non_negative(inputs: &InputBag, field: &str) -> EvalResult<f64> {
    let value = inputs.get_f64(field)?;
    if value < 0.0 {
        return Err(EvalError::domain(format!("{field} must not be negative")));
    }
    Ok(value)
}

fn positive_months(inputs: &InputBag, field: &str) -> EvalResult<i64> {
    let months = inputs.get_i64(field)?;
    if months <= 0 {
        return Err(EvalError::domain(format!("{field} must be greater than zero")));
    }
    Ok(months)
}

/// Standard amortization payment; exact `principal / months` when the
/// monthly rate is zero.
fn annuity_payment(principal: f64, monthly_rate: f64, months: f64) -> f64 {
    if monthly_rate == 0.0 {
        principal / months
    } else {
        let growth = (1.0 + monthly_rate).powf(months);
        principal * monthly_rate * growth / (growth - 1.0)
    }
}

/// Future value of a fixed monthly contribution; linear when the
/// monthly rate is zero.
fn annuity_future_value(monthly: f64, monthly_rate: f64, months: f64) -> f64 {
    if monthly_rate == 0.0 {
        monthly * months
    } else {
        monthly * (((1.0 + monthly_rate).powf(months) - 1.0) / monthly_rate)
    }
}

pub struct SimpleInterest;

impl Formula for SimpleInterest {
    fn id(&self) -> &'static str {
        "simple_interest"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let principal = positive(inputs, "principal")?;
        let rate = non_negative(inputs, "rate")?;
        let time = non_negative(inputs, "time")?;
        let interest = principal * rate * time / 100.0;
        Ok(format!("Interest: ${interest:.2}, Total Amount: ${:.2}", principal + interest))
    }
}

pub struct CompoundInterest;

impl Formula for CompoundInterest {
    fn id(&self) -> &'static str {
        "compound_interest"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let principal = positive(inputs, "principal")?;
        let rate = non_negative(inputs, "rate")?;
        let time = positive(inputs, "time")?;
        let compounds = inputs.get_i64("compounds")?;
        if compounds <= 0 {
            return Err(EvalError::domain("compounds must be greater than zero"));
        }
        let n = compounds as f64;
        let amount = principal * (1.0 + rate / (100.0 * n)).powf(n * time);
        Ok(format!(
            "Final Amount: ${amount:.2}, Interest Earned: ${:.2}",
            amount - principal
        ))
    }
}

pub struct LoanPayment;

impl Formula for LoanPayment {
    fn id(&self) -> &'static str {
        "loan_payment"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let principal = positive(inputs, "principal")?;
        let rate = non_negative(inputs, "rate")?;
        let months = positive_months(inputs, "months")?;
        let payment = annuity_payment(principal, rate / 100.0 / 12.0, months as f64);
        Ok(format!("Monthly Payment: ${payment:.2}"))
    }
}

pub struct CarLoan;

impl Formula for CarLoan {
    fn id(&self) -> &'static str {
        "car_loan"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let principal = positive(inputs, "principal")?;
        let rate = non_negative(inputs, "rate")?;
        let months = positive_months(inputs, "months")?;
        let payment = annuity_payment(principal, rate / 100.0 / 12.0, months as f64);
        let interest = payment * months as f64 - principal;
        Ok(format!("Monthly Payment: ${payment:.2}, Total Interest: ${interest:.2}"))
    }
}

pub struct Mortgage;

impl Formula for Mortgage {
    fn id(&self) -> &'static str {
        "mortgage"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let price = positive(inputs, "price")?;
        let down = non_negative(inputs, "down")?;
        if down >= price {
            return Err(EvalError::domain("the down payment must be less than the price"));
        }
        let rate = non_negative(inputs, "rate")?;
        let years = inputs.get_i64("years")?;
        if years <= 0 {
            return Err(EvalError::domain("years must be greater than zero"));
        }
        let principal = price - down;
        let months = (years * 12) as f64;
        let payment = annuity_payment(principal, rate / 100.0 / 12.0, months);
        let interest = payment * months - principal;
        Ok(format!("Monthly Payment: ${payment:.2}, Total Interest: ${interest:.2}"))
    }
}

pub struct Investment;

impl Formula for Investment {
    fn id(&self) -> &'static str {
        "investment"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let initial = non_negative(inputs, "initial")?;
        let monthly = non_negative(inputs, "monthly")?;
        let annual_return = non_negative(inputs, "return")?;
        let years = positive(inputs, "years")?;
        let rate = annual_return / 100.0 / 12.0;
        let months = years * 12.0;
        let lump = initial * (1.0 + rate).powf(months);
        let contributions = annuity_future_value(monthly, rate, months);
        Ok(format!("Future Value: ${:.2}", lump + contributions))
    }
}

pub struct InvestmentReturn;

impl Formula for InvestmentReturn {
    fn id(&self) -> &'static str {
        "investment_return"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let principal = positive(inputs, "principal")?;
        let rate = non_negative(inputs, "rate")?;
        let time = non_negative(inputs, "time")?;
        let future = principal * (1.0 + rate / 100.0).powf(time);
        Ok(format!("Future Value: ${future:.2}, Gain: ${:.2}", future - principal))
    }
}

pub struct Retirement;

impl Formula for Retirement {
    fn id(&self) -> &'static str {
        "retirement"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let age = inputs.get_i64("age")?;
        let retire_age = inputs.get_i64("retire_age")?;
        if !(1..=120).contains(&age) {
            return Err(EvalError::domain("age must be between 1 and 120"));
        }
        if retire_age <= age {
            return Err(EvalError::domain("retirement age must be greater than current age"));
        }
        let monthly = non_negative(inputs, "monthly")?;
        let annual_return = non_negative(inputs, "return")?;
        let months = ((retire_age - age) * 12) as f64;
        let savings = annuity_future_value(monthly, annual_return / 100.0 / 12.0, months);
        Ok(format!("Projected Savings at {retire_age}: ${savings:.2}"))
    }
}

pub struct SavingsGoal;

impl Formula for SavingsGoal {
    fn id(&self) -> &'static str {
        "savings_goal"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let goal = positive(inputs, "goal")?;
        let rate = non_negative(inputs, "rate")?;
        let months = positive_months(inputs, "months")?;
        let monthly_rate = rate / 100.0 / 12.0;
        let n = months as f64;
        // sinking fund deposit
        let deposit = if monthly_rate == 0.0 {
            goal / n
        } else {
            goal * monthly_rate / ((1.0 + monthly_rate).powf(n) - 1.0)
        };
        Ok(format!("Monthly Savings Needed: ${deposit:.2}"))
    }
}

pub struct Tax;

impl Formula for Tax {
    fn id(&self) -> &'static str {
        "tax"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let amount = non_negative(inputs, "amount")?;
        let rate = inputs.get_f64("rate")?;
        if !(0.0..=100.0).contains(&rate) {
            return Err(EvalError::domain("rate must be between 0 and 100"));
        }
        let tax = amount * rate / 100.0;
        Ok(format!("Tax: ${tax:.2}, Total: ${:.2}", amount + tax))
    }
}

pub struct Discount;

impl Formula for Discount {
    fn id(&self) -> &'static str {
        "discount"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let price = positive(inputs, "price")?;
        let discount = inputs.get_f64("discount")?;
        if !(0.0..=100.0).contains(&discount) {
            return Err(EvalError::domain("discount must be between 0 and 100"));
        }
        let saved = price * discount / 100.0;
        Ok(format!("Final Price: ${:.2} (you save ${saved:.2})", price - saved))
    }
}

pub struct TipCalculator;

impl Formula for TipCalculator {
    fn id(&self) -> &'static str {
        "tip_calculator"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let bill = positive(inputs, "bill")?;
        let tip = non_negative(inputs, "tip")?;
        let tip_amount = bill * tip / 100.0;
        Ok(format!("Tip: ${tip_amount:.2}, Total: ${:.2}", bill + tip_amount))
    }
}

pub struct CurrencyConverter;

impl Formula for CurrencyConverter {
    fn id(&self) -> &'static str {
        "currency_converter"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let amount = non_negative(inputs, "amount")?;
        let from_rate = positive(inputs, "from_rate")?;
        let to_rate = positive(inputs, "to_rate")?;
        let converted = amount / from_rate * to_rate;
        Ok(format!("Converted Amount: {converted:.2}"))
    }
}

pub struct LeaseVsBuy;

impl Formula for LeaseVsBuy {
    fn id(&self) -> &'static str {
        "lease_vs_buy"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let lease_payment = positive(inputs, "lease_payment")?;
        let lease_months = positive_months(inputs, "lease_months")?;
        let loan_payment = positive(inputs, "loan_payment")?;
        let loan_months = positive_months(inputs, "loan_months")?;
        let lease_total = lease_payment * lease_months as f64;
        let loan_total = loan_payment * loan_months as f64;
        let verdict = if lease_total < loan_total {
            format!("Leasing saves ${:.2}", loan_total - lease_total)
        } else if loan_total < lease_total {
            format!("Buying saves ${:.2}", lease_total - loan_total)
        } else {
            "Both cost the same".to_string()
        };
        Ok(format!("Leasing: ${lease_total:.2}, Buying: ${loan_total:.2}. {verdict}"))
    }
}
