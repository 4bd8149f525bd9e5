//! Arithmetic, number-theory, and base-conversion calculators.

use std::sync::Arc;

use num_bigint::BigUint;

use crate::error::{EvalError, EvalResult};
use crate::formula::Formula;
use crate::inputs::InputBag;
use crate::random::RandomSource;

/// Largest argument accepted by factorial and the n-choose-r family.
const FACTORIAL_LIMIT: i64 = 170;

fn big_factorial(n: u64) -> BigUint {
    let mut acc = BigUint::from(1u32);
    for k in 2..=n {
        acc *= k;
    }
    acc
}

pub struct Percentage;

impl Formula for Percentage {
    fn id(&self) -> &'static str {
        "percentage"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let value = inputs.get_f64("value")?;
        let percent = inputs.get_f64("percent")?;
        let result = value * percent / 100.0;
        Ok(format!("{percent}% of {value} = {result:.2}"))
    }
}

pub struct PercentageOf;

impl Formula for PercentageOf {
    fn id(&self) -> &'static str {
        "percentage_of"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let value = inputs.get_f64("value")?;
        let whole = inputs.get_f64("percent")?;
        if whole == 0.0 {
            return Err(EvalError::DivisionByZero);
        }
        let percent = value / whole * 100.0;
        Ok(format!("{value} is {percent:.2}% of {whole}"))
    }
}

pub struct PercentageChange;

impl Formula for PercentageChange {
    fn id(&self) -> &'static str {
        "percentage_change"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let old = inputs.get_f64("old")?;
        let new = inputs.get_f64("new")?;
        if old == 0.0 {
            return Err(EvalError::domain("the old value must not be zero"));
        }
        let change = (new - old) / old.abs() * 100.0;
        let direction = if change >= 0.0 { "increase" } else { "decrease" };
        Ok(format!("Percentage Change: {:.2}% {direction}", change.abs()))
    }
}

pub struct Factorial;

impl Formula for Factorial {
    fn id(&self) -> &'static str {
        "factorial"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let n = inputs.get_i64("n")?;
        if !(0..=FACTORIAL_LIMIT).contains(&n) {
            return Err(EvalError::domain(format!("n must be between 0 and {FACTORIAL_LIMIT}")));
        }
        Ok(format!("{n}! = {}", big_factorial(n as u64)))
    }
}

pub struct Fibonacci;

impl Formula for Fibonacci {
    fn id(&self) -> &'static str {
        "fibonacci"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let n = inputs.get_i64("n")?;
        if !(1..=50).contains(&n) {
            return Err(EvalError::domain("n must be between 1 and 50"));
        }
        let mut terms: Vec<u64> = Vec::with_capacity(n as usize);
        let (mut a, mut b) = (0u64, 1u64);
        for _ in 0..n {
            terms.push(a);
            (a, b) = (b, a + b);
        }
        let listed = terms.iter().map(u64::to_string).collect::<Vec<_>>().join(", ");
        Ok(format!("First {n} Fibonacci Numbers: {listed}"))
    }
}

fn euclid(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

pub struct Gcd;

impl Formula for Gcd {
    fn id(&self) -> &'static str {
        "gcd"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let a = inputs.get_i64("a")?;
        let b = inputs.get_i64("b")?;
        if a < 0 || b < 0 {
            return Err(EvalError::domain("both numbers must be non-negative"));
        }
        if a == 0 && b == 0 {
            return Err(EvalError::domain("GCD of 0 and 0 is undefined"));
        }
        Ok(format!("GCD of {a} and {b} = {}", euclid(a as u64, b as u64)))
    }
}

pub struct Lcm;

impl Formula for Lcm {
    fn id(&self) -> &'static str {
        "lcm"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let a = inputs.get_i64("a")?;
        let b = inputs.get_i64("b")?;
        if a <= 0 || b <= 0 {
            return Err(EvalError::domain("both numbers must be positive"));
        }
        let gcd = euclid(a as u64, b as u64);
        let lcm = a as u128 / gcd as u128 * b as u128;
        Ok(format!("LCM of {a} and {b} = {lcm}"))
    }
}

pub struct PrimeCheck;

impl Formula for PrimeCheck {
    fn id(&self) -> &'static str {
        "prime_check"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let n = inputs.get_i64("number")?;
        if n > 1_000_000_000_000 {
            return Err(EvalError::domain("number is too large to check"));
        }
        let prime = is_prime(n);
        if prime {
            Ok(format!("{n} is a prime number"))
        } else {
            Ok(format!("{n} is not a prime number"))
        }
    }
}

fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut divisor = 3i64;
    while divisor * divisor <= n {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

fn n_choose_args(inputs: &InputBag) -> EvalResult<(u64, u64)> {
    let n = inputs.get_i64("n")?;
    let r = inputs.get_i64("r")?;
    if !(0..=FACTORIAL_LIMIT).contains(&n) {
        return Err(EvalError::domain(format!("n must be between 0 and {FACTORIAL_LIMIT}")));
    }
    if r < 0 || r > n {
        return Err(EvalError::domain("r must be between 0 and n"));
    }
    Ok((n as u64, r as u64))
}

pub struct Permutation;

impl Formula for Permutation {
    fn id(&self) -> &'static str {
        "permutation"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let (n, r) = n_choose_args(inputs)?;
        let result = big_factorial(n) / big_factorial(n - r);
        Ok(format!("P({n}, {r}) = {result}"))
    }
}

pub struct Combination;

impl Formula for Combination {
    fn id(&self) -> &'static str {
        "combination"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let (n, r) = n_choose_args(inputs)?;
        let result = big_factorial(n) / (big_factorial(r) * big_factorial(n - r));
        Ok(format!("C({n}, {r}) = {result}"))
    }
}

/// Collapses negative zero so formatted results never read `-0.00`.
fn unsigned_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

pub struct Quadratic;

impl Formula for Quadratic {
    fn id(&self) -> &'static str {
        "quadratic"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let a = inputs.get_f64("a")?;
        let b = inputs.get_f64("b")?;
        let c = inputs.get_f64("c")?;
        if a == 0.0 {
            return Err(EvalError::domain("coefficient a must not be zero"));
        }
        let discriminant = b * b - 4.0 * a * c;
        if discriminant > 0.0 {
            let root = discriminant.sqrt();
            let x1 = unsigned_zero((-b + root) / (2.0 * a));
            let x2 = unsigned_zero((-b - root) / (2.0 * a));
            Ok(format!("Roots: x1 = {x1:.2}, x2 = {x2:.2}"))
        } else if discriminant == 0.0 {
            Ok(format!("Double Root: x = {:.2}", unsigned_zero(-b / (2.0 * a))))
        } else {
            let real = unsigned_zero(-b / (2.0 * a));
            let imaginary = (-discriminant).sqrt() / (2.0 * a.abs());
            Ok(format!("Complex Roots: x = {real:.2} ± {imaginary:.2}i"))
        }
    }
}

pub struct Slope;

impl Formula for Slope {
    fn id(&self) -> &'static str {
        "slope"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let x1 = inputs.get_f64("x1")?;
        let y1 = inputs.get_f64("y1")?;
        let x2 = inputs.get_f64("x2")?;
        let y2 = inputs.get_f64("y2")?;
        if x2 == x1 {
            return Err(EvalError::domain("the line is vertical, slope is undefined"));
        }
        Ok(format!("Slope: {:.2}", unsigned_zero((y2 - y1) / (x2 - x1))))
    }
}

pub struct Distance;

impl Formula for Distance {
    fn id(&self) -> &'static str {
        "distance"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let x1 = inputs.get_f64("x1")?;
        let y1 = inputs.get_f64("y1")?;
        let x2 = inputs.get_f64("x2")?;
        let y2 = inputs.get_f64("y2")?;
        let distance = ((x2 - x1).powi(2) + (y2 - y1).powi(2)).sqrt();
        Ok(format!("Distance: {distance:.2} units"))
    }
}

pub struct Pythagorean;

impl Formula for Pythagorean {
    fn id(&self) -> &'static str {
        "pythagorean"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let a = inputs.get_f64("a")?;
        let b = inputs.get_f64("b")?;
        if a <= 0.0 || b <= 0.0 {
            return Err(EvalError::domain("sides must be greater than zero"));
        }
        match inputs.optional_f64("c")? {
            None => {
                let hypotenuse = (a * a + b * b).sqrt();
                Ok(format!("Hypotenuse: {hypotenuse:.2}"))
            }
            Some(c) => {
                if c <= 0.0 {
                    return Err(EvalError::domain("sides must be greater than zero"));
                }
                if c < a.max(b) {
                    return Err(EvalError::domain("the hypotenuse must be the largest side"));
                }
                let gap = (a * a + b * b - c * c).abs();
                if gap < 1e-6 * (a * a + b * b).max(1.0) {
                    Ok(format!("{a}, {b}, {c} form a right triangle"))
                } else {
                    Ok(format!("{a}, {b}, {c} do not form a right triangle"))
                }
            }
        }
    }
}

pub struct RandomNumber {
    random: Arc<dyn RandomSource>,
}

impl RandomNumber {
    pub fn new(random: Arc<dyn RandomSource>) -> Self {
        Self { random }
    }
}

impl Formula for RandomNumber {
    fn id(&self) -> &'static str {
        "random_number"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let min = inputs.get_i64("min")?;
        let max = inputs.get_i64("max")?;
        if min > max {
            return Err(EvalError::domain("min must not be greater than max"));
        }
        let value = self.random.pick(min, max);
        Ok(format!("Random Number: {value} (between {min} and {max})"))
    }
}

fn base_argument(inputs: &InputBag) -> EvalResult<i64> {
    let n = inputs.get_i64("number")?;
    if n < 0 {
        return Err(EvalError::domain("number must not be negative"));
    }
    Ok(n)
}

pub struct Binary;

impl Formula for Binary {
    fn id(&self) -> &'static str {
        "binary"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let n = base_argument(inputs)?;
        Ok(format!("Binary: {n:b}"))
    }
}

pub struct Hex;

impl Formula for Hex {
    fn id(&self) -> &'static str {
        "hex"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let n = base_argument(inputs)?;
        Ok(format!("Hexadecimal: {n:X}"))
    }
}

pub struct Octal;

impl Formula for Octal {
    fn id(&self) -> &'static str {
        "octal"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let n = base_argument(inputs)?;
        Ok(format!("Octal: {n:o}"))
    }
}

const ROMAN_PAIRS: [(i64, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

pub struct RomanNumeral;

impl Formula for RomanNumeral {
    fn id(&self) -> &'static str {
        "roman_numeral"
    }

    fn apply(&self, inputs: &InputBag) -> EvalResult<String> {
        let mut n = inputs.get_i64("number")?;
        if !(1..=3999).contains(&n) {
            return Err(EvalError::domain("number must be between 1 and 3999"));
        }
        let mut numeral = String::new();
        for (value, glyph) in ROMAN_PAIRS {
            while n >= value {
                numeral.push_str(glyph);
                n -= value;
            }
        }
        Ok(format!("Roman Numeral: {numeral}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclid_matches_known_values() {
        assert_eq!(euclid(48, 18), 6);
        assert_eq!(euclid(0, 5), 5);
        assert_eq!(euclid(17, 13), 1);
    }

    #[test]
    fn prime_trial_division_handles_small_cases() {
        assert!(!is_prime(-7));
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(97));
        assert!(!is_prime(91)); // 7 * 13
    }

    #[test]
    fn factorial_of_ten() {
        assert_eq!(big_factorial(10).to_string(), "3628800");
    }
}
