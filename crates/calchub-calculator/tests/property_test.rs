use proptest::prelude::*;

use calchub_calculator::{Dispatcher, InputBag};

fn gcd_reference(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

proptest! {
    // Every identifier except random_number is idempotent for identical
    // inputs; exercise a representative slice of the numeric formulas.
    #[test]
    fn evaluation_is_idempotent(
        weight in 1.0f64..500.0,
        height in 50.0f64..250.0,
        principal in 1.0f64..1_000_000.0,
        rate in 0.0f64..30.0,
        months in 1i64..480,
        a in 0i64..100_000,
        b in 0i64..100_000,
    ) {
        let dispatcher = Dispatcher::new();
        let calls: Vec<(&str, InputBag)> = vec![
            (
                "bmi",
                InputBag::from_pairs(&[
                    ("weight", &weight.to_string()),
                    ("height", &height.to_string()),
                ]),
            ),
            (
                "loan_payment",
                InputBag::from_pairs(&[
                    ("principal", &principal.to_string()),
                    ("rate", &rate.to_string()),
                    ("months", &months.to_string()),
                ]),
            ),
            (
                "gcd",
                InputBag::from_pairs(&[("a", &a.to_string()), ("b", &b.to_string())]),
            ),
        ];
        for (calc_id, inputs) in &calls {
            let first = dispatcher.evaluate(calc_id, inputs);
            let second = dispatcher.evaluate(calc_id, inputs);
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn gcd_matches_euclid_and_divides_both_operands(a in 0u64..1_000_000, b in 1u64..1_000_000) {
        let dispatcher = Dispatcher::new();
        let inputs =
            InputBag::from_pairs(&[("a", &a.to_string()), ("b", &b.to_string())]);
        let result = dispatcher.evaluate("gcd", &inputs);
        let expected = gcd_reference(a, b);
        prop_assert_eq!(&result, &format!("GCD of {} and {} = {}", a, b, expected));
        prop_assert_eq!(a % expected, 0);
        prop_assert_eq!(b % expected, 0);
    }

    #[test]
    fn leap_year_agrees_with_the_gregorian_rule(year in 1i64..9999) {
        let dispatcher = Dispatcher::new();
        let inputs = InputBag::from_pairs(&[("year", &year.to_string())]);
        let result = dispatcher.evaluate("leap_year", &inputs);
        let leap = (year % 4 == 0 && year % 100 != 0) || year % 400 == 0;
        let expected = if leap {
            format!("{year} is a leap year")
        } else {
            format!("{year} is not a leap year")
        };
        prop_assert_eq!(result, expected);
    }

    // The zero-rate branch must be exactly principal / months, not the
    // annuity formula evaluated at a vanishing rate.
    #[test]
    fn zero_rate_loans_divide_linearly(principal in 1.0f64..10_000_000.0, months in 1i64..600) {
        let dispatcher = Dispatcher::new();
        let inputs = InputBag::from_pairs(&[
            ("principal", &principal.to_string()),
            ("rate", "0"),
            ("months", &months.to_string()),
        ]);
        let result = dispatcher.evaluate("loan_payment", &inputs);
        prop_assert_eq!(
            result,
            format!("Monthly Payment: ${:.2}", principal / months as f64)
        );
    }

    #[test]
    fn positive_rate_loans_match_the_annuity_formula(
        principal in 1000.0f64..1_000_000.0,
        rate in 0.1f64..25.0,
        months in 6i64..480,
    ) {
        let dispatcher = Dispatcher::new();
        let inputs = InputBag::from_pairs(&[
            ("principal", &principal.to_string()),
            ("rate", &rate.to_string()),
            ("months", &months.to_string()),
        ]);
        let result = dispatcher.evaluate("loan_payment", &inputs);
        let monthly_rate = rate / 100.0 / 12.0;
        let growth = (1.0 + monthly_rate).powf(months as f64);
        let expected = principal * monthly_rate * growth / (growth - 1.0);
        prop_assert_eq!(result, format!("Monthly Payment: ${expected:.2}"));
    }

    #[test]
    fn roman_numerals_are_well_formed(n in 1i64..=3999) {
        let dispatcher = Dispatcher::new();
        let inputs = InputBag::from_pairs(&[("number", &n.to_string())]);
        let result = dispatcher.evaluate("roman_numeral", &inputs);
        let numeral = result.strip_prefix("Roman Numeral: ").unwrap();
        prop_assert!(!numeral.is_empty());
        prop_assert!(numeral.chars().all(|c| "IVXLCDM".contains(c)));
    }
}
