use std::sync::Arc;

use calchub_calculator::{Dispatcher, FixedClock, FixedSource, InputBag, NOT_IMPLEMENTED};
use chrono::NaiveDate;

fn evaluate(calc_id: &str, pairs: &[(&str, &str)]) -> String {
    Dispatcher::new().evaluate(calc_id, &InputBag::from_pairs(pairs))
}

fn fixed_dispatcher(today: &str) -> Dispatcher {
    let date = NaiveDate::parse_from_str(today, "%Y-%m-%d").unwrap();
    Dispatcher::with_env(Arc::new(FixedClock(date)), Arc::new(FixedSource(7)))
}

#[test]
fn unknown_identifier_gets_the_fixed_fallback() {
    assert_eq!(evaluate("not_a_real_calc", &[]), NOT_IMPLEMENTED);
}

#[test]
fn bmi_reports_value_and_category() {
    let result = evaluate("bmi", &[("weight", "70"), ("height", "175")]);
    assert_eq!(result, "BMI: 22.86 (Normal)");

    assert!(evaluate("bmi", &[("weight", "50"), ("height", "180")]).contains("Underweight"));
    assert!(evaluate("bmi", &[("weight", "85"), ("height", "170")]).contains("Overweight"));
    assert!(evaluate("bmi", &[("weight", "110"), ("height", "170")]).contains("Obese"));
}

#[test]
fn missing_and_malformed_fields_become_error_strings() {
    assert_eq!(evaluate("bmi", &[]), "Error: Please provide weight");
    assert_eq!(
        evaluate("bmi", &[("weight", "abc"), ("height", "175")]),
        "Error: weight must be a valid number"
    );
    assert_eq!(
        evaluate("bmi", &[("weight", "-70"), ("height", "175")]),
        "Error: weight must be greater than zero"
    );
}

#[test]
fn leap_year_follows_the_gregorian_rule() {
    assert_eq!(evaluate("leap_year", &[("year", "2024")]), "2024 is a leap year");
    assert_eq!(evaluate("leap_year", &[("year", "1900")]), "1900 is not a leap year");
    assert_eq!(evaluate("leap_year", &[("year", "2000")]), "2000 is a leap year");
}

#[test]
fn gcd_and_lcm_handle_their_domains() {
    assert_eq!(evaluate("gcd", &[("a", "48"), ("b", "18")]), "GCD of 48 and 18 = 6");
    assert_eq!(
        evaluate("gcd", &[("a", "0"), ("b", "0")]),
        "Error: GCD of 0 and 0 is undefined"
    );
    assert_eq!(evaluate("lcm", &[("a", "4"), ("b", "6")]), "LCM of 4 and 6 = 12");
    assert_eq!(
        evaluate("lcm", &[("a", "0"), ("b", "6")]),
        "Error: both numbers must be positive"
    );
}

#[test]
fn loan_payment_with_zero_rate_is_linear() {
    let result =
        evaluate("loan_payment", &[("principal", "1200"), ("rate", "0"), ("months", "12")]);
    assert_eq!(result, "Monthly Payment: $100.00");
}

#[test]
fn loan_payment_with_interest_matches_the_annuity_formula() {
    // 30-year loan of 200k at 6% is the textbook $1199.10 case
    let result =
        evaluate("loan_payment", &[("principal", "200000"), ("rate", "6"), ("months", "360")]);
    assert_eq!(result, "Monthly Payment: $1199.10");
}

#[test]
fn factorial_boundaries_are_exact() {
    assert_eq!(evaluate("factorial", &[("n", "0")]), "0! = 1");
    assert_eq!(evaluate("factorial", &[("n", "10")]), "10! = 3628800");

    let at_limit = evaluate("factorial", &[("n", "170")]);
    let digits = at_limit.strip_prefix("170! = ").expect("well-formed result");
    assert_eq!(digits.len(), 307, "170! has 307 digits");
    assert!(digits.starts_with("7257415"));

    assert_eq!(evaluate("factorial", &[("n", "171")]), "Error: n must be between 0 and 170");
    assert_eq!(evaluate("factorial", &[("n", "-1")]), "Error: n must be between 0 and 170");
}

#[test]
fn temperature_conversion_boiling_point() {
    let result = evaluate(
        "unit_temperature",
        &[("temp", "100"), ("from", "celsius"), ("to", "fahrenheit")],
    );
    assert!(result.contains("212.00"), "unexpected result: {result}");
}

#[test]
fn days_between_january_example() {
    let result = evaluate("days_between", &[("date1", "2025-01-01"), ("date2", "2025-01-31")]);
    assert!(result.contains("30 days"), "unexpected result: {result}");
}

#[test]
fn work_days_counts_weekdays_in_the_closed_interval() {
    // Monday through the following Sunday
    let result = evaluate("work_days", &[("date1", "2025-01-06"), ("date2", "2025-01-12")]);
    assert_eq!(result, "Work Days: 5 days");
    // reversed endpoints behave the same
    let result = evaluate("work_days", &[("date1", "2025-01-12"), ("date2", "2025-01-06")]);
    assert_eq!(result, "Work Days: 5 days");
    // single weekday
    let result = evaluate("work_days", &[("date1", "2025-01-06"), ("date2", "2025-01-06")]);
    assert_eq!(result, "Work Days: 1 days");
}

#[test]
fn age_uses_real_month_lengths_for_the_borrow() {
    let dispatcher = fixed_dispatcher("2025-06-15");
    let result =
        dispatcher.evaluate("age", &InputBag::from_pairs(&[("dob", "1990-06-15")]));
    assert_eq!(result, "Your Age: 35 Years, 0 Months, 0 Days");

    // day borrow: May has 31 days
    let result =
        dispatcher.evaluate("age", &InputBag::from_pairs(&[("dob", "1990-05-20")]));
    assert_eq!(result, "Your Age: 35 Years, 0 Months, 26 Days");

    let result =
        dispatcher.evaluate("age", &InputBag::from_pairs(&[("dob", "2030-01-01")]));
    assert_eq!(result, "Error: date of birth must not be in the future");
}

#[test]
fn countdown_and_next_birthday_track_the_injected_clock() {
    let dispatcher = fixed_dispatcher("2025-06-15");
    let result =
        dispatcher.evaluate("countdown", &InputBag::from_pairs(&[("date", "2025-07-01")]));
    assert_eq!(result, "Days Until 2025-07-01: 16 days");

    let result =
        dispatcher.evaluate("next_birthday", &InputBag::from_pairs(&[("dob", "1990-06-15")]));
    assert_eq!(result, "Your birthday is today!");

    let result =
        dispatcher.evaluate("next_birthday", &InputBag::from_pairs(&[("dob", "1990-06-20")]));
    assert_eq!(result, "Days Until Next Birthday: 5 days");
}

#[test]
fn random_number_draws_through_the_injected_source() {
    let dispatcher = fixed_dispatcher("2025-06-15");
    let result =
        dispatcher.evaluate("random_number", &InputBag::from_pairs(&[("min", "1"), ("max", "10")]));
    assert_eq!(result, "Random Number: 7 (between 1 and 10)");

    let result =
        dispatcher.evaluate("random_number", &InputBag::from_pairs(&[("min", "9"), ("max", "2")]));
    assert_eq!(result, "Error: min must not be greater than max");
}

#[test]
fn roman_numerals_cover_the_supported_range() {
    assert_eq!(evaluate("roman_numeral", &[("number", "2024")]), "Roman Numeral: MMXXIV");
    assert_eq!(evaluate("roman_numeral", &[("number", "3999")]), "Roman Numeral: MMMCMXCIX");
    assert_eq!(evaluate("roman_numeral", &[("number", "1")]), "Roman Numeral: I");
    assert_eq!(
        evaluate("roman_numeral", &[("number", "4000")]),
        "Error: number must be between 1 and 3999"
    );
    assert_eq!(
        evaluate("roman_numeral", &[("number", "0")]),
        "Error: number must be between 1 and 3999"
    );
}

#[test]
fn base_conversions_render_known_values() {
    assert_eq!(evaluate("binary", &[("number", "10")]), "Binary: 1010");
    assert_eq!(evaluate("hex", &[("number", "255")]), "Hexadecimal: FF");
    assert_eq!(evaluate("octal", &[("number", "8")]), "Octal: 10");
    assert_eq!(evaluate("binary", &[("number", "-3")]), "Error: number must not be negative");
}

#[test]
fn mode_returns_every_value_tied_for_the_highest_frequency() {
    let result = evaluate("mode", &[("numbers", "1, 2, 2, 3, 3")]);
    assert_eq!(result, "Mode: 2, 3 (appears 2 times)");

    let result = evaluate("mode", &[("numbers", "5, 6, 7")]);
    assert_eq!(result, "No mode (each value appears once)");
}

#[test]
fn statistics_over_a_delimited_list() {
    assert_eq!(evaluate("mean", &[("numbers", "1,2,3,4")]), "Mean: 2.50");
    assert_eq!(evaluate("median", &[("numbers", "7 1 3")]), "Median: 3.00");
    assert_eq!(evaluate("variance", &[("numbers", "2,3,5,6")]), "Variance: 2.50");
    assert_eq!(
        evaluate("standard_deviation", &[("numbers", "5")]),
        "Error: please provide at least 2 numbers"
    );
    let result = evaluate(
        "correlation",
        &[("x_values", "1,2,3"), ("y_values", "2,4,6")],
    );
    assert_eq!(result, "Correlation Coefficient: 1.0000");
    assert_eq!(
        evaluate("correlation", &[("x_values", "1,2"), ("y_values", "1,2,3")]),
        "Error: both lists must have the same number of values"
    );
}

#[test]
fn quadratic_covers_all_three_discriminant_cases() {
    assert_eq!(
        evaluate("quadratic", &[("a", "1"), ("b", "-1"), ("c", "-6")]),
        "Roots: x1 = 3.00, x2 = -2.00"
    );
    assert_eq!(
        evaluate("quadratic", &[("a", "1"), ("b", "-4"), ("c", "4")]),
        "Double Root: x = 2.00"
    );
    assert_eq!(
        evaluate("quadratic", &[("a", "1"), ("b", "0"), ("c", "4")]),
        "Complex Roots: x = 0.00 ± 2.00i"
    );
    assert_eq!(
        evaluate("quadratic", &[("a", "0"), ("b", "2"), ("c", "1")]),
        "Error: coefficient a must not be zero"
    );
}

#[test]
fn pythagorean_checks_the_hypotenuse_when_given() {
    assert_eq!(evaluate("pythagorean", &[("a", "3"), ("b", "4")]), "Hypotenuse: 5.00");
    assert_eq!(
        evaluate("pythagorean", &[("a", "3"), ("b", "4"), ("c", "5")]),
        "3, 4, 5 form a right triangle"
    );
    assert_eq!(
        evaluate("pythagorean", &[("a", "3"), ("b", "4"), ("c", "6")]),
        "3, 4, 6 do not form a right triangle"
    );
    assert_eq!(
        evaluate("pythagorean", &[("a", "3"), ("b", "4"), ("c", "2")]),
        "Error: the hypotenuse must be the largest side"
    );
}

#[test]
fn clock_arithmetic_wraps_across_midnight() {
    assert_eq!(
        evaluate("sleep_hours", &[("bedtime", "23:00"), ("waketime", "07:00")]),
        "Sleep Duration: 8 hours 0 minutes"
    );
    assert_eq!(
        evaluate(
            "time_zone",
            &[("time", "12:00"), ("from_offset", "0"), ("to_offset", "5.5")]
        ),
        "Converted Time: 17:30"
    );
    assert_eq!(
        evaluate(
            "time_zone",
            &[("time", "22:00"), ("from_offset", "-5"), ("to_offset", "9")]
        ),
        "Converted Time: 12:00 (next day)"
    );
    assert_eq!(
        evaluate("sleep_hours", &[("bedtime", "25:00"), ("waketime", "07:00")]),
        "Error: bedtime must be a valid time (HH:MM)"
    );
}

#[test]
fn mortgage_rejects_a_down_payment_at_or_above_the_price() {
    let result = evaluate(
        "mortgage",
        &[("price", "300000"), ("down", "300000"), ("rate", "5"), ("years", "30")],
    );
    assert_eq!(result, "Error: the down payment must be less than the price");
}

#[test]
fn percentage_family_resolves_each_direction() {
    assert!(evaluate("percentage", &[("value", "100"), ("percent", "25")]).contains("25"));
    assert_eq!(
        evaluate("percentage_of", &[("value", "25"), ("percent", "200")]),
        "25 is 12.50% of 200"
    );
    assert_eq!(
        evaluate("percentage_of", &[("value", "25"), ("percent", "0")]),
        "Error: Division by zero"
    );
    assert_eq!(
        evaluate("percentage_change", &[("old", "80"), ("new", "100")]),
        "Percentage Change: 25.00% increase"
    );
    assert_eq!(
        evaluate("percentage_change", &[("old", "100"), ("new", "80")]),
        "Percentage Change: 20.00% decrease"
    );
}

#[test]
fn unit_conversions_cover_every_family() {
    assert!(
        evaluate("unit_length", &[("value", "5"), ("from", "kilometers"), ("to", "miles")])
            .contains("3.11 miles")
    );
    assert!(
        evaluate("unit_weight", &[("value", "10"), ("from", "pounds"), ("to", "kilograms")])
            .contains("4.54 kilograms")
    );
    assert!(
        evaluate("unit_time", &[("value", "2"), ("from", "hours"), ("to", "minutes")])
            .contains("120.00 minutes")
    );
    assert!(
        evaluate("unit_speed", &[("value", "100"), ("from", "kilometers_per_hour"), ("to", "miles_per_hour")])
            .contains("62.14 miles per hour")
    );
    assert!(
        evaluate("unit_volume", &[("value", "1"), ("from", "gallons"), ("to", "liters")])
            .contains("3.79 liters")
    );
    assert!(
        evaluate("unit_energy", &[("value", "1"), ("from", "kilocalories"), ("to", "kilojoules")])
            .contains("4.18 kilojoules")
    );
    assert!(
        evaluate("unit_power", &[("value", "1"), ("from", "horsepower"), ("to", "watts")])
            .contains("745.70 watts")
    );
    assert!(
        evaluate("unit_pressure", &[("value", "1"), ("from", "atmospheres"), ("to", "kilopascals")])
            .contains("101.3")
    );
    assert!(
        evaluate("unit_area", &[("value", "1"), ("from", "hectare"), ("to", "acre")])
            .contains("2.47 acre")
    );
    assert_eq!(
        evaluate("unit_length", &[("value", "1"), ("from", "cubits"), ("to", "meters")]),
        "Error: Unknown unit 'cubits'"
    );
}

#[test]
fn a_bad_call_does_not_poison_the_dispatcher() {
    let dispatcher = Dispatcher::new();
    let bad = dispatcher.evaluate("gcd", &InputBag::from_pairs(&[("a", "0"), ("b", "0")]));
    assert!(bad.starts_with("Error:"));
    let good = dispatcher.evaluate("gcd", &InputBag::from_pairs(&[("a", "48"), ("b", "18")]));
    assert_eq!(good, "GCD of 48 and 18 = 6");
}
