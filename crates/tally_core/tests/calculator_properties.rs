//! # Calculator Property Tests
//!
//! End-to-end input sequences plus randomized checks of arithmetic,
//! formatting and clearing.

use std::time::{Duration, Instant};

use proptest::prelude::*;
use tally_core::format::reformat;
use tally_core::{
    format_number, Calculator, CalcError, Digit, Display, Input, Operator, Phase, Session,
    ERROR_SENTINEL,
};

fn digit(value: u8) -> Input {
    Input::Digit(Digit::new(value).expect("digit in range"))
}

/// Feeds the characters of a keystroke script (`"12+3="`) to a calculator.
fn type_keys(calc: &mut Calculator, script: &str) -> Display {
    let mut display = calc.display().clone();
    for c in script.chars() {
        let input = match c {
            'C' => Input::Clear,
            '<' => Input::Backspace,
            other => other.to_string().parse::<Input>().expect("known key"),
        };
        display = calc.apply(input).display;
    }
    display
}

#[test]
fn five_plus_three_equals_eight() {
    let mut calc = Calculator::default();
    assert_eq!(type_keys(&mut calc, "5+3=").primary, "8");
}

#[test]
fn chained_sum_is_left_to_right() {
    let mut calc = Calculator::default();
    assert_eq!(type_keys(&mut calc, "5+3+2=").primary, "10");

    // Precedence is not applied: (2 + 3) * 4.
    let mut calc = Calculator::default();
    assert_eq!(type_keys(&mut calc, "2+3*4=").primary, "20");
}

#[test]
fn divide_by_zero_then_reset() {
    let t0 = Instant::now();
    let mut session = Session::default();
    for input in [digit(1), Input::Operator(Operator::Div), digit(0)] {
        session.handle(input, t0);
    }
    let display = session.handle(Input::Operator(Operator::Add), t0);
    assert_eq!(display.primary, "Divide by 0");

    let delay = session.calculator().config().error_clear_delay();
    let display = session.advance(t0 + delay).expect("reset fired");
    assert_eq!(display, Display::initial());
    assert_eq!(session.phase(), Phase::Empty);
    assert_eq!(session.calculator().state(), Calculator::default().state());
}

#[test]
fn double_separator_is_ignored() {
    let mut calc = Calculator::default();
    type_keys(&mut calc, "3.");
    let once = calc.state().current_operand().to_owned();
    type_keys(&mut calc, ".");
    assert_eq!(calc.state().current_operand(), once);
}

#[test]
fn backspace_on_exponential_result_still_evaluates() {
    let mut calc = Calculator::default();
    assert_eq!(type_keys(&mut calc, "99999*99999=").primary, "9.999800e+9");
    type_keys(&mut calc, "<<");
    assert_eq!(calc.state().current_operand(), "9.999800e");
    assert_eq!(type_keys(&mut calc, "+1=").primary, "10.9998");
}

#[test]
fn error_window_does_not_block_input() {
    let t0 = Instant::now();
    let mut session = Session::default();
    for input in [digit(7), Input::Operator(Operator::Div), digit(0), Input::Equals] {
        session.handle(input, t0);
    }
    assert_eq!(session.calculator().error(), Some(CalcError::DivisionByZero));
    session.handle(Input::Clear, t0 + Duration::from_millis(10));
    assert_eq!(session.phase(), Phase::Empty);
    // The already scheduled reset is harmless on a cleared engine.
    assert_eq!(session.advance(t0 + Duration::from_secs(5)), Some(Display::initial()));
}

fn any_input() -> impl Strategy<Value = Input> {
    prop_oneof![
        (0u8..=9).prop_map(digit),
        Just(Input::DecimalPoint),
        prop::sample::select(Operator::ALL.to_vec()).prop_map(Input::Operator),
        Just(Input::Equals),
        Just(Input::Backspace),
        Just(Input::Clear),
    ]
}

proptest! {
    #[test]
    fn arithmetic_matches_reference(a in -1.0e6f64..1.0e6, b in -1.0e6f64..1.0e6) {
        prop_assume!(b != 0.0);
        let expected = [a + b, a - b, a * b, a / b];
        for (op, want) in Operator::ALL.into_iter().zip(expected) {
            let got = op.apply(a, b).expect("non-zero divisor");
            prop_assert!((got - want).abs() <= 1e-8 * want.abs().max(1.0));
        }
    }

    #[test]
    fn division_by_zero_is_sentinel(a in any::<f64>()) {
        prop_assert_eq!(Operator::Div.apply(a, 0.0), Err(CalcError::DivisionByZero));
        prop_assert_eq!(
            tally_core::format_outcome(Operator::Div.apply(a, 0.0)),
            ERROR_SENTINEL
        );
    }

    #[test]
    fn formatting_is_idempotent(x in -1.0e7f64..1.0e7) {
        let once = format_number(x);
        prop_assert_eq!(reformat(&once), once);
    }

    #[test]
    fn formatting_is_idempotent_near_zero(x in -1.0e-5f64..1.0e-5) {
        let once = format_number(x);
        prop_assert_eq!(reformat(&once), once);
    }

    #[test]
    fn formatting_is_idempotent_for_large_magnitudes(
        x in prop_oneof![1.0e9f64..1.0e12, -1.0e12f64..-1.0e9]
    ) {
        let once = format_number(x);
        prop_assert_eq!(reformat(&once), once);
    }

    #[test]
    fn formatting_is_idempotent_for_integers(n in any::<i64>()) {
        #[allow(clippy::cast_precision_loss)]
        let once = format_number(n as f64);
        prop_assert_eq!(reformat(&once), once);
    }

    #[test]
    fn clear_always_resets(inputs in prop::collection::vec(any_input(), 0..40)) {
        let mut calc = Calculator::default();
        for input in inputs {
            calc.apply(input);
        }
        let step = calc.clear();
        prop_assert_eq!(step.display.primary, "0");
        prop_assert_eq!(step.display.secondary, "");
        prop_assert_eq!(calc.phase(), Phase::Empty);
    }

    #[test]
    fn current_operand_has_at_most_one_separator(inputs in prop::collection::vec(any_input(), 0..40)) {
        let mut calc = Calculator::default();
        for input in inputs {
            calc.apply(input);
            let dots = calc.state().current_operand().matches('.').count();
            prop_assert!(dots <= 1);
        }
    }
}
