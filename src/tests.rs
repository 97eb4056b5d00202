//! Property-based tests using quickcheck.
//!
//! Tests verify the arbitrary-precision engine matches native `i64`/`i128`
//! arithmetic on values that fit, and check the invariants and end-to-end
//! scenarios called out for the expression evaluator.

use quickcheck_macros::quickcheck;

use crate::eval::eval_expression;
use crate::int::Int;
use crate::ops;
use crate::text;

// ============================================================================
// Int property tests - compare against native i64/i128
// ============================================================================

#[quickcheck]
fn roundtrip_decimal(v: i64) -> bool {
    let n = Int::from(v);
    text::from_str(&text::to_decimal(&n)).unwrap() == n
}

#[quickcheck]
fn roundtrip_hex(v: i64) -> bool {
    let n = Int::from(v);
    let hex = text::to_hex(&n);
    text::from_str(&hex).unwrap() == n
}

#[quickcheck]
fn roundtrip_bin(v: i64) -> bool {
    let n = Int::from(v);
    let bin = text::to_bin(&n);
    text::from_str(&bin).unwrap() == n
}

#[quickcheck]
fn add_matches_native(a: i64, b: i64) -> bool {
    let expected = a as i128 + b as i128;
    let result = ops::add(&Int::from(a), &Int::from(b));
    result == int_from_i128(expected)
}

#[quickcheck]
fn sub_matches_native(a: i64, b: i64) -> bool {
    let expected = a as i128 - b as i128;
    let result = ops::sub(&Int::from(a), &Int::from(b));
    result == int_from_i128(expected)
}

#[quickcheck]
fn mul_matches_native(a: i32, b: i32) -> bool {
    let expected = a as i128 * b as i128;
    let result = ops::mul(&Int::from(a as i64), &Int::from(b as i64));
    result == int_from_i128(expected)
}

#[quickcheck]
fn div_rem_identity(a: i64, b: i64) -> bool {
    if b == 0 {
        return true;
    }
    let ia = Int::from(a);
    let ib = Int::from(b);
    let q = ops::div(&ia, &ib).unwrap();
    let r = ops::rem(&ia, &ib).unwrap();
    let reconstructed = ops::add(&ops::mul(&q, &ib), &r);
    reconstructed == ia
}

#[quickcheck]
fn div_rem_matches_native(a: i64, b: i64) -> bool {
    if b == 0 {
        return true;
    }
    let q = ops::div(&Int::from(a), &Int::from(b)).unwrap();
    let r = ops::rem(&Int::from(a), &Int::from(b)).unwrap();
    q == Int::from(a / b) && r == Int::from(a % b)
}

#[quickcheck]
fn negate_is_involution(v: i64) -> bool {
    let n = Int::from(v);
    ops::negate(&ops::negate(&n)) == n
}

fn int_from_i128(v: i128) -> Int {
    let sign: i8 = match v.signum() {
        1 => 1,
        -1 => -1,
        _ => 0,
    };
    let mag = v.unsigned_abs();
    let limbs = vec![
        mag as u32,
        (mag >> 32) as u32,
        (mag >> 64) as u32,
        (mag >> 96) as u32,
    ];
    Int::from_parts(sign, limbs)
}

// ============================================================================
// Invariants (spec section 8)
// ============================================================================

#[test]
fn zero_is_canonical() {
    let z = Int::zero();
    assert_eq!(z.sign(), 0);
    assert!(z.is_zero());
}

#[test]
fn ring_laws() {
    let x = Int::from(42i64);
    let zero = Int::zero();
    let one = Int::from(1i64);
    assert_eq!(ops::add(&x, &zero), x);
    assert_eq!(ops::add(&x, &ops::negate(&x)), zero);
    assert_eq!(ops::mul(&x, &zero), zero);
    assert_eq!(ops::mul(&x, &one), x);
}

#[test]
fn pow_base_cases() {
    let zero = Int::zero();
    let one = Int::from(1i64);
    let neg_one = Int::from(-1i64);
    assert_eq!(ops::pow(&Int::from(5i64), &zero), one);
    assert_eq!(ops::pow(&zero, &Int::from(5i64)), zero);
    assert_eq!(ops::pow(&zero, &zero), one);
    assert_eq!(ops::pow(&neg_one, &Int::from(4i64)), one);
    assert_eq!(ops::pow(&neg_one, &Int::from(5i64)), neg_one);
    assert_eq!(ops::pow(&Int::from(3i64), &neg_one), zero);
}

#[test]
fn factorial_recurrence() {
    assert_eq!(ops::fact(0), Int::from(1i64));
    assert_eq!(ops::fact(1), Int::from(1i64));
    for k in 2..=10u32 {
        assert_eq!(ops::fact(k), ops::mul(&ops::fact(k - 1), &Int::from(k)));
    }
}

#[test]
fn negative_modulo_carries_dividend_sign() {
    let result = eval_expression("(-5) % 3").unwrap();
    assert_eq!(text::to_decimal(&result), "-2");
}

// ============================================================================
// End-to-end scenarios (spec section 8)
// ============================================================================

#[test]
fn large_power() {
    let result = eval_expression("2^100").unwrap();
    assert_eq!(
        text::to_decimal(&result),
        "1267650600228229401496703205376"
    );
}

#[test]
fn factorial_ratio() {
    let result = eval_expression("100! / 99!").unwrap();
    assert_eq!(text::to_decimal(&result), "100");
}

#[test]
fn hex_literal_plus_one() {
    let result = eval_expression("0xFF + 1").unwrap();
    assert_eq!(text::to_decimal(&result), "256");
}

#[test]
fn hex_output_minimal_width() {
    assert_eq!(text::to_hex(&Int::from(255i64)), "0xff");
    assert_eq!(text::to_hex(&Int::from(-1i64)), "0xf");
}

#[test]
fn bin_output_minimal_width() {
    assert_eq!(text::to_bin(&Int::from(-2i64)), "0b10");
}

#[test]
fn binary_literal_two_complement() {
    let result = eval_expression("0b1000 + 8").unwrap();
    assert_eq!(text::to_decimal(&result), "0");
}

#[test]
fn division_by_zero_is_reported() {
    let err = eval_expression("5 / 0").unwrap_err();
    assert_eq!(err.to_string(), "Division by zero!");
}

#[test]
fn negative_factorial_is_reported() {
    let err = eval_expression("(-3)!").unwrap_err();
    assert_eq!(err.to_string(), "Input of factorial must not be negative!");
}

#[test]
fn right_associative_power() {
    let result = eval_expression("2^3^2").unwrap();
    assert_eq!(text::to_decimal(&result), "512");
}

// ============================================================================
// Validator soundness / completeness
// ============================================================================

#[test]
fn validator_rejects_malformed_expressions() {
    assert!(eval_expression("(1 + 2").is_err());
    assert!(eval_expression("1 + 2)").is_err());
    assert!(eval_expression("1 + + 2").is_err());
    assert!(eval_expression("1 * / 2").is_err());
    assert!(eval_expression("1 +").is_err());
    assert!(eval_expression("").is_err());
}

#[test]
fn validator_accepts_unary_signs() {
    assert_eq!(text::to_decimal(&eval_expression("-5 + 3").unwrap()), "-2");
    assert_eq!(text::to_decimal(&eval_expression("3 + -5").unwrap()), "-2");
    assert_eq!(text::to_decimal(&eval_expression("-(2 + 3)").unwrap()), "-5");
    assert_eq!(text::to_decimal(&eval_expression("5!").unwrap()), "120");
}
