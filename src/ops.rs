//! Signed arithmetic: dispatches on operand signs and delegates magnitude
//! work to [`crate::kernels`].

use crate::error::Error;
use crate::int::Int;
use crate::kernels;
use std::cmp::Ordering;
use std::ops::{Add, Mul, Neg, Sub};

/// `a + b`.
pub fn add(a: &Int, b: &Int) -> Int {
    if a.sign == b.sign {
        if a.is_zero() {
            return Int::zero();
        }
        let mut r = kernels::add_abs(a, b);
        r.sign = a.sign;
        r
    } else if a.is_zero() {
        b.clone()
    } else if b.is_zero() {
        a.clone()
    } else {
        match a.compare_abs(b) {
            Ordering::Equal => Int::zero(),
            Ordering::Greater => {
                let mut r = kernels::sub_abs(a, b);
                r.sign = if r.is_zero() { 0 } else { a.sign };
                r
            }
            Ordering::Less => {
                let mut r = kernels::sub_abs(b, a);
                r.sign = if r.is_zero() { 0 } else { b.sign };
                r
            }
        }
    }
}

/// `a - b`.
pub fn sub(a: &Int, b: &Int) -> Int {
    add(a, &negate(b))
}

/// `a * b`.
pub fn mul(a: &Int, b: &Int) -> Int {
    if a.is_zero() || b.is_zero() {
        return Int::zero();
    }
    let mut r = kernels::mul(a, b);
    r.sign = a.sign * b.sign;
    r
}

/// `a / b`, truncating toward zero. Fails on division by zero.
pub fn div(a: &Int, b: &Int) -> Result<Int, Error> {
    if b.is_zero() {
        return Err(Error::DivisionByZero);
    }
    if a.is_zero() {
        return Ok(Int::zero());
    }
    let (mut q, _) = kernels::div_mod_abs(a, b);
    q.sign = if q.is_zero() { 0 } else { a.sign * b.sign };
    Ok(q)
}

/// `a % b`. Remainder carries the dividend's sign (truncated division).
pub fn rem(a: &Int, b: &Int) -> Result<Int, Error> {
    if b.is_zero() {
        return Err(Error::DivisionByZero);
    }
    if a.is_zero() {
        return Ok(Int::zero());
    }
    let (_, mut r) = kernels::div_mod_abs(a, b);
    r.sign = if r.is_zero() { 0 } else { a.sign };
    Ok(r)
}

/// `-a`.
pub fn negate(a: &Int) -> Int {
    let mut r = a.clone();
    r.sign = -r.sign;
    r
}

/// `base ^ exp`, by squaring. `exp` may be any sign; negative exponents
/// truncate to zero, matching the original integer-only semantics.
pub fn pow(base: &Int, exp: &Int) -> Int {
    if exp.is_zero() {
        return Int::from(1i64);
    }
    if exp.sign < 0 {
        return Int::zero();
    }
    if base.is_zero() {
        return Int::zero();
    }
    if base.limbs == [1] && base.sign.abs() == 1 {
        if base.sign == 1 {
            return Int::from(1i64);
        }
        let two = Int::from(2i64);
        let parity = rem(exp, &two).expect("2 is nonzero");
        return if parity.is_zero() {
            Int::from(1i64)
        } else {
            Int::from(-1i64)
        };
    }

    let mut acc = Int::from(1i64);
    let mut cur = base.clone();
    let mut n = exp.clone();
    let two = Int::from(2i64);
    let zero = Int::zero();
    while n.cmp(&zero) == Ordering::Greater {
        let (half, parity) = kernels::div_mod_abs(&n, &two);
        if !parity.is_zero() {
            acc = mul(&acc, &cur);
        }
        let mut half = half;
        half.sign = if half.is_zero() { 0 } else { 1 };
        n = half;
        if n.cmp(&zero) == Ordering::Greater {
            cur = mul(&cur, &cur);
        }
    }
    acc
}

/// `n!` for `n` that fits in one limb. `0! = 1! = 1`.
pub fn fact(n: u32) -> Int {
    let mut acc = Int::from(1i64);
    for k in 2..=n {
        acc = mul(&acc, &Int::from(k));
    }
    acc
}

impl Add for &Int {
    type Output = Int;
    fn add(self, rhs: &Int) -> Int {
        add(self, rhs)
    }
}

impl Sub for &Int {
    type Output = Int;
    fn sub(self, rhs: &Int) -> Int {
        sub(self, rhs)
    }
}

impl Mul for &Int {
    type Output = Int;
    fn mul(self, rhs: &Int) -> Int {
        mul(self, rhs)
    }
}

impl Neg for &Int {
    type Output = Int;
    fn neg(self) -> Int {
        negate(self)
    }
}

impl Neg for Int {
    type Output = Int;
    fn neg(self) -> Int {
        negate(&self)
    }
}
