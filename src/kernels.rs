//! Magnitude-only arithmetic kernels. These never look at `sign`; the signed
//! dispatch in [`crate::ops`] decides what sign the result carries.

use crate::int::Int;
use std::cmp::Ordering;

/// `|a| + |b|`.
pub fn add_abs(a: &Int, b: &Int) -> Int {
    let (long, short) = if a.limbs.len() >= b.limbs.len() {
        (a, b)
    } else {
        (b, a)
    };
    let mut limbs = Vec::with_capacity(long.limbs.len() + 1);
    let mut carry = 0u32;
    for i in 0..long.limbs.len() {
        let x = long.limbs[i];
        let y = short.limbs.get(i).copied().unwrap_or(0);
        let (s1, c1) = x.overflowing_add(y);
        let (s2, c2) = s1.overflowing_add(carry);
        limbs.push(s2);
        carry = (c1 as u32) + (c2 as u32);
    }
    if carry != 0 {
        limbs.push(carry);
    }
    Int::from_parts(1, limbs)
}

/// `|a| - |b|`. Caller must guarantee `|a| >= |b|`.
pub fn sub_abs(a: &Int, b: &Int) -> Int {
    debug_assert_ne!(a.compare_abs(b), Ordering::Less);
    let mut limbs = Vec::with_capacity(a.limbs.len());
    let mut borrow = 0u32;
    for i in 0..a.limbs.len() {
        let x = a.limbs[i];
        let y = b.limbs.get(i).copied().unwrap_or(0);
        let (d1, b1) = x.overflowing_sub(y);
        let (d2, b2) = d1.overflowing_sub(borrow);
        limbs.push(d2);
        borrow = (b1 as u32) + (b2 as u32);
    }
    Int::from_parts(1, limbs)
}

/// Schoolbook `|a| * |b|`, O(n*m) with 64-bit-wide intermediate products.
pub fn mul(a: &Int, b: &Int) -> Int {
    if a.is_zero() || b.is_zero() {
        return Int::zero();
    }
    let mut limbs = vec![0u32; a.limbs.len() + b.limbs.len()];
    for (i, &ai) in a.limbs.iter().enumerate() {
        let mut carry = 0u64;
        for (j, &bj) in b.limbs.iter().enumerate() {
            let idx = i + j;
            let prod = (ai as u64) * (bj as u64) + limbs[idx] as u64 + carry;
            limbs[idx] = prod as u32;
            carry = prod >> 32;
        }
        let mut idx = i + b.limbs.len();
        while carry != 0 {
            let sum = limbs[idx] as u64 + carry;
            limbs[idx] = sum as u32;
            carry = sum >> 32;
            idx += 1;
        }
    }
    Int::from_parts(1, limbs)
}

/// Binary long division of magnitudes: `(|a| / |b|, |a| % |b|)`.
///
/// Caller must guarantee `b` is nonzero. Iterates bits of `a` from most to
/// least significant, shifting the running remainder left and testing
/// against the divisor one bit at a time.
pub fn div_mod_abs(a: &Int, b: &Int) -> (Int, Int) {
    debug_assert!(!b.is_zero());
    if a.compare_abs(b) == Ordering::Less {
        return (Int::zero(), a.clone());
    }

    let bits = a.bit_length();
    // Pre-sized to the full bit width of `a` and written bit-by-bit below;
    // going through `Int::from_parts` here would normalize the all-zero
    // buffer straight back down to a single limb before any bit is set.
    let mut quotient = Int {
        sign: 1,
        limbs: vec![0; bits.div_ceil(32).max(1)],
    };
    let mut remainder = Int::zero();

    for i in (0..bits).rev() {
        remainder.shift_left_one();
        if a.bit(i) == 1 {
            remainder.limbs[0] |= 1;
        }
        if remainder.compare_abs(b) != Ordering::Less {
            remainder = sub_abs(&remainder, b);
            let limb_idx = i / 32;
            let bit_idx = i % 32;
            quotient.limbs[limb_idx] |= 1 << bit_idx;
        }
    }

    quotient.sign = 1;
    quotient.normalize();
    remainder.sign = if remainder.is_zero() { 0 } else { 1 };
    remainder.normalize();
    (quotient, remainder)
}
