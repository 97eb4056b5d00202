//! Arbitrary-precision signed integer, stored sign-magnitude over base-2^32 limbs.
//!
//! Limbs are little-endian (`limbs[0]` is least significant). A normalized
//! value either is the canonical zero (`sign == 0`, `limbs == [0]`) or has
//! `sign != 0` and a nonzero top limb.

use std::cmp::Ordering;
use std::fmt;

/// A signed, arbitrary-precision integer.
#[derive(Debug, Clone)]
pub struct Int {
    pub(crate) sign: i8,
    pub(crate) limbs: Vec<u32>,
}

impl Int {
    /// The canonical zero value.
    pub fn zero() -> Self {
        Int {
            sign: 0,
            limbs: vec![0],
        }
    }

    /// Build an `Int` directly from a sign and limb vector, normalizing it.
    pub(crate) fn from_parts(sign: i8, limbs: Vec<u32>) -> Self {
        let mut n = Int { sign, limbs };
        n.normalize();
        n
    }

    pub fn is_zero(&self) -> bool {
        self.sign == 0
    }

    pub fn sign(&self) -> i8 {
        self.sign
    }

    /// Number of significant limbs.
    pub fn limbs_len(&self) -> usize {
        self.limbs.len()
    }

    /// The least significant limb. Only meaningful when `limbs_len() == 1`.
    pub fn limb0(&self) -> u32 {
        self.limbs[0]
    }

    /// Restores the normalized-form invariant: trims trailing zero limbs
    /// (keeping at least one) and forces `sign = 0` when the value is zero.
    pub(crate) fn normalize(&mut self) {
        while self.limbs.len() > 1 && *self.limbs.last().unwrap() == 0 {
            self.limbs.pop();
        }
        if self.limbs.is_empty() {
            self.limbs.push(0);
        }
        if self.limbs.len() == 1 && self.limbs[0] == 0 {
            self.sign = 0;
        }
    }

    /// Compares `|self|` against `|other|`.
    pub fn compare_abs(&self, other: &Int) -> Ordering {
        if self.limbs.len() != other.limbs.len() {
            return self.limbs.len().cmp(&other.limbs.len());
        }
        for (a, b) in self.limbs.iter().rev().zip(other.limbs.iter().rev()) {
            match a.cmp(b) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    }

    /// Number of bits needed to represent `|self|`; zero for the zero value.
    pub fn bit_length(&self) -> usize {
        if self.is_zero() {
            return 0;
        }
        let top = *self.limbs.last().unwrap();
        (self.limbs.len() - 1) * 32 + (32 - top.leading_zeros() as usize)
    }

    /// The value of bit `k` (0-indexed from the least significant bit) of `|self|`.
    pub fn bit(&self, k: usize) -> u32 {
        let limb_idx = k / 32;
        let bit_idx = k % 32;
        match self.limbs.get(limb_idx) {
            Some(limb) => (limb >> bit_idx) & 1,
            None => 0,
        }
    }

    /// In-place `|self| *= 2`, growing the limb buffer when the top bit overflows.
    pub(crate) fn shift_left_one(&mut self) {
        let mut carry = 0u32;
        for limb in self.limbs.iter_mut() {
            let new_carry = *limb >> 31;
            *limb = (*limb << 1) | carry;
            carry = new_carry;
        }
        if carry != 0 {
            self.limbs.push(carry);
        }
    }
}

impl Default for Int {
    fn default() -> Self {
        Int::zero()
    }
}

impl PartialEq for Int {
    fn eq(&self, other: &Self) -> bool {
        self.sign == other.sign && self.limbs == other.limbs
    }
}

impl Eq for Int {}

impl PartialOrd for Int {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Int {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.sign.cmp(&other.sign) {
            Ordering::Equal => {
                if self.sign >= 0 {
                    self.compare_abs(other)
                } else {
                    self.compare_abs(other).reverse()
                }
            }
            ord => ord,
        }
    }
}

impl fmt::Display for Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::text::to_decimal(self))
    }
}

impl From<i64> for Int {
    fn from(v: i64) -> Self {
        let sign = match v.signum() {
            1 => 1,
            -1 => -1,
            _ => 0,
        };
        let mag = v.unsigned_abs();
        Int::from_parts(sign, vec![mag as u32, (mag >> 32) as u32])
    }
}

impl From<u32> for Int {
    fn from(v: u32) -> Self {
        if v == 0 {
            Int::zero()
        } else {
            Int::from_parts(1, vec![v])
        }
    }
}
