//! Conversions between `Int` and its three textual forms.
//!
//! Decimal is sign/magnitude text; hexadecimal and binary are two's-complement
//! text. The distinction matters only here — `Int`'s in-memory representation
//! is always sign-magnitude.

use crate::error::Error;
use crate::int::Int;
use crate::ops;
use std::str::FromStr;

/// Parses a literal dispatching on an optional sign and a `0x`/`0b` prefix.
pub fn from_str(s: &str) -> Result<Int, Error> {
    let s = s.trim();
    let (neg, rest) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => match s.strip_prefix('+') {
            Some(rest) => (false, rest),
            None => (false, s),
        },
    };
    let rest = rest.trim();

    let mut value = if let Some(hex) = rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X"))
    {
        from_hex(hex)?
    } else if let Some(bin) = rest.strip_prefix("0b").or_else(|| rest.strip_prefix("0B")) {
        from_binary(bin)?
    } else {
        from_decimal(rest)?
    };

    if neg && !value.is_zero() {
        value.sign = -value.sign;
    }
    Ok(value)
}

impl FromStr for Int {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        from_str(s)
    }
}

/// Horner-evaluates an unsigned decimal digit string.
pub fn from_decimal(s: &str) -> Result<Int, Error> {
    if s.is_empty() {
        return Err(Error::SyntaxError);
    }
    let mut acc = Int::zero();
    let ten = Int::from(10i64);
    for c in s.chars() {
        let digit = c.to_digit(10).ok_or(Error::SyntaxError)?;
        acc = ops::mul(&acc, &ten);
        acc = ops::add(&acc, &Int::from(digit));
    }
    Ok(acc)
}

/// Parses a two's-complement hexadecimal digit string (no `0x` prefix).
pub fn from_hex(s: &str) -> Result<Int, Error> {
    if s.is_empty() {
        return Err(Error::SyntaxError);
    }
    if !s.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(Error::SyntaxError);
    }

    let n_nibbles = s.len();
    let n_limbs = n_nibbles.div_ceil(8);
    let mut limbs = vec![0u32; n_limbs];

    for (i, c) in s.chars().rev().enumerate() {
        let nibble = c.to_digit(16).ok_or(Error::SyntaxError)?;
        let limb_idx = i / 8;
        let shift = (i % 8) * 4;
        limbs[limb_idx] |= nibble << shift;
    }

    let first = s.chars().next().unwrap().to_digit(16).unwrap();
    let mut value = Int::from_parts(1, limbs);

    if first >= 8 {
        let total_bits = n_nibbles * 4;
        let bits_used = total_bits % 32;
        let bits_used = if bits_used == 0 { 32 } else { bits_used };
        let top = value.limbs.len() - 1;
        let mask = if bits_used >= 32 {
            u32::MAX
        } else {
            u32::MAX << bits_used
        };
        value.limbs[top] |= mask;
        value = two_complement_negate(&value);
    }

    Ok(value)
}

/// Parses a two's-complement binary digit string (no `0b` prefix).
pub fn from_binary(s: &str) -> Result<Int, Error> {
    if s.is_empty() {
        return Err(Error::SyntaxError);
    }
    if !s.chars().all(|c| c == '0' || c == '1') {
        return Err(Error::SyntaxError);
    }

    let n_bits = s.len();
    let n_limbs = n_bits.div_ceil(32);
    let mut limbs = vec![0u32; n_limbs];

    for (i, c) in s.chars().rev().enumerate() {
        if c == '1' {
            limbs[i / 32] |= 1 << (i % 32);
        }
    }

    let negative = s.starts_with('1');
    let mut value = Int::from_parts(1, limbs);

    if negative {
        for k in n_bits..(n_limbs * 32) {
            value.limbs[k / 32] |= 1 << (k % 32);
        }
        value = two_complement_negate(&value);
    }

    Ok(value)
}

/// Bit-inverts `|value|`'s limbs and adds one, yielding a negative `Int`
/// whose magnitude is the two's-complement image of the input magnitude.
fn two_complement_negate(value: &Int) -> Int {
    let mut limbs: Vec<u32> = value.limbs.iter().map(|l| !l).collect();
    let mut carry = 1u32;
    for limb in limbs.iter_mut() {
        let (sum, c) = limb.overflowing_add(carry);
        *limb = sum;
        carry = c as u32;
        if carry == 0 {
            break;
        }
    }
    if carry != 0 {
        limbs.push(carry);
    }
    let mut result = Int::from_parts(-1, limbs);
    if result.is_zero() {
        result.sign = 0;
    } else {
        result.sign = -1;
    }
    result
}

/// Decimal rendering: sign/magnitude text, `"0"` for zero.
pub fn to_decimal(n: &Int) -> String {
    if n.is_zero() {
        return "0".to_string();
    }
    let mut limbs = n.limbs.clone();
    let mut digits = Vec::new();
    while !(limbs.len() == 1 && limbs[0] == 0) {
        let mut rem: u64 = 0;
        for limb in limbs.iter_mut().rev() {
            let cur = (rem << 32) | (*limb as u64);
            *limb = (cur / 10) as u32;
            rem = cur % 10;
        }
        digits.push(std::char::from_digit(rem as u32, 10).unwrap());
        while limbs.len() > 1 && *limbs.last().unwrap() == 0 {
            limbs.pop();
        }
    }
    let mut s = String::with_capacity(digits.len() + 1);
    if n.sign < 0 {
        s.push('-');
    }
    s.extend(digits.iter().rev());
    s
}

/// Minimal-width two's-complement hexadecimal rendering, with `0x` prefix.
pub fn to_hex(n: &Int) -> String {
    if n.is_zero() {
        return "0x0".to_string();
    }

    let magnitude_limbs = if n.sign < 0 {
        two_complement_magnitude(n)
    } else {
        n.limbs.clone()
    };

    let mut raw = String::with_capacity(magnitude_limbs.len() * 8);
    for limb in magnitude_limbs.iter().rev() {
        raw.push_str(&format!("{:08x}", limb));
    }

    let body = if n.sign > 0 {
        let trimmed = raw.trim_start_matches('0');
        let trimmed = if trimmed.is_empty() { "0" } else { trimmed };
        let first = trimmed.chars().next().unwrap();
        if first.is_ascii_hexdigit() && first.to_digit(16).unwrap() >= 8 {
            format!("0{}", trimmed)
        } else {
            trimmed.to_string()
        }
    } else {
        let bytes: Vec<char> = raw.chars().collect();
        let mut start = 0;
        while start + 1 < bytes.len() && bytes[start] == 'f' && {
            let next = bytes[start + 1].to_digit(16).unwrap();
            next >= 8
        } {
            start += 1;
        }
        bytes[start..].iter().collect()
    };

    format!("0x{}", body)
}

/// Minimal-width two's-complement binary rendering, with `0b` prefix.
pub fn to_bin(n: &Int) -> String {
    if n.is_zero() {
        return "0b0".to_string();
    }

    let magnitude_limbs = if n.sign < 0 {
        two_complement_magnitude(n)
    } else {
        n.limbs.clone()
    };
    let total_bits = magnitude_limbs.len() * 32;

    let mut bits = String::with_capacity(total_bits + 1);
    bits.push(if n.sign < 0 { '1' } else { '0' });
    for i in (0..total_bits).rev() {
        let limb = magnitude_limbs[i / 32];
        let bit = (limb >> (i % 32)) & 1;
        bits.push(if bit == 1 { '1' } else { '0' });
    }

    let want = if n.sign < 0 { '1' } else { '0' };
    let chars: Vec<char> = bits.chars().collect();
    let mut start = 0;
    while start + 2 < chars.len() && chars[start] == want && chars[start + 1] == want {
        start += 1;
    }
    let body: String = chars[start..].iter().collect();
    format!("0b{}", body)
}

/// For a negative `Int`, returns the two's-complement bit pattern of its
/// magnitude (invert-and-add-one), used by the hex/binary renderers.
fn two_complement_magnitude(n: &Int) -> Vec<u32> {
    let mut limbs: Vec<u32> = n.limbs.iter().map(|l| !l).collect();
    let mut carry = 1u32;
    for limb in limbs.iter_mut() {
        let (sum, c) = limb.overflowing_add(carry);
        *limb = sum;
        carry = c as u32;
        if carry == 0 {
            break;
        }
    }
    limbs
}
