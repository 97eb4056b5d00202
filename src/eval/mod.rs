//! Two-pass expression evaluation: syntax validation, then shunting-yard
//! conversion to postfix with immediate application against the big-integer
//! engine.

mod op;
mod validator;

use crate::error::Error;
use crate::int::Int;
use crate::ops;
use crate::text;
use op::Op;
use tracing::{debug, trace};

/// Validates and evaluates a single expression, returning its value.
pub fn eval_expression(input: &str) -> Result<Int, Error> {
    debug!(expr = input, "evaluating expression");

    if !validator::validate(input) {
        return Err(Error::SyntaxError);
    }

    let chars: Vec<char> = input.chars().collect();
    let n = chars.len();
    let mut i = 0usize;

    let mut operands: Vec<Int> = Vec::new();
    let mut operators: Vec<Op> = Vec::new();
    let mut can_be_sign = true;

    while i < n {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        if c.is_ascii_digit() {
            let start = i;
            while i < n
                && (chars[i].is_ascii_hexdigit()
                    || chars[i] == 'x'
                    || chars[i] == 'X'
                    || chars[i] == 'b'
                    || chars[i] == 'B')
            {
                i += 1;
            }
            let literal: String = chars[start..i].iter().collect();
            trace!(literal, "parsed literal");
            let value = text::from_str(&literal)?;
            operands.push(value);
            can_be_sign = false;
            continue;
        }

        if c == '(' {
            operators.push(Op::LParen);
            i += 1;
            can_be_sign = true;
            continue;
        }

        if c == ')' {
            while let Some(&top) = operators.last() {
                if top == Op::LParen {
                    break;
                }
                operators.pop();
                apply(&mut operands, top)?;
            }
            operators.pop();
            i += 1;
            can_be_sign = false;
            continue;
        }

        if matches!(c, '+' | '-' | '*' | '/' | '%' | '^' | '!') {
            let mut curr = match c {
                '+' => Op::Add,
                '-' => Op::Sub,
                '*' => Op::Mul,
                '/' => Op::Div,
                '%' => Op::Rem,
                '^' => Op::Pow,
                '!' => Op::Fact,
                _ => unreachable!(),
            };

            if can_be_sign {
                match c {
                    '-' => curr = Op::Neg,
                    '+' => {
                        i += 1;
                        continue;
                    }
                    _ => return Err(Error::SyntaxError),
                }
            }

            while let Some(&top) = operators.last() {
                if top == Op::LParen {
                    break;
                }
                if top.precedence() < curr.precedence() {
                    break;
                }
                if curr.is_right_associative() && top.precedence() == curr.precedence() {
                    break;
                }
                operators.pop();
                apply(&mut operands, top)?;
            }

            operators.push(curr);
            i += 1;
            can_be_sign = curr != Op::Fact;
            continue;
        }

        i += 1;
    }

    while let Some(top) = operators.pop() {
        apply(&mut operands, top)?;
    }

    operands.pop().ok_or(Error::SyntaxError)
}

fn apply(operands: &mut Vec<Int>, op: Op) -> Result<(), Error> {
    let right = operands.pop().ok_or(Error::SyntaxError)?;

    match op {
        Op::Fact => {
            if right.sign() < 0 {
                return Err(Error::NegativeFactorial);
            }
            if right.limbs_len() > 1 {
                return Err(Error::FactorialTooLarge);
            }
            operands.push(ops::fact(right.limb0()));
        }
        Op::Neg => {
            operands.push(ops::negate(&right));
        }
        _ => {
            let left = operands.pop().ok_or(Error::SyntaxError)?;
            let result = match op {
                Op::Add => ops::add(&left, &right),
                Op::Sub => ops::sub(&left, &right),
                Op::Mul => ops::mul(&left, &right),
                Op::Div => ops::div(&left, &right)?,
                Op::Rem => ops::rem(&left, &right)?,
                Op::Pow => ops::pow(&left, &right),
                Op::Fact | Op::Neg | Op::LParen => unreachable!(),
            };
            operands.push(result);
        }
    }
    Ok(())
}
