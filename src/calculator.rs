//! In-process arithmetic over free text.
//!
//! The math intent forwards the raw prompt here. The text is first
//! sanitized — question filler removed, word operators rewritten to
//! symbols, everything non-arithmetic dropped — then evaluated with a
//! small precedence-aware parser. Output is always a full sentence;
//! malformed input produces an apology sentence, never an error.

use tracing::debug;

use crate::resolver::lookups::Calculator;

/// Filler phrases stripped (in order) before evaluation.
const FILLER_PHRASES: &[&str] = &[
    "what is",
    "what's",
    "calculate",
    "sum of",
    "difference between",
    "how much is",
    "how many is",
    "tell me",
];

/// Word operators rewritten to symbols, applied in order. "x" comes
/// after the spelled-out operators so their letters are already gone.
const WORD_OPERATORS: &[(&str, &str)] = &[
    ("plus", "+"),
    ("minus", "-"),
    ("times", "*"),
    ("x", "*"),
    ("divided by", "/"),
];

/// Errors produced by the expression evaluator.
#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    /// A character that cannot start a number or operator.
    #[error("unexpected character '{0}' in expression")]
    UnexpectedChar(char),
    /// The expression ended where a number was expected.
    #[error("expression ended unexpectedly")]
    UnexpectedEnd,
    /// A number failed to parse (e.g. "1.2.3").
    #[error("malformed number '{0}'")]
    MalformedNumber(String),
}

/// Default [`Calculator`] implementation: sanitize, evaluate, format.
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceCalculator;

impl Calculator for SentenceCalculator {
    fn evaluate(&self, raw_expression: &str) -> String {
        let sanitized = sanitize(raw_expression);

        if !sanitized.chars().any(|c| c.is_ascii_digit()) {
            return "Your question lacks the numbers for a proper calculation.".to_owned();
        }

        let result = match evaluate_expression(&sanitized) {
            Ok(value) => value,
            Err(e) => {
                debug!(expression = %sanitized, error = %e, "calculation failed");
                return "Your mathematical query is poorly formed. State it as a proper sum."
                    .to_owned();
            }
        };

        if result.is_nan() {
            return "Your mathematical query is invalid. State it with clarity.".to_owned();
        }
        if result.is_infinite() {
            return "The result is an absurdity. One cannot divide by zero.".to_owned();
        }

        // Non-exact division reads better as quotient plus remainder.
        if sanitized.contains('/') {
            if let Some(sentence) = remainder_sentence(&sanitized) {
                return sentence;
            }
        }

        format!("The result of '{}' is {}.", sanitized, format_number(result))
    }
}

/// Reduce free text to a bare arithmetic expression.
fn sanitize(raw: &str) -> String {
    let mut text = raw.to_lowercase();
    for phrase in FILLER_PHRASES {
        text = text.replace(phrase, "");
    }
    for (word, symbol) in WORD_OPERATORS {
        text = text.replace(word, symbol);
    }
    text.chars()
        .filter(|c| {
            c.is_ascii_digit() || matches!(c, '+' | '-' | '*' | '/' | '.') || c.is_whitespace()
        })
        .collect::<String>()
        .trim()
        .to_owned()
}

/// Format a result: integers without decimals, otherwise two places.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

/// For a non-exact division, phrase the result as quotient and
/// remainder. Returns `None` when the division is exact or the
/// operands cannot be recovered.
fn remainder_sentence(sanitized: &str) -> Option<String> {
    let (dividend, divisor) = first_division_operands(sanitized)?;
    if divisor == 0.0 || dividend % divisor == 0.0 {
        return None;
    }
    let quotient = (dividend / divisor).trunc();
    let remainder = dividend % divisor;
    Some(format!(
        "The result of '{}' is {} with a remainder of {}.",
        sanitized,
        format_number(quotient),
        format_number(remainder)
    ))
}

/// Recover the operands of the first `/` in the sanitized expression.
fn first_division_operands(sanitized: &str) -> Option<(f64, f64)> {
    let slash = sanitized.find('/')?;
    let left = sanitized.get(..slash)?;
    let right = sanitized.get(slash.saturating_add(1)..)?;

    let dividend: String = left
        .trim_end()
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    let divisor: String = right
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    Some((dividend.parse().ok()?, divisor.parse().ok()?))
}

// ---------------------------------------------------------------------------
// Expression evaluation
// ---------------------------------------------------------------------------

/// Evaluate `+ - * /` with standard precedence and unary minus.
/// Division by zero follows IEEE semantics (±infinity, NaN for 0/0);
/// the caller turns those into sentences.
fn evaluate_expression(expression: &str) -> Result<f64, EvalError> {
    let chars: Vec<char> = expression.chars().collect();
    let mut parser = Parser { chars, pos: 0 };
    let value = parser.expression()?;
    parser.skip_whitespace();
    if parser.pos < parser.chars.len() {
        let c = parser.peek().ok_or(EvalError::UnexpectedEnd)?;
        return Err(EvalError::UnexpectedChar(c));
    }
    Ok(value)
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn advance(&mut self) {
        self.pos = self.pos.saturating_add(1);
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    fn expression(&mut self) -> Result<f64, EvalError> {
        let mut value = self.term()?;
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some('+') => {
                    self.advance();
                    value += self.term()?;
                }
                Some('-') => {
                    self.advance();
                    value -= self.term()?;
                }
                _ => return Ok(value),
            }
        }
    }

    fn term(&mut self) -> Result<f64, EvalError> {
        let mut value = self.factor()?;
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some('*') => {
                    self.advance();
                    value *= self.factor()?;
                }
                Some('/') => {
                    self.advance();
                    value /= self.factor()?;
                }
                _ => return Ok(value),
            }
        }
    }

    fn factor(&mut self) -> Result<f64, EvalError> {
        self.skip_whitespace();
        if self.peek() == Some('-') {
            self.advance();
            return Ok(-self.factor()?);
        }
        self.number()
    }

    fn number(&mut self) -> Result<f64, EvalError> {
        self.skip_whitespace();
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_digit() || c == '.')
        {
            self.advance();
        }
        if self.pos == start {
            return match self.peek() {
                Some(c) => Err(EvalError::UnexpectedChar(c)),
                None => Err(EvalError::UnexpectedEnd),
            };
        }
        let literal: String = self
            .chars
            .get(start..self.pos)
            .map(|s| s.iter().collect())
            .ok_or(EvalError::UnexpectedEnd)?;
        literal
            .parse()
            .map_err(|_| EvalError::MalformedNumber(literal))
    }
}
