use crate::cursor::BitCursor;
use crate::error::GrammarError;
use crate::parser::{ParseResult, Parser, Rule};
use crate::value::Value;

/// Parser combinator for length-prefixed repetition
///
/// Reads a count with `length`, then matches `value` exactly that many
/// times, yielding the values as a `Sequence`.
///
/// # Panics
///
/// Parsing panics with [`GrammarError::NonIntegerLength`] if `length`
/// produces anything other than a non-negative integer.
pub struct LengthValue {
    length: Rule,
    value: Rule,
}

impl LengthValue {
    pub fn new(length: impl Into<Rule>, value: impl Into<Rule>) -> Self {
        LengthValue {
            length: length.into(),
            value: value.into(),
        }
    }
}

impl Parser for LengthValue {
    fn parse<'code>(&self, cursor: BitCursor<'code>) -> ParseResult<'code> {
        let (length, mut cursor) = self.length.parse_cursor(cursor)?;
        let Some(count) = length.as_ref().and_then(Value::as_u64) else {
            panic!("{}", GrammarError::NonIntegerLength);
        };

        let mut values = Vec::new();
        for _ in 0..count {
            let (value, next) = self.value.parse_cursor(cursor)?;
            values.extend(value);
            cursor = next;
        }

        Ok((Some(Value::Sequence(values)), cursor))
    }
}

/// Read a count with `length`, then match `value` that many times
pub fn length_value(length: impl Into<Rule>, value: impl Into<Rule>) -> Rule {
    Rule::new(LengthValue::new(length, value))
}
