use crate::cursor::BitCursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser, Rule};
use crate::value::Value;

/// Reference point for [`seek`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Whence {
    Start,
    Current,
    End,
}

/// Parser that advances a fixed number of bits, producing no value
pub struct Skip {
    count: usize,
}

impl Parser for Skip {
    fn parse<'code>(&self, cursor: BitCursor<'code>) -> ParseResult<'code> {
        Ok((None, cursor.skip_bits(self.count)?))
    }
}

/// Parser that yields the current position in bits
pub struct Tell;

impl Parser for Tell {
    fn parse<'code>(&self, cursor: BitCursor<'code>) -> ParseResult<'code> {
        Ok((Some(Value::UnsignedInt(cursor.bit_position() as u64)), cursor))
    }
}

/// Parser that moves the cursor to a bit position relative to a [`Whence`]
///
/// Yields the new absolute position in bits. Fails if the target lies
/// before the start or past the end of the input.
pub struct Seek {
    offset: i64,
    whence: Whence,
}

impl Parser for Seek {
    fn parse<'code>(&self, cursor: BitCursor<'code>) -> ParseResult<'code> {
        let base = match self.whence {
            Whence::Start => 0,
            Whence::Current => cursor.bit_position(),
            Whence::End => cursor.source().len() * 8,
        };

        let target = if self.offset < 0 {
            base.checked_sub(self.offset.unsigned_abs() as usize)
        } else {
            base.checked_add(self.offset as usize)
        };
        let Some(target) = target else {
            return Err(ParseError::unmatched(
                format!(
                    "seek by {} bits from {:?} leaves the input",
                    self.offset, self.whence
                ),
                cursor.loc(),
            ));
        };

        let next = cursor.seek_bits(target)?;
        Ok((Some(Value::UnsignedInt(target as u64)), next))
    }
}

/// Skip `count` bits without producing a value
pub fn skip(count: usize) -> Rule {
    Rule::new(Skip { count })
}

/// Yield the current position in bits
pub fn tell() -> Rule {
    Rule::new(Tell)
}

/// Move to `offset` bits from `whence`, yielding the new position
pub fn seek(offset: i64, whence: Whence) -> Rule {
    Rule::new(Seek { offset, whence })
}
