use crate::cursor::{BitCursor, Endianness};
use crate::parser::{ParseResult, Parser, Rule};

/// Parser combinator that runs its child under a different bit and byte order
///
/// The surrounding order is restored on the cursor that comes back, so the
/// setting never leaks past the wrapped parser.
pub struct WithEndianness {
    endianness: Endianness,
    parser: Rule,
}

impl WithEndianness {
    pub fn new(endianness: Endianness, parser: impl Into<Rule>) -> Self {
        WithEndianness {
            endianness,
            parser: parser.into(),
        }
    }
}

impl Parser for WithEndianness {
    fn parse<'code>(&self, cursor: BitCursor<'code>) -> ParseResult<'code> {
        let outer = cursor.endianness();
        let (value, next) = self
            .parser
            .parse_cursor(cursor.set_endianness(self.endianness))?;
        Ok((value, next.set_endianness(outer)))
    }
}

/// Run `parser` with `endianness` in effect
pub fn with_endianness(endianness: Endianness, parser: impl Into<Rule>) -> Rule {
    Rule::new(WithEndianness::new(endianness, parser))
}
