use crate::cursor::BitCursor;
use crate::parser::{ParseResult, Parser, Rule};

fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\x0B' | b'\x0C' | b'\r')
}

/// Parser combinator that skips leading whitespace before running its child
///
/// Whitespace is space, tab, newline, vertical tab, form feed and carriage
/// return. Only leading whitespace is skipped; nothing after the child is.
pub struct Whitespace {
    parser: Rule,
}

impl Whitespace {
    pub fn new(parser: impl Into<Rule>) -> Self {
        Whitespace {
            parser: parser.into(),
        }
    }
}

impl Parser for Whitespace {
    fn parse<'code>(&self, cursor: BitCursor<'code>) -> ParseResult<'code> {
        let mut cursor = cursor;
        while let Ok((byte, next)) = cursor.read_byte() {
            if !is_space(byte) {
                break;
            }
            cursor = next;
        }
        self.parser.parse_cursor(cursor)
    }
}

/// Skip whitespace, then match `parser`
pub fn whitespace(parser: impl Into<Rule>) -> Rule {
    Rule::new(Whitespace::new(parser))
}
