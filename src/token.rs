use crate::cursor::BitCursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser, Rule};
use crate::value::Value;

/// Parser that matches an exact multi-byte literal
pub struct TokenParser {
    expected: Vec<u8>,
}

impl TokenParser {
    pub fn new(expected: impl Into<Vec<u8>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl Parser for TokenParser {
    fn parse<'code>(&self, cursor: BitCursor<'code>) -> ParseResult<'code> {
        let mut current = cursor;

        for (i, &expected) in self.expected.iter().enumerate() {
            let (byte, next) = current.read_byte()?;
            if byte != expected {
                return Err(ParseError::syntax(
                    format!(
                        "expected 0x{:02X}, found 0x{:02X} at index {} of {:?}",
                        expected,
                        byte,
                        i,
                        String::from_utf8_lossy(&self.expected)
                    ),
                    current.loc(),
                ));
            }
            current = next;
        }

        Ok((Some(Value::Bytes(self.expected.clone())), current))
    }
}

/// Parser that takes a fixed number of raw bytes, whatever they are
pub struct BytesParser {
    len: usize,
}

impl BytesParser {
    pub fn new(len: usize) -> Self {
        BytesParser { len }
    }
}

impl Parser for BytesParser {
    fn parse<'code>(&self, cursor: BitCursor<'code>) -> ParseResult<'code> {
        let (bytes, cursor) = cursor.read_bytes(self.len)?;
        Ok((Some(Value::Bytes(bytes)), cursor))
    }
}

/// Match the literal byte string `expected`
pub fn token(expected: impl AsRef<[u8]>) -> Rule {
    Rule::new(TokenParser::new(expected.as_ref()))
}

/// Take the next `len` bytes as they are
pub fn bytes(len: usize) -> Rule {
    Rule::new(BytesParser::new(len))
}
