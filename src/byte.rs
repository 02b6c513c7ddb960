use crate::cursor::BitCursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser, Rule};
use crate::value::Value;

fn printable(byte: u8) -> char {
    if byte.is_ascii_graphic() || byte == b' ' {
        byte as char
    } else {
        '.'
    }
}

/// Parser that matches a specific byte
pub struct ChParser {
    expected: u8,
}

impl ChParser {
    pub fn new(expected: u8) -> Self {
        ChParser { expected }
    }
}

impl Parser for ChParser {
    fn parse<'code>(&self, cursor: BitCursor<'code>) -> ParseResult<'code> {
        let (byte, next) = cursor.read_byte()?;
        if byte == self.expected {
            Ok((Some(Value::Char(byte)), next))
        } else {
            Err(ParseError::syntax(
                format!(
                    "expected byte 0x{:02X} ('{}'), found 0x{:02X} ('{}')",
                    self.expected,
                    printable(self.expected),
                    byte,
                    printable(byte)
                ),
                cursor.loc(),
            ))
        }
    }
}

/// Parser that matches a byte within a range (inclusive)
pub struct ChRangeParser {
    lower: u8,
    upper: u8,
}

impl ChRangeParser {
    pub fn new(lower: u8, upper: u8) -> Self {
        ChRangeParser { lower, upper }
    }
}

impl Parser for ChRangeParser {
    fn parse<'code>(&self, cursor: BitCursor<'code>) -> ParseResult<'code> {
        let (byte, next) = cursor.read_byte()?;
        if (self.lower..=self.upper).contains(&byte) {
            Ok((Some(Value::Char(byte)), next))
        } else {
            Err(ParseError::syntax(
                format!(
                    "expected byte in range 0x{:02X}-0x{:02X} ('{}'-'{}'), found 0x{:02X} ('{}')",
                    self.lower,
                    self.upper,
                    printable(self.lower),
                    printable(self.upper),
                    byte,
                    printable(byte)
                ),
                cursor.loc(),
            ))
        }
    }
}

/// A set of bytes stored as a 256-bit map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Charset([u64; 4]);

impl Charset {
    pub fn new() -> Self {
        Charset::default()
    }

    pub fn insert(&mut self, byte: u8) {
        self.0[(byte >> 6) as usize] |= 1 << (byte & 63);
    }

    pub fn contains(&self, byte: u8) -> bool {
        self.0[(byte >> 6) as usize] & (1 << (byte & 63)) != 0
    }

    pub fn complement(self) -> Self {
        let [a, b, c, d] = self.0;
        Charset([!a, !b, !c, !d])
    }
}

impl FromIterator<u8> for Charset {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Charset::new();
        for byte in iter {
            set.insert(byte);
        }
        set
    }
}

/// Parser that matches any byte belonging to a [`Charset`]
pub struct CharsetParser {
    set: Charset,
}

impl CharsetParser {
    pub fn new(set: Charset) -> Self {
        CharsetParser { set }
    }
}

impl Parser for CharsetParser {
    fn parse<'code>(&self, cursor: BitCursor<'code>) -> ParseResult<'code> {
        let (byte, next) = cursor.read_byte()?;
        if self.set.contains(byte) {
            Ok((Some(Value::Char(byte)), next))
        } else {
            Err(ParseError::syntax(
                format!("byte 0x{:02X} ('{}') not in set", byte, printable(byte)),
                cursor.loc(),
            ))
        }
    }
}

/// Match exactly the byte `c`
pub fn ch(c: u8) -> Rule {
    Rule::new(ChParser::new(c))
}

/// Match any byte in `lower..=upper`
pub fn ch_range(lower: u8, upper: u8) -> Rule {
    Rule::new(ChRangeParser::new(lower, upper))
}

/// Match any byte contained in `set`
pub fn in_(set: impl AsRef<[u8]>) -> Rule {
    Rule::new(CharsetParser::new(set.as_ref().iter().copied().collect()))
}

/// Match any byte not contained in `set`
pub fn not_in(set: impl AsRef<[u8]>) -> Rule {
    let set: Charset = set.as_ref().iter().copied().collect();
    Rule::new(CharsetParser::new(set.complement()))
}
