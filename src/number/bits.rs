use crate::cursor::BitCursor;
use crate::error::GrammarError;
use crate::parser::{ParseResult, Parser, Rule};

/// Parser that decodes an integer of arbitrary bit width
///
/// Bits are read in the cursor's configured bit order and assembled in its
/// byte order, so the same parser decodes big- and little-endian fields
/// depending on the surrounding [`crate::with_endianness`].
pub struct BitsParser {
    len: usize,
    signed: bool,
}

impl BitsParser {
    pub fn new(len: usize, signed: bool) -> Result<Self, GrammarError> {
        if len > 64 {
            return Err(GrammarError::InvalidBitWidth(len));
        }
        Ok(BitsParser { len, signed })
    }
}

impl Parser for BitsParser {
    fn parse<'code>(&self, cursor: BitCursor<'code>) -> ParseResult<'code> {
        let (value, cursor) = cursor.read_bits(self.len, self.signed)?;
        Ok((Some(value), cursor))
    }
}

/// Integer of `len` bits, sign-extended when `signed`
///
/// # Panics
///
/// If `len` is greater than 64.
pub fn bits(len: usize, signed: bool) -> Rule {
    match BitsParser::new(len, signed) {
        Ok(parser) => Rule::new(parser),
        Err(e) => panic!("{}", e),
    }
}
