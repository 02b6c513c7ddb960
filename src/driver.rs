use crate::cursor::{BitCursor, Endianness};
use crate::error::ParseError;
use crate::parser::Rule;
use crate::value::Value;

/// Run `rule` over `input` with the default big-endian configuration
///
/// Returns the value on success and `None` on failure. Input left over
/// after a successful match is not an error; end a grammar with
/// [`crate::end_p`] to require full consumption. A root whose value is
/// elided yields [`Value::Unit`].
pub fn parse(rule: &Rule, input: &[u8]) -> Option<Value> {
    try_parse(rule, input).ok()
}

/// Like [`parse`], starting from the given bit and byte order
pub fn parse_with(rule: &Rule, input: &[u8], endianness: Endianness) -> Option<Value> {
    run(rule, BitCursor::with_endianness(input, endianness)).ok()
}

/// Like [`parse`], but report why the input was rejected
pub fn try_parse<'code>(rule: &Rule, input: &'code [u8]) -> Result<Value, ParseError<'code>> {
    run(rule, BitCursor::new(input))
}

fn run<'code>(rule: &Rule, cursor: BitCursor<'code>) -> Result<Value, ParseError<'code>> {
    match rule.parse_cursor(cursor) {
        Ok((value, end)) => {
            log::debug!(
                "parse succeeded, consumed {} of {} bits",
                end.bit_position(),
                cursor.source().len() * 8
            );
            Ok(value.unwrap_or(Value::Unit))
        }
        Err(e) => {
            log::debug!("parse failed: {}", e);
            Err(e)
        }
    }
}
