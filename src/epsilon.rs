use crate::cursor::BitCursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser, Rule};
use crate::value::Value;

/// Parser that always succeeds without consuming input
pub struct EpsilonParser;

impl Parser for EpsilonParser {
    fn parse<'code>(&self, cursor: BitCursor<'code>) -> ParseResult<'code> {
        Ok((Some(Value::Unit), cursor))
    }
}

/// Parser that never succeeds
pub struct NothingParser;

impl Parser for NothingParser {
    fn parse<'code>(&self, cursor: BitCursor<'code>) -> ParseResult<'code> {
        Err(ParseError::unmatched("nothing_p never matches", cursor.loc()))
    }
}

/// Parser that succeeds only at the end of input
pub struct EndParser;

impl Parser for EndParser {
    fn parse<'code>(&self, cursor: BitCursor<'code>) -> ParseResult<'code> {
        if cursor.at_end() {
            Ok((Some(Value::Unit), cursor))
        } else {
            Err(ParseError::syntax(
                format!("expected end of input, {} bits remain", cursor.remaining_bits()),
                cursor.loc(),
            ))
        }
    }
}

/// Match the empty string, yielding `Unit`
pub fn epsilon_p() -> Rule {
    Rule::new(EpsilonParser)
}

/// Always fail
pub fn nothing_p() -> Rule {
    Rule::new(NothingParser)
}

/// Match only at the end of input, yielding `Unit`
pub fn end_p() -> Rule {
    Rule::new(EndParser)
}
