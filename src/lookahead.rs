use crate::cursor::BitCursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser, Rule};
use crate::value::Value;

/// Parser combinator that performs positive lookahead
///
/// Succeeds with `Unit` if the given parser would succeed at the current
/// position. Never consumes any input regardless of outcome.
pub struct And {
    parser: Rule,
}

impl And {
    pub fn new(parser: impl Into<Rule>) -> Self {
        And {
            parser: parser.into(),
        }
    }
}

impl Parser for And {
    fn parse<'code>(&self, cursor: BitCursor<'code>) -> ParseResult<'code> {
        self.parser.parse_cursor(cursor)?;
        Ok((Some(Value::Unit), cursor))
    }
}

/// Parser combinator that performs negative lookahead
///
/// Succeeds with `Unit` if the given parser fails at the current position.
/// Fails if the given parser succeeds.
/// Never consumes any input regardless of outcome.
pub struct Not {
    parser: Rule,
}

impl Not {
    pub fn new(parser: impl Into<Rule>) -> Self {
        Not {
            parser: parser.into(),
        }
    }
}

impl Parser for Not {
    fn parse<'code>(&self, cursor: BitCursor<'code>) -> ParseResult<'code> {
        match self.parser.parse_cursor(cursor) {
            Ok(_) => Err(ParseError::unmatched(
                "negative lookahead failed: unexpected match",
                cursor.loc(),
            )),
            Err(_) => Ok((Some(Value::Unit), cursor)),
        }
    }
}

/// Succeed without consuming if `parser` would match here
pub fn and_(parser: impl Into<Rule>) -> Rule {
    Rule::new(And::new(parser))
}

/// Succeed without consuming if `parser` would not match here
pub fn not_(parser: impl Into<Rule>) -> Rule {
    Rule::new(Not::new(parser))
}
