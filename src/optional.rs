use crate::cursor::BitCursor;
use crate::parser::{ParseResult, Parser, Rule};
use crate::value::Value;

/// Parser combinator that optionally matches the given parser
///
/// Yields the parser's value when it matches. Otherwise yields
/// [`Value::Absent`] and leaves the cursor untouched, so it never fails.
pub struct Optional {
    parser: Rule,
}

impl Optional {
    pub fn new(parser: impl Into<Rule>) -> Self {
        Optional {
            parser: parser.into(),
        }
    }
}

impl Parser for Optional {
    fn parse<'code>(&self, cursor: BitCursor<'code>) -> ParseResult<'code> {
        match self.parser.parse_cursor(cursor) {
            Ok(result) => Ok(result),
            Err(_) => Ok((Some(Value::Absent), cursor)),
        }
    }
}

/// Match `parser` if possible, yielding `Absent` otherwise
pub fn optional(parser: impl Into<Rule>) -> Rule {
    Rule::new(Optional::new(parser))
}

/// Extension trait to add .optional() method support for parsers
pub trait OptionalExt: Into<Rule> + Sized {
    fn optional(self) -> Rule {
        optional(self)
    }
}

impl<P: Into<Rule>> OptionalExt for P {}
