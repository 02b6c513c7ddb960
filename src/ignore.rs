use crate::cursor::BitCursor;
use crate::parser::{ParseResult, Parser, Rule};

/// Parser combinator that matches like its child but elides the value
///
/// Enclosing sequences and repetitions leave no slot for it.
pub struct Ignore {
    parser: Rule,
}

impl Ignore {
    pub fn new(parser: impl Into<Rule>) -> Self {
        Ignore {
            parser: parser.into(),
        }
    }
}

impl Parser for Ignore {
    fn parse<'code>(&self, cursor: BitCursor<'code>) -> ParseResult<'code> {
        let (_, cursor) = self.parser.parse_cursor(cursor)?;
        Ok((None, cursor))
    }
}

/// Match `parser` and drop its value
pub fn ignore(parser: impl Into<Rule>) -> Rule {
    Rule::new(Ignore::new(parser))
}
