use crate::cursor::BitCursor;
use crate::parser::{ParseResult, Parser, Rule};
use crate::value::Value;

/// Parser combinator that transforms the value of a parser using a mapping function
///
/// The function only runs once the wrapped parser has succeeded. An elided
/// value reaches it as [`Value::Unit`].
pub struct Action<F> {
    parser: Rule,
    mapper: F,
}

impl<F> Action<F> {
    pub fn new(parser: impl Into<Rule>, mapper: F) -> Self {
        Action {
            parser: parser.into(),
            mapper,
        }
    }
}

impl<F> Parser for Action<F>
where
    F: Fn(Value) -> Value + Send + Sync,
{
    fn parse<'code>(&self, cursor: BitCursor<'code>) -> ParseResult<'code> {
        let (value, cursor) = self.parser.parse_cursor(cursor)?;
        let mapped = (self.mapper)(value.unwrap_or(Value::Unit));
        Ok((Some(mapped), cursor))
    }
}

/// Apply `mapper` to the value of `parser`
pub fn action<F>(parser: impl Into<Rule>, mapper: F) -> Rule
where
    F: Fn(Value) -> Value + Send + Sync + 'static,
{
    Rule::new(Action::new(parser, mapper))
}

/// Extension trait to add .map() method support for parsers
pub trait ActionExt: Into<Rule> + Sized {
    fn map<F>(self, mapper: F) -> Rule
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        action(self, mapper)
    }
}

impl<P: Into<Rule>> ActionExt for P {}
