use crate::cursor::BitCursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser, Rule};
use crate::value::Value;

/// Parser combinator that picks the rest of the grammar from a parsed value
///
/// After `parser` succeeds, `continuation` receives its value and returns
/// the rule to run next, or `None` to reject the value. The result is that
/// of the chosen rule.
pub struct AndThen<F> {
    parser: Rule,
    continuation: F,
}

impl<F> AndThen<F> {
    pub fn new(parser: impl Into<Rule>, continuation: F) -> Self {
        AndThen {
            parser: parser.into(),
            continuation,
        }
    }
}

impl<F> Parser for AndThen<F>
where
    F: Fn(&Value) -> Option<Rule> + Send + Sync,
{
    fn parse<'code>(&self, cursor: BitCursor<'code>) -> ParseResult<'code> {
        let (value, next) = self.parser.parse_cursor(cursor)?;
        let value = value.unwrap_or(Value::Unit);

        match (self.continuation)(&value) {
            Some(rule) => rule.parse_cursor(next),
            None => Err(ParseError::unmatched(
                format!("no continuation for {}", value),
                cursor.loc(),
            )),
        }
    }
}

/// Run `parser`, then the rule `continuation` builds from its value
pub fn and_then<F>(parser: impl Into<Rule>, continuation: F) -> Rule
where
    F: Fn(&Value) -> Option<Rule> + Send + Sync + 'static,
{
    Rule::new(AndThen::new(parser, continuation))
}

/// Extension trait to add .and_then() method support for parsers
pub trait AndThenExt: Into<Rule> + Sized {
    fn and_then<F>(self, continuation: F) -> Rule
    where
        F: Fn(&Value) -> Option<Rule> + Send + Sync + 'static,
    {
        and_then(self, continuation)
    }
}

impl<P: Into<Rule>> AndThenExt for P {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::byte::ch_range;
    use crate::many::repeat_n;
    use crate::number::uint8;
    use crate::token::token;

    fn counted_letters() -> Rule {
        uint8().and_then(|count| {
            let count = count.as_u64()?;
            Some(repeat_n(ch_range(b'a', b'z'), count as usize))
        })
    }

    #[test]
    fn test_and_then_uses_value() {
        let rule = counted_letters();

        let (value, cursor) = rule.parse_cursor(BitCursor::new(b"\x02abc")).unwrap();
        assert_eq!(value.unwrap().to_string(), "(u0x61 u0x62)");
        assert_eq!(cursor.byte_offset(), 3);

        assert!(rule.parse_cursor(BitCursor::new(b"\x04abc")).is_err());
    }

    #[test]
    fn test_and_then_rejects() {
        let rule = and_then(uint8(), |tag| match tag.as_u64() {
            Some(1) => Some(token(b"one")),
            Some(2) => Some(token(b"two")),
            _ => None,
        });

        let (value, _) = rule.parse_cursor(BitCursor::new(b"\x02two")).unwrap();
        assert_eq!(value, Some(Value::Bytes(b"two".to_vec())));

        let error = rule.parse_cursor(BitCursor::new(b"\x03two")).unwrap_err();
        assert!(error.to_string().contains("no continuation for u0x3"));
        assert_eq!(error.loc().bit_position(), 0);
    }

    #[test]
    fn test_and_then_first_failure() {
        assert!(counted_letters().parse_cursor(BitCursor::new(b"")).is_err());
    }
}
