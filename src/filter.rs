use crate::cursor::BitCursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser, Rule};
use crate::value::Value;

/// Parser that gates the output of another parser on a predicate
///
/// The value passes through unchanged when the predicate holds. Otherwise
/// the parse fails at the position where the wrapped parser started.
pub struct AttrBool<F> {
    parser: Rule,
    predicate: F,
}

impl<F> AttrBool<F> {
    pub fn new(parser: impl Into<Rule>, predicate: F) -> Self {
        AttrBool {
            parser: parser.into(),
            predicate,
        }
    }
}

impl<F> Parser for AttrBool<F>
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    fn parse<'code>(&self, cursor: BitCursor<'code>) -> ParseResult<'code> {
        let (value, next) = self.parser.parse_cursor(cursor)?;

        let accepted = match &value {
            Some(v) => (self.predicate)(v),
            None => (self.predicate)(&Value::Unit),
        };
        if accepted {
            Ok((value, next))
        } else {
            Err(ParseError::unmatched(
                format!(
                    "predicate rejected {}",
                    value.as_ref().unwrap_or(&Value::Unit)
                ),
                cursor.loc(),
            ))
        }
    }
}

/// Accept the value of `parser` only when `predicate` holds for it
pub fn attr_bool<F>(parser: impl Into<Rule>, predicate: F) -> Rule
where
    F: Fn(&Value) -> bool + Send + Sync + 'static,
{
    Rule::new(AttrBool::new(parser, predicate))
}

/// Extension trait to add filter method to all parsers
pub trait FilterExt: Into<Rule> + Sized {
    fn filter<F>(self, predicate: F) -> Rule
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        attr_bool(self, predicate)
    }
}

impl<P: Into<Rule>> FilterExt for P {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::byte::{ch, in_};
    use crate::many::many1;
    use crate::number::uint8;
    use crate::sequence::sequence;

    fn all_equal(value: &Value) -> bool {
        match value.as_sequence() {
            Some([first, rest @ ..]) => rest.iter().all(|item| item == first),
            _ => false,
        }
    }

    #[test]
    fn test_attr_bool() {
        let rule = attr_bool(many1(in_(b"ab")), all_equal);

        let (value, _) = rule.parse_cursor(BitCursor::new(b"aa")).unwrap();
        assert_eq!(value.unwrap().to_string(), "(u0x61 u0x61)");

        let (value, _) = rule.parse_cursor(BitCursor::new(b"bb")).unwrap();
        assert_eq!(value.unwrap().to_string(), "(u0x62 u0x62)");

        assert!(rule.parse_cursor(BitCursor::new(b"ab")).is_err());
    }

    #[test]
    fn test_filter_failure_reports_start() {
        let data = b"x\x07";
        let rule = sequence([ch(b'x'), uint8().filter(|v| v.as_u64().is_some_and(|n| n % 2 == 0))]);

        let error = rule.parse_cursor(BitCursor::new(data)).unwrap_err();
        assert!(error.to_string().contains("predicate rejected u0x7"));
        assert_eq!(error.loc().byte_offset(), 1);
    }

    #[test]
    fn test_filter_passes_value_through() {
        let data = b"\x08";
        let (value, cursor) = uint8()
            .filter(|v| v.as_u64().is_some_and(|n| n % 2 == 0))
            .parse_cursor(BitCursor::new(data))
            .unwrap();

        assert_eq!(value, Some(Value::UnsignedInt(8)));
        assert!(cursor.at_end());
    }
}
