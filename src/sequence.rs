use crate::cursor::BitCursor;
use crate::parser::{ParseResult, Parser, Rule};
use crate::value::Value;

/// Parser combinator that runs parsers one after another and collects
/// their values into a `Sequence`
///
/// Each parser starts where the previous one stopped. If any of them fails
/// the whole sequence fails and the caller keeps its original cursor.
/// Values elided by [`crate::ignore`] take no slot in the result.
pub struct Sequence {
    parsers: Vec<Rule>,
}

impl Sequence {
    pub fn new(parsers: Vec<Rule>) -> Self {
        Sequence { parsers }
    }
}

impl Parser for Sequence {
    fn parse<'code>(&self, cursor: BitCursor<'code>) -> ParseResult<'code> {
        let mut values = Vec::with_capacity(self.parsers.len());
        let mut cursor = cursor;

        for parser in &self.parsers {
            let (value, next) = parser.parse_cursor(cursor)?;
            values.extend(value);
            cursor = next;
        }

        Ok((Some(Value::Sequence(values)), cursor))
    }
}

/// Match every parser in order
pub fn sequence<I>(parsers: I) -> Rule
where
    I: IntoIterator,
    I::Item: Into<Rule>,
{
    Rule::new(Sequence::new(parsers.into_iter().map(Into::into).collect()))
}

/// Extension trait to add `.then()` method support for parsers
///
/// Note: chaining `.then()` nests, so `a.then(b).then(c)` yields
/// `((a, b), c)`. Use [`sequence`] for a flat result.
pub trait SequenceExt: Into<Rule> + Sized {
    fn then(self, next: impl Into<Rule>) -> Rule {
        sequence([self.into(), next.into()])
    }
}

impl<P: Into<Rule>> SequenceExt for P {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::byte::ch;
    use crate::epsilon::{end_p, epsilon_p};
    use crate::ignore::ignore;
    use crate::whitespace::whitespace;

    fn chars(s: &[u8]) -> Value {
        Value::Sequence(s.iter().map(|&c| Value::Char(c)).collect())
    }

    #[test]
    fn test_sequence_all_succeed() {
        let data = b"ab";
        let rule = sequence([ch(b'a'), ch(b'b')]);

        let (value, cursor) = rule.parse_cursor(BitCursor::new(data)).unwrap();
        assert_eq!(value, Some(chars(b"ab")));
        assert!(cursor.at_end());
    }

    #[test]
    fn test_sequence_first_fails() {
        let data = b"b";
        assert!(sequence([ch(b'a'), ch(b'b')]).parse_cursor(BitCursor::new(data)).is_err());
    }

    #[test]
    fn test_sequence_second_fails() {
        let data = b"a";
        assert!(sequence([ch(b'a'), ch(b'b')]).parse_cursor(BitCursor::new(data)).is_err());
    }

    #[test]
    fn test_sequence_with_whitespace() {
        let rule = sequence([ch(b'a'), whitespace(ch(b'b'))]);

        for input in [&b"ab"[..], b"a b", b"a  b"] {
            let (value, _) = rule.parse_cursor(BitCursor::new(input)).unwrap();
            assert_eq!(value, Some(chars(b"ab")));
        }
        assert!(rule.parse_cursor(BitCursor::new(b"a  c")).is_err());
    }

    #[test]
    fn test_empty_sequence() {
        let data = b"";
        let rule = sequence(Vec::<Rule>::new());

        let (value, _) = rule.parse_cursor(BitCursor::new(data)).unwrap();
        assert_eq!(value, Some(Value::Sequence(vec![])));
    }

    #[test]
    fn test_sequence_elides_ignored() {
        let data = b"abc";
        let rule = sequence([ch(b'a'), ignore(ch(b'b')), ch(b'c')]);

        let (value, _) = rule.parse_cursor(BitCursor::new(data)).unwrap();
        assert_eq!(value, Some(chars(b"ac")));
    }

    #[test]
    fn test_sequence_keeps_unit_slots() {
        let data = b"a";
        let rule = sequence([epsilon_p(), ch(b'a'), end_p()]);

        let (value, _) = rule.parse_cursor(BitCursor::new(data)).unwrap();
        assert_eq!(
            value,
            Some(Value::Sequence(vec![Value::Unit, Value::Char(b'a'), Value::Unit]))
        );
    }

    #[test]
    fn test_then_nests() {
        let data = b"A5B";
        let rule = ch(b'A').then(ch(b'5')).then(ch(b'B'));

        let (value, cursor) = rule.parse_cursor(BitCursor::new(data)).unwrap();
        assert_eq!(
            value,
            Some(Value::Sequence(vec![chars(b"A5"), Value::Char(b'B')]))
        );
        assert!(cursor.at_end());
    }
}
