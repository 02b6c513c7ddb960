use crate::cursor::BitCursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser, Rule};

/// Parser combinator that tries each alternative in order from the same
/// starting position and returns the first success
///
/// This is ordered choice: an earlier alternative that matches wins even if
/// a later one would match more input. When every alternative fails, the
/// error of the one that got furthest is reported.
pub struct Choice {
    alternatives: Vec<Rule>,
}

impl Choice {
    pub fn new(alternatives: Vec<Rule>) -> Self {
        Choice { alternatives }
    }
}

impl Parser for Choice {
    fn parse<'code>(&self, cursor: BitCursor<'code>) -> ParseResult<'code> {
        let mut furthest: Option<ParseError<'code>> = None;

        for (i, alternative) in self.alternatives.iter().enumerate() {
            match alternative.parse_cursor(cursor) {
                Ok(result) => return Ok(result),
                Err(e) => {
                    log::trace!(
                        "choice alternative {} failed at bit {}: {}",
                        i,
                        cursor.bit_position(),
                        e
                    );
                    furthest = Some(match furthest {
                        Some(previous) => previous.furthest(e),
                        None => e,
                    });
                }
            }
        }

        Err(furthest
            .unwrap_or_else(|| ParseError::unmatched("choice has no alternatives", cursor.loc())))
    }
}

/// Try each alternative in order, returning the first that matches
pub fn choice<I>(alternatives: I) -> Rule
where
    I: IntoIterator,
    I::Item: Into<Rule>,
{
    Rule::new(Choice::new(alternatives.into_iter().map(Into::into).collect()))
}

/// Extension trait to add .or() method support for parsers
pub trait ChoiceExt: Into<Rule> + Sized {
    fn or(self, other: impl Into<Rule>) -> Rule {
        choice([self.into(), other.into()])
    }
}

impl<P: Into<Rule>> ChoiceExt for P {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::byte::ch;
    use crate::sequence::sequence;
    use crate::token::token;
    use crate::value::Value;

    #[test]
    fn test_choice_first_succeeds() {
        let data = b"abc";
        let (value, cursor) = choice([ch(b'a'), ch(b'b')])
            .parse_cursor(BitCursor::new(data))
            .unwrap();

        assert_eq!(value, Some(Value::Char(b'a')));
        assert_eq!(cursor.byte_offset(), 1);
    }

    #[test]
    fn test_choice_second_succeeds() {
        let data = b"bcd";
        let (value, _) = choice([ch(b'a'), ch(b'b')])
            .parse_cursor(BitCursor::new(data))
            .unwrap();

        assert_eq!(value, Some(Value::Char(b'b')));
    }

    #[test]
    fn test_choice_all_fail() {
        let data = b"xyz";
        assert!(choice([ch(b'a'), ch(b'b')]).parse_cursor(BitCursor::new(data)).is_err());
    }

    #[test]
    fn test_choice_alternatives_restart_from_origin() {
        // The first alternative consumes 'a' before failing; the second must
        // still see the 'a'
        let data = b"ac";
        let rule = choice([sequence([ch(b'a'), ch(b'b')]), sequence([ch(b'a'), ch(b'c')])]);

        let (value, _) = rule.parse_cursor(BitCursor::new(data)).unwrap();
        assert_eq!(
            value,
            Some(Value::Sequence(vec![Value::Char(b'a'), Value::Char(b'c')]))
        );
    }

    #[test]
    fn test_choice_is_ordered() {
        let data = b"ab";
        let rule = choice([token(b"a"), token(b"ab")]);

        let (value, cursor) = rule.parse_cursor(BitCursor::new(data)).unwrap();
        assert_eq!(value, Some(Value::Bytes(b"a".to_vec())));
        assert_eq!(cursor.byte_offset(), 1);
    }

    #[test]
    fn test_choice_reports_furthest_error() {
        let data = b"abx";
        let rule = choice([ch(b'z'), token(b"abc")]);

        let error = rule.parse_cursor(BitCursor::new(data)).unwrap_err();
        assert_eq!(error.loc().byte_offset(), 2);
    }

    #[test]
    fn test_empty_choice_fails() {
        let data = b"a";
        assert!(choice(Vec::<Rule>::new()).parse_cursor(BitCursor::new(data)).is_err());
    }

    #[test]
    fn test_or_method_chain() {
        let data = b"c";
        let rule = ch(b'a').or(ch(b'b')).or(ch(b'c'));

        let (value, cursor) = rule.parse_cursor(BitCursor::new(data)).unwrap();
        assert_eq!(value, Some(Value::Char(b'c')));
        assert!(cursor.at_end());
    }
}
