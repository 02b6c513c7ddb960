use crate::cursor::BitCursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser, Rule};

/// Which length relation between the two matches disqualifies the first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Exclusion {
    /// Excluded when the second match is at least as long as the first
    AtLeast,
    /// Excluded only when both matches have exactly the same length
    Equal,
}

/// Parser combinator that carves matches of `exclude` out of `parser`
///
/// Both parsers run from the same position. The result is always the one
/// produced by `parser`; `exclude` only decides whether it is kept.
pub struct Difference {
    parser: Rule,
    exclude: Rule,
    mode: Exclusion,
}

impl Parser for Difference {
    fn parse<'code>(&self, cursor: BitCursor<'code>) -> ParseResult<'code> {
        let (value, next) = self.parser.parse_cursor(cursor)?;

        if let Ok((_, excluded)) = self.exclude.parse_cursor(cursor) {
            let kept_len = next.bits_since(&cursor);
            let excluded_len = excluded.bits_since(&cursor);
            let rejected = match self.mode {
                Exclusion::AtLeast => excluded_len >= kept_len,
                Exclusion::Equal => excluded_len == kept_len,
            };
            if rejected {
                return Err(ParseError::unmatched(
                    format!(
                        "excluded alternative matched {} bits where {} were expected",
                        excluded_len, kept_len
                    ),
                    cursor.loc(),
                ));
            }
        }

        Ok((value, next))
    }
}

/// Parser combinator that succeeds when exactly one of two parsers matches
pub struct Xor {
    first: Rule,
    second: Rule,
}

impl Parser for Xor {
    fn parse<'code>(&self, cursor: BitCursor<'code>) -> ParseResult<'code> {
        match (
            self.first.parse_cursor(cursor),
            self.second.parse_cursor(cursor),
        ) {
            (Ok(result), Err(_)) | (Err(_), Ok(result)) => Ok(result),
            (Ok(_), Ok(_)) => Err(ParseError::unmatched(
                "both alternatives of xor matched",
                cursor.loc(),
            )),
            (Err(first), Err(second)) => Err(first.furthest(second)),
        }
    }
}

/// Match `parser` unless `exclude` matches at least as much input
pub fn butnot(parser: impl Into<Rule>, exclude: impl Into<Rule>) -> Rule {
    Rule::new(Difference {
        parser: parser.into(),
        exclude: exclude.into(),
        mode: Exclusion::AtLeast,
    })
}

/// Match `parser` unless `exclude` matches exactly as much input
pub fn difference(parser: impl Into<Rule>, exclude: impl Into<Rule>) -> Rule {
    Rule::new(Difference {
        parser: parser.into(),
        exclude: exclude.into(),
        mode: Exclusion::Equal,
    })
}

/// Match whichever of `first` and `second` matches, failing if both or neither do
pub fn xor(first: impl Into<Rule>, second: impl Into<Rule>) -> Rule {
    Rule::new(Xor {
        first: first.into(),
        second: second.into(),
    })
}
