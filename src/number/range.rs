use crate::cursor::BitCursor;
use crate::error::{GrammarError, ParseError};
use crate::parser::{ParseResult, Parser, Rule};

/// Parser that accepts the wrapped parser's integer only if it lies in
/// `lower..=upper`
pub struct IntRange {
    parser: Rule,
    lower: i64,
    upper: i64,
}

impl IntRange {
    pub fn new(parser: impl Into<Rule>, lower: i64, upper: i64) -> Result<Self, GrammarError> {
        if lower > upper {
            return Err(GrammarError::EmptyRange { lower, upper });
        }
        Ok(IntRange {
            parser: parser.into(),
            lower,
            upper,
        })
    }
}

impl Parser for IntRange {
    fn parse<'code>(&self, cursor: BitCursor<'code>) -> ParseResult<'code> {
        let (value, next) = self.parser.parse_cursor(cursor)?;
        let Some(number) = value.as_ref().and_then(|v| v.as_integer()) else {
            panic!("{}", GrammarError::NonIntegerRange);
        };

        if (self.lower as i128..=self.upper as i128).contains(&number) {
            Ok((value, next))
        } else {
            Err(ParseError::unmatched(
                format!(
                    "integer {} outside range {}..={}",
                    number, self.lower, self.upper
                ),
                cursor.loc(),
            ))
        }
    }
}

/// Accept `parser`'s integer result only when `lower <= v <= upper`
///
/// # Panics
///
/// If `lower > upper`. Parsing panics if `parser` succeeds with something
/// other than an integer or a char.
pub fn int_range(parser: impl Into<Rule>, lower: i64, upper: i64) -> Rule {
    match IntRange::new(parser, lower, upper) {
        Ok(range) => Rule::new(range),
        Err(e) => panic!("{}", e),
    }
}
