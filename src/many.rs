use crate::cursor::BitCursor;
use crate::parser::{ParseResult, Parser, Rule};
use crate::value::Value;

/// Parser combinator that greedily matches `min` or more occurrences of the
/// given parser
///
/// Repetition stops at the first failure. A match that consumes no input
/// is kept and ends the loop, so zero-width parsers cannot spin forever.
pub struct Many {
    parser: Rule,
    min: usize,
}

impl Many {
    pub fn new(parser: impl Into<Rule>, min: usize) -> Self {
        Many {
            parser: parser.into(),
            min,
        }
    }
}

impl Parser for Many {
    fn parse<'code>(&self, cursor: BitCursor<'code>) -> ParseResult<'code> {
        let mut values = Vec::new();
        let mut count = 0;
        let mut cursor = cursor;

        loop {
            match self.parser.parse_cursor(cursor) {
                Ok((value, next)) => {
                    values.extend(value);
                    count += 1;
                    let stalled = next.bit_position() == cursor.bit_position();
                    cursor = next;
                    if stalled {
                        break;
                    }
                }
                Err(e) if count < self.min => return Err(e),
                Err(_) => break,
            }
        }

        Ok((Some(Value::Sequence(values)), cursor))
    }
}

/// Parser combinator that matches exactly `count` occurrences
pub struct RepeatN {
    parser: Rule,
    count: usize,
}

impl RepeatN {
    pub fn new(parser: impl Into<Rule>, count: usize) -> Self {
        RepeatN {
            parser: parser.into(),
            count,
        }
    }
}

impl Parser for RepeatN {
    fn parse<'code>(&self, cursor: BitCursor<'code>) -> ParseResult<'code> {
        let mut values = Vec::with_capacity(self.count);
        let mut cursor = cursor;

        for i in 0..self.count {
            let (value, next) = self.parser.parse_cursor(cursor).inspect_err(|e| {
                log::trace!("repeat_n stopped after {} of {}: {}", i, self.count, e);
            })?;
            values.extend(value);
            cursor = next;
        }

        Ok((Some(Value::Sequence(values)), cursor))
    }
}

/// Zero or more occurrences of `parser`
pub fn many(parser: impl Into<Rule>) -> Rule {
    Rule::new(Many::new(parser, 0))
}

/// One or more occurrences of `parser`
pub fn many1(parser: impl Into<Rule>) -> Rule {
    Rule::new(Many::new(parser, 1))
}

/// Exactly `count` occurrences of `parser`
pub fn repeat_n(parser: impl Into<Rule>, count: usize) -> Rule {
    Rule::new(RepeatN::new(parser, count))
}

/// Extension trait to add repetition methods to parsers
pub trait ManyExt: Into<Rule> + Sized {
    fn many(self) -> Rule {
        many(self)
    }

    fn many1(self) -> Rule {
        many1(self)
    }

    fn repeat(self, count: usize) -> Rule {
        repeat_n(self, count)
    }
}

impl<P: Into<Rule>> ManyExt for P {}
