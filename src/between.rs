use crate::cursor::BitCursor;
use crate::parser::{ParseResult, Parser, Rule};

/// Parser combinator that matches two parsers in order, keeping the first value
pub struct Left {
    keep: Rule,
    skip: Rule,
}

impl Parser for Left {
    fn parse<'code>(&self, cursor: BitCursor<'code>) -> ParseResult<'code> {
        let (value, cursor) = self.keep.parse_cursor(cursor)?;
        let (_, cursor) = self.skip.parse_cursor(cursor)?;
        Ok((value, cursor))
    }
}

/// Parser combinator that matches two parsers in order, keeping the second value
pub struct Right {
    skip: Rule,
    keep: Rule,
}

impl Parser for Right {
    fn parse<'code>(&self, cursor: BitCursor<'code>) -> ParseResult<'code> {
        let (_, cursor) = self.skip.parse_cursor(cursor)?;
        self.keep.parse_cursor(cursor)
    }
}

/// Parser combinator that matches content between opening and closing delimiters
///
/// # Examples
/// - `"[42]"` with `[` and `]` → `42`
/// - `"(abc)"` with `(` and `)` → `"abc"`
pub struct Between {
    open: Rule,
    content: Rule,
    close: Rule,
}

impl Between {
    pub fn new(open: impl Into<Rule>, content: impl Into<Rule>, close: impl Into<Rule>) -> Self {
        Between {
            open: open.into(),
            content: content.into(),
            close: close.into(),
        }
    }
}

impl Parser for Between {
    fn parse<'code>(&self, cursor: BitCursor<'code>) -> ParseResult<'code> {
        let (_, cursor) = self.open.parse_cursor(cursor)?;
        let (value, cursor) = self.content.parse_cursor(cursor)?;
        let (_, cursor) = self.close.parse_cursor(cursor)?;
        Ok((value, cursor))
    }
}

/// Match `keep` then `skip`, yielding the value of `keep`
pub fn left(keep: impl Into<Rule>, skip: impl Into<Rule>) -> Rule {
    Rule::new(Left {
        keep: keep.into(),
        skip: skip.into(),
    })
}

/// Match `skip` then `keep`, yielding the value of `keep`
pub fn right(skip: impl Into<Rule>, keep: impl Into<Rule>) -> Rule {
    Rule::new(Right {
        skip: skip.into(),
        keep: keep.into(),
    })
}

/// Match `open`, `content` and `close` in order, yielding the value of `content`
pub fn middle(open: impl Into<Rule>, content: impl Into<Rule>, close: impl Into<Rule>) -> Rule {
    Rule::new(Between::new(open, content, close))
}
