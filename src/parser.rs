use crate::cursor::BitCursor;
use crate::error::ParseError;
use crate::value::Value;
use std::fmt;
use std::sync::Arc;

/// Outcome of one parse attempt
///
/// On success the value slot is `None` when the parser's value is elided
/// (see [`crate::ignore`]); enclosing sequences then leave it out.
pub type ParseResult<'code> = Result<(Option<Value>, BitCursor<'code>), ParseError<'code>>;

/// Core parser trait for parser combinators
pub trait Parser: Send + Sync {
    /// Attempt to parse from the given cursor position
    ///
    /// Returns the parsed value and the cursor just past the consumed input
    /// on success. Cursors are values, so a failure leaves the caller's
    /// cursor exactly where it was.
    fn parse<'code>(&self, cursor: BitCursor<'code>) -> ParseResult<'code>;
}

/// Shared handle to a parser node
///
/// Every constructor in this crate returns a `Rule`. Cloning is cheap and
/// clones share the same node, which is how one parser appears in several
/// places of a grammar (or, through [`crate::Indirect`], inside itself).
#[derive(Clone)]
pub struct Rule(Arc<dyn Parser>);

impl Rule {
    pub fn new(parser: impl Parser + 'static) -> Self {
        Rule(Arc::new(parser))
    }

    /// Run this rule from an arbitrary cursor
    pub fn parse_cursor<'code>(&self, cursor: BitCursor<'code>) -> ParseResult<'code> {
        self.0.parse(cursor)
    }

    /// True when both handles point at the same parser node
    pub fn ptr_eq(&self, other: &Rule) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<P: Parser + 'static> From<P> for Rule {
    fn from(parser: P) -> Self {
        Rule::new(parser)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rule({:p})", Arc::as_ptr(&self.0))
    }
}
