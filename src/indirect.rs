use crate::cursor::BitCursor;
use crate::error::GrammarError;
use crate::parser::{ParseResult, Parser, Rule};
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Forward-declared parser whose target is installed later with [`Indirect::bind`]
///
/// Clones share one binding slot, so a grammar can hold the placeholder
/// (as a [`Rule`] or as further clones) before the rule it stands for
/// exists. That is how recursive grammars are written:
///
/// ```
/// use bitcomb::{ch, choice, epsilon_p, indirect, parse, sequence};
///
/// let list = indirect();
/// let rule = choice([sequence([ch(b'a'), list.clone().into()]), epsilon_p()]);
/// list.bind(rule.clone()).unwrap();
///
/// assert_eq!(parse(&rule, b"aa").unwrap().to_string(), "(u0x61 (u0x61 unit))");
/// ```
///
/// A bound indirect that is reachable from its own target forms a reference
/// cycle and is never freed. Grammars are expected to live for the program's
/// lifetime.
///
/// Parsing through an unbound indirect panics with [`GrammarError::Unbound`].
#[derive(Clone, Default)]
pub struct Indirect {
    target: Arc<OnceLock<Rule>>,
}

impl Indirect {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `target` as the parser this placeholder delegates to
    ///
    /// Binding happens once; a second call leaves the first target in place
    /// and returns [`GrammarError::AlreadyBound`].
    pub fn bind(&self, target: impl Into<Rule>) -> Result<(), GrammarError> {
        self.target
            .set(target.into())
            .map_err(|_| GrammarError::AlreadyBound)?;
        log::debug!("bound indirect parser {:p}", Arc::as_ptr(&self.target));
        Ok(())
    }

    pub fn is_bound(&self) -> bool {
        self.target.get().is_some()
    }
}

impl Parser for Indirect {
    fn parse<'code>(&self, cursor: BitCursor<'code>) -> ParseResult<'code> {
        match self.target.get() {
            Some(target) => target.parse_cursor(cursor),
            None => panic!("{}", GrammarError::Unbound),
        }
    }
}

impl fmt::Debug for Indirect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Indirect")
            .field("bound", &self.is_bound())
            .finish()
    }
}

/// Create an unbound placeholder parser
pub fn indirect() -> Indirect {
    Indirect::new()
}

/// Bind `indirect` to `target`
///
/// # Panics
///
/// Panics if `indirect` is already bound.
pub fn bind(indirect: &Indirect, target: impl Into<Rule>) {
    if let Err(e) = indirect.bind(target) {
        panic!("{}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::byte::ch;
    use crate::choice::choice;
    use crate::epsilon::epsilon_p;
    use crate::sequence::sequence;
    use crate::value::Value;

    fn right_recursive() -> Rule {
        let placeholder = indirect();
        let rule = choice([sequence([ch(b'a'), placeholder.clone().into()]), epsilon_p()]);
        bind(&placeholder, rule.clone());
        rule
    }

    #[test]
    fn test_recursive_grammar() {
        let rule = right_recursive();

        let (value, cursor) = rule.parse_cursor(BitCursor::new(b"aaa")).unwrap();
        assert_eq!(value.unwrap().to_string(), "(u0x61 (u0x61 (u0x61 unit)))");
        assert!(cursor.at_end());

        let (value, _) = rule.parse_cursor(BitCursor::new(b"")).unwrap();
        assert_eq!(value, Some(Value::Unit));
    }

    #[test]
    fn test_indirect_delegates() {
        let placeholder = indirect();
        let rule: Rule = placeholder.clone().into();
        placeholder.bind(ch(b'x')).unwrap();

        assert!(placeholder.is_bound());
        let (value, _) = rule.parse_cursor(BitCursor::new(b"x")).unwrap();
        assert_eq!(value, Some(Value::Char(b'x')));
    }

    #[test]
    fn test_double_bind_rejected() {
        let placeholder = indirect();
        placeholder.bind(ch(b'x')).unwrap();

        assert_eq!(placeholder.bind(ch(b'y')), Err(GrammarError::AlreadyBound));
        // First binding stays in effect
        assert!(placeholder.parse(BitCursor::new(b"x")).is_ok());
    }

    #[test]
    #[should_panic(expected = "indirect parser is already bound")]
    fn test_bind_fn_panics_on_rebind() {
        let placeholder = indirect();
        bind(&placeholder, ch(b'x'));
        bind(&placeholder, ch(b'y'));
    }

    #[test]
    #[should_panic(expected = "indirect parser used before being bound")]
    fn test_unbound_use_panics() {
        let placeholder = indirect();
        let _ = placeholder.parse(BitCursor::new(b"x"));
    }
}
