use crate::cursor::BitCursor;
use crate::parser::{ParseResult, Parser, Rule};
use crate::value::Value;

/// Parser combinator that matches a list of items separated by a parser
///
/// Only item values are collected; separator values are dropped. A
/// separator that is not followed by an item is left unconsumed.
///
/// # Examples
/// - `"1,2,3"` with separator `,` → `(u0x31 u0x32 u0x33)`
/// - `"1,2,"` with separator `,` → `(u0x31 u0x32)`, cursor before the last `,`
pub struct SeparatedList {
    item: Rule,
    separator: Rule,
    min: usize,
}

impl SeparatedList {
    pub fn new(item: impl Into<Rule>, separator: impl Into<Rule>, min: usize) -> Self {
        SeparatedList {
            item: item.into(),
            separator: separator.into(),
            min,
        }
    }
}

impl Parser for SeparatedList {
    fn parse<'code>(&self, cursor: BitCursor<'code>) -> ParseResult<'code> {
        let mut values = Vec::new();

        let mut cursor = match self.item.parse_cursor(cursor) {
            Ok((value, next)) => {
                values.extend(value);
                next
            }
            Err(e) if self.min > 0 => return Err(e),
            Err(_) => return Ok((Some(Value::Sequence(values)), cursor)),
        };

        loop {
            let Ok((_, after_separator)) = self.separator.parse_cursor(cursor) else {
                break;
            };
            let Ok((value, next)) = self.item.parse_cursor(after_separator) else {
                break;
            };
            values.extend(value);
            if next.bit_position() == cursor.bit_position() {
                cursor = next;
                break;
            }
            cursor = next;
        }

        Ok((Some(Value::Sequence(values)), cursor))
    }
}

/// Zero or more `item`s separated by `separator`
pub fn sep_by(item: impl Into<Rule>, separator: impl Into<Rule>) -> Rule {
    Rule::new(SeparatedList::new(item, separator, 0))
}

/// One or more `item`s separated by `separator`
pub fn sep_by1(item: impl Into<Rule>, separator: impl Into<Rule>) -> Rule {
    Rule::new(SeparatedList::new(item, separator, 1))
}
