use crate::cursor::BitCursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser, Rule};
use crate::value::Value;

/// Parser combinator that matches every child once, in any order
///
/// Values are reported in declaration order regardless of the order they
/// were found in the input. Children that can match empty input, such as
/// an `optional`, may be left out of the input and then contribute the
/// value of their empty match.
pub struct Permutation {
    parsers: Vec<Rule>,
}

impl Permutation {
    pub fn new(parsers: Vec<Rule>) -> Self {
        Permutation { parsers }
    }

    /// Fill every unset slot starting at `cursor`, returning the final cursor
    fn fill<'code>(
        &self,
        cursor: BitCursor<'code>,
        slots: &mut [Option<Option<Value>>],
    ) -> Result<BitCursor<'code>, ParseError<'code>> {
        let mut furthest: Option<ParseError<'code>> = None;

        // Prefer children that consume input
        for i in 0..self.parsers.len() {
            if slots[i].is_some() {
                continue;
            }
            match self.parsers[i].parse_cursor(cursor) {
                Ok((value, next)) if next.bit_position() > cursor.bit_position() => {
                    slots[i] = Some(value);
                    match self.fill(next, slots) {
                        Ok(end) => return Ok(end),
                        Err(e) => {
                            slots[i] = None;
                            keep_furthest(&mut furthest, e);
                        }
                    }
                }
                Ok(_) => {}
                Err(e) => keep_furthest(&mut furthest, e),
            }
        }

        // Nothing consuming fits here, so every remaining child must match empty
        let mut empty = Vec::new();
        for i in (0..slots.len()).filter(|&i| slots[i].is_none()) {
            match self.parsers[i].parse_cursor(cursor) {
                Ok((value, next)) if next.bit_position() == cursor.bit_position() => {
                    empty.push((i, value));
                }
                Ok(_) => return Err(unplaced(furthest, cursor)),
                Err(e) => {
                    keep_furthest(&mut furthest, e);
                    return Err(unplaced(furthest, cursor));
                }
            }
        }

        for (i, value) in empty {
            slots[i] = Some(value);
        }
        Ok(cursor)
    }
}

fn unplaced<'code>(
    furthest: Option<ParseError<'code>>,
    cursor: BitCursor<'code>,
) -> ParseError<'code> {
    furthest.unwrap_or_else(|| {
        ParseError::unmatched("permutation member could not be placed", cursor.loc())
    })
}

fn keep_furthest<'code>(slot: &mut Option<ParseError<'code>>, e: ParseError<'code>) {
    *slot = Some(match slot.take() {
        Some(previous) => previous.furthest(e),
        None => e,
    });
}

impl Parser for Permutation {
    fn parse<'code>(&self, cursor: BitCursor<'code>) -> ParseResult<'code> {
        let mut slots = vec![None; self.parsers.len()];
        let end = self.fill(cursor, &mut slots)?;

        let values = slots.into_iter().flatten().flatten().collect();
        Ok((Some(Value::Sequence(values)), end))
    }
}

/// Match every parser exactly once, in any order
pub fn permutation<I>(parsers: I) -> Rule
where
    I: IntoIterator,
    I::Item: Into<Rule>,
{
    Rule::new(Permutation::new(
        parsers.into_iter().map(Into::into).collect(),
    ))
}
