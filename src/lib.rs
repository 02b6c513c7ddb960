//! # bitcomb - Bit-level Parser Combinators
//!
//! A backtracking parser combinator library for binary and text formats,
//! addressing its input down to the individual bit.
//!
//! Grammars are built programmatically: every constructor returns a shared
//! [`Rule`], and larger rules are composed from smaller ones. The library
//! emphasizes:
//!
//! - **Immutable cursors**: backtracking is just reusing an earlier [`BitCursor`]
//! - **Bit precision**: integers of any width up to 64 bits, in either byte
//!   and bit order
//! - **Recursive grammars**: [`Indirect`] placeholders bound after the fact
//! - **Loud misuse**: grammar bugs panic with a [`GrammarError`] instead of
//!   masquerading as parse failures
//!
//! ```
//! use bitcomb::{ch, end_p, parse, sequence, whitespace};
//!
//! let rule = sequence([ch(b'a'), whitespace(ch(b'b')), end_p()]);
//!
//! assert_eq!(parse(&rule, b"a  b").unwrap().to_string(), "(u0x61 u0x62 unit)");
//! assert!(parse(&rule, b"a  c").is_none());
//! ```

pub mod action;
pub mod and_then;
pub mod between;
pub mod byte;
pub mod choice;
pub mod cursor;
pub mod difference;
pub mod driver;
pub mod endianness;
pub mod epsilon;
pub mod error;
pub mod filter;
pub mod ignore;
pub mod indirect;
pub mod length_value;
pub mod lookahead;
pub mod many;
pub mod number;
pub mod optional;
pub mod parser;
pub mod permutation;
pub mod seek;
pub mod separated_list;
pub mod sequence;
pub mod token;
pub mod value;
pub mod whitespace;

pub use action::{ActionExt, action};
pub use and_then::{AndThenExt, and_then};
pub use between::{left, middle, right};
pub use byte::{Charset, ch, ch_range, in_, not_in};
pub use choice::{ChoiceExt, choice};
pub use cursor::{BitCursor, BitOrder, ByteOrder, Endianness};
pub use difference::{butnot, difference, xor};
pub use driver::{parse, parse_with, try_parse};
pub use endianness::with_endianness;
pub use epsilon::{end_p, epsilon_p, nothing_p};
pub use error::{CodeLoc, GrammarError, ParseError};
pub use filter::{FilterExt, attr_bool};
pub use ignore::ignore;
pub use indirect::{Indirect, bind, indirect};
pub use length_value::length_value;
pub use lookahead::{and_, not_};
pub use many::{ManyExt, many, many1, repeat_n};
pub use number::{
    bits, int_range, int8, int16, int32, int64, uint8, uint16, uint32, uint64,
};
pub use optional::{OptionalExt, optional};
pub use parser::{ParseResult, Parser, Rule};
pub use permutation::permutation;
pub use seek::{Whence, seek, skip, tell};
pub use separated_list::{sep_by, sep_by1};
pub use sequence::{SequenceExt, sequence};
pub use token::{bytes, token};
pub use value::{UserValue, Value};
pub use whitespace::whitespace;
