use std::borrow::Cow;
use std::fmt;

/// A position inside the input, addressed to the bit
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct CodeLoc<'code> {
    code: &'code [u8],
    /// Absolute bit position in `code` where the failure was detected
    bit_position: usize,
}

impl<'code> CodeLoc<'code> {
    pub fn new(code: &'code [u8], bit_position: usize) -> Self {
        Self { code, bit_position }
    }

    /// Absolute position in bits from the start of the input
    pub fn bit_position(&self) -> usize {
        self.bit_position
    }

    pub fn byte_offset(&self) -> usize {
        self.bit_position / 8
    }

    pub fn bit_offset(&self) -> usize {
        self.bit_position % 8
    }

    pub fn source(&self) -> &'code [u8] {
        self.code
    }

    /// Hex rendering of up to 8 bytes around the failure, with the failing
    /// byte bracketed
    fn context(&self) -> String {
        let at = self.byte_offset();
        let end = (at + 4).min(self.code.len());
        let start = at.saturating_sub(4).min(end);

        let mut out = String::new();
        for (i, byte) in self.code[start..end].iter().enumerate() {
            if !out.is_empty() {
                out.push(' ');
            }
            if start + i == at {
                out.push_str(&format!("[{:02X}]", byte));
            } else {
                out.push_str(&format!("{:02X}", byte));
            }
        }
        if at >= self.code.len() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str("[<end>]");
        }
        out
    }
}

impl fmt::Debug for CodeLoc<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodeLoc")
            .field("byte_offset", &self.byte_offset())
            .field("bit_offset", &self.bit_offset())
            .field("input_len", &self.code.len())
            .finish()
    }
}

impl fmt::Display for CodeLoc<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "byte offset {}, bit {} ({})",
            self.byte_offset(),
            self.bit_offset(),
            self.context()
        )
    }
}

/// Why a parse attempt failed
///
/// This is an ordinary, recoverable outcome: combinators absorb it while
/// backtracking and only the driver surfaces it. It never signals a bug in
/// the grammar, see [`GrammarError`] for that.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ParseError<'code> {
    #[error("unexpected end of input at {0}")]
    UnexpectedEndOfInput(CodeLoc<'code>),
    #[error("syntax error at {loc}: {message}")]
    SyntaxError {
        message: Cow<'static, str>,
        loc: CodeLoc<'code>,
    },
    /// A combinator's own condition rejected the input, e.g. a negative
    /// lookahead whose parser matched
    #[error("{message} at {loc}")]
    Unmatched {
        message: Cow<'static, str>,
        loc: CodeLoc<'code>,
    },
}

impl<'code> ParseError<'code> {
    pub fn syntax(message: impl Into<Cow<'static, str>>, loc: CodeLoc<'code>) -> Self {
        ParseError::SyntaxError {
            message: message.into(),
            loc,
        }
    }

    pub fn unmatched(message: impl Into<Cow<'static, str>>, loc: CodeLoc<'code>) -> Self {
        ParseError::Unmatched {
            message: message.into(),
            loc,
        }
    }

    pub fn loc(&self) -> CodeLoc<'code> {
        match self {
            ParseError::UnexpectedEndOfInput(loc) => *loc,
            ParseError::SyntaxError { loc, .. } => *loc,
            ParseError::Unmatched { loc, .. } => *loc,
        }
    }

    /// Bit position where this error occurred
    pub fn position(&self) -> usize {
        self.loc().bit_position()
    }

    /// Keep whichever of the two errors progressed further into the input
    ///
    /// Ties go to `self`, so folding alternatives left to right reports the
    /// earliest alternative among equally deep failures.
    pub fn furthest(self, other: Self) -> Self {
        if other.position() > self.position() {
            other
        } else {
            self
        }
    }
}

/// Misuse of the combinator API
///
/// These are programming errors in the grammar, never an outcome of the
/// input. Constructors and the parse loop panic with this error's message;
/// [`crate::Indirect::bind`] returns it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GrammarError {
    #[error("indirect parser used before being bound")]
    Unbound,
    #[error("indirect parser is already bound")]
    AlreadyBound,
    #[error("bit width {0} is out of range, expected 0..=64")]
    InvalidBitWidth(usize),
    #[error("integer range {lower}..={upper} is empty")]
    EmptyRange { lower: i64, upper: i64 },
    #[error("length parser must produce an unsigned integer")]
    NonIntegerLength,
    #[error("range check applied to a parser that does not produce an integer")]
    NonIntegerRange,
}
