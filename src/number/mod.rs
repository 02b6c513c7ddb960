pub mod bits;
pub mod range;

pub use bits::{BitsParser, bits};
pub use range::{IntRange, int_range};

use crate::parser::Rule;

/// Signed 8-bit integer, two's complement
pub fn int8() -> Rule {
    bits(8, true)
}

/// Signed 16-bit integer, two's complement
pub fn int16() -> Rule {
    bits(16, true)
}

/// Signed 32-bit integer, two's complement
pub fn int32() -> Rule {
    bits(32, true)
}

/// Signed 64-bit integer, two's complement
pub fn int64() -> Rule {
    bits(64, true)
}

pub fn uint8() -> Rule {
    bits(8, false)
}

pub fn uint16() -> Rule {
    bits(16, false)
}

pub fn uint32() -> Rule {
    bits(32, false)
}

pub fn uint64() -> Rule {
    bits(64, false)
}
