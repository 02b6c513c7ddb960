use crate::error::{CodeLoc, ParseError};
use crate::value::Value;

/// Order in which the bytes of a multi-byte integer are assembled
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum ByteOrder {
    #[default]
    BigEndian,
    LittleEndian,
}

/// Order in which bits are taken out of each byte
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum BitOrder {
    #[default]
    MsbFirst,
    LsbFirst,
}

/// Decoding configuration carried by every cursor
///
/// The default is big-endian bytes with the most significant bit read
/// first, which is network order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Endianness {
    pub byte: ByteOrder,
    pub bit: BitOrder,
}

impl Endianness {
    pub const BIG: Endianness = Endianness {
        byte: ByteOrder::BigEndian,
        bit: BitOrder::MsbFirst,
    };

    pub const LITTLE: Endianness = Endianness {
        byte: ByteOrder::LittleEndian,
        bit: BitOrder::LsbFirst,
    };

    pub const fn new(byte: ByteOrder, bit: BitOrder) -> Self {
        Endianness { byte, bit }
    }
}

/// An immutable position in a byte buffer, addressable to the bit
///
/// Cursors are `Copy`: every read returns a new cursor and leaves the old
/// one untouched, so backtracking is just reusing an earlier copy.
///
/// Invariant: `byte_offset <= data.len()`, and `bit_offset == 0` whenever
/// `byte_offset == data.len()`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BitCursor<'code> {
    data: &'code [u8],
    byte_offset: usize,
    bit_offset: u8,
    endianness: Endianness,
}

impl<'code> BitCursor<'code> {
    pub fn new(data: &'code [u8]) -> Self {
        Self::with_endianness(data, Endianness::default())
    }

    pub fn with_endianness(data: &'code [u8], endianness: Endianness) -> Self {
        BitCursor {
            data,
            byte_offset: 0,
            bit_offset: 0,
            endianness,
        }
    }

    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Same position, different decoding configuration
    pub fn set_endianness(self, endianness: Endianness) -> Self {
        BitCursor { endianness, ..self }
    }

    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    pub fn bit_offset(&self) -> usize {
        self.bit_offset as usize
    }

    /// Absolute position in bits from the start of the input
    pub fn bit_position(&self) -> usize {
        self.byte_offset * 8 + self.bit_offset as usize
    }

    pub fn remaining_bits(&self) -> usize {
        self.data.len() * 8 - self.bit_position()
    }

    /// True iff no bits remain
    pub fn at_end(&self) -> bool {
        self.byte_offset >= self.data.len()
    }

    /// Get the source data without consuming the cursor
    pub fn source(&self) -> &'code [u8] {
        self.data
    }

    pub fn loc(&self) -> CodeLoc<'code> {
        CodeLoc::new(self.data, self.bit_position())
    }

    /// Read `count` bits as an unsigned integer
    ///
    /// Bits are taken from each byte in the cursor's bit order; the pieces
    /// are assembled most significant first for big-endian byte order and
    /// least significant first for little-endian.
    pub fn read_u64(self, count: usize) -> Result<(u64, Self), ParseError<'code>> {
        debug_assert!(count <= 64, "read_u64 of {} bits", count);
        if count > self.remaining_bits() {
            return Err(ParseError::UnexpectedEndOfInput(self.loc()));
        }

        let mut out: u64 = 0;
        let mut shift = 0;
        let mut left = count;
        let mut cursor = self;

        while left > 0 {
            let byte = cursor.data[cursor.byte_offset];
            let available = 8 - cursor.bit_offset as usize;
            let take = available.min(left);
            let mask = (1u64 << take) - 1;

            let segment = match cursor.endianness.bit {
                BitOrder::MsbFirst => (byte as u64 >> (available - take)) & mask,
                BitOrder::LsbFirst => (byte as u64 >> cursor.bit_offset) & mask,
            };

            match cursor.endianness.byte {
                ByteOrder::BigEndian => out = (out << take) | segment,
                ByteOrder::LittleEndian => {
                    out |= segment << shift;
                    shift += take;
                }
            }

            left -= take;
            cursor = cursor.advance(take);
        }

        Ok((out, cursor))
    }

    /// Read `count` bits as an integer value, sign-extending over exactly
    /// `count` bits when `signed` is set
    pub fn read_bits(self, count: usize, signed: bool) -> Result<(Value, Self), ParseError<'code>> {
        let (raw, cursor) = self.read_u64(count)?;
        let value = if signed {
            Value::SignedInt(sign_extend(raw, count))
        } else {
            Value::UnsignedInt(raw)
        };
        Ok((value, cursor))
    }

    /// Read `count` whole bytes, each decoded as 8 bits in the cursor's bit order
    pub fn read_bytes(self, count: usize) -> Result<(Vec<u8>, Self), ParseError<'code>> {
        if count.saturating_mul(8) > self.remaining_bits() {
            return Err(ParseError::UnexpectedEndOfInput(self.loc()));
        }
        if self.bit_offset == 0 && self.endianness.bit == BitOrder::MsbFirst {
            let start = self.byte_offset;
            let bytes = self.data[start..start + count].to_vec();
            return Ok((bytes, self.advance(count * 8)));
        }

        let mut bytes = Vec::with_capacity(count);
        let mut cursor = self;
        for _ in 0..count {
            let (byte, next) = cursor.read_u64(8)?;
            bytes.push(byte as u8);
            cursor = next;
        }
        Ok((bytes, cursor))
    }

    /// Read the next 8 bits as a byte
    pub fn read_byte(self) -> Result<(u8, Self), ParseError<'code>> {
        let (byte, cursor) = self.read_u64(8)?;
        Ok((byte as u8, cursor))
    }

    /// Advance `count` bits, failing if fewer than `count` remain
    pub fn skip_bits(self, count: usize) -> Result<Self, ParseError<'code>> {
        if count > self.remaining_bits() {
            return Err(ParseError::UnexpectedEndOfInput(self.loc()));
        }
        Ok(self.advance(count))
    }

    /// Move to an absolute bit position, failing if it lies past the end
    pub fn seek_bits(self, position: usize) -> Result<Self, ParseError<'code>> {
        if position > self.data.len() * 8 {
            return Err(ParseError::UnexpectedEndOfInput(CodeLoc::new(
                self.data,
                self.data.len() * 8,
            )));
        }
        Ok(BitCursor {
            byte_offset: position / 8,
            bit_offset: (position % 8) as u8,
            ..self
        })
    }

    /// Number of bits between `earlier` and this cursor
    pub fn bits_since(&self, earlier: &BitCursor<'code>) -> usize {
        self.bit_position().saturating_sub(earlier.bit_position())
    }

    fn advance(self, count: usize) -> Self {
        let position = self.bit_position() + count;
        BitCursor {
            byte_offset: position / 8,
            bit_offset: (position % 8) as u8,
            ..self
        }
    }
}

fn sign_extend(raw: u64, count: usize) -> i64 {
    match count {
        0 => 0,
        64 => raw as i64,
        _ => {
            let shift = 64 - count;
            ((raw << shift) as i64) >> shift
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BB: Endianness = Endianness::new(ByteOrder::BigEndian, BitOrder::MsbFirst);
    const LL: Endianness = Endianness::new(ByteOrder::LittleEndian, BitOrder::LsbFirst);

    #[test]
    fn test_read_signed_64() {
        let data = b"\xFF\xFF\xFF\xFE\x00\x00\x00\x00";
        let cursor = BitCursor::new(data);

        let (value, cursor) = cursor.read_bits(64, true).unwrap();
        assert_eq!(value, Value::SignedInt(-0x2_0000_0000));
        assert!(cursor.at_end());
    }

    #[test]
    fn test_read_bits_big_endian() {
        let data = b"\x6A\x5A";
        let cursor = BitCursor::with_endianness(data, BB);

        let (a, cursor) = cursor.read_u64(3).unwrap();
        let (b, cursor) = cursor.read_u64(8).unwrap();
        let (c, cursor) = cursor.read_u64(5).unwrap();
        assert_eq!((a, b, c), (0x03, 0x52, 0x1A));
        assert!(cursor.at_end());
    }

    #[test]
    fn test_read_bits_little_endian() {
        let data = b"\x6A\x5A";
        let cursor = BitCursor::with_endianness(data, LL);

        let (a, cursor) = cursor.read_u64(3).unwrap();
        let (b, cursor) = cursor.read_u64(8).unwrap();
        let (c, _) = cursor.read_u64(5).unwrap();
        assert_eq!((a, b, c), (0x02, 0x4D, 0x0B));
    }

    #[test]
    fn test_large_reads_cross_bytes() {
        let data = b"\x6A\x5A";

        let (be, _) = BitCursor::with_endianness(data, BB).read_u64(11).unwrap();
        assert_eq!(be, 0x352);

        let (le, _) = BitCursor::with_endianness(data, LL).read_u64(11).unwrap();
        assert_eq!(le, 0x26A);
    }

    #[test]
    fn test_offset_large_reads() {
        let data = b"\x6A\x5A";

        let cursor = BitCursor::with_endianness(data, BB);
        let (head, cursor) = cursor.read_u64(5).unwrap();
        let (tail, _) = cursor.read_u64(11).unwrap();
        assert_eq!((head, tail), (0xD, 0x25A));

        let cursor = BitCursor::with_endianness(data, LL);
        let (head, cursor) = cursor.read_u64(5).unwrap();
        let (tail, _) = cursor.read_u64(11).unwrap();
        assert_eq!((head, tail), (0xA, 0x2D3));
    }

    #[test]
    fn test_mixed_orders() {
        let data = b"abcd";
        let bl = Endianness::new(ByteOrder::BigEndian, BitOrder::LsbFirst);
        let lb = Endianness::new(ByteOrder::LittleEndian, BitOrder::MsbFirst);

        assert_eq!(BitCursor::with_endianness(data, bl).read_u64(32).unwrap().0, 0x61626364);
        assert_eq!(BitCursor::with_endianness(data, bl).read_u64(5).unwrap().0, 0x1);
        assert_eq!(BitCursor::with_endianness(data, lb).read_u64(32).unwrap().0, 0x64636261);
        assert_eq!(BitCursor::with_endianness(data, lb).read_u64(5).unwrap().0, 0xC);
    }

    #[test]
    fn test_read_overrun_fails_without_moving() {
        let data = b"\x6A";
        let cursor = BitCursor::new(data);

        let error = cursor.read_u64(16).unwrap_err();
        assert!(matches!(error, ParseError::UnexpectedEndOfInput(_)));
        assert_eq!(cursor.bit_position(), 0);
    }

    #[test]
    fn test_signed_byte() {
        let data = b"\xFF";
        let (value, _) = BitCursor::new(data).read_bits(8, true).unwrap();
        assert_eq!(value, Value::SignedInt(-1));
    }

    #[test]
    fn test_zero_width_read() {
        let data = b"";
        let cursor = BitCursor::new(data);

        let (value, next) = cursor.read_bits(0, true).unwrap();
        assert_eq!(value, Value::SignedInt(0));
        assert_eq!(next, cursor);
    }

    #[test]
    fn test_skip_and_seek() {
        let data = b"\x6A\x5A\x6B";
        let cursor = BitCursor::new(data);

        let skipped = cursor.skip_bits(16).unwrap();
        assert_eq!((skipped.byte_offset(), skipped.bit_offset()), (2, 0));

        let sought = cursor.seek_bits(12).unwrap();
        assert_eq!((sought.byte_offset(), sought.bit_offset()), (1, 4));

        assert!(cursor.skip_bits(25).is_err());
        assert!(cursor.seek_bits(25).is_err());
        assert!(cursor.seek_bits(24).unwrap().at_end());
    }

    #[test]
    fn test_read_bytes_unaligned() {
        let data = b"\x0F\xF0";
        let cursor = BitCursor::new(data).skip_bits(4).unwrap();

        let (bytes, cursor) = cursor.read_bytes(1).unwrap();
        assert_eq!(bytes, vec![0xFF]);
        assert_eq!(cursor.remaining_bits(), 4);
    }

    #[test]
    fn test_end_position_has_zero_bit_offset() {
        let data = b"ab";
        let cursor = BitCursor::new(data).skip_bits(16).unwrap();

        assert!(cursor.at_end());
        assert_eq!(cursor.bit_offset(), 0);
        assert_eq!(cursor.byte_offset(), 2);
    }

    #[test]
    fn test_copy_independence() {
        let data = b"abcd";
        let cursor = BitCursor::new(data);

        // Make copies before advancing
        let saved_at_a = cursor;

        let (first, cursor) = cursor.read_byte().unwrap();
        assert_eq!(first, b'a');

        // Saved copy is unaffected
        let (again, _) = saved_at_a.read_byte().unwrap();
        assert_eq!(again, b'a');

        let saved_at_b = cursor;
        let (_, cursor) = cursor.read_byte().unwrap();
        assert_eq!(cursor.byte_offset(), 2);
        assert_eq!(saved_at_b.read_byte().unwrap().0, b'b');
    }
}
