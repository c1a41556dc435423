//! ASCII segment font
//!
//! One 16-bit segment mask per 7-bit ASCII code point, using the bit
//! numbering shown in the crate docs. Characters a 7-segment digit cannot
//! draw map to [`NOT_DEFINED`], which lights only the decimal point.

/// Glyph shown for characters the display cannot draw (the decimal point)
pub const NOT_DEFINED: u16 = 1 << 11;

/// Minus sign glyph (segment 6)
pub const MINUS: u16 = 0x0040;

/// Segment masks indexed by ASCII code point
pub static FONT: [u16; 128] = [
    NOT_DEFINED, // 0x00 control
    NOT_DEFINED, // 0x01 control
    NOT_DEFINED, // 0x02 control
    NOT_DEFINED, // 0x03 control
    NOT_DEFINED, // 0x04 control
    NOT_DEFINED, // 0x05 control
    NOT_DEFINED, // 0x06 control
    NOT_DEFINED, // 0x07 control
    NOT_DEFINED, // 0x08 control
    NOT_DEFINED, // 0x09 control
    NOT_DEFINED, // 0x0A control
    NOT_DEFINED, // 0x0B control
    NOT_DEFINED, // 0x0C control
    NOT_DEFINED, // 0x0D control
    NOT_DEFINED, // 0x0E control
    NOT_DEFINED, // 0x0F control
    NOT_DEFINED, // 0x10 control
    NOT_DEFINED, // 0x11 control
    NOT_DEFINED, // 0x12 control
    NOT_DEFINED, // 0x13 control
    NOT_DEFINED, // 0x14 control
    NOT_DEFINED, // 0x15 control
    NOT_DEFINED, // 0x16 control
    NOT_DEFINED, // 0x17 control
    NOT_DEFINED, // 0x18 control
    NOT_DEFINED, // 0x19 control
    NOT_DEFINED, // 0x1A control
    NOT_DEFINED, // 0x1B control
    NOT_DEFINED, // 0x1C control
    NOT_DEFINED, // 0x1D control
    NOT_DEFINED, // 0x1E control
    NOT_DEFINED, // 0x1F control
    0b0000_0000_0000_0000, // 0x20 space
    NOT_DEFINED, // 0x21 !
    NOT_DEFINED, // 0x22 "
    NOT_DEFINED, // 0x23 #
    NOT_DEFINED, // 0x24 $
    NOT_DEFINED, // 0x25 %
    NOT_DEFINED, // 0x26 &
    0b0000_0000_0000_1000, // 0x27 '
    0b0010_0100_0000_0000, // 0x28 (
    0b0000_1001_0000_0000, // 0x29 )
    0b0011_1111_1100_0000, // 0x2A *
    0b0001_0010_1100_0000, // 0x2B +
    0b0000_1000_0000_0000, // 0x2C ,
    0b0000_0000_0100_0000, // 0x2D -
    0b0000_1000_0000_0000, // 0x2E .
    0b0000_1100_0000_0000, // 0x2F /
    0b0011_0000_0010_0111, // 0x30 0
    0b0000_0000_0000_0110, // 0x31 1
    0b0011_0000_0100_0011, // 0x32 2
    0b0010_0000_0100_0111, // 0x33 3
    0b0000_0000_0110_0110, // 0x34 4
    0b0010_0000_0110_0101, // 0x35 5
    0b0011_0000_0110_0101, // 0x36 6
    0b0000_0000_0000_0111, // 0x37 7
    0b0011_0000_0110_0111, // 0x38 8
    0b0000_0000_0110_0111, // 0x39 9
    0b0000_0000_0001_0000, // 0x3A :
    NOT_DEFINED, // 0x3B ;
    NOT_DEFINED, // 0x3C <
    0b0010_0000_0100_0000, // 0x3D =
    NOT_DEFINED, // 0x3E >
    NOT_DEFINED, // 0x3F ?
    NOT_DEFINED, // 0x40 @
    0b0001_0000_0110_0111, // 0x41 A
    0b0011_0000_0110_0100, // 0x42 B
    0b0011_0000_0010_0001, // 0x43 C
    0b0011_0000_0100_0110, // 0x44 D
    0b0011_0000_0110_0001, // 0x45 E
    0b0001_0000_0110_0001, // 0x46 F
    0b0010_0000_0110_0111, // 0x47 G
    0b0001_0000_0110_0110, // 0x48 H
    0b0000_0000_0000_0110, // 0x49 I
    0b0011_0000_0000_0110, // 0x4A J
    NOT_DEFINED, // 0x4B K
    0b0011_0000_0010_0000, // 0x4C L
    NOT_DEFINED, // 0x4D M
    0b0001_0000_0100_0100, // 0x4E N
    0b0011_0000_0010_0111, // 0x4F O
    0b0001_0000_0110_0011, // 0x50 P
    NOT_DEFINED, // 0x51 Q
    0b0001_0000_0100_0000, // 0x52 R
    0b0010_0000_0110_0101, // 0x53 S
    0b0001_0000_0110_0000, // 0x54 T
    0b0011_0000_0010_0110, // 0x55 U
    NOT_DEFINED, // 0x56 V
    NOT_DEFINED, // 0x57 W
    NOT_DEFINED, // 0x58 X
    0b0010_0000_0110_0110, // 0x59 Y
    NOT_DEFINED, // 0x5A Z
    0b0011_0000_0010_0001, // 0x5B [
    0b0000_0000_0000_0000, // 0x5C backslash
    0b0010_0000_0000_0111, // 0x5D ]
    NOT_DEFINED, // 0x5E ^
    0b0010_0000_0000_0000, // 0x5F _
    0b0000_0001_0000_0000, // 0x60 `
    0b0001_0000_0110_0111, // 0x61 a
    0b0011_0000_0110_0100, // 0x62 b
    0b0011_0000_0100_0000, // 0x63 c
    0b0011_0000_0100_0110, // 0x64 d
    0b0011_0000_0110_0001, // 0x65 e
    0b0001_0000_0110_0001, // 0x66 f
    0b0010_0000_0110_0111, // 0x67 g
    0b0001_0000_0110_0100, // 0x68 h
    0b0001_0000_0000_0000, // 0x69 i
    0b0011_0000_0000_0110, // 0x6A j
    NOT_DEFINED, // 0x6B k
    0b0001_0000_0010_0000, // 0x6C l
    NOT_DEFINED, // 0x6D m
    0b0001_0000_0100_0100, // 0x6E n
    0b0011_0000_0100_0100, // 0x6F o
    0b0001_0000_0110_0011, // 0x70 p
    NOT_DEFINED, // 0x71 q
    0b0001_0000_0100_0000, // 0x72 r
    0b0010_0000_0110_0101, // 0x73 s
    0b0001_0000_0110_0000, // 0x74 t
    0b0011_0000_0000_0100, // 0x75 u
    NOT_DEFINED, // 0x76 v
    NOT_DEFINED, // 0x77 w
    NOT_DEFINED, // 0x78 x
    0b0010_0000_0110_0110, // 0x79 y
    NOT_DEFINED, // 0x7A z
    0b0011_0000_0010_0001, // 0x7B {
    0b0000_0000_0000_0110, // 0x7C |
    0b0010_0000_0000_0111, // 0x7D }
    0b0000_0000_0000_0001, // 0x7E ~
    0b0011_1111_1111_1111, // 0x7F DEL (all segments)
];

/// Look up the glyph for an ASCII byte
///
/// Bytes outside 7-bit ASCII render as [`NOT_DEFINED`].
pub fn glyph(ch: u8) -> u16 {
    FONT.get(ch as usize).copied().unwrap_or(NOT_DEFINED)
}

/// Look up the glyph for a numeric digit value
///
/// 0-9 use the font entries for `'0'..='9'`; 10-15 use `'A'..='F'` so
/// hexadecimal digits are drawn as letters. Larger values have no digit
/// glyph and render as [`NOT_DEFINED`].
pub fn digit_glyph(digit: u8) -> u16 {
    match digit {
        0..=9 => glyph(b'0' + digit),
        10..=15 => glyph(b'A' + (digit - 10)),
        _ => NOT_DEFINED,
    }
}
