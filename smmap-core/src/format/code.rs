//! Single-character element type tags

use crate::{Number, SmmapError};

/// Element type selected by a one-character tag, in the manner of `struct`
/// format characters. Byte order is always native.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum FormatCode {
    /// `b`: signed 8-bit
    I8 = b'b',
    /// `B`: unsigned 8-bit
    U8 = b'B',
    /// `h`: signed 16-bit
    I16 = b'h',
    /// `H`: unsigned 16-bit
    U16 = b'H',
    /// `i`: signed 32-bit
    I32 = b'i',
    /// `I`: unsigned 32-bit
    U32 = b'I',
    /// `l`: signed 64-bit (LP64 `long`)
    I64 = b'l',
    /// `L`: unsigned 64-bit (LP64 `unsigned long`)
    U64 = b'L',
    /// `f`: 32-bit float
    F32 = b'f',
    /// `d`: 64-bit float
    F64 = b'd',
}

impl FormatCode {
    /// Every supported code, in registry order
    pub const ALL: [FormatCode; 10] = [
        FormatCode::I8,
        FormatCode::U8,
        FormatCode::I16,
        FormatCode::U16,
        FormatCode::I32,
        FormatCode::U32,
        FormatCode::I64,
        FormatCode::U64,
        FormatCode::F32,
        FormatCode::F64,
    ];

    /// The tag character
    pub const fn as_char(self) -> char {
        self as u8 as char
    }

    /// Width of one element in bytes
    pub const fn size_bytes(self) -> usize {
        match self {
            FormatCode::I8 | FormatCode::U8 => 1,
            FormatCode::I16 | FormatCode::U16 => 2,
            FormatCode::I32 | FormatCode::U32 | FormatCode::F32 => 4,
            FormatCode::I64 | FormatCode::U64 | FormatCode::F64 => 8,
        }
    }

    pub const fn is_float(self) -> bool {
        matches!(self, FormatCode::F32 | FormatCode::F64)
    }

    pub const fn is_signed(self) -> bool {
        matches!(
            self,
            FormatCode::I8 | FormatCode::I16 | FormatCode::I32 | FormatCode::I64
        ) || self.is_float()
    }

    /// Position of this code in [`crate::FORMAT_TABLE`]
    pub(crate) const fn table_index(self) -> usize {
        match self {
            FormatCode::I8 => 0,
            FormatCode::U8 => 1,
            FormatCode::I16 => 2,
            FormatCode::U16 => 3,
            FormatCode::I32 => 4,
            FormatCode::U32 => 5,
            FormatCode::I64 => 6,
            FormatCode::U64 => 7,
            FormatCode::F32 => 8,
            FormatCode::F64 => 9,
        }
    }

    /// Smallest and largest representable finite values
    pub fn bounds(self) -> (Number, Number) {
        match self {
            FormatCode::I8 => (i8::MIN.into(), i8::MAX.into()),
            FormatCode::U8 => (u8::MIN.into(), u8::MAX.into()),
            FormatCode::I16 => (i16::MIN.into(), i16::MAX.into()),
            FormatCode::U16 => (u16::MIN.into(), u16::MAX.into()),
            FormatCode::I32 => (i32::MIN.into(), i32::MAX.into()),
            FormatCode::U32 => (u32::MIN.into(), u32::MAX.into()),
            FormatCode::I64 => (i64::MIN.into(), i64::MAX.into()),
            FormatCode::U64 => (u64::MIN.into(), u64::MAX.into()),
            FormatCode::F32 => (f32::MIN.into(), f32::MAX.into()),
            FormatCode::F64 => (f64::MIN.into(), f64::MAX.into()),
        }
    }
}

impl TryFrom<char> for FormatCode {
    type Error = SmmapError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'b' => Ok(FormatCode::I8),
            'B' => Ok(FormatCode::U8),
            'h' => Ok(FormatCode::I16),
            'H' => Ok(FormatCode::U16),
            'i' => Ok(FormatCode::I32),
            'I' => Ok(FormatCode::U32),
            'l' => Ok(FormatCode::I64),
            'L' => Ok(FormatCode::U64),
            'f' => Ok(FormatCode::F32),
            'd' => Ok(FormatCode::F64),
            _ => Err(SmmapError::InvalidFormatCode),
        }
    }
}

impl core::str::FromStr for FormatCode {
    type Err = SmmapError;

    /// Only the first character is significant
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .next()
            .ok_or(SmmapError::InvalidFormatCode)
            .and_then(FormatCode::try_from)
    }
}

impl core::fmt::Display for FormatCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_round_trip() {
        for code in FormatCode::ALL {
            assert_eq!(FormatCode::try_from(code.as_char()), Ok(code));
        }
    }

    #[test]
    fn test_unknown_codes() {
        for c in ['q', 'Q', 'x', 'c', 's', '?', ' ', '\0'] {
            assert_eq!(FormatCode::try_from(c), Err(SmmapError::InvalidFormatCode));
        }
        assert_eq!("".parse::<FormatCode>(), Err(SmmapError::InvalidFormatCode));
        assert_eq!("hx".parse::<FormatCode>(), Ok(FormatCode::I16));
    }

    #[test]
    fn test_sizes_and_signedness() {
        assert_eq!(FormatCode::I8.size_bytes(), 1);
        assert_eq!(FormatCode::U16.size_bytes(), 2);
        assert_eq!(FormatCode::F32.size_bytes(), 4);
        assert_eq!(FormatCode::U64.size_bytes(), 8);
        assert!(FormatCode::F64.is_signed());
        assert!(!FormatCode::U32.is_signed());
        assert!(!FormatCode::I32.is_float());
    }
}
