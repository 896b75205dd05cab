//! Normalized numeric values exchanged with a typed view

/// A value read from or written to a typed view
///
/// Signed formats decode to [`Number::Int`], unsigned formats to
/// [`Number::UInt`] and float formats to [`Number::Float`]. Integer variants
/// compare by numeric value regardless of signedness; a float is only ever
/// equal to another float.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Number {
    Int(i64),
    UInt(u64),
    Float(f64),
}

impl Number {
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Integer value widened to `i128`, or `None` for floats
    pub const fn as_i128(&self) -> Option<i128> {
        match *self {
            Number::Int(v) => Some(v as i128),
            Number::UInt(v) => Some(v as i128),
            Number::Float(_) => None,
        }
    }

    /// Lossy conversion for generic numeric work
    pub fn to_f64(self) -> f64 {
        match self {
            Number::Int(v) => v as f64,
            Number::UInt(v) => v as f64,
            Number::Float(v) => v,
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Float(a), Number::Float(b)) => a == b,
            (a, b) => match (a.as_i128(), b.as_i128()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }
}

impl core::fmt::Display for Number {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Number::Int(v) => write!(f, "{v}"),
            Number::UInt(v) => write!(f, "{v}"),
            Number::Float(v) => write!(f, "{v}"),
        }
    }
}

macro_rules! impl_from_native {
    ($variant:ident, $wide:ty: $($t:ty),+) => {
        $(
            impl From<$t> for Number {
                fn from(value: $t) -> Self {
                    Number::$variant(value as $wide)
                }
            }
        )+
    };
}

impl_from_native!(Int, i64: i8, i16, i32, i64, isize);
impl_from_native!(UInt, u64: u8, u16, u32, u64, usize);
impl_from_native!(Float, f64: f32, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::ToString;

    #[test]
    fn test_integer_equality_ignores_signedness() {
        assert_eq!(Number::Int(5), Number::UInt(5));
        assert_eq!(Number::UInt(0), Number::Int(0));
        assert_ne!(Number::Int(-1), Number::UInt(u64::MAX));
        assert_ne!(Number::Int(1), Number::Float(1.0));
        assert_eq!(Number::Float(0.5), Number::Float(0.5));
        assert_ne!(Number::Float(f64::NAN), Number::Float(f64::NAN));
    }

    #[test]
    fn test_from_native() {
        assert_eq!(Number::from(-3i8), Number::Int(-3));
        assert_eq!(Number::from(u64::MAX), Number::UInt(u64::MAX));
        assert_eq!(Number::from(1.5f32), Number::Float(1.5));
        assert!(Number::from(2.0f64).is_float());
    }

    #[test]
    fn test_display() {
        assert_eq!(Number::Int(-42).to_string(), "-42");
        assert_eq!(Number::UInt(7).to_string(), "7");
        assert_eq!(Number::Float(0.25).to_string(), "0.25");
    }
}
