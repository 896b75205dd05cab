//! Native element types that can back a typed view
//!
//! Every format code maps to exactly one Rust primitive. The registry's
//! decode/encode functions are generated from these implementations, so the
//! range rules below are the single source of truth for what a view accepts.

use crate::{FormatCode, Number, Result, SmmapError};

/// Trait for primitives that can be stored as mapped elements
///
/// Implementors must be plain-old-data so that a mapped byte window can be
/// reinterpreted without copying.
pub trait Element: bytemuck::Pod + PartialEq + core::fmt::Debug + Send + Sync + 'static {
    /// Format code bound to this type
    const CODE: FormatCode;

    /// Size in bytes of one element
    fn size_bytes() -> usize {
        core::mem::size_of::<Self>()
    }

    /// Widen to the normalized value type
    fn to_number(self) -> Number;

    /// Narrow a normalized value, rejecting anything the type cannot hold
    fn from_number(value: Number) -> Result<Self>;
}

macro_rules! impl_integer_element {
    ($type:ty, $code:ident, $variant:ident, $wide:ty) => {
        impl Element for $type {
            const CODE: FormatCode = FormatCode::$code;

            fn to_number(self) -> Number {
                Number::$variant(self as $wide)
            }

            fn from_number(value: Number) -> Result<Self> {
                let out_of_range = SmmapError::ValueOutOfRange {
                    code: FormatCode::$code,
                };
                match value {
                    Number::Int(v) => <$type>::try_from(v).map_err(|_| out_of_range),
                    Number::UInt(v) => <$type>::try_from(v).map_err(|_| out_of_range),
                    Number::Float(_) => Err(SmmapError::InvalidValueType {
                        code: FormatCode::$code,
                    }),
                }
            }
        }
    };
}

impl_integer_element!(i8, I8, Int, i64);
impl_integer_element!(u8, U8, UInt, u64);
impl_integer_element!(i16, I16, Int, i64);
impl_integer_element!(u16, U16, UInt, u64);
impl_integer_element!(i32, I32, Int, i64);
impl_integer_element!(u32, U32, UInt, u64);
impl_integer_element!(i64, I64, Int, i64);
impl_integer_element!(u64, U64, UInt, u64);

impl Element for f32 {
    const CODE: FormatCode = FormatCode::F32;

    fn to_number(self) -> Number {
        Number::Float(self as f64)
    }

    fn from_number(value: Number) -> Result<Self> {
        let wide = value.to_f64();
        let narrow = wide as f32;
        // Finite doubles beyond f32::MAX would silently become infinities
        if wide.is_finite() && narrow.is_infinite() {
            return Err(SmmapError::ValueOutOfRange {
                code: FormatCode::F32,
            });
        }
        Ok(narrow)
    }
}

impl Element for f64 {
    const CODE: FormatCode = FormatCode::F64;

    fn to_number(self) -> Number {
        Number::Float(self)
    }

    fn from_number(value: Number) -> Result<Self> {
        Ok(value.to_f64())
    }
}
