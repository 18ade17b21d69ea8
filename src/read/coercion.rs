use rust_decimal::Decimal;
use serde_json::Value;

use crate::error::Error;
use crate::num::number::{
    parse_invariant_bool, parse_invariant_decimal, parse_invariant_f32, parse_invariant_f64,
    parse_invariant_integer,
};
use crate::read::scalar::FromJson;
use crate::Result;

/// A scalar that may also arrive as a JSON string holding its invariant text
/// form, e.g. `"13"` for `13` or `"true"` for `true`.
pub trait Coercible: for<'a> FromJson<'a> {
    fn parse_invariant(text: &str) -> Option<Self>;
}

impl Coercible for bool {
    fn parse_invariant(text: &str) -> Option<Self> {
        parse_invariant_bool(text)
    }
}

macro_rules! impl_coercible_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Coercible for $ty {
                fn parse_invariant(text: &str) -> Option<Self> {
                    parse_invariant_integer(text)
                }
            }
        )*
    };
}

impl_coercible_integer!(u8, i8, i16, u16, i32, u32, i64, u64);

impl Coercible for f32 {
    fn parse_invariant(text: &str) -> Option<Self> {
        parse_invariant_f32(text)
    }
}

impl Coercible for f64 {
    fn parse_invariant(text: &str) -> Option<Self> {
        parse_invariant_f64(text)
    }
}

impl Coercible for Decimal {
    fn parse_invariant(text: &str) -> Option<Self> {
        parse_invariant_decimal(text)
    }
}

/// Reads that accept either the direct representation or a string-encoded
/// one. For any node that is not a string these agree exactly with the
/// matching [`OptionalExt`](crate::OptionalExt) reads.
pub trait CoercionExt {
    fn coerced_or_null<T: Coercible>(&self) -> Option<T>;

    fn coerced<T: Coercible>(&self) -> Result<T> {
        self.coerced_or_null()
            .ok_or_else(|| Error::value_missing(<T as FromJson<'static>>::TYPE_NAME))
    }

    fn bool_coerced_or_null(&self) -> Option<bool> {
        self.coerced_or_null()
    }

    fn bool_coerced(&self) -> Result<bool> {
        self.coerced()
    }

    fn u8_coerced_or_null(&self) -> Option<u8> {
        self.coerced_or_null()
    }

    fn u8_coerced(&self) -> Result<u8> {
        self.coerced()
    }

    fn i8_coerced_or_null(&self) -> Option<i8> {
        self.coerced_or_null()
    }

    fn i8_coerced(&self) -> Result<i8> {
        self.coerced()
    }

    fn i16_coerced_or_null(&self) -> Option<i16> {
        self.coerced_or_null()
    }

    fn i16_coerced(&self) -> Result<i16> {
        self.coerced()
    }

    fn u16_coerced_or_null(&self) -> Option<u16> {
        self.coerced_or_null()
    }

    fn u16_coerced(&self) -> Result<u16> {
        self.coerced()
    }

    fn i32_coerced_or_null(&self) -> Option<i32> {
        self.coerced_or_null()
    }

    fn i32_coerced(&self) -> Result<i32> {
        self.coerced()
    }

    fn u32_coerced_or_null(&self) -> Option<u32> {
        self.coerced_or_null()
    }

    fn u32_coerced(&self) -> Result<u32> {
        self.coerced()
    }

    fn i64_coerced_or_null(&self) -> Option<i64> {
        self.coerced_or_null()
    }

    fn i64_coerced(&self) -> Result<i64> {
        self.coerced()
    }

    fn u64_coerced_or_null(&self) -> Option<u64> {
        self.coerced_or_null()
    }

    fn u64_coerced(&self) -> Result<u64> {
        self.coerced()
    }

    fn f32_coerced_or_null(&self) -> Option<f32> {
        self.coerced_or_null()
    }

    fn f32_coerced(&self) -> Result<f32> {
        self.coerced()
    }

    fn f64_coerced_or_null(&self) -> Option<f64> {
        self.coerced_or_null()
    }

    fn f64_coerced(&self) -> Result<f64> {
        self.coerced()
    }

    fn decimal_coerced_or_null(&self) -> Option<Decimal> {
        self.coerced_or_null()
    }

    fn decimal_coerced(&self) -> Result<Decimal> {
        self.coerced()
    }
}

impl CoercionExt for Value {
    fn coerced_or_null<T: Coercible>(&self) -> Option<T> {
        match self {
            Value::String(text) => T::parse_invariant(text),
            other => T::from_json(other),
        }
    }
}
