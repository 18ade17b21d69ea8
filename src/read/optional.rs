//! Null-tolerant navigation and scalar reads.
//!
//! Every method here answers `None` for a node of the wrong kind, a missing
//! key, an out-of-range index, or an explicit JSON `null`. Callers cannot tell
//! these apart, and none of them is an error.

use std::iter::FusedIterator;
use std::slice;

use rust_decimal::Decimal;
use serde_json::{map, Value};
use time::{OffsetDateTime, PrimitiveDateTime};
use uuid::Uuid;

use crate::read::scalar::{FromJson, ValueKind};

/// Restartable iterator over array elements in source order. Clone it to
/// enumerate again from the same position.
#[derive(Debug, Clone)]
pub struct ArrayElements<'a> {
    inner: slice::Iter<'a, Value>,
}

impl<'a> ArrayElements<'a> {
    fn new(items: &'a [Value]) -> Self {
        Self {
            inner: items.iter(),
        }
    }
}

impl<'a> Iterator for ArrayElements<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for ArrayElements<'_> {}
impl FusedIterator for ArrayElements<'_> {}

/// Restartable iterator over object entries in insertion order.
#[derive(Debug, Clone)]
pub struct ObjectEntries<'a> {
    inner: Option<map::Iter<'a>>,
}

impl<'a> Iterator for ObjectEntries<'a> {
    type Item = (&'a str, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .as_mut()?
            .next()
            .map(|(key, value)| (key.as_str(), value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner
            .as_ref()
            .map_or((0, Some(0)), Iterator::size_hint)
    }
}

impl ExactSizeIterator for ObjectEntries<'_> {}
impl FusedIterator for ObjectEntries<'_> {}

pub trait OptionalExt {
    fn kind(&self) -> ValueKind;

    /// The child under `name`, unless this is not an object or the child is
    /// missing or `null`.
    fn property_or_null(&self, name: &str) -> Option<&Value>;

    /// The element at `index`, unless this is not an array, the index is out
    /// of bounds, or the element is `null`.
    fn element_or_null(&self, index: usize) -> Option<&Value>;

    /// Like [`element_or_null`](Self::element_or_null), taking a signed index;
    /// negative indices are out of bounds.
    fn element_or_null_signed(&self, index: i64) -> Option<&Value>;

    fn array_or_null(&self) -> Option<ArrayElements<'_>>;
    fn array_or_empty(&self) -> ArrayElements<'_>;
    fn object_or_null(&self) -> Option<ObjectEntries<'_>>;
    fn object_or_empty(&self) -> ObjectEntries<'_>;

    /// Generic scalar read through the type's [`FromJson`] descriptor.
    fn value_or_null<'a, T: FromJson<'a>>(&'a self) -> Option<T>;

    fn bool_or_null(&self) -> Option<bool> {
        self.value_or_null()
    }

    fn u8_or_null(&self) -> Option<u8> {
        self.value_or_null()
    }

    fn i8_or_null(&self) -> Option<i8> {
        self.value_or_null()
    }

    fn i16_or_null(&self) -> Option<i16> {
        self.value_or_null()
    }

    fn u16_or_null(&self) -> Option<u16> {
        self.value_or_null()
    }

    fn i32_or_null(&self) -> Option<i32> {
        self.value_or_null()
    }

    fn u32_or_null(&self) -> Option<u32> {
        self.value_or_null()
    }

    fn i64_or_null(&self) -> Option<i64> {
        self.value_or_null()
    }

    fn u64_or_null(&self) -> Option<u64> {
        self.value_or_null()
    }

    /// `None` when the number is outside the finite `f32` range.
    fn f32_or_null(&self) -> Option<f32> {
        self.value_or_null()
    }

    fn f64_or_null(&self) -> Option<f64> {
        self.value_or_null()
    }

    fn decimal_or_null(&self) -> Option<Decimal> {
        self.value_or_null()
    }

    fn str_or_null(&self) -> Option<&str> {
        self.value_or_null()
    }

    fn uuid_or_null(&self) -> Option<Uuid> {
        self.value_or_null()
    }

    fn date_time_or_null(&self) -> Option<PrimitiveDateTime> {
        self.value_or_null()
    }

    fn date_time_offset_or_null(&self) -> Option<OffsetDateTime> {
        self.value_or_null()
    }

    fn bytes_from_base64_or_null(&self) -> Option<Vec<u8>> {
        self.value_or_null()
    }
}

impl OptionalExt for Value {
    fn kind(&self) -> ValueKind {
        ValueKind::of(self)
    }

    fn property_or_null(&self, name: &str) -> Option<&Value> {
        self.as_object()?.get(name).filter(|child| !child.is_null())
    }

    fn element_or_null(&self, index: usize) -> Option<&Value> {
        self.as_array()?.get(index).filter(|child| !child.is_null())
    }

    fn element_or_null_signed(&self, index: i64) -> Option<&Value> {
        let index = usize::try_from(index).ok()?;
        self.element_or_null(index)
    }

    fn array_or_null(&self) -> Option<ArrayElements<'_>> {
        self.as_array().map(|items| ArrayElements::new(items))
    }

    fn array_or_empty(&self) -> ArrayElements<'_> {
        self.array_or_null()
            .unwrap_or_else(|| ArrayElements::new(&[]))
    }

    fn object_or_null(&self) -> Option<ObjectEntries<'_>> {
        self.as_object().map(|entries| ObjectEntries {
            inner: Some(entries.iter()),
        })
    }

    fn object_or_empty(&self) -> ObjectEntries<'_> {
        self.object_or_null()
            .unwrap_or(ObjectEntries { inner: None })
    }

    fn value_or_null<'a, T: FromJson<'a>>(&'a self) -> Option<T> {
        T::from_json(self)
    }
}
