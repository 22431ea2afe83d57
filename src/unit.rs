#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

//! Recognises the unit payload by how it serializes, so `()` and `&()` both
//! count as "no value" without needing `'static` type checks.

use serde::ser::{self, Impossible, Serialize, Serializer};
use std::fmt;

/// True when `value` serializes as the unit value `()`.
pub fn is_unit<T: Serialize + ?Sized>(value: &T) -> bool {
    value.serialize(UnitCheck).unwrap_or(false)
}

struct UnitCheck;

/// Returned as soon as a compound value starts, which is never unit.
#[derive(Debug, thiserror::Error)]
#[error("value is not unit")]
struct NotUnit;

impl ser::Error for NotUnit {
    fn custom<T: fmt::Display>(_msg: T) -> Self {
        Self
    }
}

macro_rules! scalar_is_not_unit {
    ($($method:ident($ty:ty)),* $(,)?) => {
        $(
            fn $method(self, _: $ty) -> Result<bool, NotUnit> {
                Ok(false)
            }
        )*
    };
}

impl Serializer for UnitCheck {
    type Ok = bool;
    type Error = NotUnit;
    type SerializeSeq = Impossible<bool, NotUnit>;
    type SerializeTuple = Impossible<bool, NotUnit>;
    type SerializeTupleStruct = Impossible<bool, NotUnit>;
    type SerializeTupleVariant = Impossible<bool, NotUnit>;
    type SerializeMap = Impossible<bool, NotUnit>;
    type SerializeStruct = Impossible<bool, NotUnit>;
    type SerializeStructVariant = Impossible<bool, NotUnit>;

    scalar_is_not_unit! {
        serialize_bool(bool),
        serialize_i8(i8),
        serialize_i16(i16),
        serialize_i32(i32),
        serialize_i64(i64),
        serialize_i128(i128),
        serialize_u8(u8),
        serialize_u16(u16),
        serialize_u32(u32),
        serialize_u64(u64),
        serialize_u128(u128),
        serialize_f32(f32),
        serialize_f64(f64),
        serialize_char(char),
        serialize_str(&str),
        serialize_bytes(&[u8]),
        serialize_unit_struct(&'static str),
    }

    fn serialize_unit(self) -> Result<bool, NotUnit> {
        Ok(true)
    }

    fn serialize_none(self) -> Result<bool, NotUnit> {
        Ok(false)
    }

    fn serialize_some<T: Serialize + ?Sized>(self, _: &T) -> Result<bool, NotUnit> {
        Ok(false)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
    ) -> Result<bool, NotUnit> {
        Ok(false)
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _value: &T,
    ) -> Result<bool, NotUnit> {
        Ok(false)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<bool, NotUnit> {
        Ok(false)
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq, NotUnit> {
        Err(NotUnit)
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple, NotUnit> {
        Err(NotUnit)
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct, NotUnit> {
        Err(NotUnit)
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant, NotUnit> {
        Err(NotUnit)
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap, NotUnit> {
        Err(NotUnit)
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStruct, NotUnit> {
        Err(NotUnit)
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant, NotUnit> {
        Err(NotUnit)
    }

    fn collect_str<T: fmt::Display + ?Sized>(self, _: &T) -> Result<bool, NotUnit> {
        Ok(false)
    }
}
