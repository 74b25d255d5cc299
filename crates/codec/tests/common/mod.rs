//! Shared value types for the integration tests
//!
//! Decode side: `Record` reads part of its state from the document and the
//! rest from a composite context, handing a slice of that context to each
//! nested child. Encode side: `EncRecord` writes context data into the
//! document and `DecRecord` reads it back with plain serde.

#![allow(dead_code)]

use ctxcodec::{ContextDeserialize, ContextSerialize, MapAccessExt, SerializeStructExt};
use rand::Rng;
use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordContext {
    pub stamp: u64,
    pub int: i64,
    pub string: String,
    pub double: f64,
}

// =============================================================================
// Decode side
// =============================================================================

/// Integer on the wire; the string comes from context
#[derive(Debug, Clone, PartialEq)]
pub struct IntAndStr {
    pub int: i64,
    pub string: String,
}

impl Serialize for IntAndStr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.int.serialize(serializer)
    }
}

impl ContextDeserialize for IntAndStr {
    type Context = String;

    fn deserialize_with_context<'de, D>(deserializer: D, string: String) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(IntAndStr {
            int: i64::deserialize(deserializer)?,
            string,
        })
    }
}

/// Integer list on the wire; the stamp comes from context
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayAndStamp {
    pub array: Vec<i64>,
    pub stamp: u64,
}

impl Serialize for ArrayAndStamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.array.serialize(serializer)
    }
}

impl ContextDeserialize for ArrayAndStamp {
    type Context = u64;

    fn deserialize_with_context<'de, D>(deserializer: D, stamp: u64) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(ArrayAndStamp {
            array: Vec::deserialize(deserializer)?,
            stamp,
        })
    }
}

/// Null on the wire; the number comes from context
#[derive(Debug, Clone, PartialEq)]
pub struct NullAndDouble {
    pub double: f64,
}

impl Serialize for NullAndDouble {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_unit()
    }
}

impl ContextDeserialize for NullAndDouble {
    type Context = f64;

    fn deserialize_with_context<'de, D>(deserializer: D, double: f64) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        <()>::deserialize(deserializer)?;
        Ok(NullAndDouble { double })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub int_and_str: IntAndStr,
    pub array_and_stamp: ArrayAndStamp,
    pub null_and_double: NullAndDouble,
    pub int: i64,
    pub string: String,
}

const RECORD_FIELDS: &[&str] = &["int", "array", "null", "string"];

impl Record {
    pub fn random() -> Self {
        let mut rng = rand::thread_rng();
        let start = rng.gen_range(1i64..5);
        let end = rng.gen_range(6i64..15);
        Record {
            int_and_str: IntAndStr {
                int: rng.gen_range(0..999_999),
                string: uuid::Uuid::new_v4().to_string(),
            },
            array_and_stamp: ArrayAndStamp {
                array: (start..end).collect(),
                stamp: rng.gen_range(0..999_999),
            },
            null_and_double: NullAndDouble {
                double: rng.gen_range(0u32..9_999_999) as f64 / 4.0,
            },
            int: rng.gen_range(0..99_999_999),
            string: uuid::Uuid::new_v4().to_string(),
        }
    }

    /// The context that, together with this record's document, rebuilds it
    pub fn context(&self) -> RecordContext {
        RecordContext {
            stamp: self.array_and_stamp.stamp,
            int: self.int,
            string: self.int_and_str.string.clone(),
            double: self.null_and_double.double,
        }
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Record", 4)?;
        s.serialize_field("int", &self.int_and_str)?;
        s.serialize_field("array", &self.array_and_stamp)?;
        s.serialize_field("null", &self.null_and_double)?;
        s.serialize_field("string", &self.string)?;
        s.end()
    }
}

impl ContextDeserialize for Record {
    type Context = RecordContext;

    fn deserialize_with_context<'de, D>(
        deserializer: D,
        context: RecordContext,
    ) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_struct("Record", RECORD_FIELDS, RecordVisitor(context))
    }
}

struct RecordVisitor(RecordContext);

impl<'de> Visitor<'de> for RecordVisitor {
    type Value = Record;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("struct Record")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Record, A::Error> {
        let ctx = self.0;
        let mut int_and_str = None;
        let mut array_and_stamp = None;
        let mut null_and_double = None;
        let mut string: Option<String> = None;

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "int" => {
                    int_and_str =
                        Some(map.next_value_with_context::<IntAndStr>(ctx.string.clone())?)
                }
                "array" => {
                    array_and_stamp =
                        Some(map.next_value_with_context::<ArrayAndStamp>(ctx.stamp)?)
                }
                "null" => {
                    null_and_double =
                        Some(map.next_value_with_context::<NullAndDouble>(ctx.double)?)
                }
                "string" => string = Some(map.next_value()?),
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        Ok(Record {
            int_and_str: int_and_str.ok_or_else(|| de::Error::missing_field("int"))?,
            array_and_stamp: array_and_stamp.ok_or_else(|| de::Error::missing_field("array"))?,
            null_and_double: null_and_double.ok_or_else(|| de::Error::missing_field("null"))?,
            int: ctx.int,
            string: string.ok_or_else(|| de::Error::missing_field("string"))?,
        })
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Record, A::Error> {
        use ctxcodec::SeqAccessExt;

        let ctx = self.0;
        let int_and_str = seq
            .next_element_with_context::<IntAndStr>(ctx.string)?
            .ok_or_else(|| de::Error::invalid_length(0, &RECORD_EXPECTING))?;
        let array_and_stamp = seq
            .next_element_with_context::<ArrayAndStamp>(ctx.stamp)?
            .ok_or_else(|| de::Error::invalid_length(1, &RECORD_EXPECTING))?;
        let null_and_double = seq
            .next_element_with_context::<NullAndDouble>(ctx.double)?
            .ok_or_else(|| de::Error::invalid_length(2, &RECORD_EXPECTING))?;
        let string: String = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(3, &RECORD_EXPECTING))?;

        Ok(Record {
            int_and_str,
            array_and_stamp,
            null_and_double,
            int: ctx.int,
            string,
        })
    }
}

const RECORD_EXPECTING: &str = "struct Record with 4 elements";

// =============================================================================
// Encode side
// =============================================================================

/// Writes `{"int": .., "string": <context>}`
#[derive(Debug, Clone, PartialEq)]
pub struct EncIntAndStr {
    pub int: i64,
}

impl ContextSerialize for EncIntAndStr {
    type Context = str;

    fn serialize_with_context<S>(&self, serializer: S, context: &str) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("EncIntAndStr", 2)?;
        s.serialize_field("int", &self.int)?;
        s.serialize_field("string", context)?;
        s.end()
    }
}

/// Writes `{"array": [..], "stamp": <context>}`
#[derive(Debug, Clone, PartialEq)]
pub struct EncArrayAndStamp {
    pub array: Vec<i64>,
}

impl ContextSerialize for EncArrayAndStamp {
    type Context = u64;

    fn serialize_with_context<S>(&self, serializer: S, context: &u64) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("EncArrayAndStamp", 2)?;
        s.serialize_field("array", &self.array)?;
        s.serialize_field("stamp", context)?;
        s.end()
    }
}

/// Writes `[null, <context>]`
#[derive(Debug, Clone, PartialEq)]
pub struct EncNullAndDouble;

impl ContextSerialize for EncNullAndDouble {
    type Context = f64;

    fn serialize_with_context<S>(&self, serializer: S, context: &f64) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeTuple;

        let mut t = serializer.serialize_tuple(2)?;
        t.serialize_element(&())?;
        t.serialize_element(context)?;
        t.end()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EncRecord {
    pub int: EncIntAndStr,
    pub array: EncArrayAndStamp,
    pub null: EncNullAndDouble,
    pub string: String,
}

impl ContextSerialize for EncRecord {
    type Context = RecordContext;

    fn serialize_with_context<S>(
        &self,
        serializer: S,
        context: &RecordContext,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("EncRecord", 5)?;
        s.serialize_field_with_context("int", &self.int, context.string.as_str())?;
        s.serialize_field_with_context("array", &self.array, &context.stamp)?;
        s.serialize_field_with_context("null", &self.null, &context.double)?;
        s.serialize_field("simpleInt", &context.int)?;
        s.serialize_field("string", &self.string)?;
        s.end()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DecIntAndStr {
    pub int: i64,
    pub string: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DecArrayAndStamp {
    pub array: Vec<i64>,
    pub stamp: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DecNullAndDouble {
    pub double: f64,
}

impl<'de> Deserialize<'de> for DecNullAndDouble {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let ((), double) = <((), f64)>::deserialize(deserializer)?;
        Ok(DecNullAndDouble { double })
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecRecord {
    pub int: DecIntAndStr,
    pub array: DecArrayAndStamp,
    pub null: DecNullAndDouble,
    pub simple_int: i64,
    pub string: String,
}

impl DecRecord {
    pub fn random() -> Self {
        Record::random().into()
    }

    pub fn enc(&self) -> EncRecord {
        EncRecord {
            int: EncIntAndStr { int: self.int.int },
            array: EncArrayAndStamp {
                array: self.array.array.clone(),
            },
            null: EncNullAndDouble,
            string: self.string.clone(),
        }
    }

    pub fn context(&self) -> RecordContext {
        RecordContext {
            stamp: self.array.stamp,
            int: self.simple_int,
            string: self.int.string.clone(),
            double: self.null.double,
        }
    }
}

impl From<Record> for DecRecord {
    fn from(r: Record) -> Self {
        DecRecord {
            int: DecIntAndStr {
                int: r.int_and_str.int,
                string: r.int_and_str.string,
            },
            array: DecArrayAndStamp {
                array: r.array_and_stamp.array,
                stamp: r.array_and_stamp.stamp,
            },
            null: DecNullAndDouble {
                double: r.null_and_double.double,
            },
            simple_int: r.int,
            string: r.string,
        }
    }
}
