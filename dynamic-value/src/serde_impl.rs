//! `serde::Serialize` for [`Value`].

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::storage::Storage;
use crate::Value;

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &*self.storage() {
            Storage::Null => serializer.serialize_unit(),
            Storage::Int(v) => serializer.serialize_i32(*v),
            Storage::UInt(v) => serializer.serialize_u32(*v),
            Storage::Long(v) => serializer.serialize_i64(*v),
            Storage::ULong(v) => serializer.serialize_u64(*v),
            Storage::Double(v) => serializer.serialize_f64(*v),
            Storage::Bool(v) => serializer.serialize_bool(*v),
            Storage::String(s) => serializer.serialize_str(s),
            Storage::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Storage::Map(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for slot in map.iter() {
                    out.serialize_entry(&slot.key, &slot.value)?;
                }
                out.end()
            }
        }
    }
}
