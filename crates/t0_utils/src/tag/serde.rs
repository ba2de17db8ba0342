//! `serde` support for [`PackedId`].
//!
//! Human-readable formats write a printable tag as its four-character string
//! and anything else as the packed integer. Binary formats always write the
//! integer. Both forms are accepted when reading.

use core::fmt;

use serde_core::de::{self, Deserialize, Deserializer, Unexpected, Visitor};
use serde_core::ser::{Serialize, Serializer};

use super::PackedId;

impl Serialize for PackedId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() && self.is_printable() {
            let bytes = self.to_bytes();
            if let Ok(text) = core::str::from_utf8(&bytes) {
                return serializer.serialize_str(text);
            }
        }
        serializer.serialize_u32(self.to_bits())
    }
}

struct PackedIdVisitor;

impl<'de> Visitor<'de> for PackedIdVisitor {
    type Value = PackedId;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a four-character tag or a 32-bit packed id")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<PackedId, E> {
        match u32::try_from(v) {
            Ok(bits) => Ok(PackedId::from_bits(bits)),
            Err(_) => Err(E::invalid_value(Unexpected::Unsigned(v), &self)),
        }
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<PackedId, E> {
        match u32::try_from(v) {
            Ok(bits) => Ok(PackedId::from_bits(bits)),
            Err(_) => Err(E::invalid_value(Unexpected::Signed(v), &self)),
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<PackedId, E> {
        self.visit_bytes(v.as_bytes())
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<PackedId, E> {
        PackedId::try_from(v).map_err(|_| E::invalid_length(v.len(), &self))
    }
}

impl<'de> Deserialize<'de> for PackedId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            deserializer.deserialize_any(PackedIdVisitor)
        } else {
            deserializer.deserialize_u32(PackedIdVisitor)
        }
    }
}
