//! Serialize `FixedVector<u8, N>` as a 0x-prefixed hex string.
use crate::FixedVector;
use serde::{Deserializer, Serializer};
use ::serde_utils::hex::{self, PrefixedHexVisitor};
use typenum::Unsigned;

pub fn serialize<S, N>(bytes: &FixedVector<u8, N>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    N: Unsigned,
{
    serializer.serialize_str(&hex::encode(&bytes[..]))
}

pub fn deserialize<'de, D, N>(deserializer: D) -> Result<FixedVector<u8, N>, D::Error>
where
    D: Deserializer<'de>,
    N: Unsigned,
{
    let bytes = deserializer.deserialize_str(PrefixedHexVisitor)?;
    FixedVector::new(bytes)
        .map_err(|e| serde::de::Error::custom(format!("invalid fixed vector: {:?}", e)))
}
