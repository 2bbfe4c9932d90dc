//! Serialize `VariableList<VariableList<u8, M>, N>` as a list of 0x-prefixed hex strings.
use crate::VariableList;
use serde::ser::SerializeSeq;
use serde::{Deserializer, Serializer};
use ::serde_utils::list_of_bytes_lists::ListOfBytesListVisitor;
use typenum::Unsigned;

pub fn serialize<S, M, N>(
    lists: &VariableList<VariableList<u8, M>, N>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    M: Unsigned,
    N: Unsigned,
{
    let mut seq = serializer.serialize_seq(Some(lists.len()))?;
    for list in lists.iter() {
        seq.serialize_element(&::serde_utils::hex::encode(&list[..]))?;
    }
    seq.end()
}

/// Fails if any inner list is longer than `M` or there are more than `N` of them.
pub fn deserialize<'de, D, M, N>(
    deserializer: D,
) -> Result<VariableList<VariableList<u8, M>, N>, D::Error>
where
    D: Deserializer<'de>,
    M: Unsigned,
    N: Unsigned,
{
    let lists = deserializer
        .deserialize_seq(ListOfBytesListVisitor)?
        .into_iter()
        .map(VariableList::new)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| serde::de::Error::custom(format!("invalid byte list: {:?}", e)))?;

    VariableList::new(lists)
        .map_err(|e| serde::de::Error::custom(format!("invalid list of byte lists: {:?}", e)))
}
