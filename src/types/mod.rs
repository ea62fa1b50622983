// src/types/mod.rs
use serde::{Deserialize, Deserializer};

pub mod analysis;
pub mod response;

/// Read a list that the backend may send as `null` or leave out.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
