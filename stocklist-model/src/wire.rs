//! Serde helpers for the catalog API wire format.

use serde::{Deserialize, Deserializer};

/// Treat an explicit JSON `null` like an absent key. Pair with
/// `#[serde(default)]` so both spellings of "missing" decode the same.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
