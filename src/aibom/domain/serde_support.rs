use serde::{Deserialize, Deserializer};

/// Reads an explicit `null` the same way as a missing key
///
/// Pair with `#[serde(default)]` so the field also tolerates being absent.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
