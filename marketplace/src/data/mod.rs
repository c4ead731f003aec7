pub mod application;
pub mod credentials;
pub mod project;
pub mod user;

use serde::{Deserialize, Deserializer};

/// Deserialize a field that the backend may send as `null`, falling back to the type's default.
/// Pair with `#[serde(default)]` so a missing field behaves the same way.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Resolve the key of a backend document, which may be written as `id`, `_id` or both. `id` wins
/// when both are present and non-blank.
/// # Errors
/// This function will return an error message if neither key holds a value
pub(crate) fn document_id(
    id: Option<String>,
    object_id: Option<String>,
) -> Result<String, String> {
    id.into_iter()
        .chain(object_id)
        .find(|value| !value.trim().is_empty())
        .ok_or_else(|| "document has neither an `id` nor an `_id`".to_owned())
}
