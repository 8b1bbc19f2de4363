//! User record normalization.

use dataproc_model::{NormalizedUserData, RawUserData, Result};

/// Field holding the display name in a raw user record.
pub const NAME_FIELD: &str = "name";

/// Reduces a raw user record to its identifier and lower-cased display name.
///
/// The identifier is passed through untouched. A missing `name` field
/// normalizes to an empty string; a `name` that is not a string is a
/// `TypeMismatch` error.
pub fn process_user_data<I>(id: I, data: &RawUserData) -> Result<NormalizedUserData<I>> {
    // Field count only; names are personal data.
    tracing::trace!(fields = data.len(), "Normalizing user record");

    let name = data.optional_str(NAME_FIELD)?.unwrap_or_default();
    Ok(NormalizedUserData {
        id,
        normalized: name.to_lowercase(),
    })
}
