//! Connection string encoding
//!
//! Serializes [`ConnectionParams`] into the libpq keyword/value format,
//! e.g. `host=localhost port=5432 dbname=test`.

use super::params::ConnectionParams;

/// Encodes connection parameters as space-separated `key=value` pairs.
///
/// Options with an empty value are left out entirely, so an absent port or a
/// blank password disappear from the result. An empty mapping encodes to an
/// empty string.
pub fn params_to_string(params: &ConnectionParams) -> String {
    params
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join(" ")
}
