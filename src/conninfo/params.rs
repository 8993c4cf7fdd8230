//! Connection parameter mapping
//!
//! The intermediate representation between a connection URL and a libpq
//! keyword/value connection string.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Placeholder written in place of a password by [`ConnectionParams::redacted`]
pub const REDACTED_PASSWORD: &str = "********";

/// Mapping from libpq option name to option value
///
/// Keys are kept sorted, so the encoded string lists options in lexicographic
/// order. Callers should not depend on that order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ConnectionParams {
    options: BTreeMap<String, String>,
}

impl ConnectionParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }

    /// Sets an option, returning the value it replaced
    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) -> Option<String> {
        self.options.insert(key.into(), value.into())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.options.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.options.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Replaces a non-empty password with [`REDACTED_PASSWORD`]
    pub fn redact_password(&mut self) {
        if let Some(password) = self.options.get_mut("password") {
            if !password.is_empty() {
                *password = REDACTED_PASSWORD.to_string();
            }
        }
    }

    /// Encodes the parameters with any non-empty password masked.
    ///
    /// Safe to log: the output never contains the original password.
    pub fn redacted(&self) -> String {
        let mut masked = self.clone();
        masked.redact_password();
        super::encoder::params_to_string(&masked)
    }
}

impl fmt::Display for ConnectionParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&super::encoder::params_to_string(self))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ConnectionParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        params.extend(iter);
        params
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for ConnectionParams {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for ConnectionParams {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.options.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_insert_replaces_and_returns_previous() {
        let mut params = ConnectionParams::new();
        assert!(params.is_empty());
        assert_eq!(params.insert("dbname", "db"), None);
        assert_eq!(params.insert("dbname", "other"), Some("db".to_string()));
        assert_eq!(params.get("dbname"), Some("other"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_redacted_masks_password() {
        let params: ConnectionParams =
            [("user", "bob"), ("password", "secret"), ("host", "db.local")]
                .into_iter()
                .collect();

        let redacted = params.redacted();
        assert!(!redacted.contains("secret"));
        assert!(redacted.contains("password=********"));
        assert!(redacted.contains("user=bob"));
        // Original is untouched
        assert_eq!(params.get("password"), Some("secret"));
    }

    #[test]
    fn test_redacted_leaves_blank_password_out() {
        let params: ConnectionParams = [("user", "bob"), ("password", "")].into_iter().collect();
        assert_eq!(params.redacted(), "user=bob");
    }

    #[test]
    fn test_redact_password_in_place() {
        let mut params: ConnectionParams = [("user", "bob"), ("password", "secret")]
            .into_iter()
            .collect();
        params.redact_password();
        assert_eq!(params.get("password"), Some(REDACTED_PASSWORD));
        assert_eq!(params.get("user"), Some("bob"));

        let mut blank: ConnectionParams = [("password", "")].into_iter().collect();
        blank.redact_password();
        assert_eq!(blank.get("password"), Some(""));

        let mut absent: ConnectionParams = [("user", "bob")].into_iter().collect();
        absent.redact_password();
        assert!(!absent.contains_key("password"));
    }

    #[test]
    fn test_serializes_as_flat_object() {
        let params: ConnectionParams = [("host", "localhost"), ("port", "5432")]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(json, r#"{"host":"localhost","port":"5432"}"#);
    }

    #[test]
    fn test_display_matches_encoder() {
        let params: ConnectionParams = [("dbname", "mydb"), ("host", "h")].into_iter().collect();
        assert_eq!(params.to_string(), "dbname=mydb host=h");
    }
}
