//! PostgreSQL connection URL conversion
//!
//! This module converts connection URLs into libpq keyword/value strings:
//! - URL decoding into connection parameters
//! - Connection parameter encoding
//! - The combined URL to connection string conversion

pub mod decoder;
pub mod encoder;
pub mod params;

pub use decoder::{POSTGRES_SCHEME, url_to_params};
pub use encoder::params_to_string;
pub use params::ConnectionParams;

use crate::core::errors::ConnInfoResult;

/// Converts a connection URL into a libpq connection string.
///
/// ```
/// let conninfo = pg_url2conninfo::parse_url("postgres://bob@localhost/mydb").unwrap();
/// assert_eq!(conninfo, "dbname=mydb host=localhost user=bob");
/// ```
///
/// A bare `postgres://` converts to an empty string, leaving every option to
/// the client's defaults.
pub fn parse_url(url: &str) -> ConnInfoResult<String> {
    let params = url_to_params(url)?;
    Ok(params_to_string(&params))
}
