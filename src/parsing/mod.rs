//! Parsers for the non-JSON payloads the client handles.
//!
//! - [`xml`]: row extraction from the registry XML and the error envelope
//! - [`repair`]: encoding and escaping repair of raw disclosure XML
//! - [`viewer`]: viewer parameters and link rewriting for rendered HTML
//! - `daily`: rows of the daily disclosure listing page (feature `daily`)

#[cfg(feature = "daily")]
pub mod daily;
pub mod repair;
pub mod viewer;
pub mod xml;
