//! Domain rules for the Livecast overlay server.
//!
//! Nothing in this crate talks to the document store or to HTTP; it holds
//! the defaults, coercion and validation rules shared by `livecast-db` and
//! `livecast-api`.

pub mod coerce;
pub mod error;
pub mod overlay;
pub mod settings;
pub mod stream;
pub mod types;
