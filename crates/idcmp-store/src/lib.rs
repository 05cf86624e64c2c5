//! In-memory data store for the digital-ID comparison pipeline.
//!
//! Every collection is loaded wholesale from a [`DataSource`] and never
//! patched afterwards; a reload builds a fresh [`DataStore`].
//!
//! [`DataSource`]: idcmp_core::source::DataSource

mod dict;
mod dir;
mod load;
mod store;

pub mod error;

pub use dict::Dictionary;
pub use dir::DirSource;
pub use error::{Error, Result};
pub use load::load;
pub use store::{Collections, DataStore, KeyedRows};
