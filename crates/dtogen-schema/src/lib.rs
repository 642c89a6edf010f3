//! Class metadata consumed by the dtogen engine.
//!
//! The engine never talks to a compiler or a reflection API directly. It reads
//! classes through [`provider::MetadataProvider`], and this crate ships the
//! in-memory [`node::Schema`] implementation loaded from schema files.

pub mod error;
pub mod load;
pub mod node;
pub mod provider;
pub mod types;
pub mod validate;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        err,
        error::ErrorTree,
        node::*,
        provider::MetadataProvider,
        types::{ClassKind, DEFAULT_ID_TYPE},
    };
    pub use serde::{Deserialize, Serialize};
}

