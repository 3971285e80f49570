//! Schema descriptions for CairnDB collections and the per-index decision
//! logic that determines whether a live backend index still realizes its
//! declaration.
//!
//! The loader defines *what exists*; the storage adapter reports *what is
//! there*. Everything in between is a pure comparison over immutable
//! values: no I/O, no shared state, safe to call from any thread.

pub mod error;
pub mod node;
pub mod physical;
pub mod types;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
///

pub mod prelude {
    pub use crate::{
        error::SchemaError,
        node::{CollectionSchema, IndexProperty, IndexSchema, LinkSchema, PropertySchema},
        physical::{KeyPath, PhysicalIndex},
        types::{IndexStrategy, PropertyType},
    };
    pub use serde::{Deserialize, Serialize};
}
