use crate::prelude::*;
use std::fmt::{self, Display};

///
/// KeyPath
///
/// Property name(s) a physical index is built over. A bare name and a
/// one-element composite are distinct key paths; backends treat them as
/// different physical shapes, so equality must never conflate them.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum KeyPath {
    Scalar(String),
    Composite(Vec<String>),
}

impl Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(name) => write!(f, "{name}"),
            Self::Composite(names) => write!(f, "[{}]", names.join(", ")),
        }
    }
}

///
/// PhysicalIndex
///
/// Snapshot of a live backend index, as reported by the storage adapter.
/// Read-only input to matching; the backend owns and mutates the index
/// itself.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PhysicalIndex {
    pub name: String,

    #[serde(rename = "keyPath")]
    pub key_path: KeyPath,

    pub unique: bool,

    #[serde(rename = "multiEntry")]
    pub multi_entry: bool,
}

///
/// TESTS
///
