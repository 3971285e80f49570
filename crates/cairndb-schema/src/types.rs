use crate::prelude::*;
use derive_more::{Display, FromStr};

///
/// PropertyType
///
/// Storage type of a collection property. Variant names are the wire
/// spelling used by serialized schema definitions.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, FromStr, PartialEq, Serialize)]
#[remain::sorted]
pub enum PropertyType {
    Bool,
    BoolList,
    ByteList,
    Double,
    DoubleList,
    Float,
    FloatList,
    Int,
    IntList,
    Long,
    LongList,
    String,
    StringList,
}

impl PropertyType {
    /// Whether values of this type are lists of elements rather than
    /// single scalars. List-ness is derived from the variant, never
    /// stored separately.
    #[must_use]
    pub const fn is_list(self) -> bool {
        matches!(
            self,
            Self::BoolList
                | Self::ByteList
                | Self::DoubleList
                | Self::FloatList
                | Self::IntList
                | Self::LongList
                | Self::StringList
        )
    }
}

///
/// IndexStrategy
///
/// How an index component represents its property physically: the raw
/// value, a hash of the whole value, or a hash per list element.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, FromStr, PartialEq, Serialize)]
#[remain::sorted]
pub enum IndexStrategy {
    Hash,
    HashElements,
    Value,
}

///
/// TESTS
///
