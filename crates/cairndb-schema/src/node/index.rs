use crate::prelude::*;
use std::{
    fmt::{self, Display},
    ops::Not,
};

///
/// IndexSchema
///
/// Declaration of one secondary index. Property order is significant: it
/// defines the composite key-path order.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct IndexSchema {
    pub name: String,

    #[serde(default, skip_serializing_if = "Not::not")]
    pub unique: bool,

    pub properties: Vec<IndexProperty>,
}

impl IndexSchema {
    /// Physical key path derived from the declared property order.
    ///
    /// A single-property index yields a scalar path, never a one-element
    /// composite; the two are distinct physical shapes.
    #[must_use]
    pub fn key_path(&self) -> KeyPath {
        match self.properties.as_slice() {
            [single] => KeyPath::Scalar(single.name.clone()),
            many => KeyPath::Composite(many.iter().map(|ip| ip.name.clone()).collect()),
        }
    }

    /// Whether the backend must create one index record per list element.
    ///
    /// Hash strategies collapse a list into hashed entries of their own, so
    /// only a raw-value component over a list-typed property forces native
    /// multi-entry behavior. Any one qualifying component suffices.
    pub fn is_multi_entry(&self, collection: &CollectionSchema) -> Result<bool, SchemaError> {
        for ip in &self.properties {
            let property = collection.property(&ip.name).ok_or_else(|| {
                SchemaError::UnknownIndexProperty {
                    index: self.name.clone(),
                    property: ip.name.clone(),
                }
            })?;

            if ip.strategy == IndexStrategy::Value && property.ty.is_list() {
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// Strict equivalence between this declaration and a live backend index.
    ///
    /// True iff name, uniqueness, multi-entry flag, and key path all agree;
    /// there is no notion of a partial match. The only failure is an index
    /// property that does not resolve in `collection`.
    pub fn matches(
        &self,
        collection: &CollectionSchema,
        physical: &PhysicalIndex,
    ) -> Result<bool, SchemaError> {
        let multi_entry = self.is_multi_entry(collection)?;

        Ok(physical.name == self.name
            && physical.multi_entry == multi_entry
            && physical.unique == self.unique
            && physical.key_path == self.key_path())
    }
}

impl Display for IndexSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let properties = self
            .properties
            .iter()
            .map(|ip| ip.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        if self.unique {
            write!(f, "UNIQUE {}({properties})", self.name)
        } else {
            write!(f, "{}({properties})", self.name)
        }
    }
}

///
/// IndexProperty
///
/// One component of a (possibly composite) index. `name` must resolve to a
/// property of the owning collection.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct IndexProperty {
    pub name: String,

    #[serde(rename = "type")]
    pub strategy: IndexStrategy,

    /// Case folding hint consumed by query execution; matching never reads it.
    #[serde(rename = "caseSensitive")]
    pub case_sensitive: bool,
}

///
/// TESTS
///
