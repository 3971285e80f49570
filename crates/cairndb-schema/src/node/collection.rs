use crate::prelude::*;

///
/// CollectionSchema
///
/// Full declared shape of one storable collection. Constructed by an
/// external loader from a serialized definition and never mutated here;
/// held for the lifetime of a database-open session.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CollectionSchema {
    pub name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<PropertySchema>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub indexes: Vec<IndexSchema>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<LinkSchema>,
}

impl CollectionSchema {
    // lookup
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&PropertySchema> {
        self.properties.iter().find(|p| p.name == name)
    }
}

///
/// TESTS
///
