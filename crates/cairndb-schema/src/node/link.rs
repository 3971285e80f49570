use crate::prelude::*;

///
/// LinkSchema
///
/// Declared link from the owning collection to `target`. Carries no
/// matching logic; only the physical store-name derivation.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct LinkSchema {
    pub name: String,
    pub target: String,
}

impl LinkSchema {
    /// Physical store identifier for this link's entries.
    ///
    /// Uniqueness across all links of a database is a schema-design
    /// precondition, not checked here.
    #[must_use]
    pub fn store_name(&self, source: &str) -> String {
        format!("_{source}_{}_{}", self.target, self.name)
    }
}

///
/// TESTS
///
