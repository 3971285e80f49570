use crate::prelude::*;

///
/// PropertySchema
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PropertySchema {
    pub name: String,

    #[serde(rename = "type")]
    pub ty: PropertyType,
}
