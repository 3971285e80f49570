use thiserror::Error as ThisError;

///
/// SchemaError
///
/// Raised when an index declaration cannot be resolved against its owning
/// collection. A well-formed schema never produces one.
///

#[derive(Debug, ThisError)]
pub enum SchemaError {
    #[error("index '{index}' references unknown property '{property}'")]
    UnknownIndexProperty { index: String, property: String },
}
