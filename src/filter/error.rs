use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Unknown filter field: {0}")]
    UnknownField(String),

    #[error("Invalid value for filter field '{field}': {value}")]
    TypeCoercion { field: String, value: String },
}
