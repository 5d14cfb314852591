use thiserror::Error;

#[derive(Error, Debug)]
/// Errors raised by the library.
pub enum FError {
    #[error("The following error occurred: {0}")]
    Generic(String),
    #[error("The record #{0} has an invalid '{1}' field: {2}")]
    InvalidInput(usize, String, String),
    #[error("The argument '{0}' is not valid: {1}")]
    InvalidArgument(String, String),
    #[error("An error occurred when exporting the data: {0}")]
    Export(String),
}
