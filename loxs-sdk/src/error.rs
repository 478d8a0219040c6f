use http_client::HttpError;
use loxs_parser::StructureError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Missing configuration: {0}")]
    MissingConfig(&'static str),

    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Structure definition error: {0}")]
    Structure(#[from] StructureError),
}
