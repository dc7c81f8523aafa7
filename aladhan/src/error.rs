use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Transport failure, non-2xx HTTP status or an undecodable body.
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),
    /// The envelope reported something other than `200`.
    #[error("Aladhan API returned code {code}: {status}")]
    UnexpectedCode { code: u16, status: String },
    /// The envelope was `200` but carried no `data` payload.
    #[error("Aladhan API response for {0} did not contain any data")]
    MissingData(String),
    /// The client was configured with an unusable value.
    #[error("Invalid Aladhan client configuration: {0}")]
    Config(String),
}
