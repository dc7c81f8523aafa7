use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Transport failure, non-2xx HTTP status or an undecodable body.
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),
    /// The envelope reported something other than `200`.
    #[error("Al-Quran Cloud API returned code {code}: {status}")]
    UnexpectedCode { code: u16, status: String },
    /// The envelope was `200` but carried no `data` payload.
    #[error("Al-Quran Cloud API response for {0} did not contain any data")]
    MissingData(String),
    #[error("Invalid Al-Quran Cloud client configuration: {0}")]
    Config(String),
}
