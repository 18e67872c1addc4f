use reqwest::{header::InvalidHeaderValue, StatusCode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VernacularError {
    #[error("Request failed: {} {status_text}", .status.as_u16())]
    HttpStatus {
        status: StatusCode,
        status_text: String,
    },
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error(transparent)]
    InvalidHeaderValue(#[from] InvalidHeaderValue),
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
    #[error("SPARQL endpoint URL is not a valid http(s) URL: {0}")]
    EndpointUrlInvalid(String),
    #[error("Not a valid GBIF taxon ID: '{0}'")]
    InvalidTaxonId(String),
}

impl VernacularError {
    /// Builds an `HttpStatus` error from a non-success `reqwest::Response`.
    pub fn from_response(response: &reqwest::Response) -> Self {
        Self::from_status(response.status())
    }

    /// Builds an `HttpStatus` error; codes without a canonical reason read "Unknown status".
    pub fn from_status(status: StatusCode) -> Self {
        let status_text = status
            .canonical_reason()
            .unwrap_or("Unknown status")
            .to_owned();
        VernacularError::HttpStatus {
            status,
            status_text,
        }
    }

    /// Returns the HTTP status code, if the error carries one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            VernacularError::HttpStatus { status, .. } => Some(*status),
            VernacularError::Reqwest(e) => e.status(),
            _ => None,
        }
    }
}
