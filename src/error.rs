use mongodb::{bson, error::Error as DbError};
use rocket::{
    http::{Status, StatusClass},
    response::Responder,
    serde::json::Json,
    Request,
};
use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Db(#[from] DbError),
    #[error(transparent)]
    Bson(#[from] bson::de::Error),
    #[error("Invalid question ID: {0}")]
    InvalidId(#[from] bson::oid::Error),
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Upstream generator failure: {0}")]
    Upstream(String),
    #[error("Unexpected: {0}")]
    Unexpected(String),
}

impl Error {
    pub fn not_found(what: impl std::fmt::Display) -> Self {
        Self::NotFound(format!("{what}"))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Upstream(err.to_string())
    }
}

/// Wire shape of an error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, request: &'r Request<'_>) -> rocket::response::Result<'o> {
        let status = match &self {
            Self::InvalidId(_) | Self::BadRequest(_) => Status::BadRequest,
            Self::NotFound(_) => Status::NotFound,
            Self::Upstream(_) => Status::BadGateway,
            Self::Db(_) | Self::Bson(_) | Self::Unexpected(_) => Status::InternalServerError,
        };
        // Database faults keep their detail in the logs only.
        let message = match &self {
            Self::Db(_) | Self::Bson(_) => "Internal server error".to_string(),
            other => other.to_string(),
        };
        match status.class() {
            StatusClass::ServerError => error!("{self}"),
            _ => warn!("{self}"),
        }
        (status, Json(ErrorBody { error: message })).respond_to(request)
    }
}
