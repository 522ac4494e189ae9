// error.rs
use rocket::http::Status;
use rocket::response::{self, Responder};
use rocket::serde::json::{json, Json};
use rocket::Request;
use thiserror::Error;

use crate::util::BlogId;

/// Errors surfaced by the blog routes.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ApiError {
    #[error("blog {0} not found")]
    BlogNotFound(BlogId),
    #[error("count must not be negative, got {0}")]
    NegativeCount(i64),
    #[error("count must not exceed {max}, got {count}")]
    CountTooLarge { count: i64, max: usize },
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            ApiError::BlogNotFound(_) => Status::NotFound,
            ApiError::NegativeCount(_) | ApiError::CountTooLarge { .. } => Status::BadRequest,
        }
    }
}

/// Renders as `{"error": "<message>"}` with the mapped status.
impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        let body = Json(json!({ "error": self.to_string() }));
        (self.status(), body).respond_to(req)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::BlogNotFound("x".into()).status(), Status::NotFound);
        assert_eq!(ApiError::NegativeCount(-1).status(), Status::BadRequest);
        assert_eq!(
            ApiError::CountTooLarge { count: 20_000, max: 10_000 }.status(),
            Status::BadRequest
        );
        assert_eq!(
            ApiError::NegativeCount(-3).to_string(),
            "count must not be negative, got -3"
        );
    }
}
