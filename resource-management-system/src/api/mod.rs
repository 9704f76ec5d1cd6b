use std::str::FromStr;

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use uuid::Uuid;

pub mod dtos;
pub mod resource;
pub mod response;

fn extract_uuid(s: &str) -> Result<Uuid, HttpResponse> {
    Uuid::from_str(s).map_err(|e| {
        response::error(
            StatusCode::BAD_REQUEST,
            &format!(r#"error when parse uuid from "{s}": {e}"#),
        )
    })
}
