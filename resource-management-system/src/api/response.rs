use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use domain_resource::exception::ResourceException;
use serde::Serialize;

/// Envelope every endpoint answers with.
#[derive(Debug, Serialize)]
pub struct ResponseBody<T: Serialize> {
    pub status: ResponseStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Ok,
    Error,
}

pub fn success<T: Serialize>(message: &str, data: Option<T>) -> HttpResponse {
    HttpResponse::Ok().json(ResponseBody {
        status: ResponseStatus::Ok,
        message: message.to_owned(),
        data,
    })
}

pub fn error(code: StatusCode, message: &str) -> HttpResponse {
    HttpResponse::build(code).json(ResponseBody::<()> {
        status: ResponseStatus::Error,
        message: message.to_owned(),
        data: None,
    })
}

pub fn from_exception(e: &ResourceException) -> HttpResponse {
    let code = match e {
        ResourceException::NotFound { .. } => StatusCode::NOT_FOUND,
        ResourceException::InvalidRequest { .. } => StatusCode::BAD_REQUEST,
        ResourceException::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    };
    error(code, &e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_envelope_omits_data() {
        let body = ResponseBody::<()> {
            status: ResponseStatus::Error,
            message: "boom".to_owned(),
            data: None,
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({"status": "error", "message": "boom"}));
    }

    #[test]
    fn success_envelope_carries_data() {
        let body = ResponseBody {
            status: ResponseStatus::Ok,
            message: "Updated".to_owned(),
            data: Some(vec!["a", "b"]),
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"status": "ok", "message": "Updated", "data": ["a", "b"]})
        );
    }
}
