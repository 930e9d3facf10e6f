use crate::core::handlers::Reply;
use crate::domain::model::Envelope;
use crate::utils::error::{ApiError, ErrorCategory, Result};
use lambda_http::http::{header, response::Builder, StatusCode};
use lambda_http::{Body, Response};

const JSON_CONTENT_TYPE: &str = "application/json";
const ALLOWED_HEADERS: &str = "Content-Type";
const ALLOWED_METHODS: &str = "OPTIONS, POST, GET, PUT, DELETE";
const PREFLIGHT_MAX_AGE: &str = "3600";

/// Turns handler results into gateway responses.
#[derive(Debug, Clone, Default)]
pub struct ResponseFormatter {
    cors_allow_origin: Option<String>,
}

impl ResponseFormatter {
    pub fn new(cors_allow_origin: Option<String>) -> Self {
        Self { cors_allow_origin }
    }

    pub fn cors_enabled(&self) -> bool {
        self.cors_allow_origin.is_some()
    }

    fn builder(&self, status: StatusCode) -> Builder {
        let builder = Response::builder().status(status);
        match &self.cors_allow_origin {
            Some(origin) => builder
                .header(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin.as_str())
                .header(header::ACCESS_CONTROL_ALLOW_HEADERS, ALLOWED_HEADERS),
            None => builder,
        }
    }

    pub fn success(&self, reply: Reply) -> Result<Response<Body>> {
        let body = serde_json::to_string(&Envelope::success(&reply.payload))
            .map_err(ApiError::Serialization)?;

        let mut builder = self
            .builder(reply.status)
            .header(header::CONTENT_TYPE, JSON_CONTENT_TYPE);
        if let Some(location) = &reply.location {
            builder = builder.header(header::LOCATION, location.as_str());
        }

        Ok(builder.body(Body::Text(body))?)
    }

    /// Error responses carry only the status reason phrase. Server errors
    /// are logged here with their full chain.
    pub fn failure(&self, error: &ApiError) -> Response<Body> {
        let status = error.status();
        match error.category() {
            ErrorCategory::Server => tracing::error!("Request failed: {:?}", error),
            ErrorCategory::Client => tracing::info!("Rejected request: {}", error),
        }

        let body = serde_json::to_string(&Envelope::<()>::failure(error.user_message()))
            .unwrap_or_else(|_| r#"{"data":null,"errorMessage":"Internal Server Error"}"#.into());

        self.builder(status)
            .header(header::CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(Body::Text(body.clone()))
            .unwrap_or_else(|e| {
                tracing::error!("Could not build error response: {}", e);
                let mut response = Response::new(Body::Text(body));
                *response.status_mut() = status;
                response
            })
    }

    /// Answer to a CORS preflight request. No body.
    pub fn preflight(&self) -> Result<Response<Body>> {
        Ok(self
            .builder(StatusCode::OK)
            .header(header::ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS)
            .header(header::ACCESS_CONTROL_MAX_AGE, PREFLIGHT_MAX_AGE)
            .body(Body::Empty)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::handlers::Payload;
    use crate::domain::model::Person;
    use crate::utils::error::StoreError;
    use serde_json::{json, Value};

    fn body_json(response: &Response<Body>) -> Value {
        serde_json::from_slice(response.body().as_ref()).unwrap()
    }

    fn ada() -> Person {
        Person {
            id: "42".to_string(),
            name: "Ada".to_string(),
        }
    }

    #[test]
    fn test_created_reply_has_location() {
        let formatter = ResponseFormatter::default();
        let response = formatter.success(Reply::created(ada())).unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers()[header::LOCATION], "/people/42");
        assert_eq!(response.headers()[header::CONTENT_TYPE], JSON_CONTENT_TYPE);
        assert_eq!(
            body_json(&response),
            json!({"data": {"id": "42", "name": "Ada"}, "errorMessage": null})
        );
    }

    #[test]
    fn test_list_reply_is_array() {
        let formatter = ResponseFormatter::default();
        let response = formatter
            .success(Reply::ok(Payload::Many(vec![ada()])))
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(header::LOCATION).is_none());
        assert_eq!(body_json(&response)["data"], json!([{"id": "42", "name": "Ada"}]));
    }

    #[test]
    fn test_server_failure_is_generic() {
        let formatter = ResponseFormatter::default();
        let error = ApiError::Store(StoreError::Sdk {
            operation: "GetItem",
            message: "secret table arn".to_string(),
        });
        let response = formatter.failure(&error);

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(&response),
            json!({"data": null, "errorMessage": "Internal Server Error"})
        );
    }

    #[test]
    fn test_cors_headers_on_every_response() {
        let formatter = ResponseFormatter::new(Some("https://app.example.com".to_string()));

        let ok = formatter.success(Reply::ok(Payload::One(ada()))).unwrap();
        assert_eq!(
            ok.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "https://app.example.com"
        );

        let failed = formatter.failure(&ApiError::NotFound("x".to_string()));
        assert_eq!(failed.headers()[header::ACCESS_CONTROL_ALLOW_HEADERS], "Content-Type");

        let preflight = formatter.preflight().unwrap();
        assert_eq!(preflight.status(), StatusCode::OK);
        assert_eq!(
            preflight.headers()[header::ACCESS_CONTROL_ALLOW_METHODS],
            ALLOWED_METHODS
        );
        assert_eq!(preflight.headers()[header::ACCESS_CONTROL_MAX_AGE], "3600");
    }

    #[test]
    fn test_no_cors_headers_when_unconfigured() {
        let formatter = ResponseFormatter::default();
        let response = formatter.failure(&ApiError::MethodNotAllowed("PATCH".to_string()));
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }
}
