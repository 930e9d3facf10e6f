use crate::config::AppConfig;
use crate::core::handlers;
use crate::core::response::ResponseFormatter;
use crate::domain::ports::PersonStore;
use crate::utils::error::{ApiError, Result};
use lambda_http::http::Method;
use lambda_http::{Body, Request, RequestExt, Response};
use tracing::Instrument;

pub const ID_PARAMETER: &str = "id";

/// Entry point for gateway requests. Owns the store and the formatter so each
/// invocation only borrows them.
pub struct Router<S> {
    store: S,
    formatter: ResponseFormatter,
}

impl<S: PersonStore> Router<S> {
    pub fn new(store: S, config: &AppConfig) -> Self {
        Self {
            store,
            formatter: ResponseFormatter::new(config.cors_allow_origin.clone()),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Handles one request. Every outcome, including failures, becomes a
    /// response; nothing is left for the runtime to report.
    pub async fn handle(&self, event: Request) -> Response<Body> {
        let request_id = event
            .lambda_context_ref()
            .map(|ctx| ctx.request_id.as_str())
            .unwrap_or("-");
        let span = tracing::info_span!(
            "request",
            request_id = %request_id,
            method = %event.method(),
            path = %event.uri().path(),
        );

        async {
            let params = event.path_parameters();
            let id = params.first(ID_PARAMETER).filter(|id| !id.is_empty());
            tracing::info!("Received request (id: {:?})", id);

            let result = self.route(event.method(), id, event.body().as_ref()).await;

            result.unwrap_or_else(|error| self.formatter.failure(&error))
        }
        .instrument(span)
        .await
    }

    async fn route(&self, method: &Method, id: Option<&str>, body: &[u8]) -> Result<Response<Body>> {
        let store = &self.store;
        let reply = match *method {
            Method::GET => match id {
                None => handlers::list_people(store).await?,
                Some(id) => handlers::get_person(store, id).await?,
            },
            Method::POST => handlers::create_person(store, body).await?,
            Method::PUT => handlers::update_person(store, id, body).await?,
            Method::DELETE => handlers::delete_person(store, id).await?,
            Method::OPTIONS if self.formatter.cors_enabled() => {
                return self.formatter.preflight();
            }
            _ => return Err(ApiError::MethodNotAllowed(method.to_string())),
        };

        self.formatter.success(reply)
    }
}
