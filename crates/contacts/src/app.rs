//! Local HTTP adapter.
//!
//! Serves the dispatcher over plain HTTP so it can be exercised without API
//! Gateway. Requests are translated into the same event shape the gateway
//! produces.

use std::{collections::HashMap, time::Duration};

use axum::{
    extract::{Query, State},
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{any, get},
    Router,
};
use contacts_core::dispatch::ContactEvent;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{handlers, state::AppState};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/livez", get(livez))
        .route("/contacts", any(contacts))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}

/// GET /livez - Basic liveness probe.
async fn livez() -> StatusCode {
    StatusCode::OK
}

/// ANY /contacts - Forwards the request to the dispatcher.
async fn contacts(
    State(state): State<AppState>,
    method: Method,
    Query(params): Query<HashMap<String, String>>,
    body: String,
) -> Response {
    let mut event = ContactEvent::new(method.as_str());
    if !params.is_empty() {
        event.query_string_parameters = Some(params);
    }
    event.body = Some(body);

    let response = handlers::dispatch(state.repository(), &event).await;
    let status =
        StatusCode::from_u16(response.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        response.body,
    )
        .into_response()
}
