//! AWS Lambda entry point.

use contacts_core::dispatch::{ContactEvent, ContactResponse};
use lambda_runtime::{service_fn, LambdaEvent};

use crate::{handlers, state::AppState};

/// Handles a single invocation.
pub async fn handle_event(state: &AppState, event: LambdaEvent<ContactEvent>) -> ContactResponse {
    let (event, context) = event.into_parts();

    tracing::info!(
        request_id = %context.request_id,
        method = %event.http_method,
        "Handling contact request"
    );

    handlers::dispatch(state.repository(), &event).await
}

/// Runs the Lambda runtime loop until the platform shuts the process down.
pub async fn run(state: AppState) -> anyhow::Result<()> {
    let state = &state;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<ContactEvent>| async move {
        Ok::<_, lambda_runtime::Error>(handle_event(state, event).await)
    }))
    .await
    .map_err(|e| anyhow::anyhow!(e))
}
