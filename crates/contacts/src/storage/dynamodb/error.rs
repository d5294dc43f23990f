//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `RepositoryError` from `contacts_core::storage`,
//! keeping the SDK's own message so it can be reported to the caller.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::scan::ScanError;
use aws_sdk_dynamodb::operation::update_item::UpdateItemError;
use contacts_core::storage::RepositoryError;

/// Requests that never got a response from DynamoDB.
fn connection_error<E, R>(err: &SdkError<E, R>) -> Option<RepositoryError>
where
    E: std::error::Error + 'static,
    R: Debug,
{
    match err {
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => Some(
            RepositoryError::ConnectionFailed(DisplayErrorContext(err).to_string()),
        ),
        _ => None,
    }
}

fn describe(err: &(impl std::error::Error + 'static)) -> String {
    DisplayErrorContext(err).to_string()
}

/// Map a PutItem SDK error to RepositoryError.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
) -> RepositoryError {
    if let Some(error) = connection_error(&err) {
        return error;
    }
    match err.into_service_error() {
        PutItemError::ResourceNotFoundException(e) => RepositoryError::TableNotFound(describe(&e)),
        PutItemError::ProvisionedThroughputExceededException(e) => {
            RepositoryError::Throttled(describe(&e))
        }
        PutItemError::RequestLimitExceeded(e) => RepositoryError::Throttled(describe(&e)),
        err => RepositoryError::QueryFailed(describe(&err)),
    }
}

/// Map a Scan SDK error to RepositoryError.
pub fn map_scan_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<ScanError, R>,
) -> RepositoryError {
    if let Some(error) = connection_error(&err) {
        return error;
    }
    match err.into_service_error() {
        ScanError::ResourceNotFoundException(e) => RepositoryError::TableNotFound(describe(&e)),
        ScanError::ProvisionedThroughputExceededException(e) => {
            RepositoryError::Throttled(describe(&e))
        }
        ScanError::RequestLimitExceeded(e) => RepositoryError::Throttled(describe(&e)),
        err => RepositoryError::QueryFailed(describe(&err)),
    }
}

/// Map an UpdateItem SDK error to RepositoryError.
pub fn map_update_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<UpdateItemError, R>,
) -> RepositoryError {
    if let Some(error) = connection_error(&err) {
        return error;
    }
    match err.into_service_error() {
        UpdateItemError::ResourceNotFoundException(e) => {
            RepositoryError::TableNotFound(describe(&e))
        }
        UpdateItemError::ProvisionedThroughputExceededException(e) => {
            RepositoryError::Throttled(describe(&e))
        }
        UpdateItemError::RequestLimitExceeded(e) => RepositoryError::Throttled(describe(&e)),
        err => RepositoryError::QueryFailed(describe(&err)),
    }
}

/// Map a DeleteItem SDK error to RepositoryError.
pub fn map_delete_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DeleteItemError, R>,
) -> RepositoryError {
    if let Some(error) = connection_error(&err) {
        return error;
    }
    match err.into_service_error() {
        DeleteItemError::ResourceNotFoundException(e) => {
            RepositoryError::TableNotFound(describe(&e))
        }
        DeleteItemError::ProvisionedThroughputExceededException(e) => {
            RepositoryError::Throttled(describe(&e))
        }
        DeleteItemError::RequestLimitExceeded(e) => RepositoryError::Throttled(describe(&e)),
        err => RepositoryError::QueryFailed(describe(&err)),
    }
}
