use std::fmt::Debug;

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::scan::ScanError;
use aws_sdk_dynamodb::operation::update_item::UpdateItemError;

use crate::storage::StorageError;

const TABLE_NOT_FOUND: &str = "Table not found";
const THROUGHPUT_EXCEEDED: &str = "Throughput exceeded, please retry";
const REQUEST_LIMIT_EXCEEDED: &str = "Request limit exceeded, please retry";
const INTERNAL_SERVER_ERROR: &str = "DynamoDB internal server error";

fn query_failed(message: &str) -> StorageError {
    StorageError::QueryFailed(message.to_string())
}

// Dispatch and timeout failures never reached DynamoDB.
fn is_transport_error<E, R>(err: &SdkError<E, R>) -> bool {
    matches!(
        err,
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_)
    )
}

pub fn map_get_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<GetItemError, R>,
) -> StorageError {
    if is_transport_error(&err) {
        return StorageError::ConnectionFailed(format!("GetItem failed: {err}"));
    }
    match err.into_service_error() {
        GetItemError::ResourceNotFoundException(_) => query_failed(TABLE_NOT_FOUND),
        GetItemError::ProvisionedThroughputExceededException(_) => {
            query_failed(THROUGHPUT_EXCEEDED)
        }
        GetItemError::RequestLimitExceeded(_) => query_failed(REQUEST_LIMIT_EXCEEDED),
        GetItemError::InternalServerError(_) => query_failed(INTERNAL_SERVER_ERROR),
        err => StorageError::QueryFailed(format!("GetItem failed: {:?}", err)),
    }
}

pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
) -> StorageError {
    if is_transport_error(&err) {
        return StorageError::ConnectionFailed(format!("PutItem failed: {err}"));
    }
    match err.into_service_error() {
        PutItemError::ResourceNotFoundException(_) => query_failed(TABLE_NOT_FOUND),
        PutItemError::ProvisionedThroughputExceededException(_) => {
            query_failed(THROUGHPUT_EXCEEDED)
        }
        PutItemError::RequestLimitExceeded(_) => query_failed(REQUEST_LIMIT_EXCEEDED),
        PutItemError::ItemCollectionSizeLimitExceededException(_) => {
            query_failed("Item collection size limit exceeded")
        }
        PutItemError::TransactionConflictException(_) => {
            query_failed("Transaction conflict, please retry")
        }
        PutItemError::InternalServerError(_) => query_failed(INTERNAL_SERVER_ERROR),
        err => StorageError::QueryFailed(format!("PutItem failed: {:?}", err)),
    }
}

pub fn map_update_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<UpdateItemError, R>,
) -> StorageError {
    if is_transport_error(&err) {
        return StorageError::ConnectionFailed(format!("UpdateItem failed: {err}"));
    }
    match err.into_service_error() {
        UpdateItemError::ResourceNotFoundException(_) => query_failed(TABLE_NOT_FOUND),
        UpdateItemError::ProvisionedThroughputExceededException(_) => {
            query_failed(THROUGHPUT_EXCEEDED)
        }
        UpdateItemError::RequestLimitExceeded(_) => query_failed(REQUEST_LIMIT_EXCEEDED),
        UpdateItemError::ItemCollectionSizeLimitExceededException(_) => {
            query_failed("Item collection size limit exceeded")
        }
        UpdateItemError::TransactionConflictException(_) => {
            query_failed("Transaction conflict, please retry")
        }
        UpdateItemError::InternalServerError(_) => query_failed(INTERNAL_SERVER_ERROR),
        err => StorageError::QueryFailed(format!("UpdateItem failed: {:?}", err)),
    }
}

pub fn map_delete_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DeleteItemError, R>,
) -> StorageError {
    if is_transport_error(&err) {
        return StorageError::ConnectionFailed(format!("DeleteItem failed: {err}"));
    }
    match err.into_service_error() {
        DeleteItemError::ResourceNotFoundException(_) => query_failed(TABLE_NOT_FOUND),
        DeleteItemError::ProvisionedThroughputExceededException(_) => {
            query_failed(THROUGHPUT_EXCEEDED)
        }
        DeleteItemError::RequestLimitExceeded(_) => query_failed(REQUEST_LIMIT_EXCEEDED),
        DeleteItemError::TransactionConflictException(_) => {
            query_failed("Transaction conflict, please retry")
        }
        DeleteItemError::InternalServerError(_) => query_failed(INTERNAL_SERVER_ERROR),
        err => StorageError::QueryFailed(format!("DeleteItem failed: {:?}", err)),
    }
}

pub fn map_scan_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<ScanError, R>,
) -> StorageError {
    if is_transport_error(&err) {
        return StorageError::ConnectionFailed(format!("Scan failed: {err}"));
    }
    match err.into_service_error() {
        ScanError::ResourceNotFoundException(_) => query_failed(TABLE_NOT_FOUND),
        ScanError::ProvisionedThroughputExceededException(_) => query_failed(THROUGHPUT_EXCEEDED),
        ScanError::RequestLimitExceeded(_) => query_failed(REQUEST_LIMIT_EXCEEDED),
        ScanError::InternalServerError(_) => query_failed(INTERNAL_SERVER_ERROR),
        err => StorageError::QueryFailed(format!("Scan failed: {:?}", err)),
    }
}
