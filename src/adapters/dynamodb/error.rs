//! Maps DynamoDB service errors onto `StoreError`.
//!
//! Conditional-check failures are handled at the call site where they carry
//! meaning (rename); everywhere else they fall through to the generic arm.

use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::scan::ScanError;
use aws_sdk_dynamodb::operation::update_item::UpdateItemError;

use crate::utils::error::StoreError;

fn sdk_error(operation: &'static str, message: impl Into<String>) -> StoreError {
    StoreError::Sdk {
        operation,
        message: message.into(),
    }
}

fn table_not_found(operation: &'static str) -> StoreError {
    sdk_error(operation, "Table not found")
}

fn throttled(operation: &'static str) -> StoreError {
    sdk_error(operation, "Throughput or request limit exceeded")
}

fn internal(operation: &'static str) -> StoreError {
    sdk_error(operation, "DynamoDB internal server error")
}

pub fn map_get_item_error(err: GetItemError) -> StoreError {
    const OP: &str = "GetItem";
    match err {
        GetItemError::ResourceNotFoundException(_) => table_not_found(OP),
        GetItemError::ProvisionedThroughputExceededException(_)
        | GetItemError::RequestLimitExceeded(_) => throttled(OP),
        GetItemError::InternalServerError(_) => internal(OP),
        err => sdk_error(OP, DisplayErrorContext(&err).to_string()),
    }
}

pub fn map_scan_error(err: ScanError) -> StoreError {
    const OP: &str = "Scan";
    match err {
        ScanError::ResourceNotFoundException(_) => table_not_found(OP),
        ScanError::ProvisionedThroughputExceededException(_)
        | ScanError::RequestLimitExceeded(_) => throttled(OP),
        ScanError::InternalServerError(_) => internal(OP),
        err => sdk_error(OP, DisplayErrorContext(&err).to_string()),
    }
}

pub fn map_put_item_error(err: PutItemError) -> StoreError {
    const OP: &str = "PutItem";
    match err {
        PutItemError::ConditionalCheckFailedException(_) => {
            sdk_error(OP, "A record with the generated id already exists")
        }
        PutItemError::ResourceNotFoundException(_) => table_not_found(OP),
        PutItemError::ProvisionedThroughputExceededException(_)
        | PutItemError::RequestLimitExceeded(_) => throttled(OP),
        PutItemError::InternalServerError(_) => internal(OP),
        err => sdk_error(OP, DisplayErrorContext(&err).to_string()),
    }
}

pub fn map_delete_item_error(err: DeleteItemError) -> StoreError {
    const OP: &str = "DeleteItem";
    match err {
        DeleteItemError::ResourceNotFoundException(_) => table_not_found(OP),
        DeleteItemError::ProvisionedThroughputExceededException(_)
        | DeleteItemError::RequestLimitExceeded(_) => throttled(OP),
        DeleteItemError::InternalServerError(_) => internal(OP),
        err => sdk_error(OP, DisplayErrorContext(&err).to_string()),
    }
}

pub fn map_update_item_error(err: UpdateItemError) -> StoreError {
    const OP: &str = "UpdateItem";
    match err {
        UpdateItemError::ResourceNotFoundException(_) => table_not_found(OP),
        UpdateItemError::ProvisionedThroughputExceededException(_)
        | UpdateItemError::RequestLimitExceeded(_) => throttled(OP),
        UpdateItemError::InternalServerError(_) => internal(OP),
        err => sdk_error(OP, DisplayErrorContext(&err).to_string()),
    }
}
