pub mod bom;
pub mod catalog;
pub mod health;

pub use bom::*;
pub use catalog::*;
pub use health::*;

use axum::{http::StatusCode, response::Json};
use std::future::Future;
use std::time::Duration;
use tokio::time::timeout;

use fabrica_utils::{FabricaError, FailureResponse};

/// Map a core error onto the `{ success: false, message }` envelope.
/// Storage faults are logged with full detail here; only the generic
/// message leaves the process.
pub(crate) fn failure(error: FabricaError) -> (StatusCode, Json<FailureResponse>) {
    if let FabricaError::DataAccess { message } = &error {
        tracing::error!(error = %message, "record store access failed");
    }

    let status = StatusCode::from_u16(error.http_status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(FailureResponse::from(&error)))
}

/// Run one store read under the given budget. A timeout and a storage
/// fault both surface as DataAccess; no partial results are returned.
pub(crate) async fn with_store_timeout<T, F>(budget: Duration, operation: F) -> Result<T, FabricaError>
where
    F: Future<Output = anyhow::Result<T>>,
{
    match timeout(budget, operation).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(error)) => Err(FabricaError::data_access(error.to_string())),
        Err(_) => Err(FabricaError::data_access("query timed out")),
    }
}
