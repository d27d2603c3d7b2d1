use crate::Result as EngineErrorResult;
use crate::context::HandlerContext;
use crate::retry::with_retry;

use std::future::Future;

/// Execute a read. Lock contention on the snapshot is retried.
pub async fn db_read<F, Fut, T>(
    ctx: &HandlerContext,
    operation_name: &str,
    operation: F,
) -> EngineErrorResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = EngineErrorResult<T>>,
{
    with_retry(&ctx.retry_config, operation_name, operation).await
}

/// Execute a write transaction with bounded retry.
///
/// `operation` owns its transaction from `begin` to `commit`, so a failed
/// attempt rolls back completely before the next one re-reads.
pub async fn db_write<F, Fut, T>(
    ctx: &HandlerContext,
    operation_name: &str,
    operation: F,
) -> EngineErrorResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = EngineErrorResult<T>>,
{
    log::debug!("{} Starting {}", ctx.log_prefix(), operation_name);

    let result = with_retry(&ctx.retry_config, operation_name, operation).await;

    match &result {
        Ok(_) => {
            log::debug!("{} {} committed", ctx.log_prefix(), operation_name);
        }
        Err(e) => {
            log::warn!("{} {} failed: {}", ctx.log_prefix(), operation_name, e);
        }
    }

    result
}
