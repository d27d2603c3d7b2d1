use tb_config::RetryConfig;

use std::time::Duration;

use tokio::time::sleep;

/// Execute an async operation, retrying while it fails with a retryable error.
///
/// Every attempt must re-read its inputs: `operation` is invoked afresh and
/// nothing from a failed attempt survives its rolled-back transaction.
pub async fn with_retry<F, Fut, T, E>(
    config: &RetryConfig,
    operation_name: &str,
    mut operation: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display + IsRetryable,
{
    let max_delay = Duration::from_millis(config.max_delay_ms);
    let mut attempts = 0;
    let mut delay = Duration::from_millis(config.initial_delay_ms);

    loop {
        attempts += 1;

        match operation().await {
            Ok(result) => {
                if attempts > 1 {
                    log::info!("{} succeeded after {} attempts", operation_name, attempts);
                }
                return Ok(result);
            }
            Err(e) => {
                if !e.is_retryable() {
                    return Err(e);
                }

                if attempts >= config.max_attempts {
                    log::warn!(
                        "{} failed after {} attempts: {}",
                        operation_name,
                        attempts,
                        e
                    );
                    return Err(e);
                }

                let actual_delay = if config.jitter {
                    let jitter_factor = 0.5 + rand::random::<f64>(); // 0.5 to 1.5
                    Duration::from_secs_f64(delay.as_secs_f64() * jitter_factor)
                } else {
                    delay
                };

                log::debug!(
                    "{} attempt {} failed: {}. Retrying in {:?}",
                    operation_name,
                    attempts,
                    e,
                    actual_delay
                );

                sleep(actual_delay).await;

                delay = Duration::from_secs_f64(
                    (delay.as_secs_f64() * config.backoff_multiplier).min(max_delay.as_secs_f64()),
                );
            }
        }
    }
}

/// Trait for errors that can indicate retryability
pub trait IsRetryable {
    fn is_retryable(&self) -> bool;
}

impl IsRetryable for crate::EngineError {
    fn is_retryable(&self) -> bool {
        self.is_retryable()
    }
}
