//! Tokio Runtime Bridge
//!
//! GPUI runs its own executor, but reqwest needs a tokio reactor. Pages hand
//! API futures to this runtime and await the result from a GPUI task.
//!
//! ```text
//! GPUI task ──run_in_tokio(api call)──▶ tokio runtime ──result──▶ GPUI task
//! ```

use std::future::Future;
use std::sync::OnceLock;

use tokio::runtime::{Builder, Runtime};

/// Global tokio runtime instance
static TOKIO_RUNTIME: OnceLock<Runtime> = OnceLock::new();

/// Get or initialize the global tokio runtime
fn get_runtime() -> &'static Runtime {
    TOKIO_RUNTIME.get_or_init(|| {
        Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("social-io")
            .enable_all()
            .build()
            .unwrap_or_else(|e| panic!("Failed to create tokio runtime: {e}"))
    })
}

/// Execute a future in the tokio runtime and wait for the result
///
/// ```ignore
/// let profile = run_in_tokio(async move { api.fetch_user(&id).await }).await;
/// ```
pub async fn run_in_tokio<F, T>(future: F) -> T
where
    F: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    let handle = get_runtime().spawn(future);
    match handle.await {
        Ok(result) => result,
        Err(e) => std::panic::resume_unwind(e.into_panic()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_in_tokio_returns_result_off_runtime() {
        let value = futures::executor::block_on(run_in_tokio(async {
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
            21 * 2
        }));
        assert_eq!(value, 42);
    }
}
