use std::sync::Arc;

use poll_promise::Promise;

use super::messages::RefreshOutcome;
use crate::data::RateSource;
use crate::domain::Currency;
use crate::utils::app_time::now;

/// Launch a single-shot rate fetch without blocking the caller.
///
/// Native builds run it on a helper thread with its own current-thread tokio
/// runtime; the browser build runs it as a local future.
pub fn spawn_refresh(source: Arc<dyn RateSource>, base: Currency) -> Promise<RefreshOutcome> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        Promise::spawn_thread("rate_refresh", move || {
            let started = now();
            let signature = source.signature();
            let result = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt.block_on(source.fetch_rates(base)),
                Err(e) => Err(crate::data::RateSourceError::Network(format!(
                    "Failed to create runtime: {}",
                    e
                ))),
            };
            RefreshOutcome {
                source: signature,
                elapsed: started.elapsed(),
                result,
            }
        })
    }

    #[cfg(target_arch = "wasm32")]
    {
        Promise::spawn_local(async move {
            let started = now();
            let result = source.fetch_rates(base).await;
            RefreshOutcome {
                source: source.signature(),
                elapsed: started.elapsed(),
                result,
            }
        })
    }
}
