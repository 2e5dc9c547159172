//! Last-known-good account credit.

use crate::events::EventSink;
use crate::transport::ProviderTransport;
use crate::types::StudioEvent;
use crate::{Error, ErrorContext, Result};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, warn};

/// Interpret a raw JSON credit value. Only finite JSON numbers count.
pub fn numeric_credits(raw: Option<&serde_json::Value>) -> Option<f64> {
    raw.and_then(serde_json::Value::as_f64)
        .filter(|v| v.is_finite())
}

/// Holds the remaining credit balance.
///
/// The value only ever moves from one accepted number to another; a failed
/// read or a rejected update never resets it to unknown.
pub struct BalanceTracker {
    transport: Arc<dyn ProviderTransport>,
    value: Mutex<Option<f64>>,
    sink: Arc<dyn EventSink>,
}

impl BalanceTracker {
    pub fn new(transport: Arc<dyn ProviderTransport>, sink: Arc<dyn EventSink>) -> Self {
        Self {
            transport,
            value: Mutex::new(None),
            sink,
        }
    }

    fn slot(&self) -> MutexGuard<'_, Option<f64>> {
        self.value.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Last accepted value, `None` until the first one arrives.
    pub fn value(&self) -> Option<f64> {
        *self.slot()
    }

    /// Accept `value` if it is a finite number; returns whether it was taken.
    pub fn set_balance(&self, value: Option<f64>) -> bool {
        let Some(v) = value.filter(|v| v.is_finite()) else {
            debug!(?value, "ignoring non-numeric balance update");
            return false;
        };
        // Emit under the lock so concurrent writers notify in store order.
        let mut slot = self.slot();
        *slot = Some(v);
        self.sink.emit(StudioEvent::BalanceChanged { value: v });
        true
    }

    /// Query the provider's balance endpoint and store the result.
    pub async fn fetch_balance(&self) -> Result<f64> {
        let fetched = match self.transport.fetch_balance().await {
            Ok(v) => v,
            Err(e) => {
                warn!(error = %e, "balance fetch failed; keeping last known value");
                return Err(e.into_fetch("balance"));
            }
        };
        if !self.set_balance(Some(fetched)) {
            warn!(value = fetched, "balance endpoint returned a non-finite value");
            return Err(Error::fetch_with_context(
                "remainingBalance is not a finite number",
                ErrorContext::new()
                    .with_field_path("balances.remainingBalance")
                    .with_source("balance"),
            ));
        }
        Ok(fetched)
    }
}
