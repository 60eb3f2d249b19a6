//! Per-call context handed to every facade operation.
//!
//! Carries the authenticated caller, the persistent metadata the transport
//! propagates to downstream calls (trace keys live here), and a
//! cancellation token tied to the inbound call.

use std::collections::BTreeMap;

use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::error::{AegisError, AegisResult};

/// Persistent metadata key holding the distributed trace identifier.
pub const TRACE_ID_KEY: &str = "trace_id";

#[derive(Debug, Clone, Default)]
pub struct CallContext {
    caller: Option<Uuid>,
    persistent: BTreeMap<String, String>,
    cancel: CancellationToken,
}

impl CallContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_caller(mut self, caller: Uuid) -> Self {
        self.caller = Some(caller);
        self
    }

    /// Attach a key that the transport forwards on every outbound call.
    pub fn with_persistent(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.persistent.insert(key.into(), value.into());
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// The authenticated user making the call, if known.
    pub fn caller(&self) -> Option<Uuid> {
        self.caller
    }

    pub fn persistent(&self, key: &str) -> Option<&str> {
        self.persistent.get(key).map(String::as_str)
    }

    pub fn persistent_values(&self) -> &BTreeMap<String, String> {
        &self.persistent
    }

    pub fn trace_id(&self) -> Option<&str> {
        self.persistent(TRACE_ID_KEY)
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Derived context sharing metadata; cancelling the parent cancels it.
    pub fn child(&self) -> Self {
        Self {
            caller: self.caller,
            persistent: self.persistent.clone(),
            cancel: self.cancel.child_token(),
        }
    }

    /// Drive a collaborator call, aborting with [`AegisError::Cancelled`]
    /// as soon as the context is cancelled.
    pub async fn run<T, E>(&self, fut: impl Future<Output = Result<T, E>>) -> AegisResult<T>
    where
        E: Into<AegisError>,
    {
        if self.cancel.is_cancelled() {
            return Err(AegisError::Cancelled);
        }
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(AegisError::Cancelled),
            res = fut => res.map_err(Into::into),
        }
    }
}
