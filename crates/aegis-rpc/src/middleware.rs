//! Outbound RPC middleware.
//!
//! Trace keys are placed in the [`CallContext`] persistent metadata by
//! upstream code, and the transport serializes that metadata onto every
//! outbound call. [`TracePassthrough`] therefore forwards calls untouched;
//! it marks the point in the client stack where trace propagation happens.

use std::task::{Context, Poll};

use aegis_core::CallContext;
use tower::{Layer, Service};
use tracing::trace;

/// An outbound request together with the context it is issued under.
#[derive(Debug, Clone)]
pub struct OutboundCall<Req> {
    pub ctx: CallContext,
    pub method: &'static str,
    pub request: Req,
}

impl<Req> OutboundCall<Req> {
    pub fn new(ctx: CallContext, method: &'static str, request: Req) -> Self {
        Self {
            ctx,
            method,
            request,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TracePassthroughLayer;

impl TracePassthroughLayer {
    pub fn new() -> Self {
        Self
    }
}

impl<S> Layer<S> for TracePassthroughLayer {
    type Service = TracePassthrough<S>;

    fn layer(&self, inner: S) -> Self::Service {
        TracePassthrough { inner }
    }
}

#[derive(Debug, Clone)]
pub struct TracePassthrough<S> {
    inner: S,
}

impl<S, Req> Service<OutboundCall<Req>> for TracePassthrough<S>
where
    S: Service<OutboundCall<Req>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, call: OutboundCall<Req>) -> Self::Future {
        trace!(
            method = call.method,
            trace_id = call.ctx.trace_id().unwrap_or_default(),
            "Outbound call"
        );
        self.inner.call(call)
    }
}
