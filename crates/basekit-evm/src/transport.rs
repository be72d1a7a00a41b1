//! Alloy transport backed by a wallet provider.
//!
//! Every JSON-RPC request a client issues is handed to the wallet's
//! `request` method, so signing and submission happen wherever the wallet
//! lives. Provider errors are reported as JSON-RPC error responses; a
//! disconnected provider is reported as a dead backend.

use std::fmt;
use std::sync::Arc;
use std::task::{Context, Poll};

use alloy::rpc::json_rpc::{
    ErrorPayload, RequestPacket, Response, ResponsePacket, ResponsePayload, RpcError,
    SerializedRequest,
};
use alloy::transports::{TransportError, TransportErrorKind, TransportFut};
use serde_json::value::to_raw_value;
use serde_json::Value;
use tower::Service;
use tracing::{debug, warn};

use crate::eip1193::{Eip1193Provider, ProviderRpcError, RequestArguments};

/// Transport routing requests through an [`Eip1193Provider`].
#[derive(Clone)]
pub struct Eip1193Transport {
    provider: Arc<dyn Eip1193Provider>,
}

impl fmt::Debug for Eip1193Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Eip1193Transport").finish_non_exhaustive()
    }
}

impl Eip1193Transport {
    pub fn new<P: Eip1193Provider + 'static>(provider: P) -> Self {
        Self {
            provider: Arc::new(provider),
        }
    }

    async fn dispatch(self, packet: RequestPacket) -> Result<ResponsePacket, TransportError> {
        match packet {
            RequestPacket::Single(req) => Ok(ResponsePacket::Single(self.forward(req).await?)),
            RequestPacket::Batch(reqs) => {
                // EIP-1193 has no batch call; preserve order by going one at a time.
                let mut responses = Vec::with_capacity(reqs.len());
                for req in reqs {
                    responses.push(self.forward(req).await?);
                }
                Ok(ResponsePacket::Batch(responses))
            }
        }
    }

    async fn forward(&self, req: SerializedRequest) -> Result<Response, TransportError> {
        let params = match req.params() {
            Some(raw) => match serde_json::from_str::<Value>(raw.get()) {
                Ok(Value::Null) => None,
                Ok(value) => Some(value),
                Err(e) => return Err(RpcError::SerError(e)),
            },
            None => None,
        };
        let args = RequestArguments::new(req.method(), params);

        debug!(method = %args.method, "forwarding request to wallet provider");

        let payload = match self.provider.request(args).await {
            Ok(value) => {
                ResponsePayload::Success(to_raw_value(&value).map_err(RpcError::SerError)?)
            }
            Err(err) if err.is_disconnect() => {
                warn!(method = req.method(), code = err.code, "wallet provider disconnected");
                return Err(TransportErrorKind::backend_gone());
            }
            Err(err) => ResponsePayload::Failure(error_payload(err)?),
        };

        Ok(Response {
            id: req.id().clone(),
            payload,
        })
    }
}

fn error_payload(err: ProviderRpcError) -> Result<ErrorPayload, TransportError> {
    let data = err
        .data
        .as_ref()
        .map(to_raw_value)
        .transpose()
        .map_err(RpcError::SerError)?;
    Ok(ErrorPayload {
        code: err.code,
        message: err.message.into(),
        data,
    })
}

impl Service<RequestPacket> for Eip1193Transport {
    type Response = ResponsePacket;
    type Error = TransportError;
    type Future = TransportFut<'static>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, packet: RequestPacket) -> Self::Future {
        let this = self.clone();
        Box::pin(this.dispatch(packet))
    }
}
