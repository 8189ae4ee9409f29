//! Build any shipped method from its endpoint name and JSON parameters.

use courier_core::{context::RequestContext, error::CourierError};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::method::{Request, TelegramMethod};
use crate::methods::{CopyMessage, ForwardMessage, GetChat, PinChatMessage, SendMessage};

type Builder = fn(Value, &RequestContext) -> Result<Request, CourierError>;

const CATALOG: &[(&str, Builder)] = &[
    (CopyMessage::NAME, build::<CopyMessage> as Builder),
    (ForwardMessage::NAME, build::<ForwardMessage> as Builder),
    (GetChat::NAME, build::<GetChat> as Builder),
    (PinChatMessage::NAME, build::<PinChatMessage> as Builder),
    (SendMessage::NAME, build::<SendMessage> as Builder),
];

/// Endpoint names [`build_named`] understands.
pub fn endpoints() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|(name, _)| *name)
}

/// Deserialize `params` into the descriptor for `name` and build it.
///
/// Unknown endpoints and missing or mistyped parameters are
/// [`CourierError::InvalidRequestParameters`].
pub fn build_named(
    name: &str,
    params: Value,
    ctx: &RequestContext,
) -> Result<Request, CourierError> {
    let (_, builder) = CATALOG
        .iter()
        .find(|(endpoint, _)| *endpoint == name)
        .ok_or_else(|| CourierError::invalid(format!("unknown method: {name}")))?;
    builder(params, ctx)
}

fn build<M>(params: Value, ctx: &RequestContext) -> Result<Request, CourierError>
where
    M: TelegramMethod + DeserializeOwned,
{
    let method: M = serde_json::from_value(params)
        .map_err(|e| CourierError::invalid(format!("{}: {e}", M::NAME)))?;
    method.build_request(ctx)
}
