//! The descriptor contract and the payload shaping shared by all methods.

use courier_core::{context::RequestContext, error::CourierError};
use courier_types::MessageEntity;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, trace};

/// A transport-ready call: endpoint name and flat parameter payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Request {
    /// Endpoint name, e.g. `copyMessage`.
    pub method: String,
    pub data: Map<String, Value>,
}

impl Request {
    pub fn new(method: impl Into<String>, data: Map<String, Value>) -> Self {
        Self {
            method: method.into(),
            data,
        }
    }
}

/// A Bot API method.
///
/// `Return` is the type a successful response parses into; it is fixed
/// per method. A descriptor is consumed when it is built into a request.
pub trait TelegramMethod: Serialize + Sized {
    type Return: DeserializeOwned;

    /// Endpoint name as documented by the API.
    const NAME: &'static str;

    /// Check caller-supplied parameters before anything is built.
    fn validate(&self, _ctx: &RequestContext) -> Result<(), CourierError> {
        Ok(())
    }

    /// Method-specific payload normalization, run after field mapping.
    fn shape(&self, _data: &mut Map<String, Value>, _ctx: &RequestContext) {}

    /// Turn the descriptor into a [`Request`].
    ///
    /// Unset fields never appear in the payload, nor do fields left null
    /// after [`shape`](Self::shape).
    fn build_request(self, ctx: &RequestContext) -> Result<Request, CourierError> {
        self.validate(ctx)?;

        let mut data = match serde_json::to_value(&self)? {
            Value::Object(map) => map,
            other => {
                return Err(CourierError::invalid(format!(
                    "{} parameters must encode to an object, got {other}",
                    Self::NAME
                )))
            }
        };

        self.shape(&mut data, ctx);
        data.retain(|_, value| !value.is_null());

        debug!("built {} request with {} fields", Self::NAME, data.len());
        Ok(Request::new(Self::NAME, data))
    }
}

/// Resolve a parse mode field against its companion entities field.
///
/// Non-empty entities win and the mode is dropped. Otherwise an unset
/// mode takes the context default, and an explicit null stays off the
/// wire. An empty entities list is dropped too.
pub fn prepare_parse_mode(
    ctx: &RequestContext,
    data: &mut Map<String, Value>,
    mode_key: &str,
    entities_key: &str,
) {
    match data.get(entities_key) {
        Some(Value::Array(items)) if !items.is_empty() => {
            if data.remove(mode_key).is_some() {
                trace!("{entities_key} present, dropping {mode_key}");
            }
            return;
        }
        Some(Value::Array(_)) => {
            data.remove(entities_key);
        }
        _ => {}
    }

    match data.get(mode_key) {
        None => {
            if let Some(mode) = ctx.parse_mode {
                trace!("{mode_key} unset, using default {mode}");
                data.insert(mode_key.to_string(), Value::String(mode.as_str().to_string()));
            }
        }
        Some(Value::Null) => {
            data.remove(mode_key);
        }
        Some(_) => {}
    }
}

/// Reject entity spans the API would refuse.
pub(crate) fn validate_entities(
    param: &str,
    entities: Option<&Vec<MessageEntity>>,
) -> Result<(), CourierError> {
    for entity in entities.into_iter().flatten() {
        if entity.offset < 0 || entity.length <= 0 {
            return Err(CourierError::invalid(format!(
                "{param}: {} entity has offset {} and length {}",
                entity.kind, entity.offset, entity.length
            )));
        }
    }
    Ok(())
}

/// Message ids are positive.
pub(crate) fn validate_message_id(param: &str, id: i64) -> Result<(), CourierError> {
    if id <= 0 {
        return Err(CourierError::invalid(format!(
            "{param} must be positive, got {id}"
        )));
    }
    Ok(())
}
