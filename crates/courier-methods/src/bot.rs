//! Glue between descriptors, the request context, and a transport.

use courier_core::{context::RequestContext, error::CourierError};
use tracing::debug;

use crate::method::TelegramMethod;
use crate::response::parse_response;
use crate::traits::Transport;

/// A bot: a request context paired with a transport.
pub struct Bot<T> {
    context: RequestContext,
    transport: T,
}

impl<T: Transport> Bot<T> {
    pub fn new(transport: T, context: RequestContext) -> Self {
        Self { context, transport }
    }

    /// Build `method`, execute it and parse the typed result.
    ///
    /// Invalid parameters fail before the transport is touched. Nothing
    /// is retried.
    pub async fn call<M: TelegramMethod>(&self, method: M) -> Result<M::Return, CourierError> {
        let request = method.build_request(&self.context)?;
        debug!(
            "{}: dispatching {} via {}",
            M::NAME,
            request.method,
            self.transport.name()
        );
        let payload = self.transport.execute(request).await?;
        parse_response::<M>(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::method::Request;
    use crate::methods::{CopyMessage, GetChat};
    use async_trait::async_trait;
    use courier_core::context::ParseMode;
    use courier_types::MessageEntity;
    use serde_json::{json, Value};
    use std::sync::Mutex;

    /// Records requests and replies with a canned envelope.
    struct MockTransport {
        reply: Value,
        seen: Mutex<Vec<Request>>,
    }

    impl MockTransport {
        fn replying(reply: Value) -> Self {
            Self {
                reply,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl Transport for MockTransport {
        fn name(&self) -> &str {
            "mock"
        }

        async fn execute(&self, request: Request) -> Result<Value, CourierError> {
            self.seen.lock().unwrap().push(request);
            Ok(self.reply.clone())
        }
    }

    struct FailingTransport;

    #[async_trait]
    impl Transport for FailingTransport {
        fn name(&self) -> &str {
            "failing"
        }

        async fn execute(&self, _request: Request) -> Result<Value, CourierError> {
            Err(CourierError::Transport("connection reset".to_string()))
        }
    }

    #[tokio::test]
    async fn test_call_returns_typed_result() {
        let transport = MockTransport::replying(json!({"ok": true, "result": {"message_id": 1000}}));
        let bot = Bot::new(transport, RequestContext::new().with_parse_mode(ParseMode::Html));

        let copied = bot
            .call(
                CopyMessage::new(123, 456, 789)
                    .caption_entities(vec![MessageEntity::new("bold", 0, 3)]),
            )
            .await
            .unwrap();
        assert_eq!(copied.message_id, 1000);

        let seen = bot.transport.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].method, "copyMessage");
        assert!(!seen[0].data.contains_key("parse_mode"));
    }

    #[tokio::test]
    async fn test_invalid_parameters_never_reach_transport() {
        let bot = Bot::new(
            MockTransport::replying(json!({"ok": true, "result": true})),
            RequestContext::new(),
        );
        let err = bot.call(GetChat::new("no_at_sign")).await.unwrap_err();
        assert!(matches!(err, CourierError::InvalidRequestParameters(_)));
        assert!(bot.transport.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_api_and_transport_errors_propagate() {
        let bot = Bot::new(
            MockTransport::replying(json!({
                "ok": false,
                "error_code": 403,
                "description": "Forbidden: bot was kicked from the group chat"
            })),
            RequestContext::new(),
        );
        let err = bot.call(GetChat::new(-100)).await.unwrap_err();
        assert!(matches!(err, CourierError::Api { code: 403, .. }));

        let bot = Bot::new(FailingTransport, RequestContext::new());
        let err = bot.call(GetChat::new(-100)).await.unwrap_err();
        assert!(matches!(err, CourierError::Transport(_)));
    }
}
