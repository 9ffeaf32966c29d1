use super::chat_model::ChatReply;
use crate::errors::Result;
use async_trait::async_trait;

/// Trait defining the contract for the chat relay.
#[async_trait]
pub trait ChatServiceTrait: Send + Sync {
    /// Whether messages are forwarded to a live agent.
    fn is_agent_configured(&self) -> bool;

    async fn reply(&self, message: &str) -> Result<ChatReply>;
}
