use super::chat_errors::ChatError;
use super::chat_model::{AgentReply, ChatReply};
use super::chat_traits::ChatServiceTrait;
use crate::errors::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

/// Answer given when no agent is configured.
pub const GUIDANCE_REPLY: &str = "Hello! I can help you with currency conversion. \
For example, ask: \"How much is 100 USD in TRY?\"";

#[derive(Serialize)]
struct AgentRequest<'a> {
    message: &'a str,
}

/// HTTP client for a single agent endpoint.
pub struct AgentClient {
    client: Client,
    url: String,
}

impl AgentClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> std::result::Result<Self, ChatError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ChatError::AgentUnavailable(e.to_string()))?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    async fn ask(&self, message: &str) -> std::result::Result<AgentReply, ChatError> {
        let response = self
            .client
            .post(&self.url)
            .json(&AgentRequest { message })
            .send()
            .await
            .map_err(|e| ChatError::AgentUnavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChatError::AgentUnavailable(format!("HTTP {}", status)));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ChatError::AgentUnavailable(e.to_string()))?;

        // One schema only; anything else is a contract violation.
        let reply: AgentReply = serde_json::from_slice(&body)
            .map_err(|e| ChatError::MalformedAgentResponse(e.to_string()))?;
        if reply.text.trim().is_empty() {
            return Err(ChatError::MalformedAgentResponse(
                "reply text is empty".to_string(),
            ));
        }
        Ok(reply)
    }
}

pub struct ChatService {
    agent: Option<AgentClient>,
}

impl ChatService {
    pub fn new(agent: Option<AgentClient>) -> Self {
        Self { agent }
    }
}

#[async_trait]
impl ChatServiceTrait for ChatService {
    fn is_agent_configured(&self) -> bool {
        self.agent.is_some()
    }

    async fn reply(&self, message: &str) -> Result<ChatReply> {
        let message = message.trim();
        if message.is_empty() {
            return Err(ChatError::MissingParameter("message".to_string()).into());
        }

        match &self.agent {
            Some(agent) => {
                log::debug!("Relaying chat message ({} chars) to agent", message.len());
                let reply = agent.ask(message).await.map_err(|e| {
                    log::warn!("Chat relay failed: {}", e);
                    e
                })?;
                Ok(reply.into())
            }
            None => Ok(ChatReply {
                response: GUIDANCE_REPLY.to_string(),
            }),
        }
    }
}
