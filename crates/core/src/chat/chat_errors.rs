use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Missing required parameters: {0}")]
    MissingParameter(String),

    #[error("Chat agent unavailable: {0}")]
    AgentUnavailable(String),

    #[error("Chat agent returned an unexpected response: {0}")]
    MalformedAgentResponse(String),
}

impl ChatError {
    pub fn is_client_error(&self) -> bool {
        matches!(self, ChatError::MissingParameter(_))
    }
}
