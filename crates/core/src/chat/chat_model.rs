use serde::{Deserialize, Serialize};

/// The only reply shape accepted from an agent.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct AgentReply {
    pub text: String,
}

/// Reply handed back to the chat client.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ChatReply {
    pub response: String,
}

impl From<AgentReply> for ChatReply {
    fn from(reply: AgentReply) -> Self {
        Self {
            response: reply.text,
        }
    }
}
