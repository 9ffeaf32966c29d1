//! Chat relay module - forwards user messages to an external agent.
//!
//! The agent's prompt and tool protocol are its own business. This module
//! only fixes the wire contract: the agent receives `{ "message": ... }` and
//! must answer `{ "text": ... }`.

mod chat_errors;
mod chat_model;
mod chat_service;
mod chat_traits;

pub use chat_errors::ChatError;
pub use chat_model::{AgentReply, ChatReply};
pub use chat_service::{AgentClient, ChatService, GUIDANCE_REPLY};
pub use chat_traits::ChatServiceTrait;
