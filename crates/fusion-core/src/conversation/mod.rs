//! Conversation domain module.
//!
//! - `message`: the immutable `Message` record
//! - `store`: per-participant logs (`ConversationStore`)
//! - `synthesis`: templated agent replies and the orchestrator fusion report

mod message;
mod store;
pub mod synthesis;

pub use message::Message;
pub use store::{ConversationStore, ParticipantLog};
