//! Recipe Chat - recipe assistant chatbot
//!
//! Keeps the recipe-assistant system prompt at the head of a conversation,
//! forwards the full history to an OpenAI-compatible model and returns the
//! history extended with the model's reply. The HTTP front end in `routes`
//! is one consumer of [`core::Responder`]; anything else can call it directly.

use std::sync::Arc;

pub mod config;
pub mod conversation;
pub mod core;
pub mod providers;
pub mod routes;

use crate::core::Responder;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub responder: Arc<Responder>,
}
