//! Core chat components
//!
//! This module contains the responder that turns a conversation into its next
//! assistant turn.

mod responder;

pub use responder::{ensure_system_prompt, Responder, ResponderError};
