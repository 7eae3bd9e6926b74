//! Networking modules for the chatbot HTTP boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `bot` performs the single request/response call to the chatbot service,
//! and `types` defines the wire schema it decodes.

pub mod bot;
pub mod types;
