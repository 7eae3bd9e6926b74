//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `chat_widget` owns the assistant interaction loop; `product_preview`
//! renders the product summaries it receives.

pub mod chat_widget;
pub mod product_preview;
