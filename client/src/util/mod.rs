//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Formatting and routing helpers live here so components stay thin and the
//! logic is testable without a reactive runtime.

pub mod product;
