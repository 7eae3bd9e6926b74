//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is kept as plain structs with explicit transitions; components hold
//! them in `RwSignal`s and never mutate fields outside those transitions.

pub mod widget;
