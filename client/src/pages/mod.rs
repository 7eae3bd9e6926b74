//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages are thin route targets; the assistant widget is mounted once by the
//! app shell so its state survives navigation between them.

pub mod home;
pub mod product;
