//! Builder services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the pure request-to-URL transformations so route
//! handlers can stay focused on extraction, validation mapping, and
//! response shaping.

pub mod checkout;
pub mod qr;
