//! Top-level facade crate for userstore.
//!
//! Re-exports the core store types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use userstore_core::*;
}

pub mod gateway {
    pub use userstore_gateway::*;
}
