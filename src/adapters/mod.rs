//! External integrations
//!
//! Adapters wrap the two external collaborators: the e-commerce platform the
//! orders come from, and the order-management store they go to.

pub mod platform;
pub mod store;
