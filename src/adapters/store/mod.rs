//! Target store adapters
//!
//! The `OrderStore` trait is the persistence boundary; REST and in-memory
//! backends implement it.

pub mod factory;
pub mod memory;
pub mod rest;
pub mod traits;

pub use factory::create_store;
pub use memory::InMemoryStore;
pub use rest::RestStore;
pub use traits::OrderStore;
