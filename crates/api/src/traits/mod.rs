//! Traits shared across the relic crates

pub mod serialize;

pub use serialize::Serialize;
