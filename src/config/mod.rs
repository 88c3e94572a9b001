//! Configuration module.
//!
//! Provides the compiled-in resolver/domain defaults and loading of
//! custom resolver lists.

pub mod loader;

pub use loader::ConfigLoader;
