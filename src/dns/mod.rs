//! DNS module.
//!
//! This module provides the benchmark building blocks:
//! - Wire-format query construction
//! - DoH and DoT probe transports
//! - The sequential probe runner
//! - Core data types

pub mod doh;
pub mod dot;
pub mod probe;
pub mod query;
pub mod types;

pub use doh::DohClient;
pub use dot::DotClient;
pub use probe::{DohProbe, DotProbe, ProbeRunner};
pub use types::*;
