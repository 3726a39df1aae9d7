//! Domain Fudge - lookalike domain candidate generation and availability checking
//!
//! Finds domains visually similar to a target domain and ascertains whether
//! they are currently unregistered, as a defensive typosquatting-risk tool.

pub mod check;
pub mod error;
pub mod fudge;
pub mod types;

// Re-export commonly used types
pub use error::{FudgeError, Result};
pub use types::{
    Availability, CheckConfig, CheckMetrics, CheckResult, Domain, MetricsSnapshot,
};

// Re-export main functionality
pub use check::{
    AvailabilityChecker, DnsAnswer, DnsResolve, WhoisAnswer, WhoisLookup, WhoisRecord,
};
pub use fudge::{generate_candidates, resolve_tlds, LookalikeTable, TldSelection};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
