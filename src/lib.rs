//! Sitegate - CI drift gates for static site builds
//!
//! Sitegate scans a checked-out site repository for textual drift before a
//! deploy: legacy brand strings that must not reappear, competitor-brand
//! mentions and audio assets that must not ship, and build-versioning
//! consistency (cache-bust parameters, service-worker cache names, bootstrap
//! includes, page-module selectors).

pub mod build_info;
pub mod error;
pub mod gates;
pub mod policy;
pub mod report;
pub mod scan;

// Re-exports for convenience
pub use build_info::BuildInfo;
pub use error::{GateError, GateResult};
pub use gates::{run_brand_gate, run_ip_gate, run_qa_super};
pub use report::{CheckEntry, CheckStatus, GateReport};
