//! The three CI gates.
//!
//! Each gate walks the tree under a repository root, appends OK/FAIL entries
//! to a [`GateReport`](crate::report::GateReport), and never stops on a
//! pattern violation - only hard I/O problems surface as errors.

mod brand;
mod ip;
mod qa;

pub use brand::run_brand_gate;
pub use ip::run_ip_gate;
pub use qa::run_qa_super;
