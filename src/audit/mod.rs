//! Audit log for expense changes
//!
//! Every create, update and delete is appended to `audit.log` as one JSON
//! object per line, with before/after snapshots and a short change summary.
//!
//! ```rust,ignore
//! use expense_tracker::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::create(&expense))?;
//! ```

mod entry;
mod logger;

pub use entry::{describe_changes, AuditEntry, Operation};
pub use logger::AuditLogger;
