//! Service layer for ai-audit
//!
//! Sits between the HTTP/CLI front ends and the usage store.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]

mod error;
mod report_service;
mod tracking_service;

pub use error::ServiceError;
pub use report_service::{ReportService, UsageReport, keep_last};
pub use tracking_service::{NewSession, TrackingService};
