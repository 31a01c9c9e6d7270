//! Clients for the learning platform's HTTP APIs.
//!
//! Three concerns, all speaking to the same platform backend:
//!
//! - **Identity**: sign-in yielding a stable user id and bearer token
//! - **Document store**: keyed get/merge/increment operations used for live
//!   session records and daily aggregates
//! - **Collections**: typed wrappers over the two logical collections the
//!   tracker writes
//!
//! Store failures are expected operating conditions, not exceptional ones:
//! every caller in the tracking path logs and carries on, and the local
//! cache remains authoritative for the in-memory counter.

pub mod auth;
pub mod learning_time;
pub mod sessions;
pub mod store;

pub use auth::AuthSession;
pub use learning_time::{DailyStore, LearningTimeApi};
pub use sessions::{SessionApi, SessionStore};
pub use store::DocStore;
