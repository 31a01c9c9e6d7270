//! # Pensum - Study Session Time Tracking
//!
//! A command-line companion for the Cogito learning platform that measures
//! how long a signed-in user is actively engaged and turns that measurement
//! into daily study totals.
//!
//! ## Features
//!
//! - **Activity Detection**: Input monitoring with an idle window, so only
//!   engaged time is counted
//! - **Minute Ticking**: A per-minute session clock with day-boundary rollover
//! - **Dual Persistence**: A crash-safe local session cache plus the
//!   platform's document store, reconciled on every sign-in
//! - **Daily Aggregates**: Additive per-day totals behind the platform's
//!   statistics and calendar views
//! - **Reports**: Today/week/month summaries and per-day range tables
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pensum::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;
