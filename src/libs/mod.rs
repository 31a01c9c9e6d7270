pub mod activity;
pub mod aggregator;
pub mod clock;
pub mod config;
pub mod data_storage;
pub mod formatter;
pub mod messages;
pub mod reconcile;
pub mod session;
pub mod session_cache;
pub mod tracker;
pub mod view;
