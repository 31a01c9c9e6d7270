//! Remote daily study-time aggregates.
//!
//! One document per `<user id>_<date>` in the learning-time collection.
//! Minute deltas are applied as server-side increments so concurrent writers
//! add rather than overwrite; alongside the day total the hour-of-day and
//! weekday distributions are bumped for the platform's statistics charts.

use crate::api::store::{DocStore, LEARNING_TIME_COLLECTION};
use crate::libs::session::DayTotal;
use anyhow::Result;
use chrono::{DateTime, Datelike, Local, NaiveDate, Timelike};
use serde_json::json;

/// Storage for committed per-day minute totals.
#[allow(async_fn_in_trait)]
pub trait DailyStore {
    /// Additively merges `minutes` into the entry for `(user_id, date)`,
    /// creating it if absent. Not idempotent across retries; callers must
    /// apply each delta at most once.
    async fn add_minutes(
        &self,
        user_id: &str,
        date: NaiveDate,
        minutes: i64,
        at: DateTime<Local>,
    ) -> Result<()>;

    /// Entries within the inclusive date range, ascending; dates without an
    /// entry are simply missing (the caller zero-fills for presentation).
    async fn fetch_range(
        &self,
        user_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<DayTotal>>;
}

pub struct LearningTimeApi {
    store: DocStore,
}

impl LearningTimeApi {
    pub fn new(store: DocStore) -> Self {
        Self { store }
    }

    fn doc_id(user_id: &str, date: NaiveDate) -> String {
        format!("{}_{}", user_id, date.format("%Y-%m-%d"))
    }
}

impl DailyStore for LearningTimeApi {
    async fn add_minutes(
        &self,
        user_id: &str,
        date: NaiveDate,
        minutes: i64,
        at: DateTime<Local>,
    ) -> Result<()> {
        let doc_id = Self::doc_id(user_id, date);

        self.store
            .merge(
                LEARNING_TIME_COLLECTION,
                &doc_id,
                &json!({
                    "userId": user_id,
                    "dateKey": date.format("%Y-%m-%d").to_string(),
                }),
            )
            .await?;

        let mut increments = serde_json::Map::new();
        increments.insert("minutes".to_string(), json!(minutes));
        increments.insert(format!("byHour.{}", at.hour()), json!(minutes));
        increments.insert(
            format!("byWeekday.{}", at.weekday().num_days_from_sunday()),
            json!(minutes),
        );

        self.store
            .increment(
                LEARNING_TIME_COLLECTION,
                &doc_id,
                &serde_json::Value::Object(increments),
            )
            .await
    }

    async fn fetch_range(
        &self,
        user_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<DayTotal>> {
        let docs = self
            .store
            .query(
                LEARNING_TIME_COLLECTION,
                &[
                    ("userId", user_id.to_string()),
                    ("from", from.format("%Y-%m-%d").to_string()),
                    ("to", to.format("%Y-%m-%d").to_string()),
                ],
            )
            .await?;

        let mut entries: Vec<DayTotal> = docs
            .into_iter()
            .filter_map(|doc| serde_json::from_value(doc).ok())
            .collect();
        entries.sort_by_key(|entry: &DayTotal| entry.date);
        Ok(entries)
    }
}
