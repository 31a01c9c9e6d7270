//! Folds committed minutes into per-day totals.
//!
//! Each engaged tick hands exactly one delta here. The local SQLite mirror
//! is written first and is what the reporting commands read; the remote
//! learning-time collection receives the same delta as a fire-and-forget
//! increment, logged on failure. Deltas are additive and not idempotent, so
//! the session clock is the single call site and applies each tick at most
//! once.

use crate::api::learning_time::DailyStore;
use crate::db::daily::DailyTotals;
use crate::libs::messages::Message;
use crate::libs::session::DayTotal;
use crate::{msg_debug, msg_warning};
use anyhow::Result;
use chrono::{DateTime, Duration, Local, NaiveDate};

pub struct DailyAggregator<D: DailyStore> {
    totals: DailyTotals,
    remote: D,
}

impl<D: DailyStore> DailyAggregator<D> {
    pub fn new(totals: DailyTotals, remote: D) -> Self {
        Self { totals, remote }
    }

    /// Additively merges `minutes` into the entry for `(user_id, date)`.
    ///
    /// Store failures never propagate: a failed local write is reported and
    /// the remote write still attempted, so a degraded store only costs that
    /// store's copy of the delta.
    pub async fn add_minutes(
        &mut self,
        user_id: &str,
        date: NaiveDate,
        minutes: i64,
        at: DateTime<Local>,
    ) {
        if let Err(e) = self.totals.add(user_id, date, minutes) {
            msg_warning!(Message::LocalAggregateFailed(e.to_string()));
        }
        if let Err(e) = self.remote.add_minutes(user_id, date, minutes, at).await {
            msg_debug!(Message::RemoteAggregateFailed(e.to_string()));
        }
    }

    /// Per-day entries over the inclusive range, ascending, with an implicit
    /// zero for every date that has no committed minutes.
    pub fn range(&mut self, user_id: &str, from: NaiveDate, to: NaiveDate) -> Result<Vec<DayTotal>> {
        let entries = self.totals.fetch_range(user_id, from, to)?;
        Ok(zero_fill(entries, from, to))
    }

    /// Minutes committed today so far.
    pub fn today_minutes(&mut self, user_id: &str, now: DateTime<Local>) -> Result<i64> {
        let today = now.date_naive();
        Ok(self.totals.fetch_day(user_id, today)?.unwrap_or(0))
    }

    /// Minutes committed over the trailing 7 calendar days, today included.
    pub fn week_minutes(&mut self, user_id: &str, now: DateTime<Local>) -> Result<i64> {
        self.window_minutes(user_id, now, 7)
    }

    /// Minutes committed over the trailing 30 calendar days, today included.
    pub fn month_minutes(&mut self, user_id: &str, now: DateTime<Local>) -> Result<i64> {
        self.window_minutes(user_id, now, 30)
    }

    /// Sums a window of `days` calendar days ending today. Today counts as
    /// day one, so the range starts `days - 1` days back.
    fn window_minutes(&mut self, user_id: &str, now: DateTime<Local>, days: i64) -> Result<i64> {
        let today = now.date_naive();
        let from = today - Duration::days(days - 1);
        let entries = self.totals.fetch_range(user_id, from, today)?;
        Ok(entries.iter().map(|entry| entry.minutes).sum())
    }
}

/// Expands a sparse ascending entry list into one entry per date in the
/// inclusive range, inserting zeros for missing dates.
pub fn zero_fill(entries: Vec<DayTotal>, from: NaiveDate, to: NaiveDate) -> Vec<DayTotal> {
    let mut by_date = entries.into_iter().peekable();
    let mut filled = Vec::new();
    let mut date = from;
    while date <= to {
        while by_date.peek().is_some_and(|entry| entry.date < date) {
            by_date.next();
        }
        let minutes = match by_date.peek() {
            Some(entry) if entry.date == date => by_date.next().map(|e| e.minutes).unwrap_or(0),
            _ => 0,
        };
        filled.push(DayTotal { date, minutes });
        date = match date.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }
    filled
}
