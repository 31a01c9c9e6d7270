use crate::db::db::Db;
use crate::libs::session::DayTotal;
use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension};

const SCHEMA_DAILY_TOTALS: &str = "CREATE TABLE IF NOT EXISTS daily_totals (
    id INTEGER PRIMARY KEY,
    user_id TEXT NOT NULL,
    date DATE NOT NULL,
    minutes INTEGER NOT NULL DEFAULT 0,
    UNIQUE(user_id, date)
);";
const UPSERT_ADD: &str = "INSERT INTO daily_totals (user_id, date, minutes) VALUES (?1, ?2, ?3)
    ON CONFLICT(user_id, date) DO UPDATE SET minutes = minutes + excluded.minutes";
const SELECT_DAY: &str = "SELECT minutes FROM daily_totals WHERE user_id = ?1 AND date = ?2";
const SELECT_RANGE: &str = "SELECT date, minutes FROM daily_totals
    WHERE user_id = ?1 AND date BETWEEN ?2 AND ?3 ORDER BY date";

/// Local mirror of the per-day study totals.
///
/// Written on every committed minute so reporting commands work offline and
/// reflect everything flushed so far; the remote learning-time collection
/// receives the same deltas asynchronously.
pub struct DailyTotals {
    conn: Connection,
}

impl DailyTotals {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_DAILY_TOTALS, [])?;
        Ok(DailyTotals { conn: db.conn })
    }

    /// Atomically adds `minutes` to the entry for `(user_id, date)`,
    /// creating it on first increment of a new day.
    pub fn add(&mut self, user_id: &str, date: NaiveDate, minutes: i64) -> Result<()> {
        let date_str = date.format("%Y-%m-%d").to_string();
        self.conn
            .execute(UPSERT_ADD, rusqlite::params![user_id, date_str, minutes])?;
        Ok(())
    }

    /// The committed total for one date, or `None` when no entry exists.
    pub fn fetch_day(&mut self, user_id: &str, date: NaiveDate) -> Result<Option<i64>> {
        let date_str = date.format("%Y-%m-%d").to_string();
        let minutes = self
            .conn
            .query_row(SELECT_DAY, rusqlite::params![user_id, date_str], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(minutes)
    }

    /// Entries within the inclusive range in ascending date order. Dates
    /// with no entry are absent; see the aggregator for zero-filled output.
    pub fn fetch_range(
        &mut self,
        user_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<DayTotal>> {
        let from_str = from.format("%Y-%m-%d").to_string();
        let to_str = to.format("%Y-%m-%d").to_string();
        let mut stmt = self.conn.prepare(SELECT_RANGE)?;
        let entry_iter = stmt.query_map(rusqlite::params![user_id, from_str, to_str], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
        })?;

        let mut entries = Vec::new();
        for entry in entry_iter {
            let (date_str, minutes) = entry?;
            let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")?;
            entries.push(DayTotal { date, minutes });
        }
        Ok(entries)
    }
}
