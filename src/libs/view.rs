//! Console table rendering for the reporting commands.

use crate::libs::formatter::format_minutes;
use crate::libs::session::DayTotal;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Renders the today/week/month summary.
    pub fn sum(today: i64, week: i64, month: i64) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["PERIOD", "TIME", "MINUTES"]);
        table.add_row(row!["Today", format_minutes(today), today]);
        table.add_row(row!["Last 7 days", format_minutes(week), week]);
        table.add_row(row!["Last 30 days", format_minutes(month), month]);
        table.printstd();

        Ok(())
    }

    /// Renders one row per day, zeros included, with a total row.
    pub fn days(totals: &Vec<DayTotal>) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DATE", "TIME", "MINUTES"]);
        for total in totals {
            table.add_row(row![
                total.date.format("%Y-%m-%d"),
                format_minutes(total.minutes),
                total.minutes
            ]);
        }
        let sum: i64 = totals.iter().map(|total| total.minutes).sum();
        table.add_row(row!["TOTAL", format_minutes(sum), sum]);
        table.printstd();

        Ok(())
    }
}
