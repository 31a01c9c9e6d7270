//! Per-day study-time report command.
//!
//! Prefers the remote learning-time collection so the report includes
//! minutes committed from other machines, and falls back to the local
//! mirror when the platform is unreachable. Days without committed minutes
//! appear as explicit zero rows.

use crate::api::auth;
use crate::api::learning_time::{DailyStore, LearningTimeApi};
use crate::api::store::DocStore;
use crate::db::daily::DailyTotals;
use crate::libs::aggregator::{zero_fill, DailyAggregator};
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_print, msg_warning};
use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};
use clap::Args;

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Start date (YYYY-MM-DD), defaults to the first of the current month.
    #[arg(long)]
    from: Option<NaiveDate>,

    /// End date (YYYY-MM-DD), defaults to today.
    #[arg(long)]
    to: Option<NaiveDate>,
}

pub async fn cmd(report_args: ReportArgs) -> Result<()> {
    let config = Config::read()?;
    let Some(server) = config.server else {
        msg_bail_anyhow!(Message::ServerNotConfigured);
    };
    let Some(identity) = auth::current_session()? else {
        msg_bail_anyhow!(Message::NotLoggedIn);
    };

    let today = Local::now().date_naive();
    let from = report_args
        .from
        .unwrap_or_else(|| today.with_day(1).unwrap_or(today));
    let to = report_args.to.unwrap_or(today);

    let remote = LearningTimeApi::new(DocStore::new(&server, &identity.token));
    let totals = match remote.fetch_range(&identity.user_id, from, to).await {
        Ok(entries) => zero_fill(entries, from, to),
        Err(e) => {
            msg_warning!(Message::RemoteRangeFailed(e.to_string()));
            let mut aggregator = DailyAggregator::new(DailyTotals::new()?, remote);
            aggregator.range(&identity.user_id, from, to)?
        }
    };

    msg_print!(Message::ReportHeader(format!("{} to {}", from, to)), true);
    if totals.iter().all(|total| total.minutes == 0) {
        msg_print!(Message::NoMinutesRecorded);
    }
    View::days(&totals)?;
    Ok(())
}
