//! Study-time summary command.
//!
//! Reads the local mirror only, so the summary works offline and reflects
//! every minute flushed so far.

use crate::api::auth;
use crate::api::learning_time::LearningTimeApi;
use crate::api::store::DocStore;
use crate::db::daily::DailyTotals;
use crate::libs::aggregator::DailyAggregator;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_print};
use anyhow::Result;
use chrono::Local;

pub async fn cmd() -> Result<()> {
    let config = Config::read()?;
    let Some(server) = config.server else {
        msg_bail_anyhow!(Message::ServerNotConfigured);
    };
    let Some(identity) = auth::current_session()? else {
        msg_bail_anyhow!(Message::NotLoggedIn);
    };

    let store = DocStore::new(&server, &identity.token);
    let mut aggregator = DailyAggregator::new(DailyTotals::new()?, LearningTimeApi::new(store));

    let now = Local::now();
    let today = aggregator.today_minutes(&identity.user_id, now)?;
    let week = aggregator.week_minutes(&identity.user_id, now)?;
    let month = aggregator.month_minutes(&identity.user_id, now)?;

    msg_print!(Message::SumHeader(now.date_naive().to_string()), true);
    View::sum(today, week, month)?;
    Ok(())
}
