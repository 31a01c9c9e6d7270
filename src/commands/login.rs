//! Sign-in command.
//!
//! Prompts for platform credentials, authenticates, and caches the returned
//! identity so the other commands can act as the signed-in user.

use crate::api::auth::{self, Auth};
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Password};

pub async fn cmd() -> Result<()> {
    let config = Config::read()?;
    let Some(server) = config.server else {
        msg_bail_anyhow!(Message::ServerNotConfigured);
    };

    let email: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptEmail.to_string())
        .interact_text()?;
    let password = Password::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptPassword.to_string())
        .interact()?;

    let session = Auth::new(&server).login(&email, &password).await?;
    auth::store_session(&session)?;
    msg_success!(Message::LoginSucceeded(session.user_id));
    Ok(())
}
