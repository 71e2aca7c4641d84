use anyhow::{anyhow, Context as _};
use clap::Args;
use mgmt_types::api::{SetPasswordRequest, REDACTED, SET_PASSWORD_PATH};
use tracing::debug;

use crate::{commands::Executor, config::ClientConfig};

pub const SET_PASSWORD_HELP: &str = "Sets the password of an user

This command sets the password of a user by a given user id.";

#[derive(Args)]
pub struct SetPasswordCmd {
    #[command(flatten)]
    client: ClientConfig,
    #[arg(short, long, default_value_t = 1, help = "ID of the user account")]
    pub user_id: i64,
    #[arg(short, long, default_value = "admin", help = "New password for the user")]
    pub password: String,
}

impl std::fmt::Debug for SetPasswordCmd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SetPasswordCmd")
            .field("client", &self.client)
            .field("user_id", &self.user_id)
            .field("password", &REDACTED)
            .finish()
    }
}

impl SetPasswordCmd {
    async fn send(&self) -> anyhow::Result<()> {
        let http = reqwest::Client::builder()
            .timeout(self.client.timeout)
            .build()?;
        let url = self.client.address.join(SET_PASSWORD_PATH)?;
        let request = SetPasswordRequest {
            user_id: self.user_id,
            password: self.password.clone(),
        };
        debug!("Calling {url} for user {}", self.user_id);

        let response = http.post(url).json(&request).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "[can not read body]".to_string());
            return Err(anyhow!("management service returned {status}: {body}"));
        }
        Ok(())
    }
}

impl Executor for SetPasswordCmd {
    async fn run(self) -> anyhow::Result<()> {
        self.send().await.context("reset password")?;
        println!("Password of user {} was changed", self.user_id);
        Ok(())
    }
}
