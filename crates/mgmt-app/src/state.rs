use std::{sync::Arc, time::Duration};

use mgmt_client::{AuthClient, DatastoreWriterClient};
use mgmt_types::config::ServicesConfig;

use crate::set_password::SetPassword;

pub type DefaultSetPassword = SetPassword<AuthClient, DatastoreWriterClient>;

#[derive(Clone)]
pub struct AppState {
    state: Arc<AppStateInner>,
}

struct AppStateInner {
    set_password: DefaultSetPassword,
    timeout: Duration,
}

impl AppState {
    /// Both clients share one HTTP connection pool
    pub fn new(services: &ServicesConfig, timeout: Duration) -> Self {
        let http = reqwest::Client::new();
        let set_password = SetPassword::new(
            AuthClient::new(http.clone(), services.auth_url.clone()),
            DatastoreWriterClient::new(http, services.datastore_writer_url.clone()),
        );
        AppState {
            state: Arc::new(AppStateInner {
                set_password,
                timeout,
            }),
        }
    }

    pub fn set_password(&self) -> &DefaultSetPassword {
        &self.state.set_password
    }

    /// Deadline budget for one inbound operation
    pub fn timeout(&self) -> Duration {
        self.state.timeout
    }
}
