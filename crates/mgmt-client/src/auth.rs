use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::{post_json, service_url, Context, Error, Result};

pub const AUTH_HASH_PATH: &str = "/internal/auth/hash";
const SERVICE_NAME: &str = "auth";

#[derive(Debug, Serialize)]
pub struct HashRequest<'a> {
    #[serde(rename = "toHash")]
    pub to_hash: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct HashResponse {
    pub hash: String,
}

/// Client of the authentication service, used to turn plaintext password into stored credential hash.
#[derive(Debug, Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    base_url: Url,
}

impl AuthClient {
    pub fn new(http: reqwest::Client, base_url: Url) -> Self {
        AuthClient { http, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Hashes `plaintext` with single request, no validation of plaintext is done here.
    pub async fn hash(&self, ctx: &Context, plaintext: &str) -> Result<String> {
        let url = service_url(&self.base_url, AUTH_HASH_PATH)?;
        let body = HashRequest { to_hash: plaintext };
        let response = post_json(&self.http, ctx, SERVICE_NAME, url, &body).await?;

        let bytes = ctx
            .run(response.bytes())
            .await?
            .map_err(Error::Transport)?;
        let decoded: HashResponse = serde_json::from_slice(&bytes).map_err(Error::decode)?;
        if decoded.hash.is_empty() {
            return Err(Error::Decode("empty hash in response".into()));
        }
        debug!("Received password hash from auth service");
        Ok(decoded.hash)
    }
}
