pub mod auth;
pub mod context;
pub mod datastore;
pub mod error;

pub use auth::AuthClient;
pub use context::Context;
pub use datastore::DatastoreWriterClient;
pub use error::{Error, Result};

use serde::Serialize;
use tracing::debug;
use url::Url;

const UNREADABLE_BODY: &str = "[can not read body]";

/// Joins fixed absolute `path` onto service `base` URL, replacing any path the base has.
pub(crate) fn service_url(base: &Url, path: &str) -> Result<Url> {
    base.join(path).map_err(Error::request_construction)
}

/// Sends single JSON POST request within context `ctx` and checks that response status is 2xx.
pub(crate) async fn post_json<B>(
    http: &reqwest::Client,
    ctx: &Context,
    service: &'static str,
    url: Url,
    body: &B,
) -> Result<reqwest::Response>
where
    B: Serialize + ?Sized,
{
    let request = http
        .post(url)
        .json(body)
        .build()
        .map_err(Error::request_construction)?;
    debug!("Sending {} {} to {} service", request.method(), request.url(), service);

    let response = ctx
        .run(http.execute(request))
        .await?
        .map_err(Error::Transport)?;

    let status = response.status();
    if !status.is_success() {
        let body = match ctx.run(response.text()).await {
            Ok(Ok(body)) => body,
            _ => UNREADABLE_BODY.to_string(),
        };
        return Err(Error::UpstreamStatus {
            service,
            status,
            body,
        });
    }
    Ok(response)
}
