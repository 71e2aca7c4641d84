use mgmt_types::Fqid;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;
use url::Url;

use crate::{post_json, service_url, Context, Result};

pub const DATASTORE_WRITE_PATH: &str = "/internal/datastore/writer/write";
const SERVICE_NAME: &str = "datastore writer";
pub const PASSWORD_FIELD: &str = "password";

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Update,
}

#[derive(Debug, Clone, Serialize)]
pub struct WriteEvent {
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub fqid: Fqid,
    pub fields: Map<String, Value>,
}

impl WriteEvent {
    pub fn update(fqid: Fqid, fields: Map<String, Value>) -> Self {
        WriteEvent {
            event_type: EventType::Update,
            fqid,
            fields,
        }
    }
}

/// Batch of events for the datastore writer. Metadata fields are fixed for
/// writes done on behalf of the system rather than of a user.
#[derive(Debug, Clone, Serialize)]
pub struct WriteRequest {
    pub user_id: i64,
    pub information: Map<String, Value>,
    pub locked_fields: Map<String, Value>,
    pub events: Vec<WriteEvent>,
}

impl WriteRequest {
    pub fn new(events: Vec<WriteEvent>) -> Self {
        WriteRequest {
            user_id: 0,
            information: Map::new(),
            locked_fields: Map::new(),
            events,
        }
    }

    pub fn set_password(user_id: u64, hash: &str) -> Self {
        let mut fields = Map::new();
        fields.insert(PASSWORD_FIELD.to_string(), Value::String(hash.to_string()));
        WriteRequest::new(vec![WriteEvent::update(Fqid::user(user_id), fields)])
    }
}

#[derive(Debug, Clone)]
pub struct DatastoreWriterClient {
    http: reqwest::Client,
    base_url: Url,
}

impl DatastoreWriterClient {
    pub fn new(http: reqwest::Client, base_url: Url) -> Self {
        DatastoreWriterClient { http, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Sends the request to the writer, response body is not interpreted
    pub async fn write(&self, ctx: &Context, request: &WriteRequest) -> Result<()> {
        let url = service_url(&self.base_url, DATASTORE_WRITE_PATH)?;
        post_json(&self.http, ctx, SERVICE_NAME, url, request).await?;
        debug!("Datastore writer accepted {} event(s)", request.events.len());
        Ok(())
    }

    pub async fn write_password_field(&self, ctx: &Context, user_id: u64, hash: &str) -> Result<()> {
        self.write(ctx, &WriteRequest::set_password(user_id, hash))
            .await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_set_password_body() {
        let request = WriteRequest::set_password(7, "H1");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "user_id": 0,
                "information": {},
                "locked_fields": {},
                "events": [{"type": "update", "fqid": "user/7", "fields": {"password": "H1"}}]
            })
        );
    }

    #[test]
    fn test_hash_is_escaped() {
        let request = WriteRequest::set_password(1, r#"$argon2id$"},"x":"#);
        let json = serde_json::to_string(&request).unwrap();
        let back: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(back["events"][0]["fields"]["password"], r#"$argon2id$"},"x":"#);
        assert_eq!(back["events"][0]["fields"].as_object().unwrap().len(), 1);
    }
}
