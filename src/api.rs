// API client module: a small blocking HTTP client for the gists endpoint.
// One call per run, no retries; the response body is read in full and the
// connection released before anything is printed.

use crate::error::{GistError, Result};
use chrono::{DateTime, Utc};
use reqwest::blocking::Client;
use reqwest::header::{HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, info};

const JSON: &str = "application/json";
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// One file inside a gist.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GistFile {
    pub content: String,
}

/// Request body for both create and update.
#[derive(Serialize, Debug)]
pub struct GistPayload {
    pub description: String,
    pub public: bool,
    pub files: BTreeMap<String, GistFile>,
}

/// Fields we read back from the API. Anything missing or of the wrong type
/// stays at its default.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GistResponse {
    pub id: String,
    pub url: String,
    pub forks_url: String,
    pub html_url: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// Whether the run creates a new gist or patches an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Create,
    Update(String),
}

impl Target {
    /// An empty or missing id means create.
    pub fn from_patch(id: Option<&str>) -> Self {
        match id {
            Some(id) if !id.is_empty() => Target::Update(id.to_string()),
            _ => Target::Create,
        }
    }

    pub fn method(&self) -> Method {
        match self {
            Target::Create => Method::POST,
            Target::Update(_) => Method::PATCH,
        }
    }

    pub fn url(&self, base_url: &str) -> String {
        let base = base_url.trim_end_matches('/');
        match self {
            Target::Create => format!("{}/gists", base),
            Target::Update(id) => format!("{}/gists/{}", base, id),
        }
    }
}

/// What came back from the API: raw status and body plus whatever could be
/// parsed out of the body.
#[derive(Debug)]
pub struct Submission {
    pub status: StatusCode,
    pub body: Vec<u8>,
    pub record: GistResponse,
}

impl Submission {
    pub fn new(status: StatusCode, body: Vec<u8>) -> Self {
        let record = parse_response(&body);
        Submission {
            status,
            body,
            record,
        }
    }

    /// Only 200 and 201 count as success.
    pub fn is_success(&self) -> bool {
        self.status == StatusCode::OK || self.status == StatusCode::CREATED
    }
}

/// Best-effort parse, field by field. A field that is absent, null, of the
/// wrong type or an unparseable timestamp is left at its default while the
/// others are kept; a body that is not JSON yields the default record.
pub fn parse_response(body: &[u8]) -> GistResponse {
    let value: Value = match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(err) => {
            debug!(error = %err, "response body is not json");
            return GistResponse::default();
        }
    };

    let text = |key: &str| {
        value
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };
    let created_at = value
        .get("created_at")
        .and_then(Value::as_str)
        .and_then(|raw| match DateTime::parse_from_rfc3339(raw) {
            Ok(date) => Some(date.with_timezone(&Utc)),
            Err(err) => {
                debug!(error = %err, raw, "created_at is not a timestamp");
                None
            }
        });

    GistResponse {
        id: text("id"),
        url: text("url"),
        forks_url: text("forks_url"),
        html_url: text("html_url"),
        created_at,
    }
}

/// Blocking client holding the API base URL and the resolved token.
pub struct GistClient {
    client: Client,
    base_url: String,
    token: String,
}

impl GistClient {
    pub fn new(base_url: &str, token: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(GistError::Client)?;
        Ok(GistClient {
            client,
            base_url: base_url.to_string(),
            token: token.to_string(),
        })
    }

    /// Value of the Authorization header for this client.
    fn auth_header(&self) -> String {
        format!("token {}", self.token)
    }

    /// Send `payload` to `target` and read the whole response.
    pub fn submit(&self, target: &Target, payload: &GistPayload) -> Result<Submission> {
        let body = serde_json::to_vec(payload).map_err(GistError::Encode)?;
        let method = target.method();
        let url = target.url(&self.base_url);
        info!(%method, %url, files = payload.files.len(), "sending gist");

        let res = self
            .client
            .request(method, &url)
            .header(AUTHORIZATION, self.auth_header())
            .header(ACCEPT, HeaderValue::from_static(JSON))
            .header(CONTENT_TYPE, HeaderValue::from_static(JSON))
            .body(body)
            .send()
            .map_err(GistError::Request)?;

        let status = res.status();
        let bytes = res.bytes().map_err(GistError::ReadResponse)?;
        debug!(%status, bytes = bytes.len(), "response received");
        Ok(Submission::new(status, bytes.to_vec()))
    }
}
