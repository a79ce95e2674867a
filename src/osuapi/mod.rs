mod beatmaps;
pub mod models;
mod users;

use std::sync::Arc;

use parking_lot::RwLock;
use reqwest::{header, Client, Method};
use serde::ser::Serialize;
use serde_json::Value;

use crate::config::Config;
use crate::error::{Error, Result};

/// Handle to the osu! API v2.
///
/// Clones share one connection pool. The pool lives until [`Osuapi::close`]
/// is called or the last clone is dropped.
#[derive(Clone)]
pub struct Osuapi {
    http_client: Arc<RwLock<Option<Client>>>,
    config: Arc<Config>,
}

impl Osuapi {
    pub fn new(config: Config) -> Self {
        Osuapi {
            http_client: Arc::new(RwLock::new(Some(Client::new()))),
            config: Arc::new(config),
        }
    }

    pub fn with_credentials(client_id: u64, client_secret: impl Into<String>) -> Self {
        Osuapi::new(Config::new(client_id, client_secret))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Releases the connection pool. Calling this more than once is a no-op.
    pub fn close(&self) {
        if self.http_client.write().take().is_some() {
            debug!("closed osu! api session");
        }
    }

    pub fn is_closed(&self) -> bool {
        self.http_client.read().is_none()
    }

    fn session(&self) -> Result<Client> {
        self.http_client.read().clone().ok_or(Error::Closed)
    }

    /// Exchanges the client credentials for a fresh token. Tokens are never
    /// reused, so every API call pays for one of these.
    pub async fn fetch_token(&self) -> Result<OsuToken> {
        let client = self.session()?;
        let form = TokenRequest {
            client_id: self.config.oauth_client_id,
            client_secret: &self.config.oauth_client_secret,
            grant_type: "client_credentials",
            scope: "public",
        };
        let req = client
            .request(Method::POST, &self.config.token_url)
            .header(header::ACCEPT, "application/json")
            .form(&form)
            .build()?;
        debug!("request: {} {}", req.method(), req.url());

        let res = client.execute(req).await?;
        let status = res.status();
        trace!("token endpoint answered {}", status);
        if status.is_client_error() {
            return Err(Error::Authentication(format!(
                "{}. Make sure your client_secret is right",
                status
            )));
        }

        let body = res.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Performs one authenticated call against the API and hands back the
    /// decoded body, whatever the status code was.
    pub async fn request<Q>(&self, method: Method, path: &str, query: Option<&Q>) -> Result<Value>
    where
        Q: Serialize + ?Sized,
    {
        let client = self.session()?;
        let token = self.fetch_token().await?;

        let mut builder = client
            .request(method, format!("{}{}", self.config.api_url, path))
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json")
            .header(
                header::AUTHORIZATION,
                "Bearer ".to_owned() + &token.access_token,
            );
        if let Some(query) = query {
            builder = builder.query(query);
        }
        let req = builder.build()?;
        debug!("request: {} {}", req.method(), req.url());

        let url = req.url().clone();
        let res = client.execute(req).await?;
        if !res.status().is_success() {
            warn!("{} answered {}", url, res.status());
        }

        let body = res.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// The API's "nothing here" answer: an `error` key holding null
fn is_null_error(json: &Value) -> bool {
    json.get("error").map_or(false, Value::is_null)
}

#[derive(Debug, Serialize)]
struct TokenRequest<'a> {
    client_id: u64,
    client_secret: &'a str,
    grant_type: &'static str,
    scope: &'static str,
}

#[derive(Clone, Debug, Deserialize)]
pub struct OsuToken {
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: u64,
    pub access_token: String,
}
