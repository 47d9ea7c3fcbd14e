//! Async client for the Transfluent translation-management API

use std::collections::HashMap;
use std::time::Duration;

use base64::engine::general_purpose;
use base64::Engine as _;
use reqwest::{Method, StatusCode};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::core::config::ClientConfig;
use crate::core::errors::{Result, TransfluentError};
use crate::core::models::{ErrorEnvelope, FileSaveOptions, FileSource, Payload, TranslateOptions};
use crate::core::params::Params;

/// Client for the Transfluent API.
///
/// Every method performs at most one network round-trip and returns once it
/// completes or fails; there are no internal retries and no background tasks.
/// `authenticate` takes `&mut self`, so sharing one client across tasks while
/// re-authenticating requires external synchronization by the caller.
#[derive(Debug, Clone)]
pub struct Transfluent {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl Transfluent {
    /// Create a new client from configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate().map_err(|e| TransfluentError::ConfigError {
            message: e.to_string(),
        })?;

        let timeout = Duration::from_millis(config.timeout_ms);
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: config.base_url,
            token: config.token,
        })
    }

    /// Create a client for an already-authenticated session
    pub fn with_token(token: impl Into<String>) -> Result<Self> {
        Self::new(ClientConfig::with_token(token))
    }

    /// Current session token, if any
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Base URL requests are issued against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Perform one API call.
    ///
    /// GET sends `params` as the query string, POST as a form-encoded body;
    /// any other method is rejected locally without a network call. A non-200
    /// status is decoded as the service's error envelope; a 200 JSON body
    /// yields the envelope's `response` field, and a 200 non-JSON body is
    /// passed through as raw bytes.
    pub async fn request(&self, method: Method, path: &str, params: Params) -> Result<Payload> {
        let url = format!("{}{}", self.base_url, path);

        let builder = match method {
            Method::GET => {
                let builder = self.client.get(&url);
                if params.is_empty() {
                    builder
                } else {
                    builder.query(params.as_pairs())
                }
            }
            Method::POST => self.client.post(&url).form(params.as_pairs()),
            other => return Err(TransfluentError::UnsupportedMethod(other.to_string())),
        };

        debug!("{} {}", method, url);
        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if status != StatusCode::OK {
            warn!("{} {} returned status {}", method, url, status);
            let envelope: ErrorEnvelope = serde_json::from_slice(&body).map_err(|e| {
                TransfluentError::MalformedResponse {
                    message: e.to_string(),
                }
            })?;
            return Err(TransfluentError::Remote {
                kind: envelope.error.kind,
                message: envelope.error.message,
            });
        }

        match serde_json::from_slice::<Value>(&body) {
            Ok(envelope) => {
                let response = envelope.get("response").cloned().ok_or_else(|| {
                    TransfluentError::InvalidResponse {
                        message: "envelope is missing the response field".to_string(),
                    }
                })?;
                Ok(Payload::Json(response))
            }
            Err(_) => Ok(Payload::Raw(body.to_vec())),
        }
    }

    /// Perform one API call with the session token appended.
    ///
    /// An unset token is sent as an empty value rather than rejected here; the
    /// service reports it as a `Remote` error.
    pub async fn authed_request(
        &self,
        method: Method,
        path: &str,
        mut params: Params,
    ) -> Result<Payload> {
        params.push("token", self.token.as_deref().unwrap_or_default());
        self.request(method, path, params).await
    }

    /// Exchange credentials for a session token and store it on the client
    pub async fn authenticate(&mut self, email: &str, password: &str) -> Result<()> {
        let params = Params::new()
            .with("email", email)
            .with("password", password);
        let response = self
            .request(Method::GET, "authenticate", params)
            .await?
            .into_json()?;

        let token = response
            .get("token")
            .and_then(Value::as_str)
            .ok_or_else(|| TransfluentError::InvalidResponse {
                message: "authenticate response is missing the token field".to_string(),
            })?;

        self.token = Some(token.to_string());
        info!("authenticated as {}", email);
        Ok(())
    }

    /// Fetch the account's customer name
    pub async fn get_customer_name(&self) -> Result<Value> {
        self.authed_request(Method::GET, "customer/name", Params::new())
            .await?
            .into_json()
    }

    /// Update the account's customer name
    pub async fn set_customer_name(&self, name: &str) -> Result<Value> {
        let params = Params::new().with("name", name);
        self.authed_request(Method::POST, "customer/name", params)
            .await?
            .into_json()
    }

    /// Fetch the account's contact email
    pub async fn get_customer_email(&self) -> Result<Value> {
        self.authed_request(Method::GET, "customer/email", Params::new())
            .await?
            .into_json()
    }

    /// Update the account's contact email
    pub async fn set_customer_email(&self, email: &str) -> Result<Value> {
        let params = Params::new().with("email", email);
        self.authed_request(Method::POST, "customer/email", params)
            .await?
            .into_json()
    }

    /// List the language codes and names the service supports
    pub async fn languages(&self) -> Result<Value> {
        self.request(Method::GET, "languages", Params::new())
            .await?
            .into_json()
    }

    /// Upload a file for translation under the given identifier.
    ///
    /// The content is resolved from `source`, base64-encoded and submitted as
    /// a form field.
    pub async fn file_save(
        &self,
        identifier: &str,
        language: i64,
        source: FileSource,
        file_type: &str,
        opts: FileSaveOptions,
    ) -> Result<Value> {
        let content = source.into_bytes()?;

        let mut params = Params::new();
        params.push("identifier", identifier);
        params.push("language", language);
        params.push("format", &opts.format);
        params.push("content", general_purpose::STANDARD.encode(&content));
        params.push("type", file_type);
        params.push("save_only_data", opts.save_only_data as u8);

        self.authed_request(Method::POST, "file/save", params)
            .await?
            .into_json()
    }

    /// Translation status of a file; includes a `progress` percentage string
    pub async fn file_status(&self, identifier: &str, language: i64) -> Result<Value> {
        let params = Params::new()
            .with("identifier", identifier)
            .with("language", language);
        self.authed_request(Method::GET, "file/status", params)
            .await?
            .into_json()
    }

    /// Whether a file's translation has finished.
    ///
    /// True only when the reported progress is exactly `"100%"`; partial
    /// values such as `"37.55%"` or variants like `"100.0%"` are incomplete.
    pub async fn is_file_complete(&self, identifier: &str, language: i64) -> Result<bool> {
        let status = self.file_status(identifier, language).await?;
        Ok(status.get("progress").and_then(Value::as_str) == Some("100%"))
    }

    /// Order a translation of a previously saved file into the target languages
    pub async fn file_translate(
        &self,
        identifier: &str,
        language: i64,
        target_languages: &[i64],
        opts: TranslateOptions,
    ) -> Result<Value> {
        let mut params = Params::new();
        params.push("identifier", identifier);
        params.push("language", language);
        params.push_list("target_languages[]", target_languages);
        params.push("level", opts.level);
        params.push("comment", &opts.comment);
        params.push("callback_url", &opts.callback_url);

        self.authed_request(Method::POST, "file/translate", params)
            .await?
            .into_json()
    }

    /// Download a translated file.
    ///
    /// The service may answer with the file's raw content or with a JSON
    /// structure; the caller distinguishes by inspecting the payload variant.
    pub async fn file_read(&self, identifier: &str, language: i64) -> Result<Payload> {
        let params = Params::new()
            .with("identifier", identifier)
            .with("language", language);
        self.authed_request(Method::GET, "file/read", params).await
    }

    /// Save a group of text fragments, one form field per entry
    pub async fn texts_save(
        &self,
        group_id: &str,
        language: i64,
        texts: &HashMap<String, String>,
        invalidate_translations: bool,
    ) -> Result<Value> {
        let mut params = Params::new();
        params.push("group_id", group_id);
        params.push("language", language);
        params.push("invalidate_translations", invalidate_translations as u8);
        for (key, content) in texts {
            params.push(format!("texts[{}]", key), content);
        }

        self.authed_request(Method::POST, "texts", params)
            .await?
            .into_json()
    }

    /// Read back stored text fragments for a group
    pub async fn texts_read(
        &self,
        group_id: &str,
        language: i64,
        limit: usize,
        offset: usize,
    ) -> Result<Value> {
        let params = Params::new()
            .with("group_id", group_id)
            .with("language", language)
            .with("limit", limit)
            .with("offset", offset);
        self.authed_request(Method::GET, "texts", params)
            .await?
            .into_json()
    }

    /// Order a translation of stored text fragments into the target languages
    pub async fn texts_translate(
        &self,
        group_id: &str,
        language: i64,
        target_languages: &[i64],
        text_ids: &[String],
        opts: TranslateOptions,
    ) -> Result<Value> {
        let mut params = Params::new();
        params.push("group_id", group_id);
        params.push("source_language", language);
        params.push_list("target_languages[]", target_languages);
        params.push_list("texts[][id]", text_ids);
        params.push("level", opts.level);
        params.push("comment", &opts.comment);
        params.push("callback_url", &opts.callback_url);
        params.push("max_words", opts.max_words);

        self.authed_request(Method::GET, "texts/translate", params)
            .await?
            .into_json()
    }
}
