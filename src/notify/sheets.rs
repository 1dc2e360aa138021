use async_trait::async_trait;
use chrono::Local;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{NotificationError, Notifier};
use crate::{config::SheetsConfig, data_connector::Inquiry};

const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const API_BASE: &str = "https://sheets.googleapis.com";
const SPREADSHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";
const APPEND_RANGE: &str = "Bright Loop Media — Enquiries!A:G";
const GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Appends one row per inquiry to the operations spreadsheet using a
/// service-account credential.
pub struct SheetsNotifier {
    client: reqwest::Client,
    config: SheetsConfig,
    token_url: String,
    api_base: String,
}

#[derive(Serialize)]
struct TokenClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

impl SheetsNotifier {
    pub fn new(client: reqwest::Client, config: SheetsConfig) -> Self {
        Self {
            client,
            config,
            token_url: TOKEN_URL.to_string(),
            api_base: API_BASE.to_string(),
        }
    }

    /// Point the notifier at alternative endpoints, used by tests.
    pub fn with_endpoints(mut self, token_url: String, api_base: String) -> Self {
        self.token_url = token_url;
        self.api_base = api_base;
        self
    }

    /// Exchange a signed service-account assertion for a bearer token.
    async fn access_token(&self) -> Result<String, NotificationError> {
        let now = chrono::Utc::now().timestamp();
        let claims = TokenClaims {
            iss: &self.config.service_account_email,
            scope: SPREADSHEETS_SCOPE,
            aud: &self.token_url,
            iat: now,
            exp: now + 3600,
        };
        let key = EncodingKey::from_rsa_pem(self.config.private_key.as_bytes())?;
        let assertion = encode(&Header::new(Algorithm::RS256), &claims, &key)?;

        let response = self
            .client
            .post(&self.token_url)
            .form(&[("grant_type", GRANT_TYPE), ("assertion", assertion.as_str())])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(NotificationError::Api {
                status: response.status().as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }
        let token: TokenResponse = response.json().await?;
        Ok(token.access_token)
    }
}

fn sheet_row(inquiry: &Inquiry, date: &str) -> Vec<String> {
    vec![
        date.to_string(),
        inquiry.name.clone(),
        inquiry.phone.clone().unwrap_or_else(|| "N/A".to_string()),
        inquiry.email.clone(),
        inquiry.postcode.clone().unwrap_or_else(|| "N/A".to_string()),
        inquiry.service.clone(),
        inquiry.message.clone(),
    ]
}

#[async_trait]
impl Notifier for SheetsNotifier {
    fn name(&self) -> &'static str {
        "sheets"
    }

    async fn notify(&self, inquiry: &Inquiry) -> Result<(), NotificationError> {
        let token = self.access_token().await?;
        let url = format!(
            "{}/v4/spreadsheets/{}/values/{}:append?valueInputOption=USER_ENTERED",
            self.api_base, self.config.sheet_id, APPEND_RANGE
        );
        let date = Local::now().format("%d/%m/%Y %H:%M:%S").to_string();
        let body = json!({ "values": [sheet_row(inquiry, &date)] });

        let response = self
            .client
            .post(url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(NotificationError::Api {
                status: response.status().as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }
        Ok(())
    }
}
