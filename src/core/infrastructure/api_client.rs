//! Internal HTTP client that attaches authentication to API calls.

use crate::{
    auth::application::service::login_service::LoginService,
    core::domain::{
        error::{ProxmoxError, ProxmoxResult},
        model::{auth::Auth, connection::Connection},
    },
};
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Envelope wrapping every API payload.
#[derive(Debug, Deserialize)]
struct ApiData<T> {
    data: T,
}

/// HTTP client bound to one cluster endpoint.
///
/// Once [`login`](ApiClient::login) has stored a ticket, every request
/// carries the `PVEAuthCookie` cookie and `CSRFPreventionToken` header.
/// There is no refresh: a ticket expiring mid-run surfaces as an API error
/// on the next call.
#[derive(Debug)]
pub struct ApiClient {
    http_client: Client,
    connection: Connection,
    auth: Option<Auth>,
}

impl ApiClient {
    /// Creates a new `ApiClient`. The client starts unauthenticated.
    ///
    /// # Errors
    /// Returns `ProxmoxError::Connection` if the HTTP client cannot be
    /// built.
    pub fn new(connection: Connection) -> ProxmoxResult<Self> {
        let http_client = Client::builder()
            .danger_accept_invalid_certs(connection.accept_invalid_certs())
            .build()
            .map_err(|e| ProxmoxError::Connection(e.to_string()))?;

        Ok(Self {
            http_client,
            connection,
            auth: None,
        })
    }

    /// Returns a reference to the underlying connection details.
    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    /// Obtains a ticket for the configured credentials.
    pub async fn login(&mut self) -> ProxmoxResult<()> {
        let service = LoginService::new();
        self.auth = Some(service.execute(&self.connection).await?);
        Ok(())
    }

    /// Returns `true` if the client holds a ticket.
    pub fn is_authenticated(&self) -> bool {
        self.auth.is_some()
    }

    /// Installs an already-obtained ticket pair.
    pub fn set_auth(&mut self, auth: Auth) {
        self.auth = Some(auth);
    }

    /// Performs an authenticated GET request and unwraps the `data`
    /// envelope.
    ///
    /// # Errors
    /// Returns `ProxmoxError::Connection` if the request fails, the server
    /// answers with a non-success status, or the response cannot be
    /// parsed.
    pub async fn get<T>(&self, path: &str) -> ProxmoxResult<T>
    where
        T: DeserializeOwned,
    {
        let base = self.connection.url().as_str().trim_end_matches('/');
        let url = format!("{}/api2/json/{}", base, path.trim_start_matches('/'));

        let mut req_builder = self.http_client.get(&url);
        if let Some(auth) = self.auth.as_ref() {
            req_builder = req_builder
                .header("Cookie", auth.cookie_header())
                .header("CSRFPreventionToken", auth.csrf_token());
        }

        let response = req_builder
            .send()
            .await
            .map_err(|e| ProxmoxError::Connection(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown".to_string());
            return Err(ProxmoxError::Connection(format!(
                "API error ({}): {}",
                status, error_text
            )));
        }

        let envelope = response
            .json::<ApiData<T>>()
            .await
            .map_err(|e| ProxmoxError::Connection(format!("Failed to parse response: {}", e)))?;
        Ok(envelope.data)
    }
}
