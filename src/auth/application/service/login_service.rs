use crate::{
    auth::application::{
        request::login_request::LoginRequest, response::login_response::LoginResponse,
    },
    core::domain::{
        error::{ProxmoxError, ProxmoxResult, ValidationError},
        model::{auth::Auth, connection::Connection},
    },
};

use reqwest::{
    Client, StatusCode,
    header::{ACCEPT, CONTENT_TYPE, HeaderMap},
};

/// Performs the ticket exchange against `access/ticket`.
pub struct LoginService {
    default_headers: HeaderMap,
}

impl LoginService {
    pub fn new() -> Self {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, "application/json".parse().unwrap());
        default_headers.insert(ACCEPT, "application/json".parse().unwrap());

        Self { default_headers }
    }

    /// Exchanges the connection's credentials for an [`Auth`] ticket pair.
    pub async fn execute(&self, connection: &Connection) -> ProxmoxResult<Auth> {
        let http_client = Client::builder()
            .danger_accept_invalid_certs(connection.accept_invalid_certs())
            .build()
            .map_err(|e| ProxmoxError::Connection(e.to_string()))?;
        let url = self.build_login_url(connection);
        let request = self.build_login_request(connection);
        let response = self.send_request(&http_client, &url, &request).await?;

        match response.status() {
            StatusCode::OK => self.handle_successful_login(response).await,
            StatusCode::UNAUTHORIZED => Err(ProxmoxError::Authentication(
                "Invalid credentials provided".to_string(),
            )),
            StatusCode::BAD_REQUEST => Err(ValidationError::Field {
                field: "request".to_string(),
                message: "Invalid request format".to_string(),
            }
            .into()),
            StatusCode::NOT_FOUND => Err(ProxmoxError::Connection(
                "Login endpoint not found".to_string(),
            )),
            StatusCode::SERVICE_UNAVAILABLE => Err(ProxmoxError::Connection(
                "Proxmox service is currently unavailable".to_string(),
            )),
            status => Err(ProxmoxError::Connection(format!(
                "Unexpected response status: {}",
                status
            ))),
        }
    }

    fn build_login_url(&self, connection: &Connection) -> String {
        format!("{}api2/json/access/ticket", connection.url())
    }

    fn build_login_request(&self, connection: &Connection) -> LoginRequest {
        LoginRequest {
            username: connection.username().to_string(),
            password: connection.password().to_string(),
        }
    }

    async fn send_request(
        &self,
        client: &Client,
        url: &str,
        request: &LoginRequest,
    ) -> ProxmoxResult<reqwest::Response> {
        client
            .post(url)
            .headers(self.default_headers.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| ProxmoxError::Connection(e.to_string()))
    }

    async fn handle_successful_login(&self, response: reqwest::Response) -> ProxmoxResult<Auth> {
        let login_response = response.json::<LoginResponse>().await.map_err(|e| {
            ProxmoxError::Connection(format!("Failed to parse login response: {}", e))
        })?;

        Auth::new(login_response.data.ticket, login_response.data.csrf_token)
    }
}

impl Default for LoginService {
    fn default() -> Self {
        Self::new()
    }
}
