use serde::Deserialize;

/// Successful `access/ticket` response envelope.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub data: LoginData,
}

/// Ticket payload of a successful login.
#[derive(Debug, Deserialize)]
pub struct LoginData {
    pub ticket: String,
    #[serde(rename = "CSRFPreventionToken")]
    pub csrf_token: String,
}
