use crate::core::domain::error::{ProxmoxResult, ValidationError};
use url::Url;

/// Default Proxmox VE API port.
pub const DEFAULT_PORT: u16 = 8006;

/// Resolved connection details for one cluster endpoint.
///
/// Construction validates the host and credentials and fixes the base URL,
/// so every consumer downstream can treat the endpoint as well-formed.
#[derive(Debug, Clone)]
pub struct Connection {
    host: String,
    port: u16,
    username: String,
    password: String,
    secure: bool,
    accept_invalid_certs: bool,
    url: Url,
}

impl Connection {
    /// Creates a validated connection.
    ///
    /// `username` is a full Proxmox userid including the realm, e.g.
    /// `root@pam`.
    pub fn new(
        host: impl Into<String>,
        port: u16,
        username: impl Into<String>,
        password: impl Into<String>,
        secure: bool,
        accept_invalid_certs: bool,
    ) -> ProxmoxResult<Self> {
        let host = host.into();
        let username = username.into();
        let password = password.into();

        validate_host(&host)?;
        if username.trim().is_empty() {
            return Err(ValidationError::Field {
                field: "username".to_string(),
                message: "Username cannot be empty".to_string(),
            }
            .into());
        }
        if password.is_empty() {
            return Err(ValidationError::Field {
                field: "password".to_string(),
                message: "Password cannot be empty".to_string(),
            }
            .into());
        }

        let scheme = if secure { "https" } else { "http" };
        let url = Url::parse(&format!("{scheme}://{host}:{port}/"))
            .map_err(|e| ValidationError::Format(format!("Invalid endpoint URL: {e}")))?;

        Ok(Self {
            host,
            port,
            username,
            password,
            secure,
            accept_invalid_certs,
            url,
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn is_secure(&self) -> bool {
        self.secure
    }

    pub fn accept_invalid_certs(&self) -> bool {
        self.accept_invalid_certs
    }

    /// Base URL of the endpoint, with a trailing slash.
    pub fn url(&self) -> &Url {
        &self.url
    }
}

fn validate_host(host: &str) -> Result<(), ValidationError> {
    if host.is_empty() {
        return Err(ValidationError::Field {
            field: "host".to_string(),
            message: "Host cannot be empty".to_string(),
        });
    }

    if host.len() > 253 {
        return Err(ValidationError::Format(
            "Host length exceeds maximum of 253 characters".to_string(),
        ));
    }

    for label in host.split('.') {
        if label.is_empty() || label.len() > 63 {
            return Err(ValidationError::Format(
                "Label must be between 1 and 63 characters".to_string(),
            ));
        }
        if !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(ValidationError::Format(
                "Label can only contain alphanumeric characters and hyphens".to_string(),
            ));
        }
        if label.starts_with('-') || label.ends_with('-') {
            return Err(ValidationError::Format(
                "Label cannot start or end with hyphen".to_string(),
            ));
        }
    }

    Ok(())
}
