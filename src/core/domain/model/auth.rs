use crate::core::domain::error::{ProxmoxResult, ValidationError};

/// Authentication state returned by the `access/ticket` endpoint.
///
/// Holds the session ticket and the CSRF prevention token that accompany
/// every subsequent API request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Auth {
    ticket: String,
    csrf_token: String,
}

impl Auth {
    /// Validates and stores a ticket/CSRF-token pair.
    pub fn new(ticket: String, csrf_token: String) -> ProxmoxResult<Self> {
        if !ticket.starts_with("PVE:") {
            return Err(ValidationError::Format(
                "Ticket must start with 'PVE:'".to_string(),
            )
            .into());
        }
        if csrf_token.trim().is_empty() {
            return Err(ValidationError::Field {
                field: "CSRFPreventionToken".to_string(),
                message: "Token cannot be empty".to_string(),
            }
            .into());
        }
        Ok(Self { ticket, csrf_token })
    }

    pub fn ticket(&self) -> &str {
        &self.ticket
    }

    pub fn csrf_token(&self) -> &str {
        &self.csrf_token
    }

    /// Renders the `Cookie` header value expected by the API.
    pub fn cookie_header(&self) -> String {
        format!("PVEAuthCookie={}", self.ticket)
    }
}
