use serde::Serialize;

/// Body of the `access/ticket` login call.
///
/// The username carries the realm (`root@pam`), matching the userid format
/// stored in the cluster config file.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}
