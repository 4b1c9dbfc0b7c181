//! Cluster credential lookup from the local config file.

use crate::core::domain::{
    error::{ProxmoxError, ProxmoxResult, ValidationError},
    model::connection::{Connection, DEFAULT_PORT},
};
use ini::Ini;
use std::path::Path;

/// Config file resolved relative to the working directory.
pub const CONFIG_FILE: &str = ".config.ini";

/// Credentials for one named cluster.
///
/// The config file carries one INI section per cluster:
///
/// ```ini
/// [lab]
/// host = pve.lab.example.com
/// user = root@pam
/// pass = secret
/// ```
///
/// `host` may carry an explicit port (`pve.lab.example.com:8007`);
/// otherwise the API default of 8006 applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterCredentials {
    pub host: String,
    pub user: String,
    pub pass: String,
}

impl ClusterCredentials {
    /// Reads [`CONFIG_FILE`] and resolves the section for `cluster`.
    pub fn load(cluster: &str) -> ProxmoxResult<Self> {
        Self::load_from(Path::new(CONFIG_FILE), cluster)
    }

    /// Like [`load`](Self::load), from an explicit path.
    pub fn load_from(path: &Path, cluster: &str) -> ProxmoxResult<Self> {
        let config = Ini::load_from_file(path)
            .map_err(|e| ProxmoxError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        let section = config.section(Some(cluster)).ok_or_else(|| {
            ProxmoxError::Config(format!("no section [{}] in {}", cluster, path.display()))
        })?;

        let field = |key: &str| -> ProxmoxResult<String> {
            section.get(key).map(str::to_string).ok_or_else(|| {
                ProxmoxError::Config(format!("section [{}] is missing '{}'", cluster, key))
            })
        };

        Ok(Self {
            host: field("host")?,
            user: field("user")?,
            pass: field("pass")?,
        })
    }

    /// Resolves the HTTPS connection for these credentials.
    ///
    /// Certificate verification is disabled: cluster endpoints are
    /// expected to present self-signed certificates.
    pub fn connection(&self) -> ProxmoxResult<Connection> {
        let (host, port) = split_host_port(&self.host)?;
        Connection::new(host, port, self.user.clone(), self.pass.clone(), true, true)
    }
}

fn split_host_port(raw: &str) -> ProxmoxResult<(&str, u16)> {
    match raw.rsplit_once(':') {
        Some((host, port)) => {
            let port = port.parse().map_err(|_| {
                ValidationError::Format(format!("Invalid port in host '{}'", raw))
            })?;
            Ok((host, port))
        }
        None => Ok((raw, DEFAULT_PORT)),
    }
}
