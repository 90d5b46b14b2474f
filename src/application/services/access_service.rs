//! IP whitelist and password gate for the registration endpoint.

use std::net::IpAddr;

use serde_json::json;

use crate::error::AppError;

/// Access policy for creating new short links.
///
/// Both checks are opt-in: an empty whitelist admits every address, and
/// an unset password disables the password check. Resolution of existing
/// codes is never gated.
pub struct AccessService {
    whitelist: Vec<IpAddr>,
    password: Option<String>,
    behind_proxy: bool,
}

impl AccessService {
    /// Creates a new access policy.
    pub fn new(whitelist: Vec<IpAddr>, password: Option<String>, behind_proxy: bool) -> Self {
        Self {
            whitelist,
            password,
            behind_proxy,
        }
    }

    /// When true, the client address is read from forwarding headers.
    pub fn behind_proxy(&self) -> bool {
        self.behind_proxy
    }

    /// Checks the client address against the whitelist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Forbidden`] when a non-empty whitelist does
    /// not contain `ip`.
    pub fn check_ip(&self, ip: IpAddr) -> Result<(), AppError> {
        if self.whitelist.is_empty() || self.whitelist.contains(&ip) {
            Ok(())
        } else {
            Err(AppError::forbidden(
                "Not allowed",
                json!({ "ip": ip.to_string() }),
            ))
        }
    }

    /// Checks a caller-provided password against the configured one.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Forbidden`] when a password is configured and
    /// `provided` does not match it.
    pub fn check_password(&self, provided: Option<&str>) -> Result<(), AppError> {
        match &self.password {
            None => Ok(()),
            Some(expected) if provided == Some(expected.as_str()) => Ok(()),
            Some(_) => Err(AppError::forbidden(
                "Not allowed",
                json!({ "reason": "invalid password" }),
            )),
        }
    }
}
