// Authentication for the Awair API.
//
// The cloud API wants a bearer token on every request; devices reached
// over the local network take no authentication at all. Credential data
// is carried here, header construction happens in the client.

use secrecy::{ExposeSecret, SecretString};

/// Credentials for authenticating with the Awair API.
#[derive(Debug, Clone)]
pub enum Credentials {
    /// Developer access token, sent as `Authorization: Bearer <token>`.
    /// Generated at: <https://developer.getawair.com/console/access-token>.
    AccessToken(SecretString),

    /// No authentication -- local-network mode only.
    None,
}

impl Credentials {
    /// Construct token credentials from any string-ish secret.
    pub fn access_token(token: impl Into<String>) -> Self {
        Self::AccessToken(SecretString::from(token.into()))
    }

    /// The bearer token to attach to a request, if these credentials
    /// carry one.
    pub(crate) fn bearer_token(&self) -> Option<&str> {
        match self {
            Self::AccessToken(token) => Some(token.expose_secret()),
            Self::None => None,
        }
    }
}
