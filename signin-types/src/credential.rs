// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed boundary for the identity provider callback payload.
//!
//! Google Identity Services calls back with a `CredentialResponse` object.
//! Only `credential` is required here; it is an opaque ID token that the
//! application must send to its server for verification. Nothing in this
//! crate decodes or trusts it.

use std::fmt;

use serde::Deserialize;

use crate::error::SignInError;

/// Raw payload as delivered to the `callback` passed to `initialize`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CredentialResponse {
    #[serde(default)]
    pub credential: Option<String>,
    #[serde(default)]
    pub select_by: Option<String>,
    #[serde(default, rename = "clientId")]
    pub client_id: Option<String>,
}

impl CredentialResponse {
    /// Reject payloads without a usable token instead of forwarding them.
    pub fn validate(self) -> Result<Credential, SignInError> {
        let token = self
            .credential
            .ok_or_else(|| SignInError::MalformedCredential("missing `credential`".into()))?;
        if token.is_empty() {
            return Err(SignInError::MalformedCredential(
                "`credential` is empty".into(),
            ));
        }
        if token.chars().any(char::is_whitespace) {
            return Err(SignInError::MalformedCredential(
                "`credential` contains whitespace".into(),
            ));
        }
        Ok(Credential(token))
    }
}

/// An opaque bearer token from the identity provider.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

// Tokens end up in logs via `{:?}` far too easily.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credential({} bytes)", self.0.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> CredentialResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn accepts_opaque_token() {
        let cred = parse(r#"{"credential":"abc123","select_by":"btn"}"#)
            .validate()
            .unwrap();
        assert_eq!(cred.as_str(), "abc123");
    }

    #[test]
    fn reads_optional_fields() {
        let resp = parse(r#"{"credential":"t","select_by":"user","clientId":"cid"}"#);
        assert_eq!(resp.select_by.as_deref(), Some("user"));
        assert_eq!(resp.client_id.as_deref(), Some("cid"));
    }

    #[test]
    fn rejects_missing_credential() {
        let err = parse(r#"{"select_by":"btn"}"#).validate().unwrap_err();
        assert!(matches!(err, SignInError::MalformedCredential(_)));
    }

    #[test]
    fn rejects_empty_and_whitespace_tokens() {
        assert!(parse(r#"{"credential":""}"#).validate().is_err());
        assert!(parse(r#"{"credential":"a b"}"#).validate().is_err());
    }

    #[test]
    fn non_string_credential_fails_to_deserialize() {
        assert!(serde_json::from_str::<CredentialResponse>(r#"{"credential":42}"#).is_err());
    }

    #[test]
    fn debug_output_hides_token() {
        let cred = parse(r#"{"credential":"secret-token"}"#).validate().unwrap();
        let shown = format!("{cred:?}");
        assert!(!shown.contains("secret-token"));
    }
}
