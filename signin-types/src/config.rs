// SPDX-License-Identifier: MIT OR Apache-2.0

//! Identity provider configuration.
//!
//! The client id is the only value the application must supply. Everything
//! else here mirrors the option objects Google Identity Services accepts in
//! `google.accounts.id.initialize` and `google.accounts.id.renderButton`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SignInError;

/// Google Identity Services client library.
pub const GSI_SCRIPT_URL: &str = "https://accounts.google.com/gsi/client";

/// Value shipped in sample configs; treated the same as a missing id.
pub const PLACEHOLDER_CLIENT_ID: &str = "YOUR_GOOGLE_CLIENT_ID_HERE";

/// Artificial delay between pressing "Sign In" and handing the credentials
/// to the application.
pub const DEFAULT_SUBMIT_DELAY_MS: u32 = 1500;

/// A configured, non-placeholder OAuth client id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientId(String);

impl ClientId {
    pub fn parse(raw: Option<&str>) -> Result<Self, SignInError> {
        let raw = raw.map(str::trim).unwrap_or_default();
        if raw.is_empty() {
            return Err(SignInError::ConfigMissing);
        }
        if raw == PLACEHOLDER_CLIENT_ID {
            return Err(SignInError::PlaceholderClientId);
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Settings passed to `google.accounts.id.initialize`.
///
/// The `callback` function is attached at the JS boundary after
/// serialization since it cannot be expressed in serde.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdConfiguration {
    pub client_id: String,
    pub auto_select: bool,
    pub cancel_on_tap_outside: bool,
}

impl IdConfiguration {
    pub fn new(client_id: &ClientId) -> Self {
        Self {
            client_id: client_id.as_str().to_string(),
            auto_select: false,
            cancel_on_tap_outside: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonTheme {
    Outline,
    FilledBlue,
    FilledBlack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonSize {
    Large,
    Medium,
    Small,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonType {
    Standard,
    Icon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonShape {
    Rectangular,
    Pill,
    Circle,
    Square,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogoAlignment {
    Left,
    Center,
}

/// Settings passed to `google.accounts.id.renderButton`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonOptions {
    pub theme: ButtonTheme,
    pub size: ButtonSize,
    pub width: u32,
    #[serde(rename = "type")]
    pub kind: ButtonType,
    pub shape: ButtonShape,
    pub logo_alignment: LogoAlignment,
}

impl Default for ButtonOptions {
    fn default() -> Self {
        Self {
            theme: ButtonTheme::Outline,
            size: ButtonSize::Large,
            width: 240,
            kind: ButtonType::Standard,
            shape: ButtonShape::Rectangular,
            logo_alignment: LogoAlignment::Left,
        }
    }
}

pub fn truthy(s: Option<&str>) -> bool {
    if let Some(s) = s {
        ["true".to_string(), "1".to_string()].contains(&s.to_lowercase())
    } else {
        false
    }
}
