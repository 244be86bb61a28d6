/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Error types for the sign-in components.
//!
//! None of these errors reach the user. Callers log them and fall back to
//! the placeholder rendering.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignInError {
    /// The identity provider client id was not configured.
    #[error("Google client id is not configured (set googleClientId or GOOGLE_CLIENT_ID)")]
    ConfigMissing,

    /// The client id is still the placeholder shipped in the sample config.
    #[error("Google client id is still the placeholder value")]
    PlaceholderClientId,

    /// The provider script could not be attached or failed to load.
    #[error("Failed to load identity provider script: {0}")]
    ScriptLoad(String),

    /// `window.google.accounts.id` is not available.
    #[error("Identity provider library is not available on this page")]
    LibraryUnavailable,

    /// `initialize`, `renderButton` or `prompt` threw.
    #[error("Error initializing Google Sign-In: {0}")]
    Initialization(String),

    /// The provider callback payload did not carry a usable credential.
    #[error("Malformed credential response: {0}")]
    MalformedCredential(String),

    /// A DOM operation failed.
    #[error("DOM error: {0}")]
    Dom(String),
}
