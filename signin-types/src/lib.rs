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
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Framework-agnostic pieces of the sign-in screen.
//!
//! Nothing in here depends on the DOM or on Yew, so the state machines can be
//! tested natively with `cargo test -p signin-types`.

pub mod config;
pub mod credential;
pub mod error;
pub mod form;
pub mod script;
pub mod widget;

pub use config::{truthy, ButtonOptions, ClientId, IdConfiguration};
pub use credential::{Credential, CredentialResponse};
pub use error::SignInError;
pub use form::{FormAction, FormState, LoginCredentials};
pub use script::{Attachment, ScriptHost, ScriptLoadState, ScriptRegistry};
pub use widget::{WidgetAction, WidgetLifecycle, WidgetState};
