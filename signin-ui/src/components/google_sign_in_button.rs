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

//! "Sign in with Google" bridge.
//!
//! Loads the Google Identity Services script through the page's script
//! registry, then asks the library to render its own button into a reserved
//! container. When the user completes sign-in, the opaque ID token is handed
//! to `on_credential`. Verifying that token is the server's job.
//!
//! Failures (missing client id, script load error, exceptions from the
//! library) are logged and leave the placeholder in place.
//!
//! The library keeps one callback per page, so keep one bridge live per
//! page: credentials go to the instance that initialized last, and stop
//! once it unmounts.

use std::cell::RefCell;

use signin_types::config::GSI_SCRIPT_URL;
use signin_types::{
    ButtonOptions, ClientId, IdConfiguration, SignInError, WidgetAction, WidgetLifecycle,
    WidgetState,
};
use web_sys::Element;
use yew::prelude::*;

use crate::constants::google_client_id;
use crate::gsi::{self, CredentialRoute, CredentialSink, GsiClient};
use crate::hooks::use_script;

pub const PLACEHOLDER_TEXT: &str = "Loading Google...";

/// What an initialized widget holds on to until unmount.
struct ActiveWidget {
    _route: CredentialRoute,
    prompted: bool,
}

impl ActiveWidget {
    fn dismiss(self) {
        if self.prompted {
            if let Err(e) = GsiClient::from_window().and_then(|client| client.cancel()) {
                log::warn!("Could not dismiss One Tap: {e}");
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct GoogleSignInButtonProps {
    /// Fired once per completed sign-in with the provider's ID token.
    pub on_credential: Callback<String>,
    /// Overrides the configured client id.
    #[prop_or_default]
    pub client_id: Option<AttrValue>,
    #[prop_or(AttrValue::Static(GSI_SCRIPT_URL))]
    pub script_src: AttrValue,
    /// Also show the One Tap prompt after rendering the button.
    #[prop_or_default]
    pub one_tap: bool,
    #[prop_or_default]
    pub button: ButtonOptions,
}

#[function_component(GoogleSignInButton)]
pub fn google_sign_in_button(props: &GoogleSignInButtonProps) -> Html {
    let client_id = use_memo(props.client_id.clone(), |id| google_client_id(id.as_deref()));

    use_effect_with(client_id.clone(), |client_id| {
        if let Err(e) = &**client_id {
            log::error!("Google Sign-In disabled: {e}");
        }
        || ()
    });

    let script_state = use_script(props.script_src.clone(), client_id.is_ok());
    let container = use_node_ref();
    let lifecycle = use_mut_ref(WidgetLifecycle::new);
    let active = use_mut_ref(|| None::<ActiveWidget>);
    let widget_state = use_state(WidgetState::default);

    // The page callback outlives renders; route it through the latest prop.
    let on_credential = use_mut_ref(|| props.on_credential.clone());
    *on_credential.borrow_mut() = props.on_credential.clone();

    {
        let active = active.clone();
        use_effect_with((), move |_| {
            move || {
                if let Some(widget) = active.borrow_mut().take() {
                    widget.dismiss();
                }
            }
        });
    }

    {
        let container = container.clone();
        let button = props.button.clone();
        let one_tap = props.one_tap;
        let widget_state = widget_state.clone();
        // Runs after every render; the lifecycle decides whether to act.
        use_effect(move || {
            if let Ok(client_id) = &*client_id {
                let target = container.cast::<Element>();
                let action = lifecycle.borrow().poll(script_state, target.is_some());
                if let (WidgetAction::Initialize, Some(target)) = (action, target) {
                    log::info!("Initializing Google Sign-In button");
                    let outcome = initialize_widget(
                        client_id,
                        &target,
                        &button,
                        one_tap,
                        on_credential,
                        &active,
                    );
                    if let Err(e) = &outcome {
                        log::error!("{e}");
                    }
                    let state = lifecycle.borrow_mut().complete(outcome);
                    widget_state.set(state);
                }
            }
            || ()
        });
    }

    let show_placeholder = *widget_state != WidgetState::Initialized;

    html! {
        <div class="gsi-bridge" style="min-height: 50px;">
            <div ref={container} class="gsi-button-container"></div>
            if show_placeholder {
                <div class="gsi-placeholder">
                    <span class="gsi-placeholder-text">{ PLACEHOLDER_TEXT }</span>
                </div>
            }
        </div>
    }
}

fn initialize_widget(
    client_id: &ClientId,
    target: &Element,
    button: &ButtonOptions,
    one_tap: bool,
    on_credential: CredentialSink,
    active: &RefCell<Option<ActiveWidget>>,
) -> Result<(), SignInError> {
    let client = GsiClient::from_window()?;
    let config = gsi::id_configuration(
        &IdConfiguration::new(client_id),
        &gsi::credential_callback(),
    )?;

    *active.borrow_mut() = Some(ActiveWidget {
        _route: CredentialRoute::claim(on_credential),
        prompted: false,
    });

    client.initialize(&config)?;
    client.render_button(target, &gsi::button_options(button)?)?;
    if one_tap {
        client.prompt()?;
        if let Some(widget) = active.borrow_mut().as_mut() {
            widget.prompted = true;
        }
    }
    Ok(())
}
