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

//! Email/password login form.
//!
//! Owns only transient form state. Submitting waits for a configurable delay
//! and then hands the plaintext credentials to `on_login`; every other
//! button is a plain dispatcher to the parent. The "Sign in with Google"
//! path is delegated to [`GoogleSignInButton`].

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use signin_types::config::GSI_SCRIPT_URL;
use signin_types::{FormAction, FormState, LoginCredentials};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::google_sign_in_button::GoogleSignInButton;
use crate::components::icons::{
    EyeIcon, EyeOffIcon, LockIcon, LogInIcon, MailIcon, WalletIcon, WavesIcon,
};
use crate::constants::{one_tap_enabled, submit_delay_ms};

#[derive(Properties, PartialEq)]
pub struct LoginFormProps {
    pub on_login: Callback<LoginCredentials>,
    /// Receives the Google ID token; the parent must verify it server-side.
    pub on_google_login: Callback<String>,
    pub on_switch_to_signup: Callback<()>,
    pub on_switch_to_forgot: Callback<()>,
    pub on_switch_to_web3: Callback<()>,
    /// Delay before `on_login` fires. Defaults to `submitDelayMs` from the
    /// runtime config.
    #[prop_or_default]
    pub submit_delay_ms: Option<u32>,
    #[prop_or_default]
    pub google_client_id: Option<AttrValue>,
    #[prop_or(AttrValue::Static(GSI_SCRIPT_URL))]
    pub gsi_script_src: AttrValue,
}

#[derive(Default, PartialEq)]
struct FormModel(FormState);

impl Reducible for FormModel {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: FormAction) -> Rc<Self> {
        let mut state = self.0.clone();
        state.apply(action);
        Rc::new(Self(state))
    }
}

#[function_component(LoginForm)]
pub fn login_form(props: &LoginFormProps) -> Html {
    let form = use_reducer_eq(FormModel::default);
    let pending = use_mut_ref(|| None::<Timeout>);
    let delay = props.submit_delay_ms.unwrap_or_else(submit_delay_ms);
    let one_tap = use_memo((), |_| one_tap_enabled());

    // Dropping the timeout cancels a submission still in flight on unmount.
    {
        let pending = pending.clone();
        use_effect_with((), move |_| {
            move || {
                pending.borrow_mut().take();
            }
        });
    }

    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FormAction::SetEmail(input.value()));
        })
    };

    let on_password = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FormAction::SetPassword(input.value()));
        })
    };

    let on_toggle_visibility = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| form.dispatch(FormAction::ToggleVisibility))
    };

    let on_submit = {
        let form = form.clone();
        let on_login = props.on_login.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !form.0.can_submit() {
                log::debug!("Submit ignored, a submission is already in flight");
                return;
            }

            let credentials = form.0.credentials();
            form.dispatch(FormAction::SubmitStarted);

            let form = form.clone();
            let on_login = on_login.clone();
            let timeout = Timeout::new(delay, move || {
                form.dispatch(FormAction::SubmitFinished);
                on_login.emit(credentials);
            });
            *pending.borrow_mut() = Some(timeout);
        })
    };

    let state = &form.0;
    let submitting = state.submitting;

    html! {
        <div class="login-card">
            <div class="login-header">
                <div class="login-logo">
                    <WavesIcon />
                </div>
                <h1 class="login-title">{"Welcome Back"}</h1>
                <p class="login-subtitle">{"Sign in to your account"}</p>
            </div>

            <form class="login-form" onsubmit={on_submit}>
                <div class="input-group">
                    <MailIcon />
                    <input
                        class="login-input login-email"
                        type="email"
                        placeholder="Enter your email"
                        value={state.email.clone()}
                        oninput={on_email}
                        required={true}
                    />
                </div>

                <div class="input-group">
                    <LockIcon />
                    <input
                        class="login-input login-password"
                        type={state.password_input_type()}
                        placeholder="Enter your password"
                        value={state.password.clone()}
                        oninput={on_password}
                        required={true}
                    />
                    <button
                        type="button"
                        class="password-toggle"
                        onclick={on_toggle_visibility}>
                        if state.password_visible {
                            <EyeOffIcon />
                        } else {
                            <EyeIcon />
                        }
                    </button>
                </div>

                <div class="login-options">
                    <label class="remember-me">
                        <input type="checkbox" />
                        <span>{"Remember me"}</span>
                    </label>
                    <button
                        type="button"
                        class="forgot-password"
                        onclick={props.on_switch_to_forgot.reform(|_: MouseEvent| ())}>
                        {"Forgot password?"}
                    </button>
                </div>

                <button
                    type="submit"
                    class={classes!("btn-apple", "btn-primary", "login-submit", submitting.then_some("loading"))}
                    disabled={submitting}>
                    if submitting {
                        <span class="spinner"></span>
                    } else {
                        <LogInIcon />
                    }
                    <span>{"Sign In"}</span>
                </button>
            </form>

            <p class="login-footer">
                {"Don't have an account? "}
                <button
                    type="button"
                    class="switch-to-signup"
                    onclick={props.on_switch_to_signup.reform(|_: MouseEvent| ())}>
                    {"Sign up"}
                </button>
            </p>

            <div class="login-divider">
                <span>{"Or continue with"}</span>
            </div>

            <div class="alt-sign-in">
                <button
                    type="button"
                    class="web3-sign-in"
                    onclick={props.on_switch_to_web3.reform(|_: MouseEvent| ())}>
                    <WalletIcon />
                </button>
                <GoogleSignInButton
                    on_credential={props.on_google_login.clone()}
                    client_id={props.google_client_id.clone()}
                    script_src={props.gsi_script_src.clone()}
                    one_tap={*one_tap}
                />
            </div>
        </div>
    }
}
