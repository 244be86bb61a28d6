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

use signin_types::LoginCredentials;
use signin_ui::components::login_form::LoginForm;
use signin_ui::context::ScriptRegistryCtx;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
enum Screen {
    Login,
    Signup,
    Forgot,
    Web3,
}

#[function_component(App)]
fn app_component() -> Html {
    let registry = use_memo((), |_| ScriptRegistryCtx::new());
    let screen = use_state(|| Screen::Login);
    let status = use_state(|| None::<String>);

    let on_login = {
        let status = status.clone();
        Callback::from(move |credentials: LoginCredentials| {
            log::info!("Password login requested for {}", credentials.email);
            status.set(Some(format!("Submitted credentials for {}", credentials.email)));
        })
    };

    let on_google_login = {
        let status = status.clone();
        Callback::from(move |token: String| {
            log::info!("Google credential received ({} bytes)", token.len());
            status.set(Some("Google credential received".to_string()));
        })
    };

    let switch_to = |target: Screen| {
        let screen = screen.clone();
        Callback::from(move |_: ()| screen.set(target))
    };

    let body = match *screen {
        Screen::Login => html! {
            <LoginForm
                {on_login}
                {on_google_login}
                on_switch_to_signup={switch_to(Screen::Signup)}
                on_switch_to_forgot={switch_to(Screen::Forgot)}
                on_switch_to_web3={switch_to(Screen::Web3)}
            />
        },
        other => {
            let title = match other {
                Screen::Signup => "Sign up",
                Screen::Forgot => "Reset password",
                _ => "Connect wallet",
            };
            html! {
                <div class="login-card">
                    <h1 class="login-title">{ title }</h1>
                    <button class="btn-apple btn-secondary"
                        onclick={switch_to(Screen::Login).reform(|_: MouseEvent| ())}>
                        {"Back to sign in"}
                    </button>
                </div>
            }
        }
    };

    html! {
        <ContextProvider<ScriptRegistryCtx> context={(*registry).clone()}>
            <div class="login-container">
                { body }
                if let Some(message) = (*status).clone() {
                    <p class="login-status">{ message }</p>
                }
            </div>
        </ContextProvider<ScriptRegistryCtx>>
    }
}

fn main() {
    let level = if cfg!(feature = "debugAssertions") {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    let _ = console_log::init_with_level(level);
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
