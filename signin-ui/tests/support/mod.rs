// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Shared test harness for signin-ui component tests.
//
// Provides mount/cleanup helpers, runtime config injection, DOM event
// helpers, and a fake `window.google.accounts.id` that records every call
// so tests can assert on what the components asked the provider to do.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// function is used in every compilation unit.
#![allow(dead_code)]

use std::time::Duration;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, EventInit, HtmlElement, HtmlInputElement};
use yew::platform::time::sleep;

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> web_sys::Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &web_sys::Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

/// Query a single element under `root` and cast it.
pub fn query<T: JsCast>(root: &web_sys::Element, selector: &str) -> T {
    root.query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matches {selector}"))
        .dyn_into::<T>()
        .unwrap()
}

pub fn click(root: &web_sys::Element, selector: &str) {
    query::<HtmlElement>(root, selector).click();
}

/// Set an input's value and fire a bubbling `input` event, the way typing
/// would.
pub fn type_into(root: &web_sys::Element, selector: &str, value: &str) {
    let input = query::<HtmlInputElement>(root, selector);
    input.set_value(value);
    let init = EventInit::new();
    init.set_bubbles(true);
    let event = Event::new_with_event_init_dict("input", &init).unwrap();
    input.dispatch_event(&event).unwrap();
}

/// Fire a bubbling, cancelable `submit` event directly at a form.
pub fn dispatch_submit(root: &web_sys::Element, selector: &str) {
    let form = query::<HtmlElement>(root, selector);
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict("submit", &init).unwrap();
    form.dispatch_event(&event).unwrap();
}

/// Number of `<script>` tags on the page whose `src` attribute is `src`.
pub fn count_scripts(src: &str) -> u32 {
    gloo_utils::document()
        .query_selector_all(&format!(r#"script[src="{src}"]"#))
        .unwrap()
        .length()
}

/// Yield to the scheduler until `cond` holds or `timeout_ms` elapses.
pub async fn wait_for(mut cond: impl FnMut() -> bool, timeout_ms: u64) -> bool {
    let mut waited = 0;
    while !cond() {
        if waited >= timeout_ms {
            return false;
        }
        sleep(Duration::from_millis(10)).await;
        waited += 10;
    }
    true
}

// ---------------------------------------------------------------------------
// Runtime config injection
// ---------------------------------------------------------------------------

/// Inject a frozen `window.__APP_CONFIG` built from `entries`.
pub fn inject_app_config(entries: &[(&str, JsValue)]) {
    let config = js_sys::Object::new();
    for (key, val) in entries {
        js_sys::Reflect::set(&config, &(*key).into(), val).unwrap();
    }

    let frozen = js_sys::Object::freeze(&config);
    let window = gloo_utils::window();
    js_sys::Reflect::set(&window, &"__APP_CONFIG".into(), &frozen).unwrap();
}

/// Remove `window.__APP_CONFIG` so tests don't leak state.
pub fn remove_app_config() {
    let window = gloo_utils::window();
    let _ = js_sys::Reflect::delete_property(&window.into(), &"__APP_CONFIG".into());
}

// ---------------------------------------------------------------------------
// Fake Google Identity Services
// ---------------------------------------------------------------------------

pub const TEST_CLIENT_ID: &str = "test-client.apps.googleusercontent.com";

/// Defines `window.google.accounts.id` with call counters in
/// `window.__gsiCalls`. `renderButton` appends a `.fake-gsi-button` so the
/// rendered widget is visible in the DOM.
pub const FAKE_GSI_JS: &str = r#"
window.__gsiCalls = { initialize: 0, renderButton: 0, prompt: 0, cancel: 0, config: null, options: null };
window.google = { accounts: { id: {
  initialize: function (config) {
    window.__gsiCalls.initialize += 1;
    window.__gsiCalls.config = config;
  },
  renderButton: function (parent, options) {
    window.__gsiCalls.renderButton += 1;
    window.__gsiCalls.options = options;
    var button = document.createElement('div');
    button.className = 'fake-gsi-button';
    parent.appendChild(button);
  },
  prompt: function () {
    window.__gsiCalls.prompt += 1;
  },
  cancel: function () {
    window.__gsiCalls.cancel += 1;
  }
} } };
"#;

pub fn install_fake_gsi() {
    js_sys::Function::new_no_args(FAKE_GSI_JS)
        .call0(&JsValue::NULL)
        .unwrap();
}

pub fn remove_fake_gsi() {
    let window: JsValue = gloo_utils::window().into();
    let window: js_sys::Object = window.unchecked_into();
    let _ = js_sys::Reflect::delete_property(&window, &"google".into());
    let _ = js_sys::Reflect::delete_property(&window, &"__gsiCalls".into());
}

/// A `data:` URL whose script installs the fake library, for exercising the
/// real load path without the network. `tag` keeps URLs distinct per test.
pub fn fake_gsi_script_src(tag: &str) -> String {
    let source = format!("{FAKE_GSI_JS}// {tag}\n");
    let encoded: String = js_sys::encode_uri_component(&source).into();
    format!("data:text/javascript,{encoded}")
}

fn gsi_calls() -> JsValue {
    js_sys::Reflect::get(&gloo_utils::window(), &"__gsiCalls".into()).unwrap()
}

/// How many times the fake's `method` was called (0 if not installed).
pub fn gsi_call_count(method: &str) -> u32 {
    let calls = gsi_calls();
    if calls.is_undefined() {
        return 0;
    }
    js_sys::Reflect::get(&calls, &method.into())
        .unwrap()
        .as_f64()
        .unwrap_or(0.0) as u32
}

/// The config object last passed to `initialize`.
pub fn gsi_last_config() -> JsValue {
    js_sys::Reflect::get(&gsi_calls(), &"config".into()).unwrap()
}

/// The options object last passed to `renderButton`.
pub fn gsi_last_options() -> JsValue {
    js_sys::Reflect::get(&gsi_calls(), &"options".into()).unwrap()
}

/// Invoke the credential callback registered through `initialize`, as the
/// provider does when the user finishes signing in.
pub fn fire_credential(payload: &JsValue) {
    let callback = js_sys::Reflect::get(&gsi_last_config(), &"callback".into()).unwrap();
    let callback: js_sys::Function = callback.dyn_into().unwrap();
    callback.call1(&JsValue::NULL, payload).unwrap();
}

/// `{ credential: token, select_by: "btn" }`
pub fn credential_payload(token: &str) -> JsValue {
    let payload = js_sys::Object::new();
    js_sys::Reflect::set(&payload, &"credential".into(), &token.into()).unwrap();
    js_sys::Reflect::set(&payload, &"select_by".into(), &"btn".into()).unwrap();
    payload.into()
}
