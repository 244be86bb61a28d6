// SPDX-License-Identifier: MIT OR Apache-2.0

//! Thin bindings to `window.google.accounts.id`.
//!
//! The library only exists once its `<script>` tag has loaded, so every
//! lookup goes through `Reflect` on the live `window`.
//!
//! `initialize` keeps a single page-wide callback, and One Tap can outlive
//! the component that prompted it. The callback handed to the library is
//! therefore created once per page and forwards to whichever
//! [`CredentialRoute`] is currently claimed.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use js_sys::{Array, Function, Reflect};
use serde::Serialize;
use signin_types::{ButtonOptions, CredentialResponse, IdConfiguration, SignInError};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;
use yew::Callback;

const GSI_PATH: [&str; 3] = ["google", "accounts", "id"];

/// Latest `on_credential` of the component owning a route.
pub type CredentialSink = Rc<RefCell<Callback<String>>>;

thread_local! {
    static ROUTE: RefCell<Option<(u64, CredentialSink)>> = RefCell::new(None);
    static NEXT_ROUTE_ID: Cell<u64> = Cell::new(0);
    static CREDENTIAL_CALLBACK: JsValue =
        Closure::<dyn Fn(JsValue)>::new(deliver_credential).into_js_value();
}

/// Claim on the page's credential callback. Credentials go to the most
/// recent claim; dropping it stops delivery unless a newer claim exists.
pub struct CredentialRoute {
    id: u64,
}

impl CredentialRoute {
    pub fn claim(sink: CredentialSink) -> Self {
        let id = NEXT_ROUTE_ID.with(|next| {
            let id = next.get();
            next.set(id + 1);
            id
        });
        ROUTE.with(|route| *route.borrow_mut() = Some((id, sink)));
        Self { id }
    }
}

impl Drop for CredentialRoute {
    fn drop(&mut self) {
        ROUTE.with(|route| {
            let mut route = route.borrow_mut();
            if matches!(&*route, Some((id, _)) if *id == self.id) {
                *route = None;
            }
        });
    }
}

/// The page-lifetime function passed as `callback` to `initialize`.
pub fn credential_callback() -> JsValue {
    CREDENTIAL_CALLBACK.with(Clone::clone)
}

fn deliver_credential(response: JsValue) {
    let sink = ROUTE.with(|route| route.borrow().as_ref().map(|(_, sink)| sink.clone()));
    let Some(sink) = sink else {
        log::warn!("Google credential arrived with no sign-in button mounted, dropping it");
        return;
    };
    match parse_credential(response) {
        Ok(token) => {
            // Emitting may re-render the owner, which replaces the sink's callback.
            let callback = sink.borrow().clone();
            callback.emit(token);
        }
        Err(e) => log::warn!("{e}"),
    }
}

/// Typed view of the callback payload; only a usable token gets through.
pub fn parse_credential(response: JsValue) -> Result<String, SignInError> {
    let response: CredentialResponse = serde_wasm_bindgen::from_value(response)
        .map_err(|e| SignInError::MalformedCredential(e.to_string()))?;
    let credential = response.validate()?;
    log::info!("Google credential received");
    Ok(credential.into_inner())
}

pub struct GsiClient {
    id: JsValue,
}

impl GsiClient {
    pub fn from_window() -> Result<Self, SignInError> {
        let window = web_sys::window().ok_or(SignInError::LibraryUnavailable)?;
        let root: JsValue = window.into();
        lookup(&root, &GSI_PATH)
            .map(|id| Self { id })
            .ok_or(SignInError::LibraryUnavailable)
    }

    pub fn is_available() -> bool {
        Self::from_window().is_ok()
    }

    pub fn initialize(&self, config: &JsValue) -> Result<(), SignInError> {
        self.call("initialize", &[config]).map(drop)
    }

    pub fn render_button(&self, parent: &Element, options: &JsValue) -> Result<(), SignInError> {
        self.call("renderButton", &[parent.as_ref(), options])
            .map(drop)
    }

    /// Show the One Tap prompt.
    pub fn prompt(&self) -> Result<(), SignInError> {
        self.call("prompt", &[]).map(drop)
    }

    /// Dismiss a One Tap prompt that is still showing.
    pub fn cancel(&self) -> Result<(), SignInError> {
        self.call("cancel", &[]).map(drop)
    }

    fn call(&self, method: &str, args: &[&JsValue]) -> Result<JsValue, SignInError> {
        let func = Reflect::get(&self.id, &JsValue::from_str(method))
            .ok()
            .and_then(|f| f.dyn_into::<Function>().ok())
            .ok_or_else(|| {
                SignInError::Initialization(format!(
                    "google.accounts.id.{method} is not a function"
                ))
            })?;
        let argv = Array::new();
        for arg in args {
            argv.push(arg);
        }
        func.apply(&self.id, &argv)
            .map_err(|e| SignInError::Initialization(format!("{method}: {e:?}")))
    }
}

/// `initialize` config with the credential callback attached.
pub fn id_configuration(
    config: &IdConfiguration,
    callback: &JsValue,
) -> Result<JsValue, SignInError> {
    let value = to_plain_object(config)?;
    Reflect::set(&value, &JsValue::from_str("callback"), callback)
        .map_err(|e| SignInError::Initialization(format!("{e:?}")))?;
    Ok(value)
}

pub fn button_options(options: &ButtonOptions) -> Result<JsValue, SignInError> {
    to_plain_object(options)
}

fn to_plain_object<T: Serialize>(value: &T) -> Result<JsValue, SignInError> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
    value
        .serialize(&serializer)
        .map_err(|e| SignInError::Initialization(e.to_string()))
}

fn lookup(root: &JsValue, path: &[&str]) -> Option<JsValue> {
    path.iter().try_fold(root.clone(), |obj, key| {
        if !obj.is_object() {
            return None;
        }
        let value = Reflect::get(&obj, &JsValue::from_str(key)).ok()?;
        (!value.is_undefined() && !value.is_null()).then_some(value)
    })
}

