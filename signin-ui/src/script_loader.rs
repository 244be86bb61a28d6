// SPDX-License-Identifier: MIT OR Apache-2.0

//! `<script>` tag management for the identity provider library.

use signin_types::{Attachment, ScriptHost, SignInError};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element};

use crate::context::ScriptRegistryCtx;
use crate::gsi::GsiClient;

/// [`ScriptHost`] backed by the live document. Load and error events are
/// reported to the registry the host was created for.
pub struct DomScriptHost {
    registry: ScriptRegistryCtx,
}

impl DomScriptHost {
    pub fn new(registry: ScriptRegistryCtx) -> Self {
        Self { registry }
    }

    fn watch(&self, script: &Element, src: &str) -> Result<(), SignInError> {
        let registry = self.registry.clone();
        let key = src.to_string();
        let on_load = Closure::once_into_js(move || {
            log::info!("Identity provider script loaded: {key}");
            registry.mark_ready(&key);
        });

        let registry = self.registry.clone();
        let key = src.to_string();
        let on_error = Closure::once_into_js(move || {
            log::error!("Failed to load identity provider script: {key}");
            registry.mark_failed(&key);
        });

        script
            .add_event_listener_with_callback("load", on_load.unchecked_ref())
            .map_err(dom_err)?;
        script
            .add_event_listener_with_callback("error", on_error.unchecked_ref())
            .map_err(dom_err)?;
        Ok(())
    }
}

impl ScriptHost for DomScriptHost {
    fn library_present(&self) -> bool {
        GsiClient::is_available()
    }

    fn attach(&self, src: &str) -> Result<Attachment, SignInError> {
        let document = document()?;
        if let Some(existing) = find_script(&document, src)? {
            self.watch(&existing, src)?;
            return Ok(Attachment::Existing);
        }

        let script = document.create_element("script").map_err(dom_err)?;
        script.set_attribute("src", src).map_err(dom_err)?;
        script.set_attribute("async", "true").map_err(dom_err)?;
        script.set_attribute("defer", "true").map_err(dom_err)?;
        self.watch(&script, src)?;

        let head = document
            .head()
            .ok_or_else(|| SignInError::Dom("document has no <head>".into()))?;
        head.append_child(&script).map_err(dom_err)?;
        Ok(Attachment::Inserted)
    }

    fn detach(&self, src: &str) {
        let Ok(document) = document() else {
            return;
        };
        match find_script(&document, src) {
            Ok(Some(script)) => script.remove(),
            Ok(None) => {}
            Err(e) => log::warn!("Could not remove script {src}: {e}"),
        }
    }
}

fn document() -> Result<Document, SignInError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| SignInError::Dom("no document".into()))
}

fn find_script(document: &Document, src: &str) -> Result<Option<Element>, SignInError> {
    let selector = format!(r#"script[src="{}"]"#, src.replace('"', "\\\""));
    document.query_selector(&selector).map_err(dom_err)
}

fn dom_err(e: JsValue) -> SignInError {
    SignInError::Dom(format!("{e:?}"))
}
