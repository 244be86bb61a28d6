// SPDX-License-Identifier: MIT OR Apache-2.0

//! Context providers for the sign-in components.
//!
//! The identity provider script is a page-global resource, so every
//! component that needs it goes through one [`ScriptRegistryCtx`]. The app
//! root provides it through Yew's `ContextProvider`; components mounted
//! without a provider fall back to [`ScriptRegistryCtx::page`].

use std::cell::RefCell;
use std::rc::Rc;

use signin_types::script::{Listener, SubscriptionId};
use signin_types::{ScriptLoadState, ScriptRegistry, SignInError};

use crate::script_loader::DomScriptHost;

#[derive(Clone, Default)]
pub struct ScriptRegistryCtx {
    inner: Rc<RefCell<ScriptRegistry>>,
}

impl PartialEq for ScriptRegistryCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

thread_local! {
    static PAGE_REGISTRY: ScriptRegistryCtx = ScriptRegistryCtx::new();
}

impl ScriptRegistryCtx {
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry shared by everything on this page.
    pub fn page() -> Self {
        PAGE_REGISTRY.with(Clone::clone)
    }

    pub fn state(&self, src: &str) -> ScriptLoadState {
        self.inner.borrow().state(src)
    }

    pub fn holders(&self, src: &str) -> usize {
        self.inner.borrow().holders(src)
    }

    pub fn acquire(&self, src: &str) -> Result<ScriptLoadState, SignInError> {
        let host = DomScriptHost::new(self.clone());
        self.inner.borrow_mut().acquire(src, &host)
    }

    pub fn release(&self, src: &str) {
        let host = DomScriptHost::new(self.clone());
        self.inner.borrow_mut().release(src, &host);
    }

    pub fn mark_ready(&self, src: &str) {
        let changed = self.inner.borrow_mut().mark_ready(src);
        if changed {
            self.notify(src);
        }
    }

    pub fn mark_failed(&self, src: &str) {
        let changed = self.inner.borrow_mut().mark_failed(src);
        if changed {
            self.notify(src);
        }
    }

    pub fn subscribe(&self, src: &str, listener: Listener) -> SubscriptionId {
        self.inner.borrow_mut().subscribe(src, listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner.borrow_mut().unsubscribe(id);
    }

    /// Push the current state of `src` to every subscriber.
    pub fn notify(&self, src: &str) {
        // Listeners may call back into the registry.
        let (state, listeners) = {
            let registry = self.inner.borrow();
            (registry.state(src), registry.listeners(src))
        };
        for listener in listeners {
            listener(state);
        }
    }
}
