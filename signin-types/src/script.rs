// SPDX-License-Identifier: MIT OR Apache-2.0

//! External script loading.
//!
//! The identity provider ships as a `<script>` tag that is a page-global
//! resource. [`ScriptRegistry`] is the single place that decides whether a
//! tag gets inserted, tracks its load state, and removes it again when every
//! component that asked for it has gone away before it finished loading.
//!
//! The registry never touches the DOM itself; that is delegated to a
//! [`ScriptHost`] so the bookkeeping can be exercised outside a browser.

use std::collections::HashMap;
use std::rc::Rc;

use crate::error::SignInError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScriptLoadState {
    #[default]
    NotStarted,
    Loading,
    Ready,
    Failed,
}

impl ScriptLoadState {
    pub fn is_ready(self) -> bool {
        self == ScriptLoadState::Ready
    }

    /// `NotStarted -> Loading`.
    pub fn begin(&mut self) -> bool {
        self.transition(ScriptLoadState::NotStarted, ScriptLoadState::Loading)
    }

    /// `Loading -> Ready`.
    pub fn mark_ready(&mut self) -> bool {
        self.transition(ScriptLoadState::Loading, ScriptLoadState::Ready)
    }

    /// `Loading -> Failed`. No retry is attempted from `Failed`.
    pub fn mark_failed(&mut self) -> bool {
        self.transition(ScriptLoadState::Loading, ScriptLoadState::Failed)
    }

    fn transition(&mut self, from: ScriptLoadState, to: ScriptLoadState) -> bool {
        if *self == from {
            *self = to;
            true
        } else {
            false
        }
    }
}

/// How a script tag came to be on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attachment {
    /// The host created the tag; the registry owns it.
    Inserted,
    /// A tag with the same `src` was already present (e.g. in `index.html`).
    Existing,
}

/// DOM side of script loading.
pub trait ScriptHost {
    /// The provider library is already usable, no tag needed.
    fn library_present(&self) -> bool;

    /// Ensure a tag for `src` exists and that load/error events for it are
    /// reported back to the registry.
    fn attach(&self, src: &str) -> Result<Attachment, SignInError>;

    /// Remove the tag for `src`.
    fn detach(&self, src: &str);
}

pub type Listener = Rc<dyn Fn(ScriptLoadState)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Debug, Default)]
struct Entry {
    state: ScriptLoadState,
    holders: usize,
    inserted: bool,
}

#[derive(Default)]
pub struct ScriptRegistry {
    entries: HashMap<String, Entry>,
    listeners: Vec<(SubscriptionId, String, Listener)>,
    next_id: u64,
}

impl ScriptRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, src: &str) -> ScriptLoadState {
        self.entries
            .get(src)
            .map(|e| e.state)
            .unwrap_or_default()
    }

    pub fn holders(&self, src: &str) -> usize {
        self.entries.get(src).map(|e| e.holders).unwrap_or(0)
    }

    /// Register interest in `src`, attaching the tag on first use.
    ///
    /// The holder is counted even when attaching fails, so every `acquire`
    /// must be paired with a [`release`](Self::release).
    pub fn acquire(
        &mut self,
        src: &str,
        host: &dyn ScriptHost,
    ) -> Result<ScriptLoadState, SignInError> {
        let entry = self.entries.entry(src.to_string()).or_default();
        entry.holders += 1;

        if entry.state != ScriptLoadState::NotStarted {
            return Ok(entry.state);
        }

        if host.library_present() {
            log::debug!("{src}: library already present, skipping injection");
            entry.state = ScriptLoadState::Ready;
            return Ok(entry.state);
        }

        match host.attach(src) {
            Ok(attachment) => {
                entry.inserted = attachment == Attachment::Inserted;
                entry.state.begin();
                log::debug!("{src}: attached ({attachment:?}), waiting for load");
                Ok(entry.state)
            }
            Err(e) => {
                entry.state = ScriptLoadState::Failed;
                Err(e)
            }
        }
    }

    /// Drop interest in `src`. When the last holder leaves before the script
    /// became ready, a tag inserted by the registry is removed again.
    pub fn release(&mut self, src: &str, host: &dyn ScriptHost) {
        let Some(entry) = self.entries.get_mut(src) else {
            return;
        };
        entry.holders = entry.holders.saturating_sub(1);
        if entry.holders > 0 {
            return;
        }
        match entry.state {
            ScriptLoadState::Ready => {}
            ScriptLoadState::Loading | ScriptLoadState::Failed => {
                if entry.inserted {
                    log::debug!("{src}: last holder gone before ready, removing tag");
                    host.detach(src);
                }
                self.entries.remove(src);
            }
            ScriptLoadState::NotStarted => {
                self.entries.remove(src);
            }
        }
    }

    pub fn mark_ready(&mut self, src: &str) -> bool {
        self.entries
            .get_mut(src)
            .is_some_and(|e| e.state.mark_ready())
    }

    pub fn mark_failed(&mut self, src: &str) -> bool {
        self.entries
            .get_mut(src)
            .is_some_and(|e| e.state.mark_failed())
    }

    pub fn subscribe(&mut self, src: &str, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, src.to_string(), listener));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.listeners.retain(|(sid, _, _)| *sid != id);
    }

    /// Listeners for `src`, cloned out so they can be called after the
    /// registry borrow is released.
    pub fn listeners(&self, src: &str) -> Vec<Listener> {
        self.listeners
            .iter()
            .filter(|(_, s, _)| s == src)
            .map(|(_, _, l)| l.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;

    const SRC: &str = "https://accounts.google.com/gsi/client";

    #[derive(Default)]
    struct FakeHost {
        present: Cell<bool>,
        existing: Cell<bool>,
        fail: Cell<bool>,
        attached: Cell<usize>,
        detached: Cell<usize>,
    }

    impl ScriptHost for FakeHost {
        fn library_present(&self) -> bool {
            self.present.get()
        }

        fn attach(&self, _src: &str) -> Result<Attachment, SignInError> {
            if self.fail.get() {
                return Err(SignInError::Dom("no <head>".into()));
            }
            self.attached.set(self.attached.get() + 1);
            Ok(if self.existing.get() {
                Attachment::Existing
            } else {
                Attachment::Inserted
            })
        }

        fn detach(&self, _src: &str) {
            self.detached.set(self.detached.get() + 1);
        }
    }

    #[test]
    fn state_transitions_only_from_expected_states() {
        let mut state = ScriptLoadState::NotStarted;
        assert!(!state.mark_ready());
        assert!(state.begin());
        assert!(!state.begin());
        assert!(state.mark_ready());
        assert!(!state.mark_failed());
        assert_eq!(state, ScriptLoadState::Ready);

        let mut state = ScriptLoadState::Loading;
        assert!(state.mark_failed());
        assert!(!state.mark_ready());
        assert_eq!(state, ScriptLoadState::Failed);
    }

    #[test]
    fn injects_once_for_many_holders() {
        let host = FakeHost::default();
        let mut registry = ScriptRegistry::new();

        for _ in 0..5 {
            assert_eq!(
                registry.acquire(SRC, &host).unwrap(),
                ScriptLoadState::Loading
            );
        }
        assert_eq!(host.attached.get(), 1);
        assert_eq!(registry.holders(SRC), 5);
    }

    #[test]
    fn present_library_is_ready_without_injection() {
        let host = FakeHost::default();
        host.present.set(true);
        let mut registry = ScriptRegistry::new();

        assert_eq!(registry.acquire(SRC, &host).unwrap(), ScriptLoadState::Ready);
        assert_eq!(host.attached.get(), 0);
    }

    #[test]
    fn readiness_is_reported_once() {
        let host = FakeHost::default();
        let mut registry = ScriptRegistry::new();
        registry.acquire(SRC, &host).unwrap();

        assert!(registry.mark_ready(SRC));
        assert!(!registry.mark_ready(SRC));
        assert!(!registry.mark_failed(SRC));
        assert_eq!(registry.state(SRC), ScriptLoadState::Ready);
    }

    #[test]
    fn unknown_src_transitions_are_ignored() {
        let mut registry = ScriptRegistry::new();
        assert!(!registry.mark_ready("nope"));
        assert!(!registry.mark_failed("nope"));
        assert_eq!(registry.state("nope"), ScriptLoadState::NotStarted);
    }

    #[test]
    fn last_release_while_loading_removes_tag() {
        let host = FakeHost::default();
        let mut registry = ScriptRegistry::new();
        registry.acquire(SRC, &host).unwrap();
        registry.acquire(SRC, &host).unwrap();

        registry.release(SRC, &host);
        assert_eq!(host.detached.get(), 0);
        registry.release(SRC, &host);
        assert_eq!(host.detached.get(), 1);
        assert_eq!(registry.state(SRC), ScriptLoadState::NotStarted);

        registry.acquire(SRC, &host).unwrap();
        assert_eq!(host.attached.get(), 2);
    }

    #[test]
    fn ready_script_survives_last_release() {
        let host = FakeHost::default();
        let mut registry = ScriptRegistry::new();
        registry.acquire(SRC, &host).unwrap();
        registry.mark_ready(SRC);
        registry.release(SRC, &host);

        assert_eq!(host.detached.get(), 0);
        assert_eq!(registry.state(SRC), ScriptLoadState::Ready);
        assert_eq!(registry.acquire(SRC, &host).unwrap(), ScriptLoadState::Ready);
        assert_eq!(host.attached.get(), 1);
    }

    #[test]
    fn existing_tag_is_never_removed() {
        let host = FakeHost::default();
        host.existing.set(true);
        let mut registry = ScriptRegistry::new();
        registry.acquire(SRC, &host).unwrap();
        registry.release(SRC, &host);
        assert_eq!(host.detached.get(), 0);
    }

    #[test]
    fn failed_state_is_sticky_while_held() {
        let host = FakeHost::default();
        let mut registry = ScriptRegistry::new();
        registry.acquire(SRC, &host).unwrap();
        assert!(registry.mark_failed(SRC));

        assert_eq!(registry.acquire(SRC, &host).unwrap(), ScriptLoadState::Failed);
        assert_eq!(host.attached.get(), 1);
    }

    #[test]
    fn attach_error_marks_failed() {
        let host = FakeHost::default();
        host.fail.set(true);
        let mut registry = ScriptRegistry::new();

        assert!(registry.acquire(SRC, &host).is_err());
        assert_eq!(registry.state(SRC), ScriptLoadState::Failed);
        assert_eq!(registry.holders(SRC), 1);
    }

    #[test]
    fn listeners_are_scoped_by_src_and_removable() {
        let mut registry = ScriptRegistry::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = seen.clone();
        let id = registry.subscribe(SRC, Rc::new(move |s| sink.borrow_mut().push(s)));
        registry.subscribe("other", Rc::new(|_| panic!("wrong src")));

        for listener in registry.listeners(SRC) {
            listener(ScriptLoadState::Ready);
        }
        assert_eq!(*seen.borrow(), vec![ScriptLoadState::Ready]);

        registry.unsubscribe(id);
        assert!(registry.listeners(SRC).is_empty());
    }
}
