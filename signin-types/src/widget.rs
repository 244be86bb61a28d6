// SPDX-License-Identifier: MIT OR Apache-2.0

//! One-shot initialization of the provider widget.
//!
//! `initialize` + `renderButton` must run after the script is ready and at
//! most once per mounted container. Render cycles and readiness signals can
//! repeat, so the component asks [`WidgetLifecycle::poll`] every time and
//! only acts on [`WidgetAction::Initialize`].

use crate::error::SignInError;
use crate::script::ScriptLoadState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidgetState {
    #[default]
    Uninitialized,
    Initialized,
    /// Initialization threw. Terminal: the error is logged, never retried.
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetAction {
    /// Script not ready or container not mounted yet.
    Wait,
    Initialize,
    /// Initialized or failed already.
    Done,
}

#[derive(Debug, Default)]
pub struct WidgetLifecycle {
    state: WidgetState,
}

impl WidgetLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> WidgetState {
        self.state
    }

    pub fn is_initialized(&self) -> bool {
        self.state == WidgetState::Initialized
    }

    pub fn poll(&self, script: ScriptLoadState, container_present: bool) -> WidgetAction {
        match self.state {
            WidgetState::Initialized | WidgetState::Failed => WidgetAction::Done,
            WidgetState::Uninitialized if script.is_ready() && container_present => {
                WidgetAction::Initialize
            }
            WidgetState::Uninitialized => WidgetAction::Wait,
        }
    }

    /// Record the outcome of an initialization attempt. Calls after the first
    /// are ignored.
    pub fn complete(&mut self, outcome: Result<(), SignInError>) -> WidgetState {
        if self.state == WidgetState::Uninitialized {
            self.state = match outcome {
                Ok(()) => WidgetState::Initialized,
                Err(_) => WidgetState::Failed,
            };
        }
        self.state
    }
}
