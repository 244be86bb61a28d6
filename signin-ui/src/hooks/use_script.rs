// SPDX-License-Identifier: MIT OR Apache-2.0

use std::rc::Rc;

use signin_types::ScriptLoadState;
use yew::prelude::*;

use crate::context::ScriptRegistryCtx;

/// Load `src` through the page's script registry and track its state.
///
/// While `enabled` is false nothing is injected and the state stays
/// `NotStarted`. The component's hold on the script is released when it
/// unmounts or when `src` changes, which removes a tag that never finished
/// loading.
#[hook]
pub fn use_script(src: AttrValue, enabled: bool) -> ScriptLoadState {
    let registry = use_context::<ScriptRegistryCtx>().unwrap_or_else(ScriptRegistryCtx::page);
    let state = use_state(|| ScriptLoadState::NotStarted);

    {
        let state = state.clone();
        use_effect_with((src, enabled, registry), move |(src, enabled, registry)| {
            let held = if *enabled {
                let setter = state.setter();
                let id = registry.subscribe(src, Rc::new(move |s| setter.set(s)));
                match registry.acquire(src) {
                    Ok(current) => state.set(current),
                    Err(e) => {
                        log::error!("{e}");
                        state.set(ScriptLoadState::Failed);
                    }
                }
                Some((registry.clone(), src.clone(), id))
            } else {
                state.set(ScriptLoadState::NotStarted);
                None
            };

            move || {
                if let Some((registry, src, id)) = held {
                    registry.unsubscribe(id);
                    registry.release(&src);
                }
            }
        });
    }

    *state
}
