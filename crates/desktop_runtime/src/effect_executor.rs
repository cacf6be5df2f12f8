//! Runs queued page views and other host effects once a dispatch has committed its state.

use leptos::*;

use crate::runtime_context::DesktopRuntimeContext;

/// Watches the runtime effect queue and hands each effect to the host in dispatch order.
pub fn install(runtime: DesktopRuntimeContext) {
    // The queue is emptied before any effect runs; effects queued by the host land in the next pass.
    create_effect(move |_| {
        if runtime.effects.with(Vec::is_empty) {
            return;
        }

        let batch = runtime
            .effects
            .try_update(std::mem::take)
            .unwrap_or_default();
        let host = runtime.host.get_value();
        batch
            .into_iter()
            .for_each(|effect| host.run_runtime_effect(effect));
    });
}
