//! Analytics host-service adapter backed by the page's Matomo `_paq` command queue.

use platform_host::AnalyticsService;

/// Name of the global Matomo command queue.
pub const MATOMO_QUEUE_GLOBAL: &str = "_paq";

/// Builds the ordered Matomo commands that report one virtual page view.
pub fn matomo_page_view_commands(path: &str, title: &str) -> Vec<Vec<String>> {
    vec![
        vec!["setCustomUrl".to_string(), path.to_string()],
        vec!["setDocumentTitle".to_string(), title.to_string()],
        vec!["trackPageView".to_string()],
    ]
}

#[derive(Debug, Clone, Copy, Default)]
/// Browser analytics adapter that pushes page views onto `window._paq`.
///
/// The queue is created when the tracker script has not loaded yet, matching Matomo's async
/// snippet contract: the tracker drains the array once it boots.
pub struct MatomoAnalyticsService;

impl AnalyticsService for MatomoAnalyticsService {
    fn record_virtual_page_view(&self, path: &str, title: &str) -> Result<(), String> {
        let commands = matomo_page_view_commands(path, title);

        #[cfg(target_arch = "wasm32")]
        {
            push_matomo_commands(&commands)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = commands;
            Ok(())
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn push_matomo_commands(commands: &[Vec<String>]) -> Result<(), String> {
    use wasm_bindgen::{JsCast, JsValue};

    let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
    let key = JsValue::from_str(MATOMO_QUEUE_GLOBAL);
    let existing = js_sys::Reflect::get(&window, &key)
        .map_err(|err| format!("read {MATOMO_QUEUE_GLOBAL} failed: {err:?}"))?;
    let queue: JsValue = if existing.is_undefined() || existing.is_null() {
        let created = js_sys::Array::new();
        js_sys::Reflect::set(&window, &key, &created)
            .map_err(|err| format!("create {MATOMO_QUEUE_GLOBAL} failed: {err:?}"))?;
        created.into()
    } else {
        existing
    };

    // Once matomo.js boots it swaps the array for an object exposing `push`.
    let push = js_sys::Reflect::get(&queue, &JsValue::from_str("push"))
        .map_err(|err| format!("read {MATOMO_QUEUE_GLOBAL}.push failed: {err:?}"))?
        .dyn_into::<js_sys::Function>()
        .map_err(|_| format!("{MATOMO_QUEUE_GLOBAL}.push is not a function"))?;

    for command in commands {
        let entry = command
            .iter()
            .map(|part| JsValue::from_str(part))
            .collect::<js_sys::Array>();
        push.call1(&queue, &entry)
            .map_err(|err| format!("{MATOMO_QUEUE_GLOBAL}.push failed: {err:?}"))?;
    }
    Ok(())
}
