//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container, the runtime effect queue, and the shell
//! catalog loaded at startup. UI composition stays in [`crate::components`].

use leptos::*;
use platform_host::HostServices;

use crate::{
    catalog::{shell_catalog, CatalogError, ShellCatalog},
    effect_executor,
    host::DesktopHostContext,
    model::{DesktopState, InteractionState},
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
    surface::SurfaceRegistry,
    window_manager::WindowManager,
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host service bundle for executing runtime side effects.
    pub host: StoredValue<DesktopHostContext>,
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Reactive pointer/drag interaction state signal.
    pub interaction: RwSignal<InteractionState>,
    /// Queue of runtime effects emitted by the reducer and processed by the executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Shell catalog the desktop was booted from.
    pub catalog: StoredValue<ShellCatalog>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }
}

fn load_shell() -> Result<(ShellCatalog, DesktopState), CatalogError> {
    let catalog = shell_catalog()?;
    let state = DesktopState::from_catalog(&catalog)?;
    Ok((catalog, state))
}

/// Loads the embedded catalog, falling back to an empty desktop when it is unusable.
pub fn boot_desktop() -> (ShellCatalog, DesktopState) {
    match load_shell() {
        Ok(booted) => booted,
        Err(err) => {
            logging::error!("shell catalog unavailable, starting with an empty desktop: {err}");
            let catalog = ShellCatalog::default();
            let state = DesktopState::new(WindowManager::new(
                SurfaceRegistry::default(),
                catalog.home_title.clone(),
            ));
            (catalog, state)
        }
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and boots the shell catalog.
pub fn DesktopProvider(
    /// Injected browser or stub host bundle assembled by the entry layer.
    host_services: HostServices,
    children: Children,
) -> impl IntoView {
    let host = store_value(DesktopHostContext::new(host_services));
    let (booted_catalog, booted_state) = boot_desktop();
    let catalog = store_value(booted_catalog);
    let state = create_rw_signal(booted_state);
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut ui = interaction.get_untracked();
        let previous_desktop = desktop.clone();
        let previous_ui = ui.clone();

        match reduce_desktop(&mut desktop, &mut ui, action) {
            Ok(new_effects) => {
                if desktop != previous_desktop {
                    state.set(desktop);
                }
                if ui != previous_ui {
                    interaction.set(ui);
                }
                if !new_effects.is_empty() {
                    effects.update(|queue| queue.extend(new_effects));
                }
            }
            Err(err) => logging::debug_warn!("desktop reducer error: {err}"),
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        state,
        interaction,
        effects,
        catalog,
        dispatch,
    };

    provide_context(runtime);
    effect_executor::install(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
