use desktop_runtime::{shell_catalog, DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;
use platform_host_web::build_host_services;

const FALLBACK_TITLE: &str = "Retro Desktop";

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();
    let title = shell_catalog()
        .map(|catalog| catalog.home_title)
        .unwrap_or_else(|_| FALLBACK_TITLE.to_string());

    view! {
        <Title text=title />
        <Meta name="description" content="A retro desktop-style personal website shell." />

        <main class="site-root">
            <DesktopEntry />
        </main>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! {
        <DesktopProvider host_services=build_host_services()>
            <DesktopShell />
        </DesktopProvider>
    }
}
