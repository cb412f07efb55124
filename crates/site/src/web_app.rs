use leptos::*;
use leptos_meta::*;
use portfolio_desktop::{DesktopProvider, DesktopShell};

use crate::content::portfolio_loader;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Justin Short" />
        <Meta
            name="description"
            content="A personal portfolio styled as a desktop operating system."
        />

        <main class="site-root">
            <DesktopEntry />
        </main>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! {
        <DesktopProvider loader=portfolio_loader()>
            <DesktopShell />
        </DesktopProvider>
    }
}
