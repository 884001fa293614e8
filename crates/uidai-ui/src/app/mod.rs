//! Root component and wasm entry point.
//!
//! # Design
//! - The selected view lives in a `use_reducer` owned here; nothing is global.
//! - Page content is memoized on the selected view and rebuilt only when it
//!   changes.
//! - Host configuration is read once and shared through a context provider.

use gloo::console;
use yew::prelude::*;

use crate::components::page::PageView;
use crate::components::shell::AppShell;
use crate::core::config::DashboardConfig;
use crate::core::navigation::{NavAction, Navigation};
use crate::core::view::ViewId;
use preferences::load_config;

mod preferences;

#[function_component(DashboardApp)]
fn dashboard_app() -> Html {
    let config = use_memo(|_| load_config(), ());
    let nav = {
        let initial = config.initial_view();
        use_reducer(move || Navigation::new(initial))
    };
    let selected = nav.selected();
    let page = use_memo(move |view: &ViewId| crate::features::render_view(*view), selected);

    use_effect_with_deps(
        move |view: &ViewId| {
            console::debug!("dashboard view selected", view.slug());
            || ()
        },
        selected,
    );

    let on_select = {
        let nav = nav.clone();
        Callback::from(move |id: ViewId| nav.dispatch(NavAction::Select(id)))
    };

    html! {
        <ContextProvider<DashboardConfig> context={(*config).clone()}>
            <AppShell active={selected} on_select={on_select.clone()}>
                <PageView page={page} on_select={on_select} />
            </AppShell>
        </ContextProvider<DashboardConfig>>
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<DashboardApp>::with_root(root).render();
    } else {
        console::warn!("#root not found; mounting dashboard on <body>");
        yew::Renderer::<DashboardApp>::new().render();
    }
}
