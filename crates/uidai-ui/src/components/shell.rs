use crate::core::view::{BRAND, FOOTER_NOTICE, NAV_ENTRIES, NavEntry, ViewId};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ShellProps {
    pub(crate) children: Children,
    pub(crate) active: ViewId,
    pub(crate) on_select: Callback<ViewId>,
}

#[function_component(AppShell)]
pub(crate) fn app_shell(props: &ShellProps) -> Html {
    html! {
        <div class="app-container">
            <nav class="navbar">
                <div class="navbar-container">
                    <div class="navbar-brand">{BRAND}</div>
                    <ul class="navbar-menu">
                        {for NAV_ENTRIES.iter().map(|entry| nav_item(*entry, props.active, &props.on_select))}
                    </ul>
                </div>
            </nav>
            <main class="main-content">
                {for props.children.iter()}
            </main>
            <footer class="footer">
                <p>{FOOTER_NOTICE}</p>
            </footer>
        </div>
    }
}

fn nav_item(entry: NavEntry, active: ViewId, on_select: &Callback<ViewId>) -> Html {
    let is_active = entry.id == active;
    let classes = classes!("nav-link", is_active.then_some("active"));
    let onclick = on_select.reform(move |_: MouseEvent| entry.id);
    html! {
        <li>
            <button
                type="button"
                class={classes}
                data-view={entry.id.slug()}
                aria-current={is_active.then_some("page")}
                {onclick}
            >
                {entry.label}
            </button>
        </li>
    }
}
