use std::rc::Rc;

use crate::components::blocks::render_block;
use crate::core::config::DashboardConfig;
use crate::core::content::{Hero, Page};
use crate::core::view::ViewId;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct PageViewProps {
    pub(crate) page: Rc<Page>,
    pub(crate) on_select: Callback<ViewId>,
}

/// Renders one view's content under the shell.
#[function_component(PageView)]
pub(crate) fn page_view(props: &PageViewProps) -> Html {
    let config = use_context::<DashboardConfig>().unwrap_or_default();
    let page = &props.page;
    html! {
        <div class={classes!("page", format!("{}-page", page.id.slug()))}>
            {page.hero.as_ref().map_or_else(Html::default, |hero| render_hero(hero, &props.on_select))}
            <div class="page-header">
                <h2 class="page-title">{&page.title}</h2>
                <p class="page-subtitle">{&page.subtitle}</p>
            </div>
            {for page.blocks.iter().map(|block| render_block(block, &config))}
        </div>
    }
}

fn render_hero(hero: &Hero, on_select: &Callback<ViewId>) -> Html {
    html! {
        <div class="hero">
            <h1>{&hero.title}</h1>
            <p>{&hero.tagline}</p>
            <div class="btn-group">
                {for hero.actions.iter().map(|action| {
                    let class = classes!("btn", if action.primary { "btn-primary" } else { "btn-secondary" });
                    let onclick = action.target.map(|target| on_select.reform(move |_: MouseEvent| target));
                    html! {
                        <button type="button" {class} {onclick}>{&action.label}</button>
                    }
                })}
            </div>
        </div>
    }
}
