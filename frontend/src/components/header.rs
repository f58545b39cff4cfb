use super::super::{Model, Msg};
use shared::{BackendHealth, Screen};
use strum::IntoEnumIterator;
use yew::html::Scope;
use yew::prelude::*;

/// Title, screen toggle and backend badge.
pub fn render_header(active: Screen, health: &BackendHealth, link: &Scope<Model>) -> Html {
    html! {
        <header class="app-header">
            <h1>{"Face Recognition System"}</h1>
            <span class={classes!("health-badge", health.css_class())}>{ health.label() }</span>
            <nav class="nav-bar">
                { for Screen::iter().map(|screen| html! {
                    <button
                        class={classes!("nav-btn", (screen == active).then_some("active"))}
                        aria-label={screen.aria_label()}
                        onclick={link.callback(move |_| Msg::SwitchScreen(screen))}
                    >
                        { screen.to_string() }
                    </button>
                })}
            </nav>
        </header>
    }
}
