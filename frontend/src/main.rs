mod api;
mod components;

use components::enroll_page::EnrollPage;
use components::header::render_header;
use components::search_page::SearchPage;
use shared::{ApiConfig, BackendHealth, Screen};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

pub enum Msg {
    SwitchScreen(Screen),
    HealthChecked(BackendHealth),
}

// Root component: owns the active screen and hands the config to that page only.
pub struct Model {
    screen: Screen,
    config: ApiConfig,
    health: BackendHealth,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let config = ApiConfig::from_env();
        log::info!("Using recognition backend at {}", config.base_url());

        spawn_local({
            let link = ctx.link().clone();
            let config = config.clone();

            async move {
                let reply = api::get_health(&config).await;
                link.send_message(Msg::HealthChecked(BackendHealth::from_reply(reply)));
            }
        });

        Self {
            screen: Screen::default(),
            config,
            health: BackendHealth::Unknown,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SwitchScreen(screen) => {
                if self.screen == screen {
                    return false;
                }
                self.screen = screen;
                true
            }
            Msg::HealthChecked(health) => {
                self.health = health;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let page = match self.screen {
            Screen::Search => html! { <SearchPage config={self.config.clone()} /> },
            Screen::Enroll => html! { <EnrollPage config={self.config.clone()} /> },
        };

        html! {
            <div class="app-container">
                { render_header(self.screen, &self.health, ctx.link()) }

                <main class="main-content">
                    <div class="container">{ page }</div>
                </main>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
