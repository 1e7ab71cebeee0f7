mod api;
mod components;
mod sse;
mod state;

use components::choose_data::ChooseData;
use components::header::render_header;
use components::menu::render_menu;
use components::prediction::PredictionView;
use components::upload_section::UploadPanel;
use shared::vocab::Panel;
use yew::prelude::*;

// Yew msg components
pub enum Msg {
    SelectPanel(Panel),
}

// Main component
pub struct App {
    panel: Option<Panel>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self { panel: None }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SelectPanel(panel) => {
                if self.panel == Some(panel) {
                    return false;
                }
                log::info!("Switching to panel {}", panel.code());
                self.panel = Some(panel);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { render_header() }
                { render_menu(self.panel, ctx) }

                <main class="main-content">
                { self.render_panel() }
                </main>

                <footer class="app-footer">
                    <p>{"LoRaWAN Packet Analysis | Rust WASM front end"}</p>
                </footer>
            </div>
        }
    }
}

impl App {
    // Panels keep no state across switches; each one mounts fresh.
    fn render_panel(&self) -> Html {
        match self.panel {
            Some(Panel::Upload) => html! { <UploadPanel /> },
            Some(Panel::Process) => html! { <ChooseData /> },
            Some(Panel::Predict) => html! { <PredictionView /> },
            None => html! {
                <p class="placeholder-note">{"Choose an action above to get started."}</p>
            },
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting, analysis backend at {}", api::base_url());
    yew::Renderer::<App>::new().render();
}
