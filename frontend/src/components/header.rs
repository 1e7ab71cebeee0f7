use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-tower-broadcast"></i> {" LoRaWAN Packet Analysis"}</h1>
            <p class="subtitle">{"Upload a capture, explore it, identify devices"}</p>
        </header>
    }
}
