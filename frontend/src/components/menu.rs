use super::super::{App, Msg};
use shared::vocab::Panel;
use strum::IntoEnumIterator;
use yew::prelude::*;

fn panel_icon(panel: Panel) -> &'static str {
    match panel {
        Panel::Upload => "fa-solid fa-upload",
        Panel::Process => "fa-solid fa-chart-column",
        Panel::Predict => "fa-solid fa-robot",
    }
}

/// Top-level panel switcher. Only one panel is mounted at a time.
pub fn render_menu(active: Option<Panel>, ctx: &Context<App>) -> Html {
    let link = ctx.link();

    html! {
        <nav class="panel-menu">
            { for Panel::iter().map(|panel| {
                let selected = active == Some(panel);
                html! {
                    <button
                        key={panel.code().to_string()}
                        class={classes!("panel-card", selected.then_some("selected"))}
                        aria-pressed={selected.to_string()}
                        onclick={link.callback(move |_| Msg::SelectPanel(panel))}
                    >
                        <div class="panel-title">
                            <i class={panel_icon(panel)}></i>{ format!(" {}", panel.title()) }
                        </div>
                        <div class="panel-description">{ panel.description() }</div>
                    </button>
                }
            })}
        </nav>
    }
}
