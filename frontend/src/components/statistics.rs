use super::choose_data::use_selection;
use super::results::render_result_images;
use super::utils::{render_busy_label, render_error_message};
use crate::api;
use crate::state::{ViewAction, ViewModel};
use shared::forms::StatsForm;
use shared::vocab::StatColumn;
use shared::{AnalysisResult, Endpoint};
use strum::IntoEnumIterator;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Distribution charts, one group per requested column.
#[function_component(StatisticsView)]
pub fn statistics_view() -> Html {
    let selection = use_selection();
    let form = use_state(StatsForm::default);
    let view = use_reducer(|| ViewModel::<AnalysisResult>::new(true));

    let column_boxes = StatColumn::iter().map(|column| {
        let form = form.clone();
        let checked = form.columns.contains(&column);
        let onchange = Callback::from(move |_: Event| {
            let mut next = (*form).clone();
            next.toggle_column(column);
            form.set(next);
        });
        html! {
            <label class="checkbox" key={column.to_string()}>
                <input type="checkbox" {checked} {onchange} />
                <span>{ column.to_string() }</span>
            </label>
        }
    });

    let on_submit = {
        let form = form.clone();
        let view = view.clone();
        Callback::from(move |_: MouseEvent| {
            let request = match form.build(&selection) {
                Ok(request) => request,
                Err(err) => {
                    view.dispatch(ViewAction::Reject(err.to_string()));
                    return;
                }
            };
            view.dispatch(ViewAction::Begin);
            let view = view.clone();
            spawn_local(async move {
                let outcome = api::post_json(Endpoint::Stats, &request).await;
                view.dispatch(ViewAction::Done(outcome));
            });
        })
    };

    let state = &view.state;

    html! {
        <div class="statistics-view">
            <div class="category-grid">{ for column_boxes }</div>
            <button class="analyze-btn" disabled={state.loading} onclick={on_submit}>
                { render_busy_label(state.loading, "Compute statistics", "Computing...") }
            </button>
            { render_error_message(state.error.as_deref()) }
            {
                state
                    .result
                    .as_ref()
                    .map(render_result_images)
                    .unwrap_or_default()
            }
        </div>
    }
}
