use super::choose_data::use_selection;
use super::results::render_result_images;
use super::utils::{render_busy_label, render_error_message, render_warning};
use crate::api;
use crate::state::{ViewAction, ViewModel};
use shared::forms::ClusteringForm;
use shared::vocab::{ClusterMetric, Dimensionality};
use shared::{AnalysisResult, Endpoint};
use strum::IntoEnumIterator;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[function_component(ClusteringView)]
pub fn clustering_view() -> Html {
    let selection = use_selection();
    let form = use_state(ClusteringForm::default);
    let view = use_reducer(|| ViewModel::<AnalysisResult>::new(true));

    let dimension_radios = Dimensionality::iter().map(|dimensionality| {
        let form = form.clone();
        let checked = form.dimensionality == dimensionality;
        let onchange = Callback::from(move |_: Event| {
            let mut next = (*form).clone();
            next.dimensionality = dimensionality;
            form.set(next);
        });
        html! {
            <label class="radio" key={dimensionality.label()}>
                <input type="radio" name="dimensionality" {checked} {onchange} />
                <span>{ dimensionality.label() }</span>
            </label>
        }
    });

    let metric_boxes = ClusterMetric::iter().map(|metric| {
        let form = form.clone();
        let checked = form.metrics.contains(&metric);
        let onchange = Callback::from(move |_: Event| {
            let mut next = (*form).clone();
            next.toggle_metric(metric);
            form.set(next);
        });
        html! {
            <label class="checkbox" key={metric.to_string()}>
                <input type="checkbox" {checked} {onchange} />
                <span>{ metric.to_string() }</span>
            </label>
        }
    });

    // Submit only shows up once the form is sendable as is.
    let readiness = form.check(&selection);

    let on_submit = {
        let form = form.clone();
        let view = view.clone();
        let selection = selection.clone();
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
                let outcome = api::post_json(Endpoint::Clustering, &request).await;
                view.dispatch(ViewAction::Done(outcome));
            });
        })
    };

    let state = &view.state;

    html! {
        <div class="clustering-view">
            <fieldset>
                <legend>{"Dimensions"}</legend>
                { for dimension_radios }
            </fieldset>
            <fieldset>
                <legend>{"Metrics"}</legend>
                { for metric_boxes }
            </fieldset>
            {
                match readiness {
                    Ok(()) => html! {
                        <button class="analyze-btn" disabled={state.loading} onclick={on_submit}>
                            { render_busy_label(state.loading, "Run clustering", "Computing...") }
                        </button>
                    },
                    Err(warning) => render_warning(&warning.to_string()),
                }
            }
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
