use super::choose_data::use_selection;
use super::results::{render_image, render_stat_table};
use super::utils::{render_busy_label, render_error_message, render_warning};
use crate::api;
use crate::state::{ViewAction, ViewModel};
use shared::forms::regression_request;
use shared::results::STAT_PRECISION;
use shared::vocab::PacketCategory;
use shared::{AnalysisResult, Endpoint, ValidationError};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[function_component(RegressionView)]
pub fn regression_view() -> Html {
    let selection = use_selection();
    let view = use_reducer(|| ViewModel::<AnalysisResult>::new(true));

    let run = {
        let selection = selection.clone();
        let view = view.clone();
        Callback::from(move |data_type: PacketCategory| {
            let request = match regression_request(&selection, data_type) {
                Ok(request) => request,
                Err(err) => {
                    view.dispatch(ViewAction::Reject(err.to_string()));
                    return;
                }
            };
            view.dispatch(ViewAction::Begin);
            let view = view.clone();
            spawn_local(async move {
                let outcome = api::post_json(Endpoint::Regression, &request).await;
                view.dispatch(ViewAction::Done(outcome));
            });
        })
    };

    let state = &view.state;
    let period_missing = selection.period().is_none();

    html! {
        <div class="regression-view">
            {
                if period_missing {
                    render_warning(&ValidationError::PeriodRequired.to_string())
                } else {
                    html! {}
                }
            }
            { render_error_message(state.error.as_deref()) }
            <div class="button-container">
                { for selection.categories().iter().copied().map(|category| html! {
                    <button
                        key={category.to_string()}
                        class="analyze-btn"
                        disabled={state.loading || period_missing}
                        onclick={run.reform(move |_: MouseEvent| category)}
                    >
                        { render_busy_label(
                            state.loading,
                            &format!("Regression: {}", category),
                            "Computing...",
                        ) }
                    </button>
                })}
            </div>
            { state.result.as_ref().map(render_regression).unwrap_or_default() }
        </div>
    }
}

fn render_regression(result: &AnalysisResult) -> Html {
    let section = |title: &str, image_key: &str, stats: Option<(&str, &str)>| {
        html! {
            <section class="regression-section">
                <h2>{ title }</h2>
                { result.image(image_key).map(|url| render_image(url, title)).unwrap_or_default() }
                {
                    stats
                        .map(|(key, heading)| {
                            render_stat_table(heading, &result.stat_rows(key, Some(STAT_PRECISION)))
                        })
                        .unwrap_or_default()
                }
            </section>
        }
    };

    html! {
        <div class="regression-results">
            { render_stat_table("General statistics", &result.stat_rows("general", None)) }
            { section("RSSI", "rssi", Some(("rssi", "RSSI statistics"))) }
            { section("SNR", "snr", Some(("snr", "SNR statistics"))) }
            { section("Residuals", "residuals", None) }
        </div>
    }
}
