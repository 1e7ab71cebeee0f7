use super::choose_data::use_selection;
use super::results::render_result_images;
use super::utils::{render_busy_label, render_error_message};
use crate::api;
use crate::state::{ViewAction, ViewModel};
use shared::forms::TrendsForm;
use shared::vocab::{HopInterval, ResampleFreq};
use shared::{AnalysisResult, Endpoint};
use std::str::FromStr;
use strum::IntoEnumIterator;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

fn edit(
    form: &UseStateHandle<TrendsForm>,
    apply: fn(&mut TrendsForm, String),
) -> Callback<String> {
    let form = form.clone();
    Callback::from(move |value: String| {
        let mut next = (*form).clone();
        apply(&mut next, value);
        form.set(next);
    })
}

#[function_component(TrendsView)]
pub fn trends_view() -> Html {
    let selection = use_selection();
    let form = use_state(TrendsForm::default);
    let view = use_reducer(|| ViewModel::<AnalysisResult>::new(true));

    let on_interval = edit(&form, |form, value| {
        form.hop_interval = HopInterval::from_str(&value).ok()
    })
        .reform(|e: Event| e.target_unchecked_into::<HtmlSelectElement>().value());
    let on_value = edit(&form, |form, value| form.set_hop_value_input(&value))
        .reform(|e: InputEvent| e.target_unchecked_into::<HtmlInputElement>().value());
    let on_freq = edit(&form, |form, value| form.freq = ResampleFreq::from_str(&value).ok())
        .reform(|e: Event| e.target_unchecked_into::<HtmlSelectElement>().value());

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
                let outcome = api::post_json(Endpoint::Trends, &request).await;
                view.dispatch(ViewAction::Done(outcome));
            });
        })
    };

    let state = &view.state;

    html! {
        <div class="trends-view">
            <div class="form-row">
                <select onchange={on_interval}>
                    <option value="" selected={form.hop_interval.is_none()}>{"Window unit"}</option>
                    { for HopInterval::iter().map(|interval| html! {
                        <option value={interval.to_string()} selected={form.hop_interval == Some(interval)}>
                            { interval.to_string() }
                        </option>
                    })}
                </select>
                <input type="number" min="1" placeholder="Window length" oninput={on_value} />
                <select onchange={on_freq}>
                    <option value="" selected={form.freq.is_none()}>{"Resampling frequency"}</option>
                    { for ResampleFreq::iter().map(|freq| html! {
                        <option value={freq.to_string()} selected={form.freq == Some(freq)}>
                            { freq.label() }
                        </option>
                    })}
                </select>
            </div>
            {
                if form.is_complete() {
                    html! {
                        <button class="analyze-btn" disabled={state.loading} onclick={on_submit}>
                            { render_busy_label(state.loading, "Show trends", "Computing...") }
                        </button>
                    }
                } else {
                    html! {}
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
