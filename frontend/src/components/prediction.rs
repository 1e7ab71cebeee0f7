use super::results::render_candidate_bars;
use super::utils::{render_busy_label, render_error_message};
use crate::api;
use crate::sse;
use crate::state::{TrainingAction, TrainingModel, ViewAction, ViewModel};
use shared::forms::PredictForm;
use shared::vocab::{CodingRate, PacketCategory};
use shared::{ApiError, Endpoint, PredictionOutcome};
use std::str::FromStr;
use strum::IntoEnumIterator;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

type FieldSetter = fn(&mut PredictForm, String);
type FieldGetter = fn(&PredictForm) -> &str;

const NUMERIC_FIELDS: [(&str, FieldGetter, FieldSetter); 8] = [
    ("SF", |f| f.spreading_factor.as_str(), |f, v| f.spreading_factor = v),
    ("Bandwidth (kHz)", |f| f.bandwidth.as_str(), |f, v| f.bandwidth = v),
    ("BitRate", |f| f.bit_rate.as_str(), |f, v| f.bit_rate = v),
    ("Airtime (ms)", |f| f.airtime.as_str(), |f, v| f.airtime = v),
    ("Frequency (MHz)", |f| f.freq.as_str(), |f, v| f.freq = v),
    ("RSSI (dBm)", |f| f.rssi.as_str(), |f, v| f.rssi = v),
    ("LSNR (dB)", |f| f.lsnr.as_str(), |f, v| f.lsnr = v),
    ("Size (bytes)", |f| f.size.as_str(), |f, v| f.size = v),
];

fn edit(form: &UseStateHandle<PredictForm>, apply: FieldSetter) -> Callback<String> {
    let form = form.clone();
    Callback::from(move |value: String| {
        let mut next = (*form).clone();
        apply(&mut next, value);
        form.set(next);
    })
}

/// Device identification: train the model from its live log, then submit the
/// radio parameters of one packet.
#[function_component(PredictionView)]
pub fn prediction_view() -> Html {
    html! {
        <div class="prediction-view">
            <TrainingSection />
            <PredictSection />
        </div>
    }
}

#[function_component(TrainingSection)]
fn training_section() -> Html {
    let training = use_reducer(TrainingModel::default);

    let on_train = {
        let training = training.clone();
        Callback::from(move |_: MouseEvent| {
            if training.0.is_training() {
                return;
            }
            training.dispatch(TrainingAction::Start);
            let training = training.clone();
            spawn_local(async move {
                let events = training.clone();
                let outcome = sse::stream_training(move |event| {
                    events.dispatch(TrainingAction::Event(event));
                })
                .await;
                if let Err(err) = outcome {
                    log::warn!("Training stream failed: {}", err);
                    training.dispatch(TrainingAction::ConnectionLost);
                }
            });
        })
    };

    let session = &training.0;
    let status_class = if session.status.is_error() { "error-message" } else { "status-message" };

    html! {
        <section class="training-section">
            <h3>{"1. Train the model"}</h3>
            <button class="analyze-btn" disabled={session.is_training()} onclick={on_train}>
                { render_busy_label(session.is_training(), "Train the model", "Training...") }
            </button>
            {
                session
                    .status
                    .message()
                    .map(|message| html! { <p class={status_class}>{ message }</p> })
                    .unwrap_or_default()
            }
            {
                if session.transcript.is_empty() {
                    html! {}
                } else {
                    html! { <pre class="training-log">{ session.output() }</pre> }
                }
            }
        </section>
    }
}

#[function_component(PredictSection)]
fn predict_section() -> Html {
    let form = use_state(PredictForm::default);
    let view = use_reducer(|| ViewModel::<PredictionOutcome>::new(true));

    let on_submit = {
        let form = form.clone();
        let view = view.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = match form.build() {
                Ok(request) => request,
                Err(err) => {
                    view.dispatch(ViewAction::Reject(err.to_string()));
                    return;
                }
            };
            view.dispatch(ViewAction::Restart);
            let view = view.clone();
            spawn_local(async move {
                let outcome = api::post_json::<_, serde_json::Value>(Endpoint::Predict, &request)
                    .await
                    .and_then(|body| {
                        PredictionOutcome::from_response(body)
                            .map_err(|e| ApiError::Decode(e.to_string()))
                    });
                view.dispatch(ViewAction::Done(outcome));
            });
        })
    };

    let numeric_inputs = NUMERIC_FIELDS.iter().map(|(label, getter, setter)| {
        let oninput = edit(&form, *setter)
            .reform(|e: InputEvent| e.target_unchecked_into::<HtmlInputElement>().value());
        html! {
            <label class="field" key={*label}>
                <span>{ *label }</span>
                <input
                    type="text"
                    inputmode="decimal"
                    value={getter(&form).to_string()}
                    {oninput}
                />
            </label>
        }
    });

    let on_coding_rate = edit(&form, |f, v| {
        if let Ok(rate) = CodingRate::from_str(&v) {
            f.coding_rate = rate;
        }
    })
    .reform(|e: Event| e.target_unchecked_into::<HtmlSelectElement>().value());

    let on_type = edit(&form, |f, v| {
        if let Ok(category) = PacketCategory::from_str(&v) {
            f.packet_type = category;
        }
    })
    .reform(|e: Event| e.target_unchecked_into::<HtmlSelectElement>().value());

    let state = &view.state;

    html! {
        <section class="predict-section">
            <h3>{"2. Predict the device"}</h3>
            <form class="predict-form" onsubmit={on_submit}>
                { for numeric_inputs }
                <label class="field">
                    <span>{"Coding rate"}</span>
                    <select onchange={on_coding_rate}>
                        { for CodingRate::iter().map(|rate| html! {
                            <option value={rate.to_string()} selected={form.coding_rate == rate}>
                                { rate.to_string() }
                            </option>
                        })}
                    </select>
                </label>
                <label class="field">
                    <span>{"Type"}</span>
                    <select onchange={on_type}>
                        { for PacketCategory::predictable().map(|category| html! {
                            <option value={category.to_string()} selected={form.packet_type == category}>
                                { category.to_string() }
                            </option>
                        })}
                    </select>
                </label>
                <button type="submit" class="analyze-btn" disabled={state.loading}>
                    { render_busy_label(state.loading, "Predict", "Predicting...") }
                </button>
            </form>
            { render_error_message(state.error.as_deref()) }
            { state.result.as_ref().map(render_prediction).unwrap_or_default() }
        </section>
    }
}

fn render_prediction(outcome: &PredictionOutcome) -> Html {
    let device = outcome
        .result
        .prediction
        .clone()
        .unwrap_or_else(|| "Unknown".to_string());

    html! {
        <div class="results-container">
            <div class="result-header">
                <h2><i class="fa-solid fa-microchip"></i>{ format!(" {}", device) }</h2>
                {
                    outcome
                        .confidence_label()
                        .map(|label| html! {
                            <div class="confidence-meter">
                                <div class="meter-label">{"Confidence:"}</div>
                                <div class="meter-value">{ label }</div>
                            </div>
                        })
                        .unwrap_or_default()
                }
            </div>
            {
                if outcome.top_candidates().is_empty() {
                    html! {}
                } else {
                    html! {
                        <div class="detailed-results">
                            <h3>{"Closest devices"}</h3>
                            { render_candidate_bars(outcome.top_candidates()) }
                        </div>
                    }
                }
            }
            <details class="raw-json">
                <summary>{"Raw response"}</summary>
                <pre>{ outcome.raw_pretty() }</pre>
            </details>
        </div>
    }
}
