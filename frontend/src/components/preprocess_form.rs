use super::utils::{render_busy_label, render_error_message};
use crate::api;
use crate::state::{PreprocessAction, PreprocessModel};
use shared::forms::PreprocessForm;
use shared::vocab::{PreprocessAttribute, RollingDuration, RollingIntervalType};
use shared::Endpoint;
use std::str::FromStr;
use strum::IntoEnumIterator;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PreprocessProps {
    /// Parity of the upload counter; a change means a new dataset.
    pub reload: u8,
}

#[function_component(PreprocessPanel)]
pub fn preprocess_panel(props: &PreprocessProps) -> Html {
    let form = use_state(PreprocessForm::default);
    let status = use_reducer(PreprocessModel::default);
    let period_error = use_state(|| None::<String>);

    {
        let status = status.clone();
        use_effect_with(props.reload, move |_| {
            status.dispatch(PreprocessAction::Reset);
            || ()
        });
    }

    let on_submit = {
        let form = form.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = match form.build() {
                Ok(request) => request,
                Err(err) => {
                    status.dispatch(PreprocessAction::Reject(err.to_string()));
                    return;
                }
            };
            status.dispatch(PreprocessAction::Begin);
            let status = status.clone();
            spawn_local(async move {
                let outcome =
                    api::post_json::<_, serde_json::Value>(Endpoint::Preprocessing, &request)
                        .await
                        .map(|_| ());
                status.dispatch(PreprocessAction::Done(outcome));
            });
        })
    };

    let on_year = {
        let form = form.clone();
        let period_error = period_error.clone();
        Callback::from(move |e: InputEvent| {
            let raw = e.target_unchecked_into::<HtmlInputElement>().value();
            let mut next = (*form).clone();
            match next.period.set_year_input(&raw) {
                Ok(()) => {
                    form.set(next);
                    period_error.set(None);
                }
                Err(err) => period_error.set(Some(err.to_string())),
            }
        })
    };

    let on_month = {
        let form = form.clone();
        let period_error = period_error.clone();
        Callback::from(move |e: Event| {
            let raw = e.target_unchecked_into::<HtmlInputElement>().value();
            let mut next = (*form).clone();
            match next.period.set_month_input(&raw) {
                Ok(()) => {
                    form.set(next);
                    period_error.set(None);
                }
                Err(err) => period_error.set(Some(err.to_string())),
            }
        })
    };

    let attribute_boxes = PreprocessAttribute::iter().map(|attribute| {
        let form = form.clone();
        let checked = form.attributes.contains(&attribute);
        let onchange = Callback::from(move |_: Event| {
            let mut next = (*form).clone();
            next.toggle_attribute(attribute);
            form.set(next);
        });
        html! {
            <label class="checkbox" key={attribute.to_string()}>
                <input type="checkbox" {checked} {onchange} />
                <span>{ attribute.to_string() }</span>
            </label>
        }
    });

    let on_kind = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set_window_kind(RollingIntervalType::from_str(&select.value()).ok());
            form.set(next);
        })
    };

    let window_value = {
        let set_value = {
            let form = form.clone();
            Callback::from(move |value: String| {
                let mut next = (*form).clone();
                next.window_value = value;
                form.set(next);
            })
        };
        match form.window_kind {
            Some(RollingIntervalType::Count) => html! {
                <input
                    type="number"
                    min="1"
                    placeholder="Number of points"
                    value={form.window_value.clone()}
                    oninput={set_value.reform(|e: InputEvent| {
                        e.target_unchecked_into::<HtmlInputElement>().value()
                    })}
                />
            },
            Some(RollingIntervalType::Duration) => html! {
                <select onchange={set_value.reform(|e: Event| {
                    e.target_unchecked_into::<HtmlSelectElement>().value()
                })}>
                    <option value="" selected={form.window_value.is_empty()}>{"Choose a span"}</option>
                    { for RollingDuration::iter().map(|duration| html! {
                        <option
                            value={duration.to_string()}
                            selected={form.window_value == duration.to_string()}
                        >
                            { duration.label() }
                        </option>
                    })}
                </select>
            },
            None => html! {},
        }
    };

    html! {
        <form class="preprocess-form" onsubmit={on_submit}>
            <h4>{"Outlier smoothing"}</h4>
            <fieldset>
                <legend>{"Period"}</legend>
                <input type="number" min="1970" max="9999" placeholder="Year" oninput={on_year} />
                <input type="month" onchange={on_month} />
                { render_error_message(period_error.as_deref()) }
            </fieldset>
            <fieldset>
                <legend>{"Attributes"}</legend>
                { for attribute_boxes }
            </fieldset>
            <fieldset>
                <legend>{"Rolling window"}</legend>
                <select onchange={on_kind}>
                    <option value="" selected={form.window_kind.is_none()}>{"Window type"}</option>
                    { for RollingIntervalType::iter().map(|kind| html! {
                        <option value={kind.to_string()} selected={form.window_kind == Some(kind)}>
                            { kind.label() }
                        </option>
                    })}
                </select>
                { window_value }
            </fieldset>
            <button type="submit" class="analyze-btn" disabled={status.0.submitting}>
                { render_busy_label(status.0.submitting, "Run preprocessing", "Processing...") }
            </button>
            { render_error_message(status.0.error.as_deref()) }
            {
                if status.0.processed {
                    html! {
                        <p class="success-message">
                            <i class="fa-solid fa-circle-check"></i>
                            {" Dataset ready. Open the Processing panel to analyse it."}
                        </p>
                    }
                } else {
                    html! {}
                }
            }
        </form>
    }
}
