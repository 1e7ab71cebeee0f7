//! Period and packet-type filter of the Processing panel.
//!
//! The filter owns the [`Selection`] and hands a read-only
//! [`SelectionHandle`] to the analysis views mounted below it. Views read it
//! with [`use_selection`], which refuses to run outside this provider.

use super::analysis_menu::AnalysisMenu;
use super::clustering::ClusteringView;
use super::regression::RegressionView;
use super::statistics::StatisticsView;
use super::trends::TrendsView;
use super::utils::render_error_message;
use shared::vocab::{AnalysisMode, PacketCategory};
use shared::{Selection, SelectionHandle};
use strum::IntoEnumIterator;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Selection of the enclosing filter panel.
///
/// # Panics
///
/// When called from a component that is not mounted under [`ChooseData`].
/// That is a wiring mistake, not a runtime condition.
#[hook]
pub fn use_selection() -> SelectionHandle {
    match SelectionHandle::require(use_context::<SelectionHandle>()) {
        Ok(handle) => handle,
        Err(err) => panic!("{}", err),
    }
}

#[function_component(ChooseData)]
pub fn choose_data() -> Html {
    let selection = use_state(Selection::default);
    let year_input = use_state(String::new);
    let month_input = use_state(String::new);
    let input_error = use_state(|| None::<String>);
    let mode = use_state(|| None::<AnalysisMode>);

    let on_year = {
        let selection = selection.clone();
        let year_input = year_input.clone();
        let input_error = input_error.clone();
        Callback::from(move |e: InputEvent| {
            let raw = e.target_unchecked_into::<HtmlInputElement>().value();
            let mut next = (*selection).clone();
            match next.set_year_input(&raw) {
                Ok(()) => {
                    selection.set(next);
                    input_error.set(None);
                }
                Err(err) => input_error.set(Some(err.to_string())),
            }
            year_input.set(raw);
        })
    };

    let on_month = {
        let selection = selection.clone();
        let month_input = month_input.clone();
        let input_error = input_error.clone();
        Callback::from(move |e: Event| {
            let raw = e.target_unchecked_into::<HtmlInputElement>().value();
            let mut next = (*selection).clone();
            match next.set_month_input(&raw) {
                Ok(()) => {
                    selection.set(next);
                    input_error.set(None);
                }
                Err(err) => input_error.set(Some(err.to_string())),
            }
            month_input.set(raw);
        })
    };

    let category_boxes = PacketCategory::iter().map(|category| {
        let selection = selection.clone();
        let checked = selection.contains(category);
        let onchange = Callback::from(move |_: Event| {
            let mut next = (*selection).clone();
            next.toggle_category(category);
            selection.set(next);
        });
        html! {
            <label class="checkbox" key={category.to_string()}>
                <input type="checkbox" {checked} {onchange} />
                <span>{ category.to_string() }</span>
            </label>
        }
    });

    let chips = if selection.categories().is_empty() {
        html! {}
    } else {
        html! {
            <div class="chips">
                { for selection.categories().iter().map(|category| html! {
                    <span class="chip" key={category.to_string()}>{ category.to_string() }</span>
                })}
            </div>
        }
    };

    let on_choice = {
        let mode = mode.clone();
        Callback::from(move |choice: AnalysisMode| mode.set(Some(choice)))
    };

    let analysis = if selection.is_active() {
        let handle = SelectionHandle::new((*selection).clone());
        html! {
            <ContextProvider<SelectionHandle> context={handle}>
                <div class="analysis-area">
                    <AnalysisMenu {on_choice} />
                    <div class="analysis-view">{ render_analysis(*mode) }</div>
                </div>
            </ContextProvider<SelectionHandle>>
        }
    } else {
        html! {}
    };

    html! {
        <div class="choose-data">
            <h3>{"Filter the data to analyse"}</h3>
            <p class="subtitle">{"Pick a period and the packet types to look at"}</p>
            <div class="period-inputs">
                <input
                    type="number"
                    min="1970"
                    max="9999"
                    placeholder="Year"
                    value={(*year_input).clone()}
                    oninput={on_year}
                />
                <input type="month" value={(*month_input).clone()} onchange={on_month} />
            </div>
            { render_error_message(input_error.as_deref()) }
            <div class="category-grid">{ for category_boxes }</div>
            { chips }
            { analysis }
        </div>
    }
}

fn render_analysis(mode: Option<AnalysisMode>) -> Html {
    match mode {
        Some(AnalysisMode::Regression) => html! { <RegressionView /> },
        Some(AnalysisMode::Trends) => html! { <TrendsView /> },
        Some(AnalysisMode::Clustering) => html! { <ClusteringView /> },
        Some(AnalysisMode::Statistics) => html! { <StatisticsView /> },
        Some(AnalysisMode::Reserved) => html! {
            <p class="placeholder-note">{"This analysis is not available yet."}</p>
        },
        None => html! {},
    }
}
