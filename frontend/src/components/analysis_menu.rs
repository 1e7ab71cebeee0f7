use shared::vocab::AnalysisMode;
use strum::IntoEnumIterator;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AnalysisMenuProps {
    pub on_choice: Callback<AnalysisMode>,
}

#[function_component(AnalysisMenu)]
pub fn analysis_menu(props: &AnalysisMenuProps) -> Html {
    let selected = use_state(|| None::<AnalysisMode>);

    html! {
        <div class="analysis-menu">
            <h4>{"Choose an analysis method"}</h4>
            { for AnalysisMode::iter().map(|mode| {
                let onchange = {
                    let selected = selected.clone();
                    let on_choice = props.on_choice.clone();
                    Callback::from(move |e: Event| {
                        let value = e.target_unchecked_into::<HtmlInputElement>().value();
                        let Some(choice) = value.parse().ok().and_then(AnalysisMode::from_code) else {
                            log::warn!("Unknown analysis code {:?}", value);
                            return;
                        };
                        selected.set(Some(choice));
                        on_choice.emit(choice);
                    })
                };
                html! {
                    <label class="analysis-option" key={mode.code().to_string()}>
                        <div>
                            <div class="option-title">{ mode.title() }</div>
                            <div class="option-description">{ mode.description() }</div>
                        </div>
                        <input
                            type="radio"
                            name="analysis"
                            value={mode.code().to_string()}
                            checked={*selected == Some(mode)}
                            {onchange}
                        />
                    </label>
                }
            })}
        </div>
    }
}
