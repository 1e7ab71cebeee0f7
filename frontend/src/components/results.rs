use shared::{AnalysisResult, Candidate, ImageRef, StatRow};
use yew::prelude::*;

pub fn render_image(url: &str, alt: &str) -> Html {
    html! {
        <img class="analysis-image" src={url.to_string()} alt={alt.to_string()} />
    }
}

/// Images in server order; consecutive entries of the same group share one
/// heading.
pub fn render_image_gallery(images: &[ImageRef]) -> Html {
    if images.is_empty() {
        return html! {};
    }

    let mut sections: Vec<(Option<&str>, Vec<&ImageRef>)> = Vec::new();
    for image in images {
        let group = image.group.as_deref();
        match sections.last_mut() {
            Some((current, members)) if *current == group => members.push(image),
            _ => sections.push((group, vec![image])),
        }
    }

    html! {
        <div class="image-gallery">
            { for sections.into_iter().map(|(group, members)| html! {
                <section class="image-group">
                    { group.map(|g| html! { <h3>{ g }</h3> }).unwrap_or_default() }
                    { for members.into_iter().map(|image| html! {
                        <figure key={image.url.clone()}>
                            { render_image(&image.url, &image.label) }
                            <figcaption>{ &image.label }</figcaption>
                        </figure>
                    })}
                </section>
            })}
        </div>
    }
}

/// Gallery of an analysis response, or a note when it came back without plots.
pub fn render_result_images(result: &AnalysisResult) -> Html {
    if result.has_images() {
        render_image_gallery(&result.image_list())
    } else {
        html! { <p class="no-results-message">{"The server returned no plots for this selection."}</p> }
    }
}

pub fn render_stat_table(title: &str, rows: &[StatRow]) -> Html {
    if rows.is_empty() {
        return html! {};
    }

    html! {
        <div class="stat-table">
            <h3>{ title }</h3>
            <ul>
                { for rows.iter().map(|row| html! {
                    <li key={row.key.clone()}>
                        <span class="stat-key">{ &row.key }</span>
                        <span class="stat-value">{ &row.value }</span>
                    </li>
                })}
            </ul>
        </div>
    }
}

pub fn render_candidate_bars(candidates: &[Candidate]) -> Html {
    html! {
        <div class="result-bars">
            { for candidates.iter().map(|candidate| {
                let percentage = candidate.percent();
                html! {
                    <div class="result-item" key={candidate.device.clone()}>
                        <div class="result-label">{ &candidate.device }</div>
                        <div class="result-bar-container">
                            <div class="result-bar" style={format!("width: {}%", percentage)}></div>
                        </div>
                        <div class="result-value">{ format!("{:.1}%", percentage) }</div>
                    </div>
                }
            })}
        </div>
    }
}
