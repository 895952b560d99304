use super::super::Model;
use shared::report::{FINDINGS_HEADING, NEXT_STEPS_HEADING};
use shared::{CLASS_LABELS, PredictResponse, advisory};
use yew::prelude::*;

pub fn render_results(model: &Model) -> Html {
    let Some(upload) = &model.upload else {
        return html! {};
    };

    html! {
        <div class="results-layout">
            <div class="preview-container">
                <img class="preview-image" src={upload.preview_url.to_string()} alt={upload.file.name()} />
                <p class="caption">{"Uploaded X-ray"}</p>
            </div>
            { if model.loading {
                html! {
                    <div class="spinner-container">
                        <div class="loading-spinner"></div>
                        <p>{"Analyzing..."}</p>
                    </div>
                }
            } else if let Some(result) = &model.result {
                render_diagnosis(result)
            } else {
                html! {}
            }}
        </div>
    }
}

fn render_diagnosis(result: &PredictResponse) -> Html {
    let advice = advisory(result.label);

    html! {
        <div class="diagnosis">
            <h2>{ format!("Diagnosis: {}", result.label) }</h2>
            <p class="confidence">{ format!("Confidence: {:.2}%", result.confidence) }</p>

            <div class={classes!("callout", advice.finding_tier.to_string())}>
                <strong>{ FINDINGS_HEADING }</strong>
                <p>{ advice.finding }</p>
            </div>

            <div class={classes!("callout", advice.next_steps_tier.to_string())}>
                <strong>{ NEXT_STEPS_HEADING }</strong>
                <ul>
                    { for advice.next_steps.iter().map(|step| html! { <li>{ *step }</li> }) }
                </ul>
            </div>

            { render_probabilities(result) }
        </div>
    }
}

fn render_probabilities(result: &PredictResponse) -> Html {
    let labels: Vec<&str> = if result.class_labels.len() == result.probabilities.len() {
        result.class_labels.iter().map(String::as_str).collect()
    } else {
        CLASS_LABELS.to_vec()
    };

    html! {
        <div class="probability-bars">
            <h3>{"Class probabilities"}</h3>
            { for labels.iter().zip(&result.probabilities).map(|(label, p)| {
                let percent = (p * 100.0).clamp(0.0, 100.0);
                html! {
                    <div class="probability-row">
                        <span class="probability-label">{ *label }</span>
                        <div class="probability-track">
                            <div class="probability-fill" style={format!("width: {percent:.1}%;")}></div>
                        </div>
                        <span class="probability-value">{ format!("{percent:.2}%") }</span>
                    </div>
                }
            })}
        </div>
    }
}
