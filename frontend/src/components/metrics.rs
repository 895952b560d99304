use super::super::Model;
use super::charts::render_panel;
use shared::report::{METRICS_TITLE, PERFORMANCE_OVERVIEW};
use shared::{CONFUSION_MATRIX, ModelMetrics};
use yew::prelude::*;

pub fn render_metrics(model: &Model) -> Html {
    html! {
        <section class="metrics">
            <h1>{ METRICS_TITLE }</h1>
            <h2>{ PERFORMANCE_OVERVIEW }</h2>
            { match &model.metrics {
                Some(metrics) => render_cards(metrics),
                None if model.error.is_some() => html! {},
                None => html! {
                    <div class="spinner-container">
                        <div class="loading-spinner"></div>
                        <p>{"Loading metrics..."}</p>
                    </div>
                },
            }}
            { super::utils::render_error_message(model) }
            { render_panel(&CONFUSION_MATRIX) }
        </section>
    }
}

fn render_cards(metrics: &ModelMetrics) -> Html {
    html! {
        <div class="metric-cards">
            { for metrics.entries().iter().map(|(title, value)| html! {
                <div class="metric-card">
                    <span class="metric-title">{ *title }</span>
                    <span class="metric-value">{ ModelMetrics::as_percent(*value) }</span>
                </div>
            })}
        </div>
    }
}
