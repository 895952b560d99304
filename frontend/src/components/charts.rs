use shared::report::INSIGHTS_TITLE;
use shared::{ChartPanel, TRAINING_CHARTS};
use yew::prelude::*;

pub fn render_charts() -> Html {
    html! {
        <section class="charts">
            <h1>{ INSIGHTS_TITLE }</h1>
            { for TRAINING_CHARTS.iter().map(render_panel) }
        </section>
    }
}

/// Chart image with its caption and a tinted interpretation box.
pub fn render_panel(panel: &ChartPanel) -> Html {
    html! {
        <div class="chart-panel">
            <h2>{ panel.title }</h2>
            <figure>
                <img class="full-width" src={format!("/assets/{}", panel.image)} alt={panel.caption} />
                <figcaption>{ panel.caption }</figcaption>
            </figure>
            <div class={classes!("callout", panel.tier.to_string())}>
                <strong>{"Interpretation:"}</strong>
                <ul>
                    { for panel.interpretation.iter().map(|line| html! { <li>{ *line }</li> }) }
                </ul>
            </div>
        </div>
    }
}
