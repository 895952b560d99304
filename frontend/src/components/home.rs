use shared::report::HOME_IMAGES;
use yew::prelude::*;

pub fn render_home() -> Html {
    html! {
        <section class="home">
            { for HOME_IMAGES.iter().map(|image| html! {
                <img class="full-width" src={format!("/assets/{image}")} alt={image.trim_end_matches(".png").to_string()} />
            })}
            <p class="credits">{"Made by Group 6 | Fardeen, Dhruvisha and Deep."}</p>
        </section>
    }
}
