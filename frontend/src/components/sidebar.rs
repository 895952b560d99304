use super::super::{Model, Msg, Page};
use shared::report::LOGO;
use yew::html::Scope;
use yew::prelude::*;

pub fn render_sidebar(current: Page, link: &Scope<Model>) -> Html {
    html! {
        <aside class="sidebar">
            <img class="sidebar-logo" src={format!("/assets/{LOGO}")} alt="Arthonova logo" />
            <h2><i class="fa-solid fa-bars"></i>{" Navigation"}</h2>
            <div class="nav-options" role="radiogroup">
                { for Page::ALL.iter().map(|&page| {
                    let id = format!("nav-{}", page.title().to_lowercase().replace(' ', "-"));
                    html! {
                        <label for={id.clone()} class={classes!("nav-option", (page == current).then_some("active"))}>
                            <input
                                type="radio"
                                id={id}
                                name="page"
                                checked={page == current}
                                onchange={link.callback(move |_| Msg::Navigate(page))}
                            />
                            <i class={page.icon()}></i>
                            <span class="radio-label-text">{ format!(" {}", page.title()) }</span>
                        </label>
                    }
                })}
            </div>
        </aside>
    }
}
