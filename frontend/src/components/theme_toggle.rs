use super::super::{Model, Msg};
use yew::html::Scope;
use yew::prelude::*;

pub fn render_theme_toggle(theme: &str, link: &Scope<Model>) -> Html {
    let dark = theme == "dark";
    let (icon, hint) = if dark {
        ("fa-solid fa-moon", "Switch to light mode")
    } else {
        ("fa-solid fa-sun", "Switch to dark mode")
    };

    html! {
        <button
            class="theme-toggle"
            aria-pressed={dark.to_string()}
            aria-label={hint}
            title={hint}
            onclick={link.callback(|_| Msg::ToggleTheme)}
        >
            <i class={icon}></i>
        </button>
    }
}
