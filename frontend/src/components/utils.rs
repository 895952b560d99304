use super::super::Model;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::FileList;
use yew::prelude::*;

const SUPPORTED_EXTENSIONS: [&str; 3] = [".jpg", ".jpeg", ".png"];
const SUPPORTED_TYPES: [&str; 2] = ["image/jpeg", "image/png"];

/// Click callback that runs `action` once clicks have paused for `delay_ms`.
pub fn debounce<F>(delay_ms: u32, action: F) -> Callback<MouseEvent>
where
    F: Fn() + Clone + 'static,
{
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::default();

    Callback::from(move |_: MouseEvent| {
        let action = action.clone();
        // Dropping the replaced timeout cancels it.
        pending.replace(Some(Timeout::new(delay_ms, move || action())));
    })
}

/// Ids for in-flight prediction requests. Only the request started by the
/// current upload may settle; anything else is a stale response.
#[derive(Debug, Default)]
pub struct PendingPrediction {
    last_id: u64,
    awaiting: Option<u64>,
}

impl PendingPrediction {
    pub fn start(&mut self) -> u64 {
        self.last_id += 1;
        self.awaiting = Some(self.last_id);
        self.last_id
    }

    pub fn cancel(&mut self) {
        self.awaiting = None;
    }

    /// Returns whether `id` is the awaited request, and stops waiting if so.
    pub fn settle(&mut self, id: u64) -> bool {
        if self.awaiting == Some(id) {
            self.awaiting = None;
            true
        } else {
            false
        }
    }
}

pub fn is_supported_upload(name: &str, mime: &str) -> bool {
    let name = name.to_ascii_lowercase();
    SUPPORTED_TYPES.contains(&mime) || SUPPORTED_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// First JPG/PNG file in the list, if any.
pub fn first_supported_file(file_list: &FileList) -> Option<web_sys::File> {
    (0..file_list.length())
        .filter_map(|i| file_list.item(i))
        .find(|file| is_supported_upload(&file.name(), &file.type_()))
}

pub fn apply_theme(theme: &str) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };

    let result = if theme == "dark" {
        body.class_list().add_1("dark-mode")
    } else {
        body.class_list().remove_1("dark-mode")
    };
    if let Err(e) = result {
        log::warn!("Failed to switch theme: {e:?}");
    }
}

pub fn render_error_message(model: &Model) -> Html {
    match model.error.as_deref() {
        Some(message) => html! {
            <div class="error-message" role="alert">
                <i class="fa-solid fa-triangle-exclamation"></i>
                <span>{ message }</span>
            </div>
        },
        None => Html::default(),
    }
}
