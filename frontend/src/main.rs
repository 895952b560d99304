mod api;
mod components;

use gloo_events::EventListener;
use gloo_file::ObjectUrl;
use gloo_storage::{LocalStorage, Storage};
use shared::report::UPLOAD_TITLE;
use shared::{ModelMetrics, PredictResponse};
use wasm_bindgen::JsCast;
use web_sys::{ClipboardEvent, DragEvent};
use yew::prelude::*;

use components::{charts, handlers, home, metrics, results, sidebar, theme_toggle, upload_section, utils};

const THEME_KEY: &str = "koa-theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    CheckKoa,
    ModelPredictions,
    ModelCharts,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Home, Page::CheckKoa, Page::ModelPredictions, Page::ModelCharts];

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::CheckKoa => "Check KOA",
            Page::ModelPredictions => "Model Predictions",
            Page::ModelCharts => "Model Charts",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Page::Home => "fa-solid fa-house",
            Page::CheckKoa => "fa-solid fa-x-ray",
            Page::ModelPredictions => "fa-solid fa-chart-column",
            Page::ModelCharts => "fa-solid fa-chart-line",
        }
    }
}

pub struct UploadedXray {
    pub file: web_sys::File,
    pub preview_url: ObjectUrl,
}

pub enum Msg {
    Navigate(Page),

    // Upload & diagnosis
    FileSelected(web_sys::File),
    InferenceResult(u64, PredictResponse),
    InferenceFailed(u64, String),
    ClearUpload,

    // Metrics page
    MetricsLoaded(ModelMetrics),

    // UI states
    SetError(Option<String>),
    SetDragging(bool),
    ToggleTheme,

    // Input events
    HandleDrop(DragEvent),
    HandlePaste(ClipboardEvent),
}

pub struct Model {
    page: Page,
    upload: Option<UploadedXray>,
    result: Option<PredictResponse>,
    metrics: Option<ModelMetrics>,
    pending: utils::PendingPrediction,
    loading: bool,
    error: Option<String>,
    is_dragging: bool,
    paste_listener: Option<EventListener>,
    theme: String,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let theme = LocalStorage::get::<String>(THEME_KEY).unwrap_or_else(|_| "light".to_string());
        utils::apply_theme(&theme);

        let mut model = Self {
            page: Page::Home,
            upload: None,
            result: None,
            metrics: None,
            pending: utils::PendingPrediction::default(),
            loading: false,
            error: None,
            is_dragging: false,
            paste_listener: None,
            theme,
        };

        if let Some(window) = web_sys::window() {
            let link = ctx.link().clone();
            let listener = EventListener::new(&window, "paste", move |event| {
                if let Some(clipboard_event) = event.dyn_ref::<ClipboardEvent>() {
                    link.send_message(Msg::HandlePaste(clipboard_event.clone()));
                }
            });
            model.paste_listener = Some(listener);
        }

        model
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Navigate(page) => handlers::handle_navigate(self, ctx, page),

            Msg::FileSelected(file) => handlers::handle_file_selected(self, ctx, file),
            Msg::InferenceResult(id, response) => handlers::handle_inference_result(self, id, response),
            Msg::InferenceFailed(id, error) => handlers::handle_inference_failed(self, id, error),
            Msg::ClearUpload => handlers::handle_clear_upload(self),

            Msg::MetricsLoaded(metrics) => {
                self.metrics = Some(metrics);
                true
            }

            Msg::SetError(error) => {
                self.error = error;
                true
            }
            Msg::SetDragging(is_dragging) => {
                self.is_dragging = is_dragging;
                true
            }
            Msg::ToggleTheme => {
                self.theme = if self.theme == "light" { "dark" } else { "light" }.to_string();
                utils::apply_theme(&self.theme);
                if let Err(e) = LocalStorage::set(THEME_KEY, &self.theme) {
                    log::warn!("Could not persist theme: {e}");
                }
                true
            }

            Msg::HandleDrop(event) => handlers::handle_drop(self, ctx, event),
            Msg::HandlePaste(event) => handlers::handle_paste(self, ctx, event),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let page = match self.page {
            Page::Home => home::render_home(),
            Page::CheckKoa => html! {
                <>
                    <h1>{ UPLOAD_TITLE }</h1>
                    { upload_section::render_upload_section(self, ctx) }
                    { utils::render_error_message(self) }
                    { results::render_results(self) }
                </>
            },
            Page::ModelPredictions => metrics::render_metrics(self),
            Page::ModelCharts => charts::render_charts(),
        };

        html! {
            <div class="container">
                { sidebar::render_sidebar(self.page, ctx.link()) }
                <main class="main-content">
                    <div class="top-right">
                        { theme_toggle::render_theme_toggle(&self.theme, ctx.link()) }
                    </div>
                    { page }
                </main>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
