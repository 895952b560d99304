use super::super::{Model, Msg, Page, UploadedXray};
use super::utils::first_supported_file;
use crate::api;
use gloo_file::{File as GlooFile, ObjectUrl};
use shared::PredictResponse;
use wasm_bindgen_futures::spawn_local;
use web_sys::{ClipboardEvent, DragEvent};
use yew::prelude::*;

pub fn handle_navigate(model: &mut Model, ctx: &Context<Model>, page: Page) -> bool {
    if model.page == page {
        return false;
    }
    model.page = page;
    model.error = None;

    if page == Page::ModelPredictions && model.metrics.is_none() {
        let link = ctx.link().clone();
        spawn_local(async move {
            match api::fetch_metrics().await {
                Ok(metrics) => link.send_message(Msg::MetricsLoaded(metrics)),
                Err(err) => {
                    log::error!("Failed to load metrics: {err}");
                    link.send_message(Msg::SetError(Some(err)));
                }
            }
        });
    }

    true
}

pub fn handle_file_selected(model: &mut Model, ctx: &Context<Model>, file: web_sys::File) -> bool {
    let preview_url = ObjectUrl::from(GlooFile::from(file.clone()));
    log::info!("Uploading {} ({} bytes)", file.name(), file.size());

    model.upload = Some(UploadedXray {
        file: file.clone(),
        preview_url,
    });
    model.result = None;
    model.error = None;
    model.loading = true;

    let request_id = model.pending.start();
    let link = ctx.link().clone();
    spawn_local(async move {
        match api::predict(&file).await {
            Ok(response) => link.send_message(Msg::InferenceResult(request_id, response)),
            Err(err) => link.send_message(Msg::InferenceFailed(request_id, err)),
        }
    });

    true
}

pub fn handle_inference_result(model: &mut Model, request_id: u64, response: PredictResponse) -> bool {
    if !model.pending.settle(request_id) {
        log::debug!("Dropping stale prediction {request_id}");
        return false;
    }
    model.result = Some(response);
    model.loading = false;
    true
}

pub fn handle_inference_failed(model: &mut Model, request_id: u64, error: String) -> bool {
    if !model.pending.settle(request_id) {
        log::debug!("Dropping stale prediction error {request_id}: {error}");
        return false;
    }
    log::error!("Prediction failed: {error}");
    model.error = Some(error);
    model.loading = false;
    true
}

pub fn handle_clear_upload(model: &mut Model) -> bool {
    model.pending.cancel();
    model.upload = None;
    model.result = None;
    model.error = None;
    model.loading = false;
    true
}

pub fn handle_drop(model: &mut Model, ctx: &Context<Model>, event: DragEvent) -> bool {
    event.prevent_default();
    model.is_dragging = false;

    if let Some(file_list) = event.data_transfer().and_then(|dt| dt.files()) {
        select_first(ctx, &file_list);
    }

    true
}

pub fn handle_paste(model: &mut Model, ctx: &Context<Model>, event: ClipboardEvent) -> bool {
    if model.page != Page::CheckKoa {
        return false;
    }
    if let Some(file_list) = event.clipboard_data().and_then(|dt| dt.files()) {
        if file_list.length() > 0 {
            event.prevent_default();
            select_first(ctx, &file_list);
            return true;
        }
    }
    false
}

fn select_first(ctx: &Context<Model>, file_list: &web_sys::FileList) {
    match first_supported_file(file_list) {
        Some(file) => ctx.link().send_message(Msg::FileSelected(file)),
        None => ctx
            .link()
            .send_message(Msg::SetError(Some("Only JPG and PNG images are supported.".into()))),
    }
}
