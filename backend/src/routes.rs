use actix_files::Files;
use actix_multipart::{Field, Multipart};
use actix_web::{HttpResponse, web};
use futures::{StreamExt, TryStreamExt};
use log::{error, info, warn};
use shared::{HealthResponse, ModelMetrics, PredictResponse, advisory_for_label};
use uuid::Uuid;

use crate::config::{PathsConfig, UploadConfig};
use crate::error::ApiError;
use crate::inference::Model;

const ALLOWED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];
const ALLOWED_MIME_TYPES: [&str; 3] = ["image/jpeg", "image/jpg", "image/png"];

pub fn configure_routes(cfg: &mut web::ServiceConfig, paths: &PathsConfig) {
    configure_api(cfg);
    cfg.service(Files::new("/assets", &paths.assets_dir))
        .service(Files::new("/", &paths.frontend_dir).index_file("index.html"));
}

pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/predict").route(web::post().to(handle_predict)))
        .service(web::resource("/api/metrics").route(web::get().to(get_metrics)))
        .service(web::resource("/api/advisory/{label}").route(web::get().to(get_advisory)))
        .service(web::resource("/api/health").route(web::get().to(health)));
}

struct Upload {
    filename: Option<String>,
    content_type: Option<String>,
    data: Vec<u8>,
}

impl Upload {
    fn is_file(&self) -> bool {
        self.filename.is_some() || self.content_type.is_some()
    }

    fn check_type(&self) -> Result<(), ApiError> {
        let extension_ok = self
            .filename
            .as_deref()
            .and_then(|name| name.rsplit_once('.'))
            .is_some_and(|(_, ext)| ALLOWED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()));
        let mime_ok = self
            .content_type
            .as_deref()
            .is_some_and(|mime| ALLOWED_MIME_TYPES.contains(&mime));

        if extension_ok || mime_ok {
            Ok(())
        } else {
            let described = self
                .filename
                .clone()
                .or_else(|| self.content_type.clone())
                .unwrap_or_default();
            Err(ApiError::UnsupportedMediaType(described))
        }
    }
}

async fn read_field(mut field: Field, limit: usize) -> Result<Upload, ApiError> {
    let filename = field
        .content_disposition()
        .and_then(|cd| cd.get_filename())
        .map(str::to_string);
    let content_type = field.content_type().map(|mime| mime.essence_str().to_string());

    let mut data = Vec::new();
    while let Some(chunk) = field.next().await {
        let chunk = chunk?;
        if data.len() + chunk.len() > limit {
            return Err(ApiError::PayloadTooLarge { limit });
        }
        data.extend_from_slice(&chunk);
    }

    Ok(Upload {
        filename,
        content_type,
        data,
    })
}

/// Takes the first file part of the form; a part named `image` wins.
async fn read_upload(mut payload: Multipart, limit: usize) -> Result<Upload, ApiError> {
    let mut chosen: Option<Upload> = None;

    while let Some(field) = payload.try_next().await? {
        let is_image_field = field.name() == Some("image");
        let upload = read_field(field, limit).await?;
        if !upload.is_file() || upload.data.is_empty() {
            continue;
        }
        if is_image_field {
            chosen = Some(upload);
            break;
        }
        if chosen.is_none() {
            chosen = Some(upload);
        }
    }

    chosen.ok_or(ApiError::MissingFile)
}

async fn handle_predict(
    model: web::Data<Model>,
    upload_config: web::Data<UploadConfig>,
    payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let request_id = Uuid::new_v4();
    let upload = read_upload(payload, upload_config.max_bytes)
        .await
        .inspect_err(|e| warn!("[{request_id}] rejected upload: {e}"))?;
    upload.check_type().inspect_err(|e| warn!("[{request_id}] {e}"))?;

    info!(
        "[{request_id}] predicting {} ({} bytes)",
        upload.filename.as_deref().unwrap_or("<unnamed>"),
        upload.data.len()
    );

    let model = model.into_inner();
    let prediction = web::block(move || model.predict_bytes(&upload.data))
        .await
        .map_err(|e| {
            error!("[{request_id}] inference worker failed: {e}");
            ApiError::Blocking
        })?
        .inspect_err(|e| error!("[{request_id}] inference failed: {e}"))?;

    info!(
        "[{request_id}] diagnosis {} with {:.2}% confidence",
        prediction.label, prediction.confidence
    );

    Ok(HttpResponse::Ok().json(PredictResponse::new(
        prediction.label,
        prediction.confidence,
        prediction.probabilities,
    )))
}

async fn get_metrics() -> HttpResponse {
    HttpResponse::Ok().json(ModelMetrics::reported())
}

async fn get_advisory(path: web::Path<String>) -> Result<HttpResponse, ApiError> {
    let advisory = advisory_for_label(&path.into_inner())?;
    Ok(HttpResponse::Ok().json(advisory))
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
    })
}
