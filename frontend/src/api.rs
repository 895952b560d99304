use gloo_console::error;
use gloo_net::http::{Request, Response};
use shared::{ErrorResponse, ModelMetrics, PredictResponse};
use web_sys::FormData;

pub async fn predict(file: &web_sys::File) -> Result<PredictResponse, String> {
    let form_data = FormData::new().map_err(|e| format!("Failed to build form: {e:?}"))?;
    form_data
        .append_with_blob_and_filename("image", file, &file.name())
        .map_err(|e| format!("Failed to attach file: {e:?}"))?;

    let response = Request::post("/api/predict")
        .body(form_data)
        .map_err(|e| format!("Failed to build request: {e}"))?
        .send()
        .await
        .map_err(network_error)?;

    read_json(response).await
}

pub async fn fetch_metrics() -> Result<ModelMetrics, String> {
    let response = Request::get("/api/metrics")
        .send()
        .await
        .map_err(network_error)?;

    read_json(response).await
}

async fn read_json<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, String> {
    if response.ok() {
        return response
            .json::<T>()
            .await
            .map_err(|e| format!("Failed to parse response: {e}"));
    }

    let status = response.status();
    let message = match response.json::<ErrorResponse>().await {
        Ok(body) => body.error,
        Err(_) => response.status_text(),
    };
    Err(format!("Server error: {status} - {message}"))
}

fn network_error(err: gloo_net::Error) -> String {
    error!(format!("Fetch error: {:?}", err));
    format!("Network error: {err}")
}
