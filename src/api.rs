use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use waraiba_core::StatusSnapshot;

const STATUS_PATH: &str = "/api/status";
const UPDATE_SCORE_PATH: &str = "/api/update_score";
const COMPLETE_IMAGE_PATH: &str = "/api/complete_image";

#[derive(Serialize)]
struct PointsBody {
    points: i64,
}

pub(crate) fn api_base() -> String {
    if let Some(raw) = option_env!("WARAIBA_API_BASE")
        .or(option_env!("TRUNK_PUBLIC_WARAIBA_API_BASE"))
        .or(option_env!("TRUNK_PUBLIC_API_BASE"))
    {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return trimmed.trim_end_matches('/').to_string();
        }
    }
    String::new()
}

pub(crate) fn join_api(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    format!("{base}{path}")
}

pub(crate) async fn fetch_status() -> Result<StatusSnapshot, String> {
    let body = fetch_text(&join_api(&api_base(), STATUS_PATH), "GET", None)
        .await
        .map_err(js_err)?;
    waraiba_core::parse_status(&body).ok_or_else(|| "status payload was not valid JSON".to_string())
}

pub(crate) async fn report_points(points: i64) -> Result<(), String> {
    let body = serde_json::to_string(&PointsBody { points })
        .map_err(|err| format!("points body encode failed: {err}"))?;
    fetch_text(&join_api(&api_base(), UPDATE_SCORE_PATH), "POST", Some(body))
        .await
        .map(|_| ())
        .map_err(js_err)
}

pub(crate) async fn report_image_complete() -> Result<(), String> {
    fetch_text(
        &join_api(&api_base(), COMPLETE_IMAGE_PATH),
        "POST",
        Some("{}".to_string()),
    )
    .await
    .map(|_| ())
    .map_err(js_err)
}

async fn fetch_text(url: &str, method: &str, body: Option<String>) -> Result<String, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("missing window"))?;
    let init = RequestInit::new();
    init.set_method(method);
    let has_body = body.is_some();
    if let Some(body) = body {
        init.set_body(&JsValue::from_str(&body));
    }
    let request = Request::new_with_str_and_init(url, &init)?;
    if has_body {
        request.headers().set("Content-Type", "application/json")?;
    }
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into::<Response>()?;
    if !response.ok() {
        return Err(JsValue::from_str(&format!(
            "{url} responded {}",
            response.status()
        )));
    }
    let text = JsFuture::from(response.text()?).await?;
    Ok(text.as_string().unwrap_or_default())
}

pub(crate) fn js_err(error: JsValue) -> String {
    if let Some(value) = error.as_string() {
        return value;
    }
    if let Ok(json) = js_sys::JSON::stringify(&error) {
        if let Some(value) = json.as_string() {
            return value;
        }
    }
    "js error".to_string()
}
