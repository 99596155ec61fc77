//! API gateway client: the only component performing network I/O. Attaches
//! the bearer credential from the session to every call except login, and
//! normalizes every failure into the `ApiError` taxonomy.

use serde::de::DeserializeOwned;
use serde::Serialize;

use edo_common::api::{
    AdvanceRequest, AdvanceResponse, ApiError, CreateOrderRequest, CreateOrderResponse,
    LoginRequest, LoginResponse, OrdersResponse,
};
use edo_common::board::POLL_INTERVAL_MS;
use edo_common::session::Session;

/// Default API gateway URL; overridable at compile time via the
/// `EDO_API_URL` env var, or at runtime via an `?api=<url>` query parameter.
#[allow(dead_code)] // used in WASM builds
const DEFAULT_API_URL: &str = "https://api.edosushibar.pe/dev";

#[allow(dead_code)] // used in WASM builds
fn api_base_url() -> String {
    let compile_time = option_env!("EDO_API_URL").unwrap_or(DEFAULT_API_URL);
    runtime_override().unwrap_or_else(|| compile_time.to_string())
}

#[cfg(target_family = "wasm")]
fn runtime_override() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    web_sys::UrlSearchParams::new_with_str(&search)
        .ok()?
        .get("api")
}

#[cfg(not(target_family = "wasm"))]
#[allow(dead_code)] // used in WASM builds
fn runtime_override() -> Option<String> {
    None
}

/// Authenticate against the backend. No credential is attached; the session
/// store is only touched by the caller on success.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };
    post_json("/auth/login", &request, None).await
}

/// Fetch the caller's order scope: staff see every order in their tenant,
/// clientes only their own. Scoping happens server-side; the result is
/// rendered verbatim.
pub async fn get_orders(session: &Session) -> Result<OrdersResponse, ApiError> {
    let text = fetch_json("/orders", "GET", None, Some(&session.token)).await?;
    decode(&text)
}

pub async fn create_order(
    session: &Session,
    request: &CreateOrderRequest,
) -> Result<CreateOrderResponse, ApiError> {
    post_json("/orders", request, Some(&session.token)).await
}

/// Request one staff step. The task token travels back verbatim; a rejection
/// (stale token, role mismatch) comes back as a normal `ApiError::Status`.
pub async fn advance_order(
    session: &Session,
    request: &AdvanceRequest,
) -> Result<AdvanceResponse, ApiError> {
    post_json("/orders/advance", request, Some(&session.token)).await
}

async fn post_json<B, T>(path: &str, body: &B, bearer: Option<&str>) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let body = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    let text = fetch_json(path, "POST", Some(body), bearer).await?;
    decode(&text)
}

fn decode<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Sleep for one polling period. Outside the browser there is no timer to
/// drive the views, so the poll parks instead of spinning.
pub async fn poll_delay() {
    delay_ms(POLL_INTERVAL_MS).await;
}

pub async fn delay_ms(ms: u32) {
    #[cfg(target_family = "wasm")]
    gloo_timers::future::TimeoutFuture::new(ms).await;
    #[cfg(not(target_family = "wasm"))]
    {
        let _ = ms;
        std::future::pending::<()>().await
    }
}

// ─── fetch (browser only) ────────────────────────────────────────────────────

#[cfg(target_family = "wasm")]
async fn fetch_json(
    path: &str,
    method: &str,
    body: Option<String>,
    bearer: Option<&str>,
) -> Result<String, ApiError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let url = format!("{}{}", api_base_url(), path);
    tracing::debug!("{method} {url}");

    let opts = web_sys::RequestInit::new();
    opts.set_method(method);
    opts.set_mode(web_sys::RequestMode::Cors);
    if let Some(b) = body {
        opts.set_body(&wasm_bindgen::JsValue::from_str(&b));
    }

    let request = web_sys::Request::new_with_str_and_init(&url, &opts)
        .map_err(|e| ApiError::Network(format!("failed to create request: {e:?}")))?;

    let headers = request.headers();
    headers
        .set("Content-Type", "application/json")
        .map_err(|e| ApiError::Network(format!("failed to set header: {e:?}")))?;
    // Without a stored credential the header is omitted entirely; the
    // backend rejects such requests itself.
    if let Some(token) = bearer {
        headers
            .set("Authorization", &format!("Bearer {token}"))
            .map_err(|e| ApiError::Network(format!("failed to set header: {e:?}")))?;
    }

    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| ApiError::Network(format!("fetch failed: {e:?}")))?;

    let resp: web_sys::Response = resp_value
        .dyn_into()
        .map_err(|_| ApiError::Network("response is not a Response object".into()))?;

    let text_promise = resp
        .text()
        .map_err(|e| ApiError::Network(format!("failed to read body: {e:?}")))?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|e| ApiError::Network(format!("failed to read body: {e:?}")))?
        .as_string()
        .unwrap_or_default();

    let status = resp.status();
    if status >= 400 {
        return Err(ApiError::Status {
            code: status,
            message: edo_common::api::error_message(status, &text),
        });
    }

    Ok(text)
}

#[cfg(not(target_family = "wasm"))]
async fn fetch_json(
    path: &str,
    _method: &str,
    _body: Option<String>,
    _bearer: Option<&str>,
) -> Result<String, ApiError> {
    Err(ApiError::Network(format!(
        "HTTP client only available in WASM builds ({path})"
    )))
}
