/// Tag for grouping the health endpoint in OpenAPI documentation
pub static INDEX_TAG: &str = "index";

/// Liveness check.
///
/// # Returns
/// - `200 OK` - Plain-text banner
#[utoipa::path(
    get,
    path = "/",
    tag = INDEX_TAG,
    responses(
        (status = 200, description = "API is running", body = String)
    ),
)]
pub async fn health() -> &'static str {
    "TIPPSY API is running!"
}
