/// Plain-text liveness endpoint.
pub async fn root() -> &'static str {
    "Shop Inventory API is running!"
}
