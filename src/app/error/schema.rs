#[derive(serde::Serialize)]
pub struct Error {
    pub error: String,
}
