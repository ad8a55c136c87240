use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// A user-facing message explaining why a request changed nothing
#[derive(Serialize, Deserialize, ToSchema)]
pub struct AlertDto {
    /// The alert message
    pub alert: String,
}
