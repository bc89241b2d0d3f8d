use crate::api::{ApiClient, ApiError};
use crate::models::{RegisterRequest, RegisterResponse};

pub const REGISTER_PATH: &str = "/admin/register";

/// Anything that can create an account from a registration request
#[async_trait::async_trait(?Send)]
pub trait Registrar {
    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError>;
}

#[async_trait::async_trait(?Send)]
impl Registrar for ApiClient {
    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        self.post(REGISTER_PATH, request).await
    }
}
