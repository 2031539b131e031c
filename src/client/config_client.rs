use std::sync::Arc;

use crate::api::config_api;
use crate::auth::executor::AuthenticatedRequestExecutor;
use crate::auth::token_service::{SecurityTokenService, TokenService};
use crate::error::SdkError;
use crate::helpers::time::{Clock, SystemClock};
use crate::messages::config::{GetDataResponse, TestApiResponse};
use crate::transport::executor::{HttpExecutor, ReqwestExecutor};

/// Calls of the config service.
pub struct ConfigClient<S = SecurityTokenService<ReqwestExecutor>, H = ReqwestExecutor, C = SystemClock> {
    executor: Arc<AuthenticatedRequestExecutor<S, H, C>>,
}

impl<S, H, C> Clone for ConfigClient<S, H, C> {
    fn clone(&self) -> Self {
        Self { executor: self.executor.clone() }
    }
}

impl<S: TokenService, H: HttpExecutor, C: Clock> ConfigClient<S, H, C> {
    pub fn new(executor: Arc<AuthenticatedRequestExecutor<S, H, C>>) -> Self {
        Self { executor }
    }

    pub async fn test_api(&self, message: Option<&str>) -> Result<TestApiResponse, SdkError> {
        self.executor.invoke(&config_api::test_api(message)).await
    }

    pub async fn get_data<P: AsRef<str>>(
        &self,
        module: &str,
        profiles: &[P],
        revision: &str,
    ) -> Result<GetDataResponse, SdkError> {
        self.executor.invoke(&config_api::get_data(module, profiles, revision)).await
    }
}
