use crate::api::descriptor::ApiDescriptor;
use crate::transport::request::SdkRequest;

/// Port nginx listens on inside the services' docker network.
pub const DOCKER_NGINX_PORT: u16 = 8080;
pub const API_VERSION: &str = "1.0";

/// Turns descriptors into wire-level requests for one deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestBuilder {
    pub url_base: String,
    pub docker_context: bool,
}

impl RequestBuilder {
    pub fn new(url_base: impl Into<String>, docker_context: bool) -> Self {
        Self { url_base: url_base.into(), docker_context }
    }

    /// Natively every service sits behind `url_base`; in docker each
    /// service is addressed by its own name.
    pub fn url_for<T>(&self, descriptor: &ApiDescriptor<T>) -> String {
        let api_endpoint = descriptor.api_endpoint();
        if self.docker_context {
            format!(
                "http://{}:{}/{}/{}",
                descriptor.service, DOCKER_NGINX_PORT, API_VERSION, api_endpoint
            )
        } else {
            let base = self.url_base.trim_end_matches('/');
            if base.starts_with("http://") || base.starts_with("https://") {
                format!("{}/{}/{}", base, API_VERSION, api_endpoint)
            } else {
                format!("http://{}/{}/{}", base, API_VERSION, api_endpoint)
            }
        }
    }

    pub fn build<T>(&self, descriptor: &ApiDescriptor<T>) -> SdkRequest {
        SdkRequest {
            method: descriptor.method.clone(),
            url: self.url_for(descriptor),
            headers: descriptor.headers.clone(),
            query_params: descriptor.query_params.clone(),
            body: descriptor.body.clone(),
        }
    }
}
