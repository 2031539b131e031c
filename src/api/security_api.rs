use http::Method;

use crate::api::descriptor::{raw_response, ApiDescriptor, ServiceBase};
use crate::error::SdkError;
use crate::messages::security::CheckTokenResponse;
use crate::transport::request::GenericResponse;

pub const GRANT_TYPE_KEY: &str = "grant_type";
pub const GRANT_TYPE_CLIENT_CREDENTIALS: &str = "client_credentials";
pub const TOKEN_KEY: &str = "token";

/// `POST security/oauth/token`. The raw response is returned because the
/// token lifecycle branches on its status.
pub fn get_token() -> ApiDescriptor<GenericResponse> {
    ApiDescriptor::new(ServiceBase::Security, Method::POST, "oauth/token", raw_response)
        .query(GRANT_TYPE_KEY, GRANT_TYPE_CLIENT_CREDENTIALS)
}

/// `POST security/oauth/check_token` for the given bearer token.
pub fn check_token(token: &str) -> ApiDescriptor<CheckTokenResponse> {
    ApiDescriptor::new(ServiceBase::Security, Method::POST, "oauth/check_token", check_token_handler)
        .query(GRANT_TYPE_KEY, GRANT_TYPE_CLIENT_CREDENTIALS)
        .query(TOKEN_KEY, token)
}

fn check_token_handler(response: GenericResponse) -> Result<CheckTokenResponse, SdkError> {
    Ok(CheckTokenResponse { status: response.status, body: response.body })
}
