use http::Method;

use crate::api::descriptor::{ApiDescriptor, ServiceBase};
use crate::error::SdkError;
use crate::messages::config::{GetDataResponse, TestApiResponse};
use crate::transport::request::GenericResponse;

pub const TEST_MESSAGE_KEY: &str = "message";

/// Round trip against the config service, for connectivity checks.
pub fn test_api(message: Option<&str>) -> ApiDescriptor<TestApiResponse> {
    let descriptor = ApiDescriptor::new(ServiceBase::Config, Method::GET, "this/is/a/test", test_api_handler);
    match message {
        Some(message) => descriptor.query(TEST_MESSAGE_KEY, message),
        None => descriptor,
    }
}

/// Config of `module` for the given profiles at `revision`.
pub fn get_data<S: AsRef<str>>(module: &str, profiles: &[S], revision: &str) -> ApiDescriptor<GetDataResponse> {
    let profiles = profiles.iter().map(|p| p.as_ref()).collect::<Vec<_>>().join(",");
    ApiDescriptor::new(
        ServiceBase::Config,
        Method::GET,
        format!("data/{}/{}/{}", module, profiles, revision),
        get_data_handler,
    )
}

fn test_api_handler(response: GenericResponse) -> Result<TestApiResponse, SdkError> {
    response.json()
}

fn get_data_handler(response: GenericResponse) -> Result<GetDataResponse, SdkError> {
    response.json()
}
