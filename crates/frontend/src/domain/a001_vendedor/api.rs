use crate::shared::fetch::ApiRequest;

pub const LIST_PATH: &str = "/api/vendedores";

pub fn list_request() -> ApiRequest {
    ApiRequest::get(LIST_PATH)
}
