use crate::shared::fetch::ApiRequest;

pub const LIST_PATH: &str = "/api/vendas";

pub fn list_request() -> ApiRequest {
    ApiRequest::get(LIST_PATH)
}
