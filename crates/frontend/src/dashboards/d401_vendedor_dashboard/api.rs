use crate::shared::fetch::ApiRequest;
use crate::shared::filters::{FilterQuery, FilterSchema};

pub const DASHBOARD_PATH: &str = "/api/auth/dashboard";

pub const DASHBOARD_FILTERS: FilterSchema = &["data_inicio", "data_fim", "comissao_paga"];

/// Dashboard of the logged-in vendedor, authenticated with the session token
pub fn dashboard_request(token: &str, query: FilterQuery) -> ApiRequest {
    ApiRequest::get(DASHBOARD_PATH)
        .with_query(query)
        .with_bearer(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::filters::FilterSet;

    #[test]
    fn test_dashboard_request_is_authenticated_and_filtered() {
        let mut filters = FilterSet::new(DASHBOARD_FILTERS);
        let _ = filters.set_field("comissao_paga", "false");

        let request = dashboard_request("tok-1", filters.apply());
        assert_eq!(request.bearer.as_deref(), Some("tok-1"));
        assert_eq!(
            request.path_and_query(),
            "/api/auth/dashboard?comissao_paga=false"
        );
    }
}
