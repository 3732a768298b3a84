use super::*;

#[test]
fn bearer_header_formats_token() {
    assert_eq!(bearer_header("abc.def"), "Bearer abc.def");
}

#[test]
fn body_to_value_parses_json() {
    let value = body_to_value(r#"{"message":"ok"}"#.to_owned());
    assert_eq!(value["message"], "ok");
}

#[test]
fn body_to_value_keeps_plain_text() {
    let value = body_to_value("Created".to_owned());
    assert_eq!(value, serde_json::Value::String("Created".to_owned()));
}

#[test]
fn http_api_resolves_urls_from_config() {
    let api = HttpAuthApi::new(&SessionConfig::default());
    assert_eq!(api.me_url, "/api/auth/me");
    assert_eq!(api.login_url, "https://softinvite-api.onrender.com/admin/login");
    assert_eq!(api.register_url, "https://softinvite-api.onrender.com/admin/register");
}

#[test]
fn api_error_messages() {
    assert_eq!(ApiError::Status { status: 401 }.to_string(), "server rejected request: 401");
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_without_browser() {
    let api = HttpAuthApi::new(&SessionConfig::default());
    let result = futures::executor::block_on(api.fetch_current_user("T"));
    assert_eq!(result, Err(ApiError::Unavailable));
}
