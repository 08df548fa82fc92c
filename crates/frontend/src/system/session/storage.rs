use wasm_bindgen::JsCast;
use web_sys::{window, HtmlDocument};

const ACCESS_TOKEN_COOKIE: &str = "access_token";
const ACCESS_TOKEN_KEY: &str = "auth_access_token";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn get_cookie_header() -> Option<String> {
    let document = window()?.document()?;
    document.dyn_into::<HtmlDocument>().ok()?.cookie().ok()
}

/// Get access token: `access_token` cookie, then localStorage
pub fn get_access_token() -> Option<String> {
    get_cookie_header()
        .and_then(|header| parse_cookie(&header, ACCESS_TOKEN_COOKIE))
        .or_else(|| get_local_storage()?.get_item(ACCESS_TOKEN_KEY).ok()?)
        .filter(|token| !token.is_empty())
}

/// Extract one cookie value from a `document.cookie` string
pub fn parse_cookie(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim_matches('"').to_string())
}
