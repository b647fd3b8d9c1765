//! Django CSRF token access.

use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

/// Read the `csrftoken` cookie Django issues for this session. None
/// outside a browser document or when the cookie is absent.
pub fn csrf_token() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let html_document = document.dyn_into::<HtmlDocument>().ok()?;
    let cookies = html_document.cookie().ok()?;
    cookie_value(&cookies, "csrftoken")
}

/// Extract one cookie's value from a raw `document.cookie` string.
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then(|| value.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_value() {
        let cookies = "sessionid=abc123; csrftoken=tok456; theme=dark";
        assert_eq!(cookie_value(cookies, "csrftoken"), Some("tok456".to_string()));
        assert_eq!(cookie_value(cookies, "sessionid"), Some("abc123".to_string()));
        assert_eq!(cookie_value(cookies, "missing"), None);
        assert_eq!(cookie_value("", "csrftoken"), None);
    }
}
