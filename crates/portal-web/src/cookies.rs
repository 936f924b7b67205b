// Session cookie handling.
//
// The session token travels in `{prefix}.session_token` (or the
// `__Secure-` variant when set by an HTTPS deployment), with a Bearer
// Authorization header accepted as an alternative.

use axum::http::HeaderMap;

/// The session cookie name for a given prefix.
pub fn session_cookie_name(prefix: &str) -> String {
    format!("{prefix}.session_token")
}

/// Build the Set-Cookie value that establishes a session.
pub fn set_session_cookie(prefix: &str, token: &str, max_age: u64) -> String {
    format!(
        "{}={}; Max-Age={}; Path=/; HttpOnly; SameSite=Lax",
        session_cookie_name(prefix),
        token,
        max_age,
    )
}

/// Build the Set-Cookie value that clears the session cookie.
pub fn clear_session_cookie(prefix: &str) -> String {
    format!(
        "{}=; Max-Age=0; Path=/; HttpOnly; SameSite=Lax",
        session_cookie_name(prefix),
    )
}

/// Extract the session token from request headers.
///
/// Tries `Authorization: Bearer <token>` first, then the session cookie
/// (with or without the `__Secure-` prefix).
pub fn extract_session_token(headers: &HeaderMap, prefix: &str) -> Option<String> {
    if let Some(auth) = headers.get("authorization") {
        if let Ok(val) = auth.to_str() {
            if let Some(token) = val.strip_prefix("Bearer ") {
                return Some(token.to_string());
            }
        }
    }

    if let Some(cookie_header) = headers.get("cookie") {
        if let Ok(cookies) = cookie_header.to_str() {
            let cookie_name = session_cookie_name(prefix);
            let secure_cookie_name = format!("__Secure-{cookie_name}");

            for cookie in cookies.split(';') {
                let cookie = cookie.trim();
                if let Some((name, value)) = cookie.split_once('=') {
                    let name = name.trim();
                    if name == secure_cookie_name || name == cookie_name {
                        return Some(value.to_string());
                    }
                }
            }
        }
    }

    None
}
