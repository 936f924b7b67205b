// Page handlers — the home/login page and the dashboard.
//
// Server-rendered HTML strings; no templating layer. User-supplied values
// are escaped before interpolation.

use std::fmt::Write as _;
use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Html;
use axum::Extension;

use portal_auth::{Session, SessionUser};

use crate::context::AppContext;

/// Minimal HTML escaping for interpolated user values.
fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// GET / — the home/login page. Doubles as the sign-in page, the error
/// page, and the sign-out landing page.
pub async fn home(State(ctx): State<Arc<AppContext>>, headers: HeaderMap) -> Html<String> {
    let session = ctx.session_from_headers(&headers).await;
    Html(render_home(session.as_ref(), &ctx))
}

/// GET /dashboard — protected; the guard attaches the resolved session.
pub async fn dashboard(Extension(session): Extension<Session>) -> Html<String> {
    Html(render_dashboard(&session.user))
}

fn render_home(session: Option<&Session>, ctx: &AppContext) -> String {
    let mut body = String::new();

    match session {
        Some(session) => {
            let _ = write!(
                body,
                r#"<p class="welcome">Signed in as <strong>{}</strong></p>
        <a class="button" href="/dashboard">Go to dashboard</a>
        <form method="post" action="/signout">
            <button type="submit" class="link">Sign out</button>
        </form>"#,
                escape_html(session.user.display_name()),
            );
        }
        None => {
            for provider in ctx.registry.iter() {
                let config = provider.config();
                let _ = write!(
                    body,
                    r#"<form method="post" action="/signin/{}">
            <button type="submit" class="button">Continue with {}</button>
        </form>
        "#,
                    config.id, config.name,
                );
            }
        }
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Portal</title>
    <style>
        * {{ margin: 0; padding: 0; box-sizing: border-box; }}
        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            display: flex;
            align-items: center;
            justify-content: center;
            min-height: 100vh;
            background: #f8f9fa;
            color: #333;
        }}
        .container {{
            text-align: center;
            max-width: 360px;
            padding: 2rem;
        }}
        h1 {{
            font-size: 1.5rem;
            margin-bottom: 1.5rem;
        }}
        form {{ margin-bottom: 0.75rem; }}
        .button {{
            display: inline-block;
            width: 100%;
            padding: 0.6rem 1rem;
            border: 1px solid #dee2e6;
            border-radius: 6px;
            background: #fff;
            font-size: 0.9375rem;
            cursor: pointer;
            text-decoration: none;
            color: #333;
        }}
        .button:hover {{ background: #f1f3f5; }}
        .link {{
            border: none;
            background: none;
            color: #007bff;
            cursor: pointer;
            font-size: 0.875rem;
            margin-top: 1rem;
        }}
        .welcome {{ margin-bottom: 1rem; color: #666; }}
    </style>
</head>
<body>
    <div class="container">
        <h1>Welcome to Portal</h1>
        {body}
    </div>
</body>
</html>"#,
    )
}

fn render_dashboard(user: &SessionUser) -> String {
    let avatar = match user.image.as_deref() {
        Some(image) => format!(
            r#"<img class="avatar" src="{}" alt="avatar">"#,
            escape_html(image)
        ),
        None => r#"<div class="avatar placeholder"></div>"#.to_string(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Dashboard — Portal</title>
    <style>
        * {{ margin: 0; padding: 0; box-sizing: border-box; }}
        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            display: flex;
            align-items: center;
            justify-content: center;
            min-height: 100vh;
            background: #f8f9fa;
            color: #333;
        }}
        .card {{
            text-align: center;
            background: #fff;
            border: 1px solid #dee2e6;
            border-radius: 8px;
            padding: 2rem 3rem;
        }}
        .avatar {{
            width: 64px;
            height: 64px;
            border-radius: 50%;
            margin-bottom: 1rem;
        }}
        .placeholder {{ background: #dee2e6; display: inline-block; }}
        h1 {{ font-size: 1.25rem; margin-bottom: 0.25rem; }}
        .email {{ color: #666; font-size: 0.875rem; margin-bottom: 1.5rem; }}
        .link {{
            border: none;
            background: none;
            color: #007bff;
            cursor: pointer;
            font-size: 0.875rem;
        }}
    </style>
</head>
<body>
    <div class="card">
        {avatar}
        <h1>{name}</h1>
        <p class="email">{email}</p>
        <form method="post" action="/signout">
            <button type="submit" class="link">Sign out</button>
        </form>
    </div>
</body>
</html>"#,
        avatar = avatar,
        name = escape_html(user.display_name()),
        email = escape_html(user.display_email()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"<b>"x"&</b>"#), "&lt;b&gt;&quot;x&quot;&amp;&lt;/b&gt;");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_dashboard_renders_user_fields() {
        let html = render_dashboard(&SessionUser {
            name: Some("Ada".into()),
            email: Some("ada@example.com".into()),
            image: Some("https://img.example/a.png".into()),
        });
        assert!(html.contains("<h1>Ada</h1>"));
        assert!(html.contains("ada@example.com"));
        assert!(html.contains(r#"src="https://img.example/a.png""#));
    }

    #[test]
    fn test_dashboard_fallbacks() {
        let html = render_dashboard(&SessionUser::default());
        assert!(html.contains("Signed-in user"));
        assert!(html.contains("placeholder"));
    }

    #[test]
    fn test_dashboard_escapes_user_values() {
        let html = render_dashboard(&SessionUser {
            name: Some("<script>alert(1)</script>".into()),
            email: None,
            image: None,
        });
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
