use axum::extract::State;
use axum::response::Html;

use crate::state::AppState;

/// Interactive API documentation page, exposed only when DEBUG is set
#[tracing::instrument(skip(state))]
pub async fn api_docs(State(state): State<AppState>) -> Html<String> {
    let html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{app_name} API</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            max-width: 720px;
            margin: 40px auto;
            padding: 0 20px;
            color: #2d3748;
        }}
        h1 {{ margin-bottom: 4px; }}
        .subtitle {{ color: #718096; margin-bottom: 24px; }}
        ul {{ list-style: none; padding: 0; }}
        li {{
            background: #f7fafc;
            padding: 12px 16px;
            margin-bottom: 8px;
            border-radius: 8px;
            border-left: 4px solid #667eea;
        }}
        code {{ color: #667eea; font-family: 'Courier New', monospace; }}
        .desc {{ color: #718096; font-size: 13px; margin-top: 4px; }}
    </style>
</head>
<body>
    <h1>{app_name} API</h1>
    <p class="subtitle">Version {version} &mdash; {environment}</p>
    <ul>
        <li>
            <code>GET /health</code>
            <div class="desc">Liveness probe</div>
        </li>
        <li>
            <code>GET /</code>
            <div class="desc">Welcome payload</div>
        </li>
        <li>
            <code>GET /docs</code>
            <div class="desc">This page (debug builds only)</div>
        </li>
    </ul>
</body>
</html>"#,
        app_name = state.config.app_name,
        version = env!("CARGO_PKG_VERSION"),
        environment = state.config.environment,
    );

    Html(html)
}
