//! Server-rendered HTML pages.

use crate::languages::LanguageOption;
use crate::models::MAX_TEXT_CHARS;

/// Escape text for use inside HTML element content and quoted attributes.
fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn render_options(languages: &[LanguageOption], selected: &str) -> String {
    languages
        .iter()
        .map(|lang| {
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                escape_html(lang.code),
                if lang.code == selected { " selected" } else { "" },
                escape_html(lang.name)
            )
        })
        .collect::<Vec<_>>()
        .join("\n          ")
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
  <link rel="stylesheet" href="/static/styles.css">
</head>
<body>
{body}
</body>
</html>
"#,
        title = escape_html(title),
        body = body
    )
}

/// Translation form with the language pickers preselected.
pub fn render_index(
    app_name: &str,
    languages: &[LanguageOption],
    default_source: &str,
    default_target: &str,
) -> String {
    let body = format!(
        r#"  <main class="container">
    <h1>{app_name}</h1>
    <form id="translate-form">
      <div class="languages">
        <label>From
          <select id="source_language" name="source_language">
          {source_options}
          </select>
        </label>
        <button type="button" id="swap" aria-label="Swap languages">&#8646;</button>
        <label>To
          <select id="target_language" name="target_language">
          {target_options}
          </select>
        </label>
      </div>
      <textarea id="text" name="text" maxlength="{max_chars}" rows="6" required placeholder="Enter text to translate"></textarea>
      <button type="submit">Translate</button>
    </form>
    <section id="result" hidden>
      <p id="translated_text"></p>
      <p class="meta">Provider: <span id="provider"></span></p>
    </section>
    <p id="error" class="error" hidden></p>
  </main>
  <script src="/static/app.js"></script>"#,
        app_name = escape_html(app_name),
        max_chars = MAX_TEXT_CHARS,
        source_options = render_options(languages, default_source),
        target_options = render_options(languages, default_target),
    );

    layout(app_name, &body)
}

/// Human-readable health page.
pub fn render_health(app_name: &str, status: &str, environment: &str) -> String {
    let body = format!(
        r#"  <main class="container">
    <h1>{app_name}</h1>
    <dl class="health">
      <dt>Status</dt><dd>{status}</dd>
      <dt>Environment</dt><dd>{environment}</dd>
    </dl>
    <p><a href="/">Back to translator</a></p>
  </main>"#,
        app_name = escape_html(app_name),
        status = escape_html(status),
        environment = escape_html(environment),
    );

    layout(&format!("{} - Health", app_name), &body)
}
