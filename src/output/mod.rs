//! Presentation of colourized HTML: the `pre`/`code` wrapper and standalone
//! pages.

use serde::Serialize;
use tinytemplate::TinyTemplate;
use tracing::debug;

use crate::rendering::STYLESHEET;

static TEMPLATE: &'static str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title | escape}</title>
<style>
{stylesheet}</style>
</head>
<body>
{content}
</body>
</html>
"#;

#[derive(Serialize)]
struct Context<'a> {
    title: &'a str,
    stylesheet: &'a str,
    content: String,
}

/// Wrap colourized content in a whitespace-preserving, monospace block.
/// Call this once, after colouring; the colouring passes expect the source
/// as written, not source that already carries this wrapper.
pub fn wrap(content: &str) -> String {
    format!("<pre><code>{}</code></pre>", content)
}

/// Produce a complete HTML document showing the colourized content, with
/// the default stylesheet inlined.
pub fn page(title: &str, content: &str) -> Result<String, tinytemplate::error::Error> {
    let mut tt = TinyTemplate::new();
    tt.set_default_formatter(&tinytemplate::format_unescaped);
    tt.add_formatter("escape", tinytemplate::format);
    tt.add_template("page", TEMPLATE)?;

    let context = Context {
        title,
        stylesheet: STYLESHEET,
        content: wrap(content),
    };

    let rendered = tt.render("page", &context)?;
    debug!("Rendered page of {} bytes", rendered.len());

    Ok(rendered)
}
