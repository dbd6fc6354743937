//! Entity escaping of angle brackets

/// Replace `<` with `&lt;` and `>` with `&gt;`. Ampersands are deliberately
/// left alone so that entities already present in the source survive intact.
pub fn escape(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }

    result
}

/// Turn `&lt;` and `&gt;` back into angle brackets. Other entities are left
/// as they are, mirroring what [`escape`] touches.
pub fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
}
