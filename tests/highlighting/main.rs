mod verify;

/// Remove every `<span ...>` and `</span>` marker and decode the bracket
/// entities, leaving what a viewer would see.
pub fn strip_markers(text: &str) -> String {
    let pattern = regex::Regex::new(r"</?span[^>]*>").unwrap();
    let bare = pattern.replace_all(text, "");
    tagtint::highlighting::unescape(&bare)
}
