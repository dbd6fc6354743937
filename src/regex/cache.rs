/// Compile a pattern once and hand back a `&'static Regex` on every
/// subsequent call. Patterns are literals in this crate, so a failure to
/// compile is a programming error and panics with the offending pattern.
#[macro_export]
macro_rules! compile {
    ($pattern:expr) => {{
        use std::sync::OnceLock;
        static REGEX: OnceLock<::regex::Regex> = OnceLock::new();
        REGEX.get_or_init(|| {
            ::regex::Regex::new($pattern)
                .unwrap_or_else(|e| panic!("invalid pattern {:?}: {}", $pattern, e))
        })
    }};
}
