#[cfg(test)]
mod verify {
    use tagtint::highlighting::*;
    use tagtint::rendering::{Html, Identity, Syntax};

    fn span(syntax: Syntax, content: &str) -> String {
        format!(r#"<span class="{}">{}</span>"#, syntax.class(), content)
    }

    #[test]
    fn escaping_brackets() {
        let result = escape("<a>");
        assert_eq!(result, "&lt;a&gt;");
        assert!(!result.contains('<') && !result.contains('>'));
    }

    #[test]
    fn normalizing_indentation() {
        let input = "  \n    <p>one</p>\n      <p>two</p>\n   \t\n";
        assert_eq!(dedent(input), "<p>one</p>\n  <p>two</p>");
    }

    #[test]
    fn normalizing_nothing() {
        assert_eq!(dedent("\n   \n\t\n"), "");
    }

    #[test]
    fn colouring_comments() {
        let result = colour_comments(&Html, "&lt;!-- hi --&gt;");
        assert_eq!(result, span(Syntax::Comment, "&lt;!-- hi --&gt;"));
    }

    #[test]
    fn colouring_tag_and_attributes() {
        let result = highlight(r#"<div id="x" data-y='z'>"#);

        let expected = [
            span(Syntax::Tag, "&lt;"),
            span(Syntax::TagName, "div"),
            " ".to_string(),
            span(Syntax::AttributeName, "id"),
            span(Syntax::EqualSign, "="),
            span(Syntax::AttributeValue, r#""x""#),
            " ".to_string(),
            span(Syntax::AttributeName, "data-y"),
            span(Syntax::EqualSign, "="),
            span(Syntax::AttributeValue, "'z'"),
            span(Syntax::Tag, "&gt;"),
        ]
        .concat();

        assert_eq!(result, expected);
    }

    #[test]
    fn colouring_text() {
        let result = colour_text(&Html, "&gt;Hello&lt;");
        assert_eq!(result, format!("&gt;{}&lt;", span(Syntax::Text, "Hello")));

        assert_eq!(colour_text(&Html, "&gt;   &lt;"), "&gt;   &lt;");
    }

    #[test]
    fn self_closing_tag() {
        let result = highlight(r#"<img src="a.png"/>"#);

        let slash = span(Syntax::Tag, "/");
        let bracket = span(Syntax::Tag, "&gt;");
        assert!(result.ends_with(&format!("{}{}", slash, bracket)));

        let value = span(Syntax::AttributeValue, r#""a.png""#);
        let value_at = result
            .find(&value)
            .expect("attribute value not coloured");
        let slash_at = result
            .find(&slash)
            .expect("self-closing slash not coloured");
        assert!(value_at < slash_at);
    }

    #[test]
    fn repeated_text_before_comment_left_alone() {
        let input = escape("<p>x<!-- <p>x</p>");
        assert_eq!(colour_text(&Html, &input), input);
    }

    #[test]
    fn boolean_attribute_passes_through() {
        let result = highlight("<input disabled>");
        assert!(result.contains(&format!(
            "{} disabled{}",
            span(Syntax::TagName, "input"),
            span(Syntax::Tag, "&gt;")
        )));
    }

    #[test]
    fn text_before_comment_not_coloured() {
        let result = highlight("<p>Before<!-- note --></p>");
        assert!(!result.contains(&span(Syntax::Text, "Before")));
        assert!(result.contains(r#"<span class="highlight-comment">&lt;!-- note --&gt;"#));
    }

    #[test]
    fn tags_inside_comments_still_coloured() {
        let result = highlight("<!-- <b>bold</b> -->");
        assert!(result.starts_with(r#"<span class="highlight-comment">&lt;!-- "#));
        assert!(result.contains(&span(Syntax::TagName, "b")));
    }

    #[test]
    fn ampersand_kept_as_written() {
        let result = highlight("<p>Fish &amp; chips</p>");
        assert!(result.contains("Fish &amp; chips"));
        assert!(!result.contains("&amp;amp;"));
    }

    #[test]
    fn malformed_markup_does_not_fail() {
        for input in ["<p", "<!-- open", "<a href=\"x>", "<<>>", "</>", "<a>&"] {
            let result = highlight(input);
            assert_eq!(crate::strip_markers(&result), input);
        }
    }

    #[test]
    fn identity_renderer_adds_nothing() {
        let result = highlight_with(&Identity, "<p class=\"x\">hi</p>");
        assert_eq!(result, "&lt;p class=\"x\"&gt;hi&lt;/p&gt;");
    }

    #[test]
    fn reentrant_across_threads() {
        let inputs = [
            "<ul><li>one</li></ul>",
            "<img src='a.png'/>",
            "<!-- c --><p>x</p>",
            "<a href=\"/\">home</a>",
        ];
        let expected: Vec<String> = inputs
            .iter()
            .map(|input| highlight(input))
            .collect();

        std::thread::scope(|scope| {
            let handles: Vec<_> = inputs
                .iter()
                .map(|input| scope.spawn(move || highlight(input)))
                .collect();

            for (handle, expected) in handles
                .into_iter()
                .zip(&expected)
            {
                assert_eq!(&handle.join().unwrap(), expected);
            }
        });
    }
}
