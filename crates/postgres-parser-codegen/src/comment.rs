//! C comment to documentation text conversion.

/// Convert a C comment from the schema into documentation text.
///
/// Comment markers (`//`, `/*`, `*/`) and the decorative `*` that aligns
/// block comment bodies are removed. Continuation lines are indented by
/// `4 * indent_level` spaces so the text can sit inside generated code at that
/// nesting depth, and multi-line text ends with a newline.
///
/// Text ending in `"` gets a trailing period, so it never runs into the
/// closing quotes of a docstring.
///
/// # Examples
///
/// ```
/// use postgres_parser_codegen::comment::to_doc_text;
///
/// assert_eq!(to_doc_text(Some("/* the target list */"), 0), "the target list");
/// assert_eq!(to_doc_text(Some("/** foo\n * bar */"), 1), "foo\n    bar\n");
/// assert_eq!(to_doc_text(None, 2), "");
/// ```
pub fn to_doc_text(comment: Option<&str>, indent_level: usize) -> String {
    let Some(comment) = comment.filter(|c| !c.is_empty()) else {
        return String::new();
    };

    let mut body = comment.trim();
    body = body
        .strip_prefix("//")
        .or_else(|| body.strip_prefix("/*"))
        .unwrap_or(body);
    body = body.strip_suffix("*/").unwrap_or(body).trim();

    let lines: Vec<&str> = body.lines().map(strip_line_decoration).collect();

    let mut text = match lines.as_slice() {
        [] => String::new(),
        [only] => (*only).to_string(),
        [first, rest @ ..] => {
            let indent = " ".repeat(4 * indent_level);
            let mut text = format!("{first}\n");
            for line in rest {
                if !line.is_empty() {
                    text.push_str(&indent);
                    text.push_str(line);
                }
                text.push('\n');
            }
            text
        }
    };

    if text.ends_with('"') {
        text.push('.');
    }
    text
}

/// Strip surrounding whitespace and one leading `*` from a comment line.
fn strip_line_decoration(line: &str) -> &str {
    let line = line.trim_start();
    line.strip_prefix('*').unwrap_or(line).trim()
}
