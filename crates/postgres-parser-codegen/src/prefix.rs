//! Shared namespace prefixes across sibling identifiers.
//!
//! Enum values in the grammar headers carry a namespace prefix
//! (`AEXPR_OP`, `AEXPR_OP_ANY`, ...). Generated enums live in their own
//! namespace already, so the prefix is stripped from every member.

/// Longest common leading substring of `identifiers`, kept only when it ends
/// in an underscore.
///
/// `None` entries stand for members with no name and are skipped. A shared
/// fragment that stops mid-word (`AB` of `ABC`/`ABD`) is not a namespace and
/// yields an empty prefix.
///
/// # Examples
///
/// ```
/// use postgres_parser_codegen::prefix::common_prefix;
///
/// assert_eq!(common_prefix(["FOO_BAR_A", "FOO_BAR_B"]), "FOO_BAR_");
/// assert_eq!(common_prefix(["ABC", "ABD"]), "");
/// assert_eq!(common_prefix([Some("SET_OP"), None, Some("SET_ALL")]), "SET_");
/// ```
pub fn common_prefix<'a, I, S>(identifiers: I) -> String
where
    I: IntoIterator<Item = S>,
    S: Into<Option<&'a str>>,
{
    let mut names = identifiers
        .into_iter()
        .filter_map(|name| Into::<Option<&'a str>>::into(name));

    let Some(first) = names.next() else {
        return String::new();
    };

    let mut prefix_len = first.len();
    for name in names {
        prefix_len = first
            .char_indices()
            .zip(name.chars())
            .take_while(|((_, a), b)| a == b)
            .last()
            .map_or(0, |((idx, c), _)| idx + c.len_utf8())
            .min(prefix_len);
    }

    let prefix = &first[..prefix_len];
    if prefix.ends_with('_') {
        prefix.to_string()
    } else {
        String::new()
    }
}

/// Remove `prefix` from the front of `raw` when it is there.
///
/// An identifier that is nothing but the prefix is returned whole, so the
/// result is never empty for a non-empty `raw`.
///
/// # Examples
///
/// ```
/// use postgres_parser_codegen::prefix::strip_prefix;
///
/// assert_eq!(strip_prefix("FOO_BAR_A", "FOO_BAR_"), "A");
/// assert_eq!(strip_prefix("OTHER", "FOO_BAR_"), "OTHER");
/// assert_eq!(strip_prefix("FOO_BAR_", "FOO_BAR_"), "FOO_BAR_");
/// ```
pub fn strip_prefix<'a>(raw: &'a str, prefix: &str) -> &'a str {
    match raw.strip_prefix(prefix) {
        Some(rest) if !rest.is_empty() => rest,
        _ => raw,
    }
}
