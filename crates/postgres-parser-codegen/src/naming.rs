//! Identifier normalization for generated code.
//!
//! Upstream grammar identifiers arrive in whatever convention the C sources
//! used: `SelectStmt`, `SQLValueFunctionOp`, `AEXPR_OP`. Generated code wants
//! one convention, lowercase words separated by underscores.
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `SQLValueFunction` | [`normalize`] | `sql_value_function` |
//! | `AEXPR_OP` | [`normalize`] | `aexpr_op` |
//! | `Int4Range` | [`normalize`] | `int4_range` |
//! | `setOp` | [`to_upper_snake`] | `SET_OP` |

use once_cell::sync::Lazy;
use regex::Regex;

/// Letter runs that the splitter cannot recognize as a single acronym once
/// they have already been separated (`S_Q_L_FOO` in the schema).
///
/// Add an entry here when a generated identifier comes out mis-split.
const ACRONYM_FIXUPS: &[(&str, &str)] = &[(r"(?i)s_q_l_", "sql_"), (r"(?i)c_t_e_", "cte_")];

static UNDERSCORE_RUNS: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::expect_used)] // Safe: constant pattern
    Regex::new(r"_{2,}").expect("valid underscore pattern")
});

static FIXUPS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    ACRONYM_FIXUPS
        .iter()
        .map(|(pattern, replacement)| {
            #[allow(clippy::expect_used)] // Safe: patterns are constants above
            let regex = Regex::new(pattern).expect("valid acronym fixup pattern");
            (regex, *replacement)
        })
        .collect()
});

/// Normalize a raw schema identifier into lowercase words separated by
/// underscores.
///
/// Identifiers with no lowercase letters are treated as already separated and
/// are only lowercased. Everything else is split on case transitions first.
/// The result is stable: normalizing it again returns it unchanged.
///
/// # Examples
///
/// ```
/// use postgres_parser_codegen::naming::normalize;
///
/// assert_eq!(normalize("SQLFunctionName"), "sql_function_name");
/// assert_eq!(normalize("MAX_VALUE"), "max_value");
/// assert_eq!(normalize("selectStmt"), "select_stmt");
/// ```
pub fn normalize(raw: &str) -> String {
    let converted = if raw.chars().any(char::is_lowercase) {
        split_case_transitions(raw)
    } else {
        raw.to_lowercase()
    };

    let mut converted = UNDERSCORE_RUNS.replace_all(&converted, "_").into_owned();
    for (pattern, replacement) in FIXUPS.iter() {
        converted = pattern.replace_all(&converted, *replacement).into_owned();
    }
    converted
}

/// Normalize and uppercase, for constant-style identifiers.
///
/// # Examples
///
/// ```
/// use postgres_parser_codegen::naming::to_upper_snake;
///
/// assert_eq!(to_upper_snake("setOp"), "SET_OP");
/// assert_eq!(to_upper_snake("AEXPR_OP"), "AEXPR_OP");
/// ```
pub fn to_upper_snake(raw: &str) -> String {
    normalize(raw).to_uppercase()
}

/// Insert an underscore wherever a new word starts and lowercase everything.
///
/// A word starts at an uppercase letter that follows a lowercase letter or a
/// digit, or at the last capital of an acronym run when a lowercase letter
/// follows it (`SQLFunction` -> `sql_function`).
fn split_case_transitions(raw: &str) -> String {
    let chars: Vec<char> = raw.chars().collect();
    let mut out = String::with_capacity(raw.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && c.is_uppercase() {
            let prev = chars[i - 1];
            let next = chars.get(i + 1).copied();
            let starts_word = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next.is_some_and(char::is_lowercase));
            if starts_word {
                out.push('_');
            }
        }
        out.extend(c.to_lowercase());
    }

    out
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use test_case::test_case;

    #[test_case("SelectStmt", "select_stmt" ; "pascal_case")]
    #[test_case("selectStmt", "select_stmt" ; "camel_case")]
    #[test_case("SQLFunctionName", "sql_function_name" ; "sqlfunctionname")]
    #[test_case("SQLValueFunctionOp", "sql_value_function_op" ; "sqlvaluefunctionop")]
    #[test_case("CTESearchClause", "cte_search_clause" ; "ctesearchclause")]
    #[test_case("Int4Range", "int4_range" ; "int4range")]
    #[test_case("A_Expr", "a_expr" ; "a_expr")]
    #[test_case("already_normal", "already_normal" ; "already_normal")]
    fn normalize___mixed_case___splits_on_transitions(raw: &str, expected: &str) {
        assert_eq!(normalize(raw), expected);
    }

    #[test_case("MAX_VALUE", "max_value" ; "max_value")]
    #[test_case("AEXPR_OP", "aexpr_op" ; "aexpr_op")]
    #[test_case("SQL", "sql" ; "sql")]
    #[test_case("INT4OID", "int4oid" ; "int4oid")]
    fn normalize___all_uppercase___lowercases_without_resplitting(raw: &str, expected: &str) {
        assert_eq!(normalize(raw), expected);
    }

    #[test]
    fn normalize___consecutive_underscores___collapsed() {
        assert_eq!(normalize("FOO__BAR"), "foo_bar");
        assert_eq!(normalize("foo___Bar"), "foo_bar");
    }

    #[test]
    fn normalize___split_acronyms___rejoined() {
        assert_eq!(normalize("S_Q_L_VALUE"), "sql_value");
        assert_eq!(normalize("C_T_E_Materialize"), "cte_materialize");
    }

    #[test]
    fn normalize___empty___returns_empty() {
        assert_eq!(normalize(""), "");
    }

    #[test_case("SQLFunctionName" ; "acronym_prefix")]
    #[test_case("MAX_VALUE" ; "upper_snake")]
    #[test_case("S_Q_L_VALUE" ; "s_q_l_value")]
    #[test_case("xmlSerialize2Text" ; "xmlserialize2text")]
    fn normalize___applied_twice___is_stable(raw: &str) {
        let once = normalize(raw);

        assert_eq!(normalize(&once), once);
    }

    #[test_case("SQLFunctionName" ; "acronym_prefix")]
    #[test_case("MAX_VALUE" ; "upper_snake")]
    #[test_case("setOp" ; "camel_case")]
    fn to_upper_snake___matches_uppercased_normalize(raw: &str) {
        assert_eq!(to_upper_snake(raw), normalize(raw).to_uppercase());
    }
}
