use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static QUOTE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""{3,}"#).expect("quote run pattern is valid"));

/// Best-effort repair of stray quoting from broken spreadsheet exports.
///
/// Runs of three or more `"` collapse to one, then every remaining `""`
/// pair is removed. This also eats legitimately escaped quotes inside a
/// quoted value (`"say ""hi"""` becomes `"say hi"`), so the output is not a
/// faithful round-trip of well-formed CSV.
pub fn normalize_quotes(text: &str) -> Cow<'_, str> {
    let collapsed = QUOTE_RUN.replace_all(text, "\"");

    if !collapsed.contains("\"\"") {
        return collapsed;
    }

    Cow::Owned(collapsed.replace("\"\"", ""))
}
