/// Identifier used when an xpath yields nothing usable.
pub const SENTINEL: &str = "unknownField";

/// A field identifier derived from an xpath.
///
/// Always non-empty and lower camel case. Derivation is a pure function of
/// the xpath text: the same input always produces the same name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name {
    ident: String,
}

impl Name {
    /// Derives a field name from an xpath-like string.
    ///
    /// An attribute reference (`@`) outside any predicate wins over the
    /// element path: `/root/person/@name` and `../@name` both yield `name`.
    /// Otherwise the last non-empty path segment is used. Trailing
    /// predicates (`[...]`) are dropped before normalizing.
    pub fn from_xpath(xpath: &str) -> Name {
        let ident = camel_case(last_segment(xpath.trim()));

        if ident.is_empty() {
            Name::sentinel()
        } else {
            Name { ident }
        }
    }

    pub fn sentinel() -> Name {
        Name {
            ident: SENTINEL.to_string(),
        }
    }

    pub fn is_sentinel(&self) -> bool {
        self.ident == SENTINEL
    }

    pub fn as_str(&self) -> &str {
        &self.ident
    }

    /// The name with its first letter upper-cased, as used in accessor
    /// names (`getFirstName`).
    pub fn upper_camel_case(&self) -> String {
        capitalize(&self.ident)
    }
}

impl core::fmt::Display for Name {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(&self.ident)
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.ident
    }
}

impl PartialEq<str> for Name {
    fn eq(&self, other: &str) -> bool {
        self.ident == other
    }
}

impl PartialEq<&str> for Name {
    fn eq(&self, other: &&str) -> bool {
        self.ident == *other
    }
}

fn last_segment(xpath: &str) -> &str {
    if xpath.is_empty() {
        return "";
    }

    if let Some(at) = rfind_top_level(xpath, '@') {
        let attr = strip_predicate(&xpath[at + 1..]);

        return match rfind_top_level(attr, '/') {
            Some(slash) => attr[slash + 1..].trim(),
            None => attr,
        };
    }

    let mut last = "";
    let mut start = 0;
    let mut depth = 0usize;

    for (i, ch) in xpath.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            '/' if depth == 0 => {
                if !xpath[start..i].trim().is_empty() {
                    last = &xpath[start..i];
                }
                start = i + 1;
            }
            _ => {}
        }
    }

    if !xpath[start..].trim().is_empty() {
        last = &xpath[start..];
    }

    strip_predicate(last)
}

/// Byte offset of the last `needle` that is not inside a `[...]` predicate.
fn rfind_top_level(src: &str, needle: char) -> Option<usize> {
    let mut depth = 0usize;
    let mut found = None;

    for (i, ch) in src.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ch if ch == needle && depth == 0 => found = Some(i),
            _ => {}
        }
    }

    found
}

/// Drops the predicates that close the segment. Brackets elsewhere are kept.
fn strip_predicate(segment: &str) -> &str {
    let mut segment = segment.trim();

    while let Some(open) = trailing_predicate(segment) {
        segment = segment[..open].trim_end();
    }

    segment
}

/// Byte offset of the `[` that opens the bracket ending `segment`.
fn trailing_predicate(segment: &str) -> Option<usize> {
    if !segment.ends_with(']') {
        return None;
    }

    let mut depth = 0usize;
    for (i, ch) in segment.char_indices().rev() {
        match ch {
            ']' => depth += 1,
            '[' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }

    None
}

fn camel_case(segment: &str) -> String {
    let normalized = segment.replace(['-', '.'], "_");
    let mut ident = String::with_capacity(normalized.len());

    for (i, token) in normalized
        .split('_')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .enumerate()
    {
        if i == 0 {
            ident.push_str(&token.to_lowercase());
        } else {
            ident.push_str(&capitalize(token));
        }
    }

    ident
}

fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn derive(xpath: &str) -> String {
        Name::from_xpath(xpath).to_string()
    }

    #[test]
    fn element_and_attribute_paths() {
        assert_eq!(derive("/root/person/name"), "name");
        assert_eq!(derive("/root/person/@name"), "name");
        assert_eq!(derive("/root/person/name/"), "name");
    }

    #[test]
    fn empty_and_blank_yield_sentinel() {
        assert_eq!(derive(""), SENTINEL);
        assert_eq!(derive("   "), SENTINEL);
        assert_eq!(derive("/"), SENTINEL);
        assert_eq!(derive("/a/@"), SENTINEL);
        assert_eq!(derive("/a/[1]"), SENTINEL);
    }

    #[test]
    fn predicates_are_stripped() {
        assert_eq!(derive("/a/b[@id='1']"), "b");
        assert_eq!(derive("/a/b[c/d='x']"), "b");
        assert_eq!(derive("/a/item[2]"), "item");
        assert_eq!(derive("/a/@code[1]"), "code");
        assert_eq!(derive("/a/item[2][@x='y']"), "item");
        assert_eq!(derive("/a/b[c[1]]"), "b");
    }

    #[test]
    fn attribute_after_relative_segments() {
        assert_eq!(derive("../../@currency-code"), "currencyCode");
        assert_eq!(derive("/a/b/../@type"), "type");
        assert_eq!(derive("/a/@ns/local_name"), "localName");
        assert_eq!(derive("/r/@b[1]/c"), "c");
        assert_eq!(derive("/r/@b[1]/c[2]"), "c");
    }

    #[test]
    fn separators_become_camel_case() {
        assert_eq!(derive("field-one"), "fieldOne");
        assert_eq!(derive("field_two_three"), "fieldTwoThree");
        assert_eq!(derive("/doc/postal.code"), "postalCode");
        assert_eq!(derive("/doc/__leading_"), "leading");
        assert_eq!(derive("/doc/First_Name"), "firstName");
    }

    #[test]
    fn derivation_is_stable() {
        for xpath in ["", "/x/@y", "/a/b[@id='1']", "weird//path"] {
            assert_eq!(Name::from_xpath(xpath), Name::from_xpath(xpath));
            assert!(!Name::from_xpath(xpath).as_str().is_empty());
        }
    }

    #[test]
    fn upper_camel_case_for_accessors() {
        assert_eq!(Name::from_xpath("/a/first_name").upper_camel_case(), "FirstName");
        assert_eq!(Name::sentinel().upper_camel_case(), "UnknownField");
    }
}
