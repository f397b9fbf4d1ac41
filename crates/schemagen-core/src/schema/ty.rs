use indexmap::IndexMap;

/// Type used when a row leaves its data type blank.
pub const DEFAULT_TYPE: &str = "String";

const DEFAULT_SYNONYMS: &[(&str, &str)] = &[
    ("string", "String"),
    ("str", "String"),
    ("integer", "Integer"),
    ("int", "Integer"),
    ("long", "Long"),
    ("double", "Double"),
    ("float", "Float"),
    ("boolean", "Boolean"),
    ("bool", "Boolean"),
    ("date", "LocalDate"),
    ("datetime", "LocalDateTime"),
    ("timestamp", "LocalDateTime"),
    ("decimal", "BigDecimal"),
    ("list", "List<String>"),
    ("array", "List<String>"),
];

/// Maps free-text type tokens to canonical target type names.
#[derive(Debug, Clone)]
pub struct TypeTable {
    /// Lower-cased synonym → canonical name
    synonyms: IndexMap<String, String>,
}

impl Default for TypeTable {
    fn default() -> Self {
        let mut table = TypeTable::empty();
        for (synonym, canonical) in DEFAULT_SYNONYMS {
            table.insert(*synonym, *canonical);
        }
        table
    }
}

impl TypeTable {
    /// A table with no synonyms; every base token passes through.
    pub fn empty() -> Self {
        Self {
            synonyms: IndexMap::new(),
        }
    }

    /// Adds or replaces a synonym. Lookup is case-insensitive.
    pub fn insert(&mut self, synonym: impl AsRef<str>, canonical: impl Into<String>) {
        self.synonyms
            .insert(synonym.as_ref().trim().to_lowercase(), canonical.into());
    }

    pub fn with(mut self, synonym: impl AsRef<str>, canonical: impl Into<String>) -> Self {
        self.insert(synonym, canonical);
        self
    }

    pub fn get(&self, base: &str) -> Option<&str> {
        self.synonyms
            .get(&base.trim().to_lowercase())
            .map(String::as_str)
    }

    /// Resolves a type token such as `integer` or `String [0,17]`.
    ///
    /// Never fails: an unknown base is kept verbatim, a blank one becomes
    /// [`DEFAULT_TYPE`]. A bracketed constraint is carried through as-is.
    pub fn resolve(&self, token: &str) -> ResolvedType {
        let (base, constraint) = split_constraint(token);

        let name = if base.is_empty() {
            DEFAULT_TYPE.to_string()
        } else {
            self.get(base).unwrap_or(base).to_string()
        };

        ResolvedType { name, constraint }
    }
}

/// A target type name plus an optional documentation-only constraint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedType {
    name: String,
    constraint: Option<String>,
}

impl ResolvedType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constraint: None,
        }
    }

    pub fn with_constraint(mut self, constraint: impl Into<String>) -> Self {
        self.constraint = Some(constraint.into());
        self
    }

    /// The type name without any constraint, suitable for a declaration.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Text between the brackets of the source token, if any.
    pub fn constraint(&self) -> Option<&str> {
        self.constraint.as_deref()
    }

    pub fn is_string(&self) -> bool {
        self.name == DEFAULT_TYPE
    }

    /// Fully qualified Java import the type name needs, if any.
    pub fn java_import(&self) -> Option<&'static str> {
        match self.name.as_str() {
            "LocalDate" => Some("java.time.LocalDate"),
            "LocalDateTime" => Some("java.time.LocalDateTime"),
            "BigDecimal" => Some("java.math.BigDecimal"),
            name if name == "List" || name.starts_with("List<") => Some("java.util.List"),
            _ => None,
        }
    }
}

impl core::fmt::Display for ResolvedType {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match &self.constraint {
            Some(constraint) => write!(f, "{} [{}]", self.name, constraint),
            None => f.write_str(&self.name),
        }
    }
}

fn split_constraint(token: &str) -> (&str, Option<String>) {
    let token = token.trim();

    if let (Some(open), true) = (token.find('['), token.ends_with(']')) {
        let constraint = token[open + 1..token.len() - 1].trim();
        let base = token[..open].trim();

        if constraint.is_empty() {
            return (base, None);
        }

        return (base, Some(constraint.to_string()));
    }

    (token, None)
}
