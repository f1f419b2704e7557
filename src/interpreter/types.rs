use std::fmt::Display;

/// The declared type of a binding, or the runtime type of a value.
///
/// `Auto` disables type checking on assignment; a binding declared with a
/// `Named` tag only accepts values whose runtime tag is exactly equal to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum TypeTag {
    #[default]
    Auto,
    Named(String),
}

impl TypeTag {
    pub fn named<S: Into<String>>(name: S) -> Self {
        match name.into() {
            name if name == "auto" => TypeTag::Auto,
            name => TypeTag::Named(name),
        }
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, TypeTag::Auto)
    }

    /// Whether a value whose runtime type is `actual` may be stored under this tag.
    pub fn accepts(&self, actual: &TypeTag) -> bool {
        match self {
            TypeTag::Auto => true,
            expected => expected == actual,
        }
    }
}

impl From<&str> for TypeTag {
    fn from(name: &str) -> Self {
        TypeTag::named(name)
    }
}

impl Display for TypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TypeTag::Auto => write!(f, "auto"),
            TypeTag::Named(name) => write!(f, "{}", name),
        }
    }
}
