use {
    core::hash::BuildHasherDefault,
    lasso::{Spur, ThreadedRodeo},
    once_cell::sync::Lazy,
    twox_hash::XxHash64,
};

type Interner = ThreadedRodeo<Spur, BuildHasherDefault<XxHash64>>;

static INTERNER: Lazy<Interner> = Lazy::new(|| Interner::with_hasher(Default::default()));

/// Key for an interned string
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Hash, Ord)]
pub struct InternedString(Spur);

impl InternedString {
    /// Create a new interned string
    pub fn new<A: AsRef<str>>(str: A) -> Self {
        Self(INTERNER.get_or_intern(str.as_ref()))
    }

    /// Create a new interned string from a static str
    pub fn from_static(key: &'static str) -> Self {
        Self(INTERNER.get_or_intern_static(key))
    }

    /// Whether this is the empty string
    pub fn is_empty(&self) -> bool {
        self.as_ref().is_empty()
    }
}

impl Default for InternedString {
    fn default() -> Self {
        Self::from_static("")
    }
}

impl AsRef<str> for InternedString {
    fn as_ref(&self) -> &str {
        INTERNER.resolve(&self.0)
    }
}

impl From<String> for InternedString {
    fn from(string: String) -> Self {
        Self::new(string)
    }
}

impl From<&'_ str> for InternedString {
    fn from(string: &str) -> Self {
        Self::new(string)
    }
}

impl PartialEq<str> for InternedString {
    fn eq(&self, other: &str) -> bool {
        self.as_ref() == other
    }
}

impl PartialEq<&'_ str> for InternedString {
    fn eq(&self, other: &&str) -> bool {
        self.as_ref() == *other
    }
}

impl core::fmt::Debug for InternedString {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(INTERNER.resolve(&self.0), f)
    }
}

impl core::fmt::Display for InternedString {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(INTERNER.resolve(&self.0), f)
    }
}

impl<'de> serde::Deserialize<'de> for InternedString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self::new)
    }
}

impl serde::Serialize for InternedString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.as_ref().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::InternedString;

    #[test]
    fn same_string_same_key() {
        assert_eq!(InternedString::new("abc"), InternedString::from("abc"));
        assert_eq!(InternedString::new("abc"), InternedString::from_static("abc"));
    }

    #[test]
    fn resolves() {
        let s = InternedString::new(String::from("function_1"));
        assert_eq!(s.as_ref(), "function_1");
        assert_eq!(s.to_string(), "function_1");
        assert_eq!(format!("{s:?}"), "\"function_1\"");
    }

    #[test]
    fn default_is_empty() {
        assert!(InternedString::default().is_empty());
        assert!(!InternedString::new("x").is_empty());
    }

    #[test]
    fn serde_as_string() {
        let s = InternedString::new("value");
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, "\"value\"");
        assert_eq!(serde_json::from_str::<InternedString>(&json).unwrap(), s);
    }
}
