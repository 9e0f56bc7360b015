//! Locale-keyed string values.

/// An ordered mapping from locale code to translated value.
///
/// Iteration follows insertion order. Inserting a locale that is already
/// present replaces its value without moving it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalizedField {
    entries: Vec<(String, String)>,
}

impl LocalizedField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, locale: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(locale, value);
        self
    }

    /// Set the value for `locale`, returning the previous value if any.
    pub fn insert(
        &mut self,
        locale: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        let locale = locale.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(l, _)| *l == locale) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((locale, value));
                None
            }
        }
    }

    pub fn get(&self, locale: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(l, _)| l == locale)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(l, v)| (l.as_str(), v.as_str()))
    }

    /// Entries whose value is not the empty string, in insertion order.
    pub fn non_empty(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter().filter(|(_, v)| !v.is_empty())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<L: Into<String>, V: Into<String>> FromIterator<(L, V)> for LocalizedField {
    fn from_iter<I: IntoIterator<Item = (L, V)>>(iter: I) -> Self {
        let mut field = Self::new();
        for (locale, value) in iter {
            field.insert(locale, value);
        }
        field
    }
}

// JSON objects keep their document order here, regardless of how
// serde_json's own map type is configured.
#[cfg(feature = "cli")]
mod serde_impl {
    use std::fmt;

    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::LocalizedField;

    impl Serialize for LocalizedField {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(self.entries.len()))?;
            for (locale, value) in &self.entries {
                map.serialize_entry(locale, value)?;
            }
            map.end()
        }
    }

    struct LocalizedVisitor;

    impl<'de> Visitor<'de> for LocalizedVisitor {
        type Value = LocalizedField;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of locale codes to strings")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
            let mut field = LocalizedField::new();
            while let Some((locale, value)) = access.next_entry::<String, String>()? {
                field.insert(locale, value);
            }
            Ok(field)
        }
    }

    impl<'de> Deserialize<'de> for LocalizedField {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_map(LocalizedVisitor)
        }
    }
}
