//! Value builders for attributes that are assembled from several parts.
//!
//! `class` is a [`DelimitedBuilder`] joined with spaces, `style` is a [`KVBuilder`]
//! rendered as `key:value;` pairs.

use std::fmt::{self, Display};

use crate::sortmap::{AttributeName, SortMap};

/// An ordered list of tokens joined with a delimiter when rendered.
///
/// Tokens are kept in the order they were added. Duplicates are kept too, the same way
/// the browser would see `class="a a"`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct DelimitedBuilder {
    delimiter: &'static str,
    values: Vec<String>,
}

impl Default for DelimitedBuilder {
    fn default() -> Self {
        Self::new(" ")
    }
}

impl DelimitedBuilder {
    pub fn new(delimiter: &'static str) -> Self {
        Self {
            delimiter,
            values: Vec::new(),
        }
    }

    pub fn delimiter(&self) -> &'static str {
        self.delimiter
    }

    /// Append tokens at the end of the list. Empty tokens are skipped.
    pub fn add<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.values.extend(
            values
                .into_iter()
                .map(Into::into)
                .filter(|value: &String| !value.is_empty()),
        );
        self
    }

    /// Remove every occurrence of each of the given tokens.
    pub fn remove<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for value in values {
            let value = value.as_ref();
            self.values.retain(|existing| existing != value);
        }
        self
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|existing| existing == value)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }
}

impl Display for DelimitedBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, value) in self.values.iter().enumerate() {
            if idx > 0 {
                f.write_str(self.delimiter)?;
            }
            f.write_str(value)?;
        }
        Ok(())
    }
}

/// Key-value pairs with configurable delimiters.
///
/// Writing an existing key replaces its value in place.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct KVBuilder {
    kv_delimiter: &'static str,
    pair_delimiter: &'static str,
    values: SortMap<String>,
}

impl Default for KVBuilder {
    fn default() -> Self {
        Self::style()
    }
}

impl KVBuilder {
    pub fn new(kv_delimiter: &'static str, pair_delimiter: &'static str) -> Self {
        Self {
            kv_delimiter,
            pair_delimiter,
            values: SortMap::new(),
        }
    }

    /// The delimiters used by the CSS `style` attribute.
    pub fn style() -> Self {
        Self::new(":", ";")
    }

    pub fn add(&mut self, key: impl Into<AttributeName>, value: impl Into<String>) -> &mut Self {
        self.values.insert(key, value.into());
        self
    }

    pub fn extend<K, V>(&mut self, pairs: impl IntoIterator<Item = (K, V)>) -> &mut Self
    where
        K: Into<AttributeName>,
        V: Into<String>,
    {
        for (key, value) in pairs {
            self.add(key, value);
        }
        self
    }

    pub fn remove<I>(&mut self, keys: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for key in keys {
            self.values.remove(key.as_ref());
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k, v.as_str()))
    }
}

impl Display for KVBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in self.values.iter() {
            f.write_str(key)?;
            f.write_str(self.kv_delimiter)?;
            f.write_str(value)?;
            f.write_str(self.pair_delimiter)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delimited_keeps_insertion_order() {
        let mut classes = DelimitedBuilder::default();
        classes.add(["a", "b"]).add(["c"]);
        assert_eq!(classes.to_string(), "a b c");

        classes.remove(["b"]);
        assert_eq!(classes.iter().collect::<Vec<_>>(), vec!["a", "c"]);
    }

    #[test]
    fn delimited_custom_separator() {
        let mut list = DelimitedBuilder::new(",");
        list.add(["1", "", "2"]);
        assert_eq!(list.to_string(), "1,2");
    }

    #[test]
    fn kv_last_write_wins() {
        let mut style = KVBuilder::style();
        style.add("color", "red").add("width", "10px").add("color", "blue");
        assert_eq!(style.get("color"), Some("blue"));
        assert_eq!(style.to_string(), "color:blue;width:10px;");

        style.remove(["color"]);
        assert_eq!(style.to_string(), "width:10px;");
    }
}
