use crate::builders::{DelimitedBuilder, KVBuilder};
use crate::nodes::Node;
use crate::sortmap::{AttributeName, SortMap};

/// The shared representation of a markup element.
///
/// Attribute storage is split by value type. Each map stays `None` until the first write
/// so leaf elements without attributes carry no allocations.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct Element {
    tag: &'static str,
    self_closing: bool,
    strings: Option<SortMap<String>>,
    ints: Option<SortMap<i64>>,
    floats: Option<SortMap<f64>>,
    bools: Option<SortMap<bool>>,
    delimited: Option<SortMap<DelimitedBuilder>>,
    key_values: Option<SortMap<KVBuilder>>,
    custom_data: Option<SortMap<String>>,
    children: Vec<Node>,
}

/// The map an attribute name currently lives in.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Slot {
    String,
    Int,
    Float,
    Bool,
    Delimited,
    KeyValue,
    Data,
}

macro_rules! scalar_attributes {
    ($( $field:ident: $ty:ty => $slot:ident, $set:ident, $remove:ident, $iter:ident; )*) => {
        $(
            pub fn $set(&mut self, name: impl Into<AttributeName>, value: impl Into<$ty>) {
                let name = name.into();
                self.clear_other_slots(&name, Slot::$slot);
                self.$field
                    .get_or_insert_with(SortMap::new)
                    .insert(name, value.into());
            }

            pub fn $remove(&mut self, name: &str) {
                if let Some(map) = self.$field.as_mut() {
                    map.remove(name);
                }
            }

            pub fn $iter(&self) -> impl Iterator<Item = (&str, &$ty)> {
                self.$field.iter().flat_map(|map| map.iter())
            }
        )*
    };
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            self_closing: false,
            strings: None,
            ints: None,
            floats: None,
            bools: None,
            delimited: None,
            key_values: None,
            custom_data: None,
            children: Vec::new(),
        }
    }

    /// An element that renders as `<tag/>` and never has children, like `<br>`.
    pub fn new_void(tag: &'static str) -> Self {
        let mut element = Self::new(tag);
        element.self_closing = true;
        element
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn is_self_closing(&self) -> bool {
        self.self_closing
    }

    pub fn set_self_closing(&mut self, self_closing: bool) {
        self.self_closing = self_closing;
    }

    scalar_attributes! {
        strings: String => String, set_string, remove_string, string_attributes;
        ints: i64 => Int, set_int, remove_int, int_attributes;
        floats: f64 => Float, set_float, remove_float, float_attributes;
        bools: bool => Bool, set_bool, remove_bool, bool_attributes;
    }

    pub fn string_attr(&self, name: &str) -> Option<&str> {
        self.strings.as_ref()?.get(name).map(String::as_str)
    }

    pub fn int_attr(&self, name: &str) -> Option<i64> {
        self.ints.as_ref()?.get(name).copied()
    }

    pub fn float_attr(&self, name: &str) -> Option<f64> {
        self.floats.as_ref()?.get(name).copied()
    }

    pub fn bool_attr(&self, name: &str) -> Option<bool> {
        self.bools.as_ref()?.get(name).copied()
    }

    /// Append tokens to a delimited attribute, creating it with `delimiter` if needed.
    ///
    /// The delimiter of an existing attribute is never changed.
    pub fn add_delimited<I>(
        &mut self,
        name: impl Into<AttributeName>,
        delimiter: &'static str,
        values: I,
    ) where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let name = name.into();
        self.clear_other_slots(&name, Slot::Delimited);
        self.delimited
            .get_or_insert_with(SortMap::new)
            .entry_or_insert_with(name, || DelimitedBuilder::new(delimiter))
            .add(values);
    }

    /// Remove tokens from a delimited attribute. The attribute goes away once it is empty.
    pub fn remove_delimited_values<I>(&mut self, name: &str, values: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let Some(map) = self.delimited.as_mut() else {
            return;
        };
        if let Some(builder) = map.get_mut(name) {
            builder.remove(values);
            if builder.is_empty() {
                map.remove(name);
            }
        }
    }

    pub fn remove_delimited(&mut self, name: &str) {
        if let Some(map) = self.delimited.as_mut() {
            map.remove(name);
        }
    }

    pub fn delimited_attr(&self, name: &str) -> Option<&DelimitedBuilder> {
        self.delimited.as_ref()?.get(name)
    }

    pub fn delimited_attributes(&self) -> impl Iterator<Item = (&str, &DelimitedBuilder)> {
        self.delimited
            .iter()
            .flat_map(|map| map.iter())
            .filter(|(_, builder)| !builder.is_empty())
    }

    /// Set one key of a key-value attribute such as `style`.
    pub fn set_kv(
        &mut self,
        name: impl Into<AttributeName>,
        key: impl Into<AttributeName>,
        value: impl Into<String>,
    ) {
        self.kv_builder(name).add(key, value);
    }

    /// Get the builder for a key-value attribute, creating an empty `style`-shaped one.
    pub fn kv_builder(&mut self, name: impl Into<AttributeName>) -> &mut KVBuilder {
        let name = name.into();
        self.clear_other_slots(&name, Slot::KeyValue);
        self.key_values
            .get_or_insert_with(SortMap::new)
            .entry_or_default(name)
    }

    /// Remove keys from a key-value attribute. The attribute goes away once it is empty.
    pub fn remove_kv_keys<I>(&mut self, name: &str, keys: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let Some(map) = self.key_values.as_mut() else {
            return;
        };
        if let Some(builder) = map.get_mut(name) {
            builder.remove(keys);
            if builder.is_empty() {
                map.remove(name);
            }
        }
    }

    pub fn remove_kv(&mut self, name: &str) {
        if let Some(map) = self.key_values.as_mut() {
            map.remove(name);
        }
    }

    pub fn kv_attr(&self, name: &str) -> Option<&KVBuilder> {
        self.key_values.as_ref()?.get(name)
    }

    pub fn kv_attributes(&self) -> impl Iterator<Item = (&str, &KVBuilder)> {
        self.key_values
            .iter()
            .flat_map(|map| map.iter())
            .filter(|(_, builder)| !builder.is_empty())
    }

    /// Set a `data-*` attribute. `key` is the part after `data-`.
    pub fn set_data(&mut self, key: impl Into<AttributeName>, value: impl Into<String>) {
        let key = key.into();
        self.clear_other_slots(&format!("data-{key}"), Slot::Data);
        self.custom_data
            .get_or_insert_with(SortMap::new)
            .insert(key, value.into());
    }

    pub fn remove_data(&mut self, key: &str) {
        if let Some(map) = self.custom_data.as_mut() {
            map.remove(key);
        }
    }

    pub fn data_attr(&self, key: &str) -> Option<&str> {
        self.custom_data.as_ref()?.get(key).map(String::as_str)
    }

    /// Iterate `data-*` attributes without the `data-` prefix.
    pub fn data_attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.custom_data
            .iter()
            .flat_map(|map| map.iter())
            .map(|(k, v)| (k, v.as_str()))
    }

    /// Drop an attribute by name, whatever type it was stored as.
    pub fn remove_attribute(&mut self, name: &str) {
        self.remove_string(name);
        self.remove_int(name);
        self.remove_float(name);
        self.remove_bool(name);
        self.remove_delimited(name);
        self.remove_kv(name);
        if let Some(key) = name.strip_prefix("data-") {
            self.remove_data(key);
        }
    }

    /// A name lives in at most one map. Writing it through one setter drops it from the rest.
    fn clear_other_slots(&mut self, name: &str, keep: Slot) {
        if keep != Slot::String {
            self.remove_string(name);
        }
        if keep != Slot::Int {
            self.remove_int(name);
        }
        if keep != Slot::Float {
            self.remove_float(name);
        }
        if keep != Slot::Bool {
            self.remove_bool(name);
        }
        if keep != Slot::Delimited {
            self.remove_delimited(name);
        }
        if keep != Slot::KeyValue {
            self.remove_kv(name);
        }
        if keep != Slot::Data {
            if let Some(key) = name.strip_prefix("data-") {
                self.remove_data(key);
            }
        }
    }

    /// True if any attribute map holds `name`. `data-*` attributes are looked up by
    /// their full name.
    pub fn has_attribute(&self, name: &str) -> bool {
        fn has<V>(map: &Option<SortMap<V>>, name: &str) -> bool {
            map.as_ref().is_some_and(|map| map.contains_key(name))
        }

        if let Some(key) = name.strip_prefix("data-") {
            if has(&self.custom_data, key) {
                return true;
            }
        }

        has(&self.strings, name)
            || has(&self.ints, name)
            || has(&self.floats, name)
            || has(&self.bools, name)
            || self.delimited_attr(name).is_some_and(|b| !b.is_empty())
            || self.kv_attr(name).is_some_and(|b| !b.is_empty())
    }

    pub fn push_child(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    pub fn extend_children<I>(&mut self, children: I)
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_are_lazy() {
        let el = Element::new("div");
        assert!(el.strings.is_none());
        assert!(el.custom_data.is_none());
        assert!(!el.has_attribute("id"));
    }

    #[test]
    fn removing_from_an_unset_map_is_a_noop() {
        let mut el = Element::new("div");
        el.remove_string("id");
        el.remove_delimited_values("class", ["a"]);
        el.remove_kv_keys("style", ["color"]);
        el.remove_data("x");
        assert_eq!(el, Element::new("div"));
    }

    #[test]
    fn typed_maps_are_separate() {
        let mut el = Element::new("circle");
        el.set_float("r", 2.5);
        el.set_int("tabindex", 3);
        el.set_bool("autofocus", true);
        el.set_string("id", "c");

        assert_eq!(el.float_attr("r"), Some(2.5));
        assert_eq!(el.int_attr("tabindex"), Some(3));
        assert_eq!(el.bool_attr("autofocus"), Some(true));
        assert_eq!(el.string_attr("id"), Some("c"));

        el.remove_attribute("r");
        assert!(!el.has_attribute("r"));
        assert!(el.has_attribute("id"));
    }

    #[test]
    fn empty_delimited_is_dropped() {
        let mut el = Element::new("p");
        el.add_delimited("class", " ", ["a"]);
        el.remove_delimited_values("class", ["a"]);
        assert!(el.delimited_attr("class").is_none());
        assert!(!el.has_attribute("class"));
    }

    #[test]
    fn a_name_lives_in_one_map() {
        let mut el = Element::new("div");
        el.set_string("tabindex", "2");
        el.set_int("tabindex", 1);
        assert_eq!(el.string_attr("tabindex"), None);
        assert_eq!(el.int_attr("tabindex"), Some(1));

        el.set_string("class", "x");
        el.add_delimited("class", " ", ["y"]);
        assert_eq!(el.string_attr("class"), None);
        assert_eq!(el.delimited_attr("class").unwrap().to_string(), "y");

        el.set_kv("style", "margin", "0");
        el.set_string("style", "color:red");
        assert!(el.kv_attr("style").is_none());
        assert_eq!(el.string_attr("style"), Some("color:red"));

        el.set_data("row", "1");
        el.set_string("data-row", "2");
        assert_eq!(el.data_attr("row"), None);
        el.set_data("row", "3");
        assert_eq!(el.string_attr("data-row"), None);
        assert_eq!(el.data_attr("row"), Some("3"));
    }

    #[test]
    fn rewriting_the_same_map_keeps_position() {
        let mut el = Element::new("div");
        el.set_string("id", "a");
        el.set_string("title", "t");
        el.set_string("id", "b");
        let names: Vec<_> = el.string_attributes().map(|(name, _)| name).collect();
        assert_eq!(names, ["id", "title"]);
    }

    #[test]
    fn data_attributes_are_prefixed_on_lookup() {
        let mut el = Element::new("li");
        el.set_data("row", "7");
        assert!(el.has_attribute("data-row"));
        assert_eq!(el.data_attr("row"), Some("7"));
    }
}
