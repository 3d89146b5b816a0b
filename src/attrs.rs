// src/attrs.rs — attribute bag passed straight through to native elements
use yew::virtual_dom::{ApplyAttributeAs, VTag};
use yew::AttrValue;

/// Ordered attribute bag for a native element.
///
/// Names match ASCII case-insensitively, as HTML does. Writing a name that is
/// already present overwrites both its spelling and its value in place, so the
/// last write wins while the attribute keeps the position of its first insert.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attrs {
    entries: Vec<(AttrValue, AttrValue)>,
}

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Attrs::set`].
    pub fn with(mut self, key: impl Into<AttrValue>, value: impl Into<AttrValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<AttrValue>, value: impl Into<AttrValue>) {
        let key = key.into();
        let value = value.into();
        match self.position(&key) {
            Some(idx) => self.entries[idx] = (key, value),
            None => self.entries.push((key, value)),
        }
    }

    /// Boolean attribute (`disabled`, `readonly`, ...): present when `on`, gone otherwise.
    pub fn flag(mut self, key: impl Into<AttrValue>, on: bool) -> Self {
        let key = key.into();
        if on {
            self.set(key.clone(), key);
        } else {
            self.remove(&key);
        }
        self
    }

    pub fn remove(&mut self, key: &str) -> Option<AttrValue> {
        let idx = self.position(key)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.position(key).map(|idx| self.entries[idx].1.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `self` with every entry of `overrides` written on top, in order.
    pub fn merged(&self, overrides: &Attrs) -> Attrs {
        let mut out = self.clone();
        out.extend(overrides.entries.iter().cloned());
        out
    }

    pub(crate) fn apply_to(&self, tag: &mut VTag) {
        let map = tag.attributes.get_mut_index_map();
        for (key, value) in &self.entries {
            map.insert(key.clone(), (value.clone(), ApplyAttributeAs::Attribute));
        }
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|(k, _)| k.as_str().eq_ignore_ascii_case(key))
    }
}

impl<K: Into<AttrValue>, V: Into<AttrValue>> Extend<(K, V)> for Attrs {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<K: Into<AttrValue>, V: Into<AttrValue>> FromIterator<(K, V)> for Attrs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attrs::new();
        attrs.extend(iter);
        attrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_overwrites_in_place() {
        let attrs = Attrs::new()
            .with("type", "text")
            .with("placeholder", "Name")
            .with("type", "number");

        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.get("type"), Some("number"));
        let keys: Vec<_> = attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["type", "placeholder"]);
    }

    #[test]
    fn merged_lets_overrides_win() {
        let defaults = Attrs::new().with("type", "text");
        let caller = Attrs::new().with("type", "email").with("name", "mail");

        let merged = defaults.merged(&caller);
        assert_eq!(merged.get("type"), Some("email"));
        assert_eq!(merged.get("name"), Some("mail"));

        // base untouched
        assert_eq!(defaults.get("type"), Some("text"));
        assert_eq!(defaults.len(), 1);
    }

    #[test]
    fn merged_with_empty_keeps_base() {
        let defaults = Attrs::new().with("type", "text");
        assert_eq!(defaults.merged(&Attrs::new()), defaults);
    }

    #[test]
    fn flag_adds_and_removes() {
        let on = Attrs::new().flag("disabled", true);
        assert_eq!(on.get("disabled"), Some("disabled"));

        let off = on.flag("disabled", false);
        assert!(off.get("disabled").is_none());
        assert!(off.is_empty());
    }

    #[test]
    fn remove_returns_old_value() {
        let mut attrs = Attrs::new().with("id", "a");
        assert_eq!(attrs.remove("id").as_deref(), Some("a"));
        assert_eq!(attrs.remove("id"), None);
    }

    #[test]
    fn collect_applies_last_write_wins() {
        let attrs: Attrs = [("type", "submit"), ("class", "btn"), ("type", "reset")]
            .into_iter()
            .collect();
        assert_eq!(attrs.get("type"), Some("reset"));
        assert_eq!(attrs.len(), 2);
    }

    #[test]
    fn names_match_regardless_of_case() {
        let mut attrs = Attrs::new().with("TYPE", "submit").with("class", "btn");
        attrs.set("type", "button");

        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.get("Type"), Some("button"));
        let first = attrs.iter().next();
        assert_eq!(first, Some(("type", "button")));

        assert_eq!(attrs.remove("CLASS").as_deref(), Some("btn"));
        assert_eq!(attrs.len(), 1);
    }

    #[test]
    fn runtime_built_names() {
        let attrs: Attrs = (1..=2)
            .map(|i| (format!("data-slot-{i}"), i.to_string()))
            .collect();
        assert_eq!(attrs.get("data-slot-2"), Some("2"));
        assert_eq!(attrs.len(), 2);
    }
}
