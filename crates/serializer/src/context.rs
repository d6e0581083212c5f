use serde_json::Value as Json;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Free-form options travelling with one normalization call.
///
/// Options are shared between nested calls; only the object depth changes while the chain
/// descends. Cloning is cheap.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
    options: Arc<BTreeMap<String, Json>>,
    depth: usize,
}

impl Context {
    /// Restricts output to fields in at least one of these groups (string or list of strings).
    pub const GROUPS: &'static str = "groups";
    /// Object-valued fields nested deeper than this are left out.
    pub const MAX_DEPTH: &'static str = "max_depth";
    /// Indents encoded JSON.
    pub const JSON_PRETTY: &'static str = "json_pretty";

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an option, replacing any previous value.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Json>) -> Self {
        Arc::make_mut(&mut self.options).insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_groups<I, S>(self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let groups: Vec<Json> = groups.into_iter().map(|g| Json::String(g.into())).collect();
        self.with(Self::GROUPS, groups)
    }

    #[must_use]
    pub fn with_max_depth(self, depth: usize) -> Self {
        self.with(Self::MAX_DEPTH, depth)
    }

    #[must_use]
    pub fn pretty(self) -> Self {
        self.with(Self::JSON_PRETTY, true)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Json> {
        self.options.get(key)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Active group filter, if any.
    #[must_use]
    pub fn groups(&self) -> Option<Vec<&str>> {
        match self.get(Self::GROUPS)? {
            Json::String(group) => Some(vec![group.as_str()]),
            Json::Array(groups) => Some(groups.iter().filter_map(Json::as_str).collect()),
            _ => None,
        }
    }

    #[must_use]
    pub fn max_depth(&self) -> Option<usize> {
        self.get(Self::MAX_DEPTH)?.as_u64().and_then(|depth| usize::try_from(depth).ok())
    }

    #[must_use]
    pub fn json_pretty(&self) -> bool {
        self.get(Self::JSON_PRETTY).and_then(Json::as_bool).unwrap_or(false)
    }

    /// Number of objects between the root and the value being normalized.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Context for the fields of the object currently being normalized.
    #[must_use]
    pub fn nested(&self) -> Self {
        Self { options: Arc::clone(&self.options), depth: self.depth + 1 }
    }

    /// Fills options missing here from `defaults`.
    #[must_use]
    pub fn with_defaults(&self, defaults: &Self) -> Self {
        if defaults.is_empty() {
            return self.clone();
        }
        let mut options = (*defaults.options).clone();
        options.extend(self.options.iter().map(|(k, v)| (k.clone(), v.clone())));
        Self { options: Arc::new(options), depth: self.depth }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_known_options_are_typed() {
        let context = Context::new().with_groups(["public"]).with_max_depth(2).pretty();

        assert_eq!(context.groups(), Some(vec!["public"]));
        assert_eq!(context.max_depth(), Some(2));
        assert!(context.json_pretty());
        assert_eq!(Context::new().groups(), None);
    }

    #[test]
    fn single_group_string_is_accepted() {
        let context = Context::new().with(Context::GROUPS, "admin");
        assert_eq!(context.groups(), Some(vec!["admin"]));
    }

    #[test]
    fn nesting_only_changes_depth() {
        let context = Context::new().with("locale", "en");
        let nested = context.nested().nested();

        assert_eq!(nested.depth(), 2);
        assert_eq!(nested.get("locale"), context.get("locale"));
    }

    #[test]
    fn caller_options_win_over_defaults() {
        let defaults = Context::new().with_max_depth(5).pretty();
        let merged = Context::new().with_max_depth(1).with_defaults(&defaults);

        assert_eq!(merged.max_depth(), Some(1));
        assert!(merged.json_pretty());
    }
}
