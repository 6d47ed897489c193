//! Structural node matcher
//!
//! [`NodeMatch`] describes the element shapes the sync core looks for. A
//! backend either evaluates it structurally (see
//! [`MemoryDocument`](crate::memory::MemoryDocument)) or renders it to a CSS
//! selector via [`NodeMatch::css`] for a `querySelectorAll`-backed host.

use crate::style;
use std::collections::HashMap;

/// Builder-style structural matcher over document nodes
///
/// All configured criteria must hold for a node to match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeMatch {
    tag: Option<String>,
    id: Option<String>,
    class: Option<String>,
    attr_eq: Vec<(String, String)>,
    attr_prefix: Vec<(String, String)>,
    style_decl: Option<(String, String)>,
}

impl NodeMatch {
    /// Match any node
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Require a tag name
    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Require an element id
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Require a class token
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Require an exact attribute value
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attr_eq.push((name.into(), value.into()));
        self
    }

    /// Require an attribute value prefix
    #[must_use]
    pub fn attr_prefix(mut self, name: impl Into<String>, prefix: impl Into<String>) -> Self {
        self.attr_prefix.push((name.into(), prefix.into()));
        self
    }

    /// Require an inline-style declaration
    #[must_use]
    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.style_decl = Some((property.into(), value.into()));
        self
    }

    /// Evaluate against one node's tag, attributes, and inline style
    #[must_use]
    pub fn matches(
        &self,
        tag: &str,
        attributes: &HashMap<String, String>,
        inline_style: &str,
    ) -> bool {
        if self.tag.as_deref().is_some_and(|t| t != tag) {
            return false;
        }
        if let Some(id) = self.id.as_deref() {
            if attributes.get("id").map(String::as_str) != Some(id) {
                return false;
            }
        }
        if let Some(class) = self.class.as_deref() {
            let listed = attributes
                .get("class")
                .is_some_and(|c| c.split_whitespace().any(|token| token == class));
            if !listed {
                return false;
            }
        }
        for (name, value) in &self.attr_eq {
            if attributes.get(name) != Some(value) {
                return false;
            }
        }
        for (name, prefix) in &self.attr_prefix {
            if !attributes.get(name).is_some_and(|v| v.starts_with(prefix)) {
                return false;
            }
        }
        if let Some((property, value)) = &self.style_decl {
            if !style::declares(inline_style, property, value) {
                return false;
            }
        }
        true
    }

    /// Render as a CSS selector
    ///
    /// Style criteria render as substring attribute selectors on `style`,
    /// which is as close as plain CSS gets to a declaration match.
    #[must_use]
    pub fn css(&self) -> String {
        let mut selector = String::new();
        if let Some(tag) = &self.tag {
            selector.push_str(tag);
        }
        if let Some(id) = &self.id {
            selector.push_str(&format!("#{id}"));
        }
        if let Some(class) = &self.class {
            selector.push_str(&format!(".{class}"));
        }
        for (name, value) in &self.attr_eq {
            selector.push_str(&format!("[{name}=\"{value}\"]"));
        }
        for (name, prefix) in &self.attr_prefix {
            selector.push_str(&format!("[{name}^=\"{prefix}\"]"));
        }
        if let Some((property, value)) = &self.style_decl {
            selector.push_str(&format!("[style*=\"{property}: {value}\"]"));
        }
        if selector.is_empty() {
            selector.push('*');
        }
        selector
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn attrs(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn matches_tag_id_class() {
        let matcher = NodeMatch::new().tag("div").id("ghx-work").class("board");
        assert!(matcher.matches("div", &attrs(&[("id", "ghx-work"), ("class", "board pad")]), ""));
        assert!(!matcher.matches("span", &attrs(&[("id", "ghx-work"), ("class", "board")]), ""));
        assert!(!matcher.matches("div", &attrs(&[("id", "other"), ("class", "board")]), ""));
    }

    #[test]
    fn matches_attribute_prefix() {
        let matcher = NodeMatch::new().attr_prefix("data-rbd-draggable-id", "ISSUE::");
        assert!(matcher.matches("div", &attrs(&[("data-rbd-draggable-id", "ISSUE::42")]), ""));
        assert!(!matcher.matches("div", &attrs(&[("data-rbd-draggable-id", "CARD::42")]), ""));
        assert!(!matcher.matches("div", &attrs(&[]), ""));
    }

    #[test]
    fn matches_style_declaration() {
        let matcher = NodeMatch::new().style("display", "flex");
        assert!(matcher.matches("div", &attrs(&[]), "display: flex; gap: 4px;"));
        assert!(!matcher.matches("div", &attrs(&[]), "display: block;"));
    }

    #[test]
    fn empty_matcher_matches_everything() {
        assert!(NodeMatch::new().matches("div", &attrs(&[]), ""));
        assert_eq!(NodeMatch::new().css(), "*");
    }

    #[test]
    fn css_rendering() {
        let matcher = NodeMatch::new()
            .tag("span")
            .class("ghx-extra-field")
            .attr_prefix("data-tooltip", "Labels:");
        assert_eq!(
            matcher.css(),
            "span.ghx-extra-field[data-tooltip^=\"Labels:\"]"
        );
    }
}
