use std::sync::atomic::{AtomicU64, Ordering};

use leptos::prelude::*;
use serde::Serialize;
use serde_json::{Map, Value};

/// Tab header label: plain text or an arbitrary view
#[derive(Clone)]
pub enum TabLabel {
    Text(String),
    View(ViewFn),
}

impl TabLabel {
    /// Builds a rich label from a view closure
    pub fn view(view: impl Into<ViewFn>) -> Self {
        Self::View(view.into())
    }

    /// The textual form of the label, if it has one
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::View(_) => None,
        }
    }

    pub fn render(&self) -> AnyView {
        match self {
            Self::Text(text) => text.clone().into_any(),
            Self::View(view) => view.run(),
        }
    }
}

impl Default for TabLabel {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<&str> for TabLabel {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for TabLabel {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Style/class override applied only while a tab is the active one
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ActiveStyles {
    /// Inline CSS text, appended after the tab's base style
    pub style: String,
    /// Class list, appended after the active-state base class
    #[serde(rename = "className")]
    pub class_name: String,
}

impl ActiveStyles {
    pub fn new(style: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            style: style.into(),
            class_name: class_name.into(),
        }
    }
}

/// Everything the host supplies about a single tab
#[derive(Clone, Default)]
pub struct TabDescriptor {
    /// Header label
    pub title: TabLabel,
    /// Content pane payload shown while this tab is active
    pub content: Option<ViewFn>,
    /// Hint that this tab should be the initial selection
    pub active: bool,
    /// Disabled tabs keep firing the click notification
    pub disabled: bool,
    /// Hidden tabs are kept in the descriptor list but never rendered
    pub hide_tab: bool,
    /// Optional header icon
    pub icon: Option<ViewFn>,
    /// Places the icon after the label
    pub right_icon: bool,
    /// Inline CSS for the header
    pub style: String,
    /// Class list for the header
    pub class_name: String,
    /// Automation identifier; defaults to `testid` when absent
    pub test_id: Option<String>,
    /// Per-tab active override; falls back to the container-level one
    pub active_styles: Option<ActiveStyles>,
}

impl TabDescriptor {
    pub fn new(title: impl Into<TabLabel>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn content(mut self, content: impl Into<ViewFn>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn hide_tab(mut self, hide_tab: bool) -> Self {
        self.hide_tab = hide_tab;
        self
    }

    pub fn icon(mut self, icon: impl Into<ViewFn>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn right_icon(mut self, right_icon: bool) -> Self {
        self.right_icon = right_icon;
        self
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn test_id(mut self, test_id: impl Into<String>) -> Self {
        self.test_id = Some(test_id.into());
        self
    }

    pub fn active_styles(mut self, active_styles: ActiveStyles) -> Self {
        self.active_styles = Some(active_styles);
        self
    }

    /// Raw attribute map handed to the `on_select` callback, before
    /// sanitization. Keys keep the host-facing names. A view label has no
    /// textual form and serializes as an empty (truthy) object.
    pub fn snapshot(&self, active_styles: &ActiveStyles) -> Map<String, Value> {
        let mut element = Map::new();
        element.insert(
            "title".to_string(),
            match &self.title {
                TabLabel::Text(text) => Value::String(text.clone()),
                TabLabel::View(_) => Value::Object(Map::new()),
            },
        );
        element.insert("disabled".to_string(), Value::Bool(self.disabled));
        element.insert("hideTab".to_string(), Value::Bool(self.hide_tab));
        element.insert("style".to_string(), Value::String(self.style.clone()));
        element.insert(
            "className".to_string(),
            Value::String(self.class_name.clone()),
        );
        element.insert("active".to_string(), Value::Bool(self.active));
        element.insert(
            "activeStyles".to_string(),
            serde_json::to_value(active_styles).unwrap_or(Value::Null),
        );
        element
    }
}

/// One child value in the host-supplied tab collection. Only `Tab` carries
/// the descriptor shape; every other variant is dropped by normalization.
#[derive(Clone)]
pub enum TabNode {
    Tab(TabDescriptor),
    Group(Vec<TabNode>),
    Text(String),
    Number(f64),
    Bool(bool),
    Empty,
}

impl From<TabDescriptor> for TabNode {
    fn from(descriptor: TabDescriptor) -> Self {
        Self::Tab(descriptor)
    }
}

impl From<Vec<TabDescriptor>> for TabNode {
    fn from(descriptors: Vec<TabDescriptor>) -> Self {
        Self::Group(descriptors.into_iter().map(Self::Tab).collect())
    }
}

impl From<Vec<TabNode>> for TabNode {
    fn from(nodes: Vec<TabNode>) -> Self {
        Self::Group(nodes)
    }
}

impl From<&str> for TabNode {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

/// A tab collection plus a generation token. Every construction gets a fresh
/// generation; clones keep it. The selector re-derives the initial active
/// index only across generations, so re-supplying the same set never resets
/// a user-navigated selection.
#[derive(Clone)]
pub struct TabSet {
    node: TabNode,
    generation: u64,
}

impl TabSet {
    pub fn new(children: impl Into<TabNode>) -> Self {
        Self {
            node: children.into(),
            generation: NEXT_GENERATION.fetch_add(1, Ordering::Relaxed),
        }
    }

    pub fn node(&self) -> &TabNode {
        &self.node
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Default for TabSet {
    fn default() -> Self {
        Self::new(TabNode::Empty)
    }
}

impl From<TabNode> for TabSet {
    fn from(node: TabNode) -> Self {
        Self::new(node)
    }
}

impl From<TabDescriptor> for TabSet {
    fn from(descriptor: TabDescriptor) -> Self {
        Self::new(TabNode::Tab(descriptor))
    }
}

impl From<Vec<TabDescriptor>> for TabSet {
    fn from(descriptors: Vec<TabDescriptor>) -> Self {
        Self::new(descriptors)
    }
}

impl From<Vec<TabNode>> for TabSet {
    fn from(nodes: Vec<TabNode>) -> Self {
        Self::new(nodes)
    }
}

/// Payload of the outbound selection callback
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SelectEvent {
    /// Position of the clicked header in the filtered descriptor list
    pub index: usize,
    /// Sanitized snapshot of the selected descriptor's attributes
    pub element: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::clean_object;

    #[test]
    fn test_snapshot_keys_match_host_contract() {
        let descriptor = TabDescriptor::new("Tab 1")
            .disabled(true)
            .class_name("custom");
        let element = descriptor.snapshot(&ActiveStyles::default());

        let keys: Vec<&str> = element.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec![
                "title",
                "disabled",
                "hideTab",
                "style",
                "className",
                "active",
                "activeStyles"
            ]
        );
        assert_eq!(element["title"], "Tab 1");
        assert_eq!(element["disabled"], true);
        assert_eq!(element["activeStyles"]["className"], "");
    }

    #[test]
    fn test_cleaned_snapshot_drops_falsy_attributes() {
        let descriptor = TabDescriptor::new("Tab 1");
        let element = clean_object(&descriptor.snapshot(&ActiveStyles::default()));

        // Only the title and the (always truthy) activeStyles object survive
        let keys: Vec<&str> = element.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["title", "activeStyles"]);
    }

    #[test]
    fn test_view_title_snapshots_as_truthy_object() {
        let descriptor =
            TabDescriptor::new(TabLabel::view(|| leptos::view! { <b>"Tab"</b> }));
        let element = clean_object(&descriptor.snapshot(&ActiveStyles::default()));
        assert!(element.contains_key("title"));
    }

    #[test]
    fn test_generations_are_distinct_per_construction() {
        let first = TabSet::from(vec![TabDescriptor::new("A")]);
        let second = TabSet::from(vec![TabDescriptor::new("A")]);
        assert_ne!(first.generation(), second.generation());
        assert_eq!(first.generation(), first.clone().generation());
    }

    #[test]
    fn test_label_text() {
        assert_eq!(TabLabel::from("Tab 1").text(), Some("Tab 1"));
        assert_eq!(TabLabel::view(|| leptos::view! { <b>"x"</b> }).text(), None);
    }
}
