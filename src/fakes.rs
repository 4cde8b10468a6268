//! In-memory collaborators for controller and helper tests.

use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;

use crate::confirm::Prompt;
use crate::error::PageError;
use crate::page::Page;
use crate::settings::SettingsStore;
use crate::widgets::Widgets;

pub type NodeId = usize;

#[derive(Debug, Default)]
struct FakeNode {
    id: Option<String>,
    classes: BTreeSet<String>,
    /// Extra selectors this node answers to (e.g. `.sidebar-menu a`).
    selectors: Vec<String>,
    text: String,
    html: String,
}

/// Flat element list. `#id` and single `.class` selectors are matched
/// structurally; anything else must be registered on the node.
#[derive(Debug)]
pub struct FakePage {
    nodes: RefCell<Vec<FakeNode>>,
    body: Option<NodeId>,
    viewport_width: Cell<f64>,
    year: i32,
}

impl FakePage {
    pub fn new() -> Self {
        let mut page = Self::without_body();
        page.body = Some(page.push(FakeNode::default()));
        page
    }

    pub fn without_body() -> Self {
        Self { nodes: RefCell::new(Vec::new()), body: None, viewport_width: Cell::new(1280.0), year: 2024 }
    }

    /// Stock layout: toggle, sidebar, main content, header, year slot and
    /// dark-mode toggle.
    pub fn standard() -> Self {
        let page = Self::new();
        page.add_with_id("sidebarToggle");
        page.add_with_id("sidebar");
        page.add_with_class("main-content");
        page.add_with_class("header");
        page.add_with_id("currentYear");
        page.add_with_id("darkModeToggle");
        page
    }

    fn push(&self, node: FakeNode) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(node);
        nodes.len() - 1
    }

    pub fn add_with_id(&self, id: &str) -> NodeId {
        self.push(FakeNode { id: Some(id.to_owned()), ..FakeNode::default() })
    }

    pub fn add_with_class(&self, class: &str) -> NodeId {
        let mut node = FakeNode::default();
        node.classes.insert(class.to_owned());
        self.push(node)
    }

    pub fn add_matching(&self, selector: &str) -> NodeId {
        self.push(FakeNode { selectors: vec![selector.to_owned()], ..FakeNode::default() })
    }

    pub fn set_viewport_width(&self, width: f64) {
        self.viewport_width.set(width);
    }

    pub fn body_id(&self) -> Option<NodeId> {
        self.body
    }

    pub fn has(&self, node: NodeId, class: &str) -> bool {
        self.nodes.borrow()[node].classes.contains(class)
    }

    pub fn text(&self, node: NodeId) -> String {
        self.nodes.borrow()[node].text.clone()
    }

    pub fn html(&self, node: NodeId) -> String {
        self.nodes.borrow()[node].html.clone()
    }

    pub fn id_of(&self, id: &str) -> Option<NodeId> {
        self.element_by_id(id)
    }

    fn matches(node: &FakeNode, selector: &str) -> bool {
        if let Some(id) = selector.strip_prefix('#') {
            return node.id.as_deref() == Some(id);
        }
        if let Some(class) = selector.strip_prefix('.') {
            if !class.contains([' ', '.', '[']) && node.classes.contains(class) {
                return true;
            }
        }
        node.selectors.iter().any(|s| s == selector)
    }
}

impl Page for FakePage {
    type Element = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.nodes.borrow().iter().position(|n| n.id.as_deref() == Some(id))
    }

    fn query_selector(&self, selector: &str) -> Option<NodeId> {
        self.nodes.borrow().iter().position(|n| Self::matches(n, selector))
    }

    fn query_selector_all(&self, selector: &str) -> Vec<NodeId> {
        self.nodes
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, n)| Self::matches(n, selector))
            .map(|(i, _)| i)
            .collect()
    }

    fn body(&self) -> Option<NodeId> {
        self.body
    }

    fn add_class(&self, element: &NodeId, class: &str) {
        self.nodes.borrow_mut()[*element].classes.insert(class.to_owned());
    }

    fn remove_class(&self, element: &NodeId, class: &str) {
        self.nodes.borrow_mut()[*element].classes.remove(class);
    }

    fn toggle_class(&self, element: &NodeId, class: &str) -> bool {
        let mut nodes = self.nodes.borrow_mut();
        let classes = &mut nodes[*element].classes;
        if classes.remove(class) {
            false
        } else {
            classes.insert(class.to_owned());
            true
        }
    }

    fn has_class(&self, element: &NodeId, class: &str) -> bool {
        self.has(*element, class)
    }

    fn set_text(&self, element: &NodeId, text: &str) {
        text.clone_into(&mut self.nodes.borrow_mut()[*element].text);
    }

    fn set_inner_html(&self, element: &NodeId, html: &str) {
        html.clone_into(&mut self.nodes.borrow_mut()[*element].html);
    }

    fn viewport_width(&self) -> f64 {
        self.viewport_width.get()
    }

    fn current_year(&self) -> i32 {
        self.year
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetCall {
    Tooltip(NodeId),
    Popover(NodeId),
    Dismiss(NodeId, u32),
}

#[derive(Debug, Default)]
pub struct RecordingWidgets {
    pub calls: RefCell<Vec<WidgetCall>>,
}

impl Widgets for RecordingWidgets {
    type Element = NodeId;

    fn attach_tooltip(&self, element: &NodeId) {
        self.calls.borrow_mut().push(WidgetCall::Tooltip(*element));
    }

    fn attach_popover(&self, element: &NodeId) {
        self.calls.borrow_mut().push(WidgetCall::Popover(*element));
    }

    fn dismiss_after(&self, element: NodeId, delay_ms: u32) {
        self.calls.borrow_mut().push(WidgetCall::Dismiss(element, delay_ms));
    }
}

/// Store whose every call fails, as when storage is blocked mid-session.
#[derive(Debug, Default)]
pub struct BrokenStore;

impl SettingsStore for BrokenStore {
    fn get(&self, key: &str) -> Result<Option<String>, PageError> {
        Err(PageError::StorageRead { key: key.to_owned(), reason: "blocked".into() })
    }

    fn set(&mut self, key: &str, _value: &str) -> Result<(), PageError> {
        Err(PageError::StorageWrite { key: key.to_owned(), reason: "quota exceeded".into() })
    }
}

/// Prompt that answers with a fixed choice and records what it was asked.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    pub answer: bool,
    pub asked: RefCell<Vec<String>>,
}

impl ScriptedPrompt {
    pub fn answering(answer: bool) -> Self {
        Self { answer, asked: RefCell::new(Vec::new()) }
    }
}

impl Prompt for ScriptedPrompt {
    fn confirm(&self, message: &str) -> bool {
        self.asked.borrow_mut().push(message.to_owned());
        self.answer
    }
}
