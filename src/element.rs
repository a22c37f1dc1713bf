use std::collections::HashMap;

/// Minimal capability set a switch button handle must provide.
///
/// Any DOM-like abstraction that can find a descendant by class name, carry
/// named attached data, add/remove CSS classes, and read/set its text is a
/// valid collaborator; the host owns rendering the initial markup and wiring
/// user interactions to [`crate::display::apply_state`].
pub trait ElementHandle {
    /// Identifier of the element, e.g. the `id` attribute.
    fn id(&self) -> &str;

    fn has_class(&self, class: &str) -> bool;

    fn add_class(&mut self, class: &str);

    fn remove_class(&mut self, class: &str);

    /// Reads a named piece of attached data. Absent keys are `None`, never
    /// an error.
    fn data(&self, key: &str) -> Option<bool>;

    fn set_data(&mut self, key: &str, value: bool);

    fn text(&self) -> &str;

    fn set_text(&mut self, text: &str);

    /// Finds the first descendant carrying the given class, depth-first.
    /// Absence is an empty result, not an error.
    fn find_by_class_mut(&mut self, class: &str) -> Option<&mut Self>
    where
        Self: Sized;
}

/// In-memory element tree implementing [`ElementHandle`].
///
/// Stands in for the server-rendered markup in hosts and tests: a button
/// node with an icon child and a label child mirrors the canonical switch
/// markup.
#[derive(Debug, Clone, Default)]
pub struct ElementNode {
    id: String,
    classes: Vec<String>,
    data: HashMap<String, bool>,
    text: String,
    children: Vec<ElementNode>,
}

impl ElementNode {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_child(mut self, child: ElementNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(&self) -> &[ElementNode] {
        &self.children
    }
}

impl ElementHandle for ElementNode {
    fn id(&self) -> &str {
        &self.id
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    fn data(&self, key: &str) -> Option<bool> {
        self.data.get(key).copied()
    }

    fn set_data(&mut self, key: &str, value: bool) {
        self.data.insert(key.to_string(), value);
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn find_by_class_mut(&mut self, class: &str) -> Option<&mut Self> {
        for child in &mut self.children {
            if child.has_class(class) {
                return Some(child);
            }
            if let Some(found) = child.find_by_class_mut(class) {
                return Some(found);
            }
        }
        None
    }
}
