//! Tree queries for tests and host bridges

use crate::accessibility::Role;
use crate::element::{Element, ElementKind};

/// Pre-order, depth-first iterator over an element tree
pub struct Walk<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

impl Element {
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }

    pub fn find_by_test_id(&self, id: &str) -> Option<&Element> {
        self.walk().find(|e| e.test_id.as_deref() == Some(id))
    }

    /// First `Text` element whose content equals `content`
    pub fn find_by_text(&self, content: &str) -> Option<&Element> {
        self.walk().find(|e| e.text() == Some(content))
    }

    /// First `Text` element whose content contains `needle`
    pub fn find_by_text_containing(&self, needle: &str) -> Option<&Element> {
        self.walk()
            .find(|e| e.text().is_some_and(|t| t.contains(needle)))
    }

    pub fn find_all_by_role(&self, role: Role) -> Vec<&Element> {
        self.walk()
            .filter(|e| e.accessibility.as_ref().is_some_and(|a| a.role == role))
            .collect()
    }

    pub fn find_by_label(&self, label: &str) -> Option<&Element> {
        self.walk().find(|e| {
            e.accessibility
                .as_ref()
                .is_some_and(|a| a.label.as_deref() == Some(label))
        })
    }

    /// All visible text, in tree order
    pub fn texts(&self) -> Vec<&str> {
        self.walk().filter_map(Element::text).collect()
    }

    pub fn count(&self, pred: impl Fn(&Element) -> bool) -> usize {
        self.walk().filter(|e| pred(e)).count()
    }

    pub fn has_spinner(&self) -> bool {
        self.walk()
            .any(|e| matches!(e.kind, ElementKind::Spinner { .. }))
    }
}
