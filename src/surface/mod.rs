//! The page as a platform capability. Controllers and the assembler talk to
//! a `Surface` instead of a global document, so the whole client flow can run
//! against `MemoryDocument` in tests.

pub mod memory;

pub use memory::MemoryDocument;

/// Handle to an element of a surface.
pub type NodeId = usize;

pub trait Surface {
    fn element_by_id(&self, id: &str) -> Option<NodeId>;
    /// Elements carrying `class`, in document order.
    fn elements_by_class(&self, class: &str) -> Vec<NodeId>;
    /// Elements with tag name `tag`, in document order.
    fn elements_by_tag(&self, tag: &str) -> Vec<NodeId>;

    fn attribute(&self, node: NodeId, name: &str) -> Option<String>;
    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str);

    /// Replace everything below `node` with the given markup.
    fn set_inner_html(&mut self, node: NodeId, html: &str);
    fn set_text(&mut self, node: NodeId, text: &str);

    /// Distance of the element's top edge from the top of the page.
    fn offset_top(&self, node: NodeId) -> f64;
    fn scroll_y(&self) -> f64;
    fn scroll_to(&mut self, y: f64);
    /// Smooth-scroll the element into view.
    fn scroll_into_view(&mut self, node: NodeId);

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.attribute(node, "class")
            .map(|c| c.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        if self.has_class(node, class) {
            return;
        }
        let mut classes = self.attribute(node, "class").unwrap_or_default();
        if !classes.trim().is_empty() {
            classes.push(' ');
        }
        classes.push_str(class);
        self.set_attribute(node, "class", classes.trim());
    }

    fn remove_class(&mut self, node: NodeId, class: &str) {
        if let Some(classes) = self.attribute(node, "class") {
            let kept: Vec<&str> = classes.split_whitespace().filter(|c| *c != class).collect();
            self.set_attribute(node, "class", &kept.join(" "));
        }
    }

    /// Flip `class` and report whether it is now present.
    fn toggle_class(&mut self, node: NodeId, class: &str) -> bool {
        if self.has_class(node, class) {
            self.remove_class(node, class);
            false
        } else {
            self.add_class(node, class);
            true
        }
    }
}
