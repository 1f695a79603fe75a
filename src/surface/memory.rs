use std::sync::OnceLock;

use regex::Regex;

use super::{NodeId, Surface};

const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// Markup of the page shell: every element the client flow expects to find.
const SHELL_HTML: &str = concat!(
    "<header class=\"site-header\">",
    "<button id=\"hamburger\" class=\"hamburger\">&#9776;</button>",
    "<nav id=\"nav-menu\" class=\"nav-menu\"></nav>",
    "</header>",
    "<main id=\"content\"></main>",
    "<footer><p>&copy; <span id=\"year\"></span></p></footer>",
    "<div id=\"modal\" class=\"modal\" style=\"display:none\">",
    "<span id=\"modal-close\" class=\"modal-close\">&times;</span>",
    "<img id=\"modal-img\" class=\"modal-content\" src=\"\" alt=\"\">",
    "<p id=\"modal-caption\" class=\"modal-caption\"></p>",
    "</div>",
);

fn tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"<(/?)([a-zA-Z][a-zA-Z0-9-]*)([^<>]*)>").expect("valid regex")
    })
}

fn attr_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"([a-zA-Z_:][-a-zA-Z0-9_:.]*)(?:\s*=\s*"([^"]*)")?"#)
            .expect("valid regex")
    })
}

fn html_unescape(s: &str) -> String {
    s.replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

#[derive(Debug, Clone)]
struct Node {
    tag: String,
    attrs: Vec<(String, String)>,
    parent: Option<NodeId>,
    alive: bool,
    inner_html: String,
    text: String,
    offset_top: f64,
}

impl Node {
    fn new(tag: &str, parent: Option<NodeId>) -> Self {
        Node {
            tag: tag.to_ascii_lowercase(),
            attrs: Vec::new(),
            parent,
            alive: true,
            inner_html: String::new(),
            text: String::new(),
            offset_top: 0.0,
        }
    }
}

/// In-memory document tree. Markup written through `set_inner_html` is
/// indexed element by element (tag, attributes, nesting) so controllers can
/// look up and mutate rendered elements; no layout engine, offsets are set
/// explicitly. Slots of removed elements are reused, so repeated rewrites
/// keep the node table bounded.
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    nodes: Vec<Node>,
    /// Live nodes in document (pre-)order.
    order: Vec<NodeId>,
    free: Vec<NodeId>,
    scroll_y: f64,
    scrolled_into_view: Vec<NodeId>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        MemoryDocument::new()
    }
}

impl MemoryDocument {
    /// Empty document holding only a `<body>` root.
    pub fn new() -> Self {
        MemoryDocument {
            nodes: vec![Node::new("body", None)],
            order: vec![0],
            free: Vec::new(),
            scroll_y: 0.0,
            scrolled_into_view: Vec::new(),
        }
    }

    /// Document with the full page shell (nav, content, footer, modal).
    pub fn page_shell() -> Self {
        let mut doc = MemoryDocument::new();
        let body = doc.body();
        doc.set_inner_html(body, SHELL_HTML);
        doc
    }

    pub fn body(&self) -> NodeId {
        0
    }

    pub fn tag_name(&self, node: NodeId) -> Option<&str> {
        self.live(node).map(|n| n.tag.as_str())
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.live(node).and_then(|n| n.parent)
    }

    /// Markup last written with `set_inner_html`.
    pub fn inner_html(&self, node: NodeId) -> Option<&str> {
        self.live(node).map(|n| n.inner_html.as_str())
    }

    pub fn text(&self, node: NodeId) -> Option<&str> {
        self.live(node).map(|n| n.text.as_str())
    }

    /// Live children in document order.
    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.live_ids()
            .filter(|id| self.nodes[*id].parent == Some(node))
            .collect()
    }

    pub fn set_offset_top(&mut self, node: NodeId, y: f64) {
        if let Some(n) = self.nodes.get_mut(node).filter(|n| n.alive) {
            n.offset_top = y;
        }
    }

    /// Elements passed to `scroll_into_view`, oldest first.
    pub fn scroll_history(&self) -> &[NodeId] {
        &self.scrolled_into_view
    }

    /// Allocated node slots, live or free.
    pub fn slot_count(&self) -> usize {
        self.nodes.len()
    }

    fn live(&self, node: NodeId) -> Option<&Node> {
        self.nodes.get(node).filter(|n| n.alive)
    }

    fn live_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.order.iter().copied()
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.nodes[id] = node;
                id
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    fn is_descendant(&self, node: NodeId, ancestor: NodeId) -> bool {
        let mut cur = self.nodes[node].parent;
        while let Some(p) = cur {
            if p == ancestor {
                return true;
            }
            cur = self.nodes[p].parent;
        }
        false
    }

    /// Drop every descendant of `node`. In pre-order they sit directly
    /// after it.
    fn clear_children(&mut self, node: NodeId) {
        let Some(pos) = self.order.iter().position(|id| *id == node) else {
            return;
        };
        let end = self.order[pos + 1..]
            .iter()
            .position(|id| !self.is_descendant(*id, node))
            .map(|n| pos + 1 + n)
            .unwrap_or(self.order.len());
        for id in self.order.drain(pos + 1..end) {
            self.nodes[id].alive = false;
            self.free.push(id);
        }
    }

    fn index_markup(&mut self, root: NodeId, html: &str) {
        let mut open: Vec<NodeId> = vec![root];
        let mut added: Vec<NodeId> = Vec::new();
        for cap in tag_re().captures_iter(html) {
            let closing = !cap[1].is_empty();
            let tag = cap[2].to_ascii_lowercase();

            if closing {
                // Pop back to the matching open element; stray closers are ignored.
                if let Some(pos) = open.iter().rposition(|id| *id != root && self.nodes[*id].tag == tag) {
                    open.truncate(pos);
                }
                continue;
            }

            let raw_attrs = cap.get(3).map(|m| m.as_str()).unwrap_or("");
            let parent = open.last().copied().unwrap_or(root);
            let mut node = Node::new(&tag, Some(parent));
            for a in attr_re().captures_iter(raw_attrs) {
                let value = a.get(2).map(|v| html_unescape(v.as_str())).unwrap_or_default();
                node.attrs.push((a[1].to_ascii_lowercase(), value));
            }

            let id = self.alloc(node);
            added.push(id);

            let self_closing = raw_attrs.trim_end().ends_with('/');
            if !self_closing && !VOID_TAGS.contains(&tag.as_str()) {
                open.push(id);
            }
        }

        if let Some(pos) = self.order.iter().position(|id| *id == root) {
            let tail = self.order.split_off(pos + 1);
            self.order.extend(added);
            self.order.extend(tail);
        }
    }
}

impl Surface for MemoryDocument {
    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.live_ids()
            .find(|n| self.attribute(*n, "id").as_deref() == Some(id))
    }

    fn elements_by_class(&self, class: &str) -> Vec<NodeId> {
        self.live_ids().filter(|n| self.has_class(*n, class)).collect()
    }

    fn elements_by_tag(&self, tag: &str) -> Vec<NodeId> {
        let tag = tag.to_ascii_lowercase();
        self.live_ids()
            .filter(|n| self.nodes[*n].tag == tag)
            .collect()
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.live(node)?
            .attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.clone())
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        let Some(n) = self.nodes.get_mut(node).filter(|n| n.alive) else {
            return;
        };
        match n.attrs.iter_mut().find(|(k, _)| k == name) {
            Some(slot) => slot.1 = value.to_string(),
            None => n.attrs.push((name.to_string(), value.to_string())),
        }
    }

    fn set_inner_html(&mut self, node: NodeId, html: &str) {
        if self.live(node).is_none() {
            return;
        }
        self.clear_children(node);
        let n = &mut self.nodes[node];
        n.inner_html = html.to_string();
        n.text.clear();
        self.index_markup(node, html);
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        if self.live(node).is_none() {
            return;
        }
        self.clear_children(node);
        let n = &mut self.nodes[node];
        n.inner_html = crate::render::html_escape(text);
        n.text = text.to_string();
    }

    fn offset_top(&self, node: NodeId) -> f64 {
        self.live(node).map(|n| n.offset_top).unwrap_or(0.0)
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn scroll_to(&mut self, y: f64) {
        self.scroll_y = y.max(0.0);
    }

    fn scroll_into_view(&mut self, node: NodeId) {
        if self.live(node).is_none() {
            return;
        }
        self.scrolled_into_view.push(node);
        self.scroll_y = self.offset_top(node);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_has_dom_contract() {
        let doc = MemoryDocument::page_shell();
        for id in [
            "nav-menu",
            "hamburger",
            "content",
            "year",
            "modal",
            "modal-img",
            "modal-caption",
            "modal-close",
        ] {
            assert!(doc.element_by_id(id).is_some(), "missing #{}", id);
        }
    }

    #[test]
    fn test_nesting_and_void_tags() {
        let mut doc = MemoryDocument::new();
        let body = doc.body();
        doc.set_inner_html(body, r#"<div id="a"><img id="i" src="x.png"><p id="p">hi</p></div><span id="s"></span>"#);
        let a = doc.element_by_id("a").unwrap();
        let img = doc.element_by_id("i").unwrap();
        let p = doc.element_by_id("p").unwrap();
        let s = doc.element_by_id("s").unwrap();
        assert_eq!(doc.parent(img), Some(a));
        assert_eq!(doc.parent(p), Some(a));
        assert_eq!(doc.parent(s), Some(body));
        assert_eq!(doc.children(a), vec![img, p]);
    }

    #[test]
    fn test_set_inner_html_replaces_subtree() {
        let mut doc = MemoryDocument::page_shell();
        let content = doc.element_by_id("content").unwrap();
        doc.set_inner_html(content, r#"<section id="one"><div class="x"></div></section>"#);
        assert_eq!(doc.elements_by_class("x").len(), 1);
        doc.set_inner_html(content, r#"<section id="two"></section>"#);
        assert!(doc.element_by_id("one").is_none());
        assert!(doc.elements_by_class("x").is_empty());
        assert!(doc.element_by_id("two").is_some());
        assert_eq!(doc.inner_html(content), Some(r#"<section id="two"></section>"#));
    }

    #[test]
    fn test_rewrites_reuse_slots_and_keep_order() {
        let mut doc = MemoryDocument::page_shell();
        let content = doc.element_by_id("content").unwrap();
        let markup = r#"<section id="a"><p>x</p></section><section id="b"></section>"#;
        doc.set_inner_html(content, markup);
        let slots = doc.slot_count();
        for _ in 0..10 {
            doc.set_inner_html(content, markup);
        }
        assert_eq!(doc.slot_count(), slots);

        let a = doc.element_by_id("a").unwrap();
        let b = doc.element_by_id("b").unwrap();
        assert_eq!(doc.elements_by_tag("section"), vec![a, b]);
        // Content stays ahead of the footer and modal that follow it.
        let ids: Vec<String> = doc
            .live_ids()
            .filter_map(|n| doc.attribute(n, "id"))
            .collect();
        let pos = |id: &str| ids.iter().position(|x| x == id).unwrap();
        assert!(pos("content") < pos("a"));
        assert!(pos("b") < pos("year"));
        assert!(pos("year") < pos("modal"));
    }

    #[test]
    fn test_attributes_are_unescaped() {
        let mut doc = MemoryDocument::new();
        let body = doc.body();
        doc.set_inner_html(body, r#"<img id="i" data-full="/a?x=1&amp;y=&quot;2&quot;">"#);
        let img = doc.element_by_id("i").unwrap();
        assert_eq!(doc.attribute(img, "data-full").as_deref(), Some("/a?x=1&y=\"2\""));
    }

    #[test]
    fn test_class_helpers() {
        let mut doc = MemoryDocument::new();
        let body = doc.body();
        doc.set_inner_html(body, r#"<a id="l" class="nav-link">x</a>"#);
        let l = doc.element_by_id("l").unwrap();
        doc.add_class(l, "active");
        assert_eq!(doc.attribute(l, "class").as_deref(), Some("nav-link active"));
        assert!(!doc.toggle_class(l, "active"));
        assert!(doc.toggle_class(l, "active"));
        doc.remove_class(l, "nav-link");
        assert_eq!(doc.attribute(l, "class").as_deref(), Some("active"));
    }
}
