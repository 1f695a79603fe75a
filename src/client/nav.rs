use crate::surface::{NodeId, Surface};

/// Fixed header height subtracted from each section's top before comparing
/// with the scroll position.
pub const HEADER_OFFSET: f64 = 80.0;

pub const ACTIVE_CLASS: &str = "active";
pub const MENU_OPEN_CLASS: &str = "show";

/// Smooth-scroll links, scroll-spy highlighting and the mobile menu toggle.
/// Links and sections are looked up when events fire, so the controller can
/// be bound before the content is rendered.
#[derive(Debug, Clone, Default)]
pub struct NavController {
    hamburger: Option<NodeId>,
    menu: Option<NodeId>,
}

impl NavController {
    pub fn bind(surface: &dyn Surface) -> Self {
        NavController {
            hamburger: surface.element_by_id("hamburger"),
            menu: surface.element_by_id("nav-menu"),
        }
    }

    pub fn is_link(&self, surface: &dyn Surface, node: NodeId) -> bool {
        surface.has_class(node, "nav-link")
    }

    pub fn is_hamburger(&self, node: NodeId) -> bool {
        self.hamburger == Some(node)
    }

    /// Handle a click on a nav link: the default navigation is always
    /// suppressed and the `#fragment` target, when it exists, scrolled to.
    pub fn on_link_click(&self, surface: &mut dyn Surface, link: NodeId) -> bool {
        let target = surface
            .attribute(link, "href")
            .and_then(|href| href.strip_prefix('#').map(str::to_string))
            .filter(|id| !id.is_empty())
            .and_then(|id| surface.element_by_id(&id));
        if let Some(section) = target {
            surface.scroll_into_view(section);
        }
        true
    }

    /// Id of the section the viewport is in. Sections are scanned in document
    /// order and every qualifying one replaces the previous candidate.
    pub fn current_section(surface: &dyn Surface) -> Option<String> {
        let y = surface.scroll_y();
        let mut current = None;
        for section in surface.elements_by_tag("section") {
            if y >= surface.offset_top(section) - HEADER_OFFSET {
                current = surface.attribute(section, "id");
            }
        }
        current
    }

    /// Re-mark the active link after a scroll. Returns the active section.
    pub fn on_scroll(&self, surface: &mut dyn Surface) -> Option<String> {
        let current = Self::current_section(surface);
        let wanted = format!("#{}", current.as_deref().unwrap_or(""));
        for link in surface.elements_by_class("nav-link") {
            surface.remove_class(link, ACTIVE_CLASS);
            if surface.attribute(link, "href").as_deref() == Some(wanted.as_str()) {
                surface.add_class(link, ACTIVE_CLASS);
            }
        }
        current
    }

    /// Toggle the mobile menu. `None` when the toggle or menu is missing.
    pub fn on_hamburger_click(&self, surface: &mut dyn Surface) -> Option<bool> {
        let (Some(_), Some(menu)) = (self.hamburger, self.menu) else {
            return None;
        };
        Some(surface.toggle_class(menu, MENU_OPEN_CLASS))
    }
}
