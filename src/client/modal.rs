use log::debug;

use crate::surface::{NodeId, Surface};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    Hidden,
    Shown,
}

/// Full-size image overlay for art thumbnails.
#[derive(Debug, Clone)]
pub struct ModalViewer {
    overlay: NodeId,
    image: NodeId,
    caption: Option<NodeId>,
    close: Option<NodeId>,
    thumbnails: Vec<NodeId>,
    state: ModalState,
}

impl ModalViewer {
    /// Bind to the overlay markup and every rendered `.art-thumb`.
    /// `None` when the overlay or its image element is missing.
    pub fn bind(surface: &dyn Surface) -> Option<Self> {
        let overlay = surface.element_by_id("modal")?;
        let image = surface.element_by_id("modal-img")?;
        let thumbnails = surface.elements_by_class("art-thumb");
        debug!("Modal viewer bound to {} thumbnail(s)", thumbnails.len());
        Some(ModalViewer {
            overlay,
            image,
            caption: surface.element_by_id("modal-caption"),
            close: surface.element_by_id("modal-close"),
            thumbnails,
            state: ModalState::Hidden,
        })
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn thumbnails(&self) -> &[NodeId] {
        &self.thumbnails
    }

    pub fn open(&mut self, surface: &mut dyn Surface, thumb: NodeId) {
        let full = surface
            .attribute(thumb, "data-full")
            .or_else(|| surface.attribute(thumb, "src"))
            .unwrap_or_default();
        surface.set_attribute(self.overlay, "style", "display:block");
        surface.set_attribute(self.image, "src", &full);
        if let Some(caption) = self.caption {
            let alt = surface.attribute(thumb, "alt").unwrap_or_default();
            surface.set_text(caption, &alt);
        }
        self.state = ModalState::Shown;
    }

    pub fn close(&mut self, surface: &mut dyn Surface) {
        surface.set_attribute(self.overlay, "style", "display:none");
        self.state = ModalState::Hidden;
    }

    /// Route a click. Thumbnails open the overlay; the close control or the
    /// backdrop itself (not the image or caption) closes it.
    pub fn on_click(&mut self, surface: &mut dyn Surface, target: NodeId) -> bool {
        if self.thumbnails.contains(&target) {
            self.open(surface, target);
            return true;
        }
        if Some(target) == self.close || target == self.overlay {
            self.close(surface);
            return true;
        }
        false
    }
}
