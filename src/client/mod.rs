//! The in-page flow: bind navigation, resolve content, write the sections,
//! then bind the modal viewer to the freshly rendered thumbnails.
//! `Page` dispatches click and scroll events the way the browser event loop
//! does for `website/static/js/site.js`.

pub mod modal;
pub mod nav;

use crate::assemble::{self, AssembledPage};
use crate::loader::ContentLoader;
use crate::models::content::ContentDocument;
use crate::surface::{NodeId, Surface};

use modal::ModalViewer;
use nav::NavController;

pub struct Page<S: Surface> {
    surface: S,
    nav: NavController,
    modal: Option<ModalViewer>,
    assembled: AssembledPage,
}

impl<S: Surface> Page<S> {
    /// Render `doc` into `surface` and wire up the controllers.
    pub fn boot(mut surface: S, doc: &ContentDocument, year: i32) -> Self {
        let nav = NavController::bind(&surface);
        let assembled = assemble::assemble(doc, year);
        assemble::apply(&mut surface, &assembled);
        let modal = ModalViewer::bind(&surface);
        Page {
            surface,
            nav,
            modal,
            assembled,
        }
    }

    /// `boot` with the document resolved by the loader (never fails).
    pub async fn load(surface: S, loader: &ContentLoader, year: i32) -> Self {
        let doc = loader.load().await;
        Page::boot(surface, &doc, year)
    }

    /// Dispatch a click on `target`. Returns whether default navigation was
    /// prevented.
    pub fn click(&mut self, target: NodeId) -> bool {
        if self.nav.is_link(&self.surface, target) {
            return self.nav.on_link_click(&mut self.surface, target);
        }
        if self.nav.is_hamburger(target) {
            self.nav.on_hamburger_click(&mut self.surface);
            return false;
        }
        if let Some(modal) = &mut self.modal {
            modal.on_click(&mut self.surface, target);
        }
        false
    }

    /// Scroll the viewport to `y` and run the scroll handler.
    pub fn scroll(&mut self, y: f64) -> Option<String> {
        self.surface.scroll_to(y);
        self.nav.on_scroll(&mut self.surface)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn modal(&self) -> Option<&ModalViewer> {
        self.modal.as_ref()
    }

    pub fn assembled(&self) -> &AssembledPage {
        &self.assembled
    }
}
