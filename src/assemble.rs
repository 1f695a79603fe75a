use chrono::Datelike;
use log::warn;
use serde::Serialize;

use crate::models::content::ContentDocument;
use crate::render;
use crate::surface::Surface;

/// Page sections in navigation order: (element id, nav label).
pub const SECTIONS: [(&str, &str); 6] = [
    ("home", "Home"),
    ("timeline", "Timeline"),
    ("music", "Music"),
    ("art", "Art"),
    ("blog", "Blog"),
    ("contact", "Contact"),
];

/// Everything the page needs injected: nav links, all sections, footer year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssembledPage {
    pub nav: String,
    pub content: String,
    pub year: i32,
}

pub fn build_nav() -> String {
    let links: String = SECTIONS
        .iter()
        .map(|(id, label)| {
            format!(
                "<li><a href=\"#{}\" class=\"nav-link\">{}</a></li>",
                id, label
            )
        })
        .collect();
    format!("<ul class=\"nav-list\">{}</ul>", links)
}

fn join<T>(items: &[T], fragment: fn(&T) -> String) -> String {
    items.iter().map(fragment).collect()
}

fn section(id: &str, title: Option<&str>, body: String) -> String {
    let heading = title
        .map(|t| format!("<h2 class=\"section-title\">{}</h2>", t))
        .unwrap_or_default();
    format!(
        "<section id=\"{}\" class=\"section section-{}\">{}{}</section>",
        id, id, heading, body
    )
}

pub fn build_sections(doc: &ContentDocument) -> String {
    let hero = doc.hero.as_ref().map(render::render_hero).unwrap_or_default();
    let contact = doc
        .contact
        .as_ref()
        .map(render::render_contact)
        .unwrap_or_default();

    [
        section(
            "home",
            None,
            format!(
                "{}<div class=\"showcase-grid\">{}</div>",
                hero,
                join(&doc.showcase, render::render_card)
            ),
        ),
        section(
            "timeline",
            Some("Timeline"),
            format!(
                "<div class=\"timeline\">{}</div>",
                join(&doc.timeline, render::render_timeline)
            ),
        ),
        section(
            "music",
            Some("Music"),
            format!(
                "<div class=\"music-grid\">{}</div>",
                join(&doc.music, render::render_music)
            ),
        ),
        section(
            "art",
            Some("Art"),
            format!(
                "<div class=\"art-grid\">{}</div>",
                join(&doc.art, render::render_art)
            ),
        ),
        section(
            "blog",
            Some("Blog"),
            format!(
                "<div class=\"blog-list\">{}</div>",
                join(&doc.blog, render::render_blog)
            ),
        ),
        section("contact", Some("Contact"), contact),
    ]
    .concat()
}

pub fn assemble(doc: &ContentDocument, year: i32) -> AssembledPage {
    AssembledPage {
        nav: build_nav(),
        content: build_sections(doc),
        year,
    }
}

/// `assemble` stamped with the current local year.
pub fn assemble_now(doc: &ContentDocument) -> AssembledPage {
    assemble(doc, chrono::Local::now().year())
}

/// Write the page into the surface, replacing whatever was there.
/// Missing containers are skipped.
pub fn apply(surface: &mut dyn Surface, page: &AssembledPage) {
    match surface.element_by_id("nav-menu") {
        Some(nav) => surface.set_inner_html(nav, &page.nav),
        None => warn!("No #nav-menu element; navigation not rendered"),
    }
    match surface.element_by_id("content") {
        Some(content) => surface.set_inner_html(content, &page.content),
        None => warn!("No #content element; sections not rendered"),
    }
    if let Some(year) = surface.element_by_id("year") {
        surface.set_text(year, &page.year.to_string());
    }
}
