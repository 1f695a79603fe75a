use rocket::serde::json::Json;
use rocket::State;
use rocket_dyn_templates::Template;
use serde_json::{json, Value};

use crate::assemble;
use crate::config::FolioConfig;
use crate::loader::ContentLoader;

// ── Homepage ───────────────────────────────────────────

#[get("/")]
pub async fn homepage(loader: &State<ContentLoader>, config: &State<FolioConfig>) -> Template {
    let doc = loader.load().await;
    let page = assemble::assemble_now(&doc);
    let description = doc
        .hero
        .as_ref()
        .map(|h| h.subtitle.clone())
        .unwrap_or_default();

    Template::render(
        "index",
        json!({
            "site_title": config.site_title,
            "description": description,
            "nav": page.nav,
            "content": page.content,
            "year": page.year,
        }),
    )
}

// ── Health ─────────────────────────────────────────────

#[get("/health")]
pub fn health(loader: &State<ContentLoader>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "content_source": loader.source_kind(),
    }))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![homepage, health]
}
