use rocket::serde::json::Json;
use rocket::State;

use crate::assemble::{self, AssembledPage};
use crate::loader::ContentLoader;
use crate::models::content::ContentDocument;

/// The resolved content document (validated, or the fallback).
#[get("/content")]
pub async fn content(loader: &State<ContentLoader>) -> Json<ContentDocument> {
    Json(loader.load().await)
}

/// Pre-rendered fragments for clients that inject them themselves.
#[get("/page")]
pub async fn page(loader: &State<ContentLoader>) -> Json<AssembledPage> {
    let doc = loader.load().await;
    Json(assemble::assemble_now(&doc))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![content, page]
}
