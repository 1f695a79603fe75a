#[macro_use]
extern crate rocket;

use log::info;
use rocket::figment::Figment;
use rocket::fs::FileServer;
use rocket::response::content::RawHtml;
use rocket::{Build, Rocket};
use rocket_dyn_templates::Template;

mod assemble;
mod boot;
mod client;
mod config;
mod loader;
mod models;
mod render;
mod routes;
mod surface;


use config::FolioConfig;
use loader::ContentLoader;

#[catch(404)]
fn not_found() -> RawHtml<String> {
    RawHtml("<html><body style='font-family:sans-serif;text-align:center;padding:80px'><h1>404</h1><p>Page not found.</p><a href='/'>← Home</a></body></html>".to_string())
}

#[catch(500)]
fn server_error() -> RawHtml<String> {
    RawHtml("<html><body style='font-family:sans-serif;text-align:center;padding:80px'><h1>500</h1><p>Internal server error.</p><a href='/'>← Home</a></body></html>".to_string())
}

/// Assemble the Rocket instance from a figment (Rocket.toml + env by default).
pub(crate) fn build(figment: Figment) -> Rocket<Build> {
    let config = FolioConfig::from_figment(&figment);
    let loader = ContentLoader::from_config(&config);

    info!(
        "Serving content from {} source ({})",
        loader.source_kind(),
        config.content_url.as_deref().unwrap_or(&config.content_path)
    );

    rocket::custom(figment)
        .manage(loader)
        .manage(config)
        .attach(Template::fairing())
        .mount("/static", FileServer::from("website/static"))
        .mount("/", routes::public::routes())
        .mount("/api", routes::api::routes())
        .register("/", catchers![not_found, server_error])
}

#[launch]
fn rocket() -> _ {
    env_logger::init();

    // Boot check — verify/create directories, validate the shell template
    boot::run();

    build(rocket::Config::figment())
}
