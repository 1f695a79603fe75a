use log::{error, info, warn};
use std::fs;
use std::path::Path;
use std::process;

/// Directories that will be created if missing
const REQUIRED_DIRS: &[&str] = &["website", "website/static", "website/static/js", "website/templates"];

/// The page cannot be served without the shell template
const CRITICAL_TEMPLATES: &[&str] = &["website/templates/index.html.tera"];

/// Optional assets: the page degrades without them
const OPTIONAL_STATIC: &[(&str, &str)] = &[
    ("website/static/content.json", "the built-in fallback content will be served"),
    ("website/static/js/site.js", "navigation and image viewer will be inactive"),
];

/// Run all boot checks. Call this before Rocket launches.
/// Creates missing directories, warns about missing assets, and
/// aborts if the shell template is absent.
pub fn run() {
    info!("Folio boot check starting...");

    let (warnings, errors) = check(Path::new("."));

    if errors > 0 {
        error!(
            "Boot check FAILED: {} error(s), {} warning(s). Aborting.",
            errors, warnings
        );
        process::exit(1);
    }

    if warnings > 0 {
        warn!(
            "Boot check passed with {} warning(s). Some features may not work correctly.",
            warnings
        );
    } else {
        info!("Boot check passed. All systems go.");
    }
}

/// Inspect the site layout under `root`. Returns (warnings, errors).
pub fn check(root: &Path) -> (u32, u32) {
    let mut warnings = 0u32;
    let mut errors = 0u32;

    // ── 1. Directories ─────────────────────────────────
    for dir in REQUIRED_DIRS {
        let path = root.join(dir);
        if !path.exists() {
            match fs::create_dir_all(&path) {
                Ok(_) => info!("  Created directory: {}", dir),
                Err(e) => {
                    error!("  FAILED to create directory {}: {}", dir, e);
                    errors += 1;
                }
            }
        }
    }

    // ── 2. Shell template ──────────────────────────────
    for file in CRITICAL_TEMPLATES {
        if !root.join(file).exists() {
            error!("  MISSING critical template: {}", file);
            errors += 1;
        }
    }

    // ── 3. Content and client script ───────────────────
    for (file, effect) in OPTIONAL_STATIC {
        if !root.join(file).exists() {
            warn!("  Missing asset: {} ({})", file, effect);
            warnings += 1;
        }
    }

    // ── 4. Rocket.toml exists ───────────────────────────
    if !root.join("Rocket.toml").exists() {
        warn!("  Rocket.toml not found, using default config");
        warnings += 1;
    }

    (warnings, errors)
}
