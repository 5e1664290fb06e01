//! Trunk post-build hook: make the staged page load its script and wasm
//! module relative to wherever it is served from.

use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process;

/// Output page name, as configured in Trunk.toml.
const STAGED_HTML: &str = "route-map.html";

const RELATIVE_PATHS: [(&str, &str); 2] = [
    ("/route-map-engine.js", "./route-map-engine.js"),
    ("/route-map-engine_bg.wasm", "./route-map-engine_bg.wasm"),
];

fn main() {
    if let Err(err) = run() {
        eprintln!("html_config: {err}");
        process::exit(1);
    }
}

fn run() -> io::Result<()> {
    let staging_dir = env::var("TRUNK_STAGING_DIR")
        .map_err(|_| io::Error::new(io::ErrorKind::NotFound, "TRUNK_STAGING_DIR is not set"))?;
    let staged_html_path = PathBuf::from(staging_dir).join(STAGED_HTML);

    let html = fs::read_to_string(&staged_html_path)?;
    fs::write(&staged_html_path, make_paths_relative(&html))
}

fn make_paths_relative(html: &str) -> String {
    RELATIVE_PATHS
        .iter()
        .fold(html.to_string(), |page, (absolute, relative)| {
            page.replace(absolute, relative)
        })
}
