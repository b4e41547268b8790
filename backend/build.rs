use std::fs;
use std::path::Path;

const TRUNK_DIST: &str = "../frontend/dist";
const EMBED_DIR: &str = "static";

/// `include_dir!` embeds `static/dist`; the SPA fallback needs its index.
const EMBED_INDEX: &str = "static/dist/index.html";

fn main() {
    println!("cargo:rerun-if-changed={TRUNK_DIST}");
    println!("cargo:rerun-if-changed={EMBED_INDEX}");

    let trunk_index = Path::new(TRUNK_DIST).join("index.html");
    if trunk_index.is_file() {
        refresh_embedded_site();
    } else if Path::new(TRUNK_DIST).exists() {
        println!("cargo:warning={TRUNK_DIST} has no index.html; keeping the embedded site");
    }

    if !Path::new(EMBED_INDEX).is_file() {
        panic!("{EMBED_INDEX} is missing: run `trunk build` in frontend/ or restore the placeholder page");
    }
}

// Replaces static/dist with the latest trunk build.
fn refresh_embedded_site() {
    let embed_dir = Path::new(EMBED_DIR);
    let stale = embed_dir.join("dist");
    if stale.exists() {
        if let Err(e) = fs::remove_dir_all(&stale) {
            panic!("cannot clear {}: {e}", stale.display());
        }
    }
    if let Err(e) = fs::create_dir_all(embed_dir) {
        panic!("cannot create {}: {e}", embed_dir.display());
    }

    let options = fs_extra::dir::CopyOptions::new().overwrite(true);
    if let Err(e) = fs_extra::dir::copy(TRUNK_DIST, embed_dir, &options) {
        panic!("cannot copy the trunk build from {TRUNK_DIST}: {e}");
    }
}
