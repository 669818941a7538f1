use std::error::Error;
use std::fs;
use std::path::Path;

/// Embeds the latest frontend build: `../frontend/dist` (from `trunk build`)
/// is copied to `static/dist`, which `main.rs` includes at compile time.
/// Without a frontend build the checked-in placeholder page is kept.
fn main() -> Result<(), Box<dyn Error>> {
    let out_dir = Path::new("static");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.join("index.html").exists() {
        let _ = fs::remove_dir_all(out_dir);
        fs::create_dir_all(out_dir)?;
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true),
        )?;
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
    Ok(())
}
