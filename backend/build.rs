use std::fs;
use std::path::Path;

/// Copies the trunk output into `static/dist` so `include_dir!` embeds the
/// latest bundle. Without a bundle the checked-in placeholder page is used.
fn main() {
    let out_dir = Path::new("static");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(out_dir);
        fs::create_dir_all(out_dir).expect("create static dir");
        let options = fs_extra::dir::CopyOptions::new().overwrite(true);
        fs_extra::dir::copy(dist_dir, out_dir, &options).expect("copy frontend bundle");
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
