use std::env;
use std::fs;
use std::path::Path;

/// Copies the workspace `config.toml` next to the built binary so that
/// `load_config` finds it without extra flags. Missing config is fine: the
/// backend falls back to its embedded defaults.
fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let (Ok(out_dir), Ok(profile)) = (env::var("OUT_DIR"), env::var("PROFILE")) else {
        return;
    };

    // OUT_DIR looks like target/<profile>/build/admin_backend-xxx/out
    let Some(target_dir) = Path::new(&out_dir)
        .ancestors()
        .find(|p| p.ends_with(&profile))
    else {
        println!("cargo:warning=Could not locate target/{profile}, config.toml not copied");
        return;
    };

    let source_config = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config.toml");
    if !source_config.exists() {
        return;
    }

    if let Err(e) = fs::copy(&source_config, target_dir.join("config.toml")) {
        println!("cargo:warning=Failed to copy config.toml: {e}");
    }
}
