// Shared build script helper that turns a crate README into its rustdoc front page.
// Include this in build.rs files with: include!("../build_common.rs");
//
// Required imports in the including file:
//   use std::env;
//   use std::fs;
//   use std::path::Path;

/// Write `README_GENERATED.md` into `OUT_DIR` for `#![doc = include_str!(..)]`.
///
/// Links of the form `](src/foo.rs)` are rewritten to `](foo)` so rustdoc
/// resolves them as modules, and `](../../README.md` is pointed at the
/// workspace repository URL. A crate without a README gets a one-line
/// page named after the package so the `include_str!` never dangles.
fn write_rustdoc_readme(crate_dir: &str) {
    println!("cargo:rerun-if-changed=README.md");
    println!("cargo:rerun-if-changed=../../Cargo.toml");

    let readme_path = Path::new(crate_dir).join("README.md");
    let rustdoc_content = match fs::read_to_string(&readme_path) {
        Ok(content) => rewrite_readme_links(&content, workspace_repo_url(crate_dir).as_deref()),
        Err(_) => format!(
            "# {}\n",
            env::var("CARGO_PKG_NAME").unwrap_or_else(|_| "recipebox".to_string())
        ),
    };

    let out_dir = env::var("OUT_DIR").expect("cargo always sets OUT_DIR for build scripts");
    let dest_path = Path::new(&out_dir).join("README_GENERATED.md");
    fs::write(dest_path, rustdoc_content).expect("OUT_DIR is writable");
}

fn rewrite_readme_links(content: &str, repo_url: Option<&str>) -> String {
    let rewritten = content.replace("](src/", "](").replace(".rs)", ")");
    match repo_url {
        Some(url) => rewritten.replace("](../../README.md", &format!("]({url}")),
        None => rewritten,
    }
}

/// Read `repository = "..."` from the workspace manifest.
fn workspace_repo_url(crate_dir: &str) -> Option<String> {
    let workspace_toml = Path::new(crate_dir)
        .parent()? // crates/
        .parent()? // workspace root
        .join("Cargo.toml");

    let content = fs::read_to_string(workspace_toml).ok()?;

    content.lines().map(str::trim).find_map(|line| {
        if !line.starts_with("repository") || !line.contains('=') {
            return None;
        }
        let start = line.find('"')?;
        let end = line.rfind('"')?;
        (start < end).then(|| line[start + 1..end].to_string())
    })
}
