use std::{
    io,
    path::{Path, PathBuf},
    process::Command,
};

fn main() {
    build_wasm_pkg("demo/", "./static/demo");
}

fn build_wasm_pkg(in_dir: &str, pkg_out_dir: &str) {
    println!("cargo:rerun-if-changed={}", in_dir);
    println!("cargo:rerun-if-env-changed=SKIP_CLIENT_BUILD");
    let in_dir = Path::new(in_dir);

    let build_dir = PathBuf::from(std::env::var("OUT_DIR").expect("cargo sets OUT_DIR"));
    let out_dir = build_dir.join("pkg");
    let profile = std::env::var("PROFILE").unwrap_or_default();

    if std::env::var("SKIP_CLIENT_BUILD").is_ok() {
        return;
    }

    // build the web client
    let mut build_wasm = Command::new("wasm-pack");
    build_wasm.arg("build");

    if profile == "release" {
        build_wasm.arg("--release");
    } else {
        build_wasm.arg("--debug");
    }

    build_wasm.arg("--out-dir").arg(&out_dir);
    build_wasm.arg("--out-name").arg("demo");
    build_wasm.arg("--target").arg("web");
    build_wasm.env("CARGO_TARGET_DIR", build_dir.join("target"));
    build_wasm.current_dir(in_dir);

    match build_wasm.status() {
        Ok(status) if status.success() => {}
        Ok(status) => {
            println!("cargo:warning=building web client failed: {}", status);
            return;
        }
        Err(e) => {
            println!("cargo:warning=skipping web client build, cannot run wasm-pack: {}", e);
            return;
        }
    }

    // copy client files to server
    let server_asset_dir = Path::new(pkg_out_dir);
    let copied = std::fs::create_dir_all(server_asset_dir)
        .and_then(|_| copy_dir(&out_dir, server_asset_dir))
        .and_then(|_| copy_dir(&in_dir.join("static"), server_asset_dir));
    if let Err(e) = copied {
        panic!("failed to copy web client into {}: {}", pkg_out_dir, e);
    }
}

fn copy_dir(src: &Path, dest: &Path) -> io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let path = entry?.path();
        let dest_path = dest.join(path.file_name().unwrap_or_default());
        if path.is_dir() {
            std::fs::create_dir_all(&dest_path)?;
            copy_dir(&path, &dest_path)?;
        } else {
            std::fs::copy(&path, &dest_path)?;
        }
    }
    Ok(())
}
