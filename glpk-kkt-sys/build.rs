use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-env-changed=GLPK_HOME");

    // GLPK is usually installed system-wide; GLPK_HOME points at a custom prefix
    if let Ok(glpk_home) = env::var("GLPK_HOME") {
        let lib_path = PathBuf::from(&glpk_home).join("lib");
        if !lib_path.exists() {
            panic!("GLPK library directory not found at: {}", lib_path.display());
        }

        println!("cargo:rustc-link-search=native={}", lib_path.display());

        if cfg!(target_os = "macos") || cfg!(target_os = "linux") {
            println!("cargo:rustc-link-arg=-Wl,-rpath,{}", lib_path.display());
        }
    }

    println!("cargo:rustc-link-lib=dylib=glpk");
}
