// build.rs
// Build script for locating and linking the native raylib library

use std::env;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-env-changed=RAYLIB_LIB_DIR");
    println!("cargo:rerun-if-env-changed=RAYLIB_STATIC");

    // Only the `native` feature talks to the real library
    if env::var("CARGO_FEATURE_NATIVE").is_err() {
        return;
    }

    match env::var("RAYLIB_LIB_DIR") {
        Ok(dir) => {
            if !Path::new(&dir).exists() {
                eprintln!("warning: RAYLIB_LIB_DIR does not exist: {}", dir);
                eprintln!("hint: Point RAYLIB_LIB_DIR at the directory containing libraylib");
            }
            println!("cargo:rustc-link-search=native={}", dir);
        }
        Err(_) => {
            eprintln!("info: RAYLIB_LIB_DIR not set, relying on the system linker search path");
        }
    }

    let kind = if env::var("RAYLIB_STATIC").is_ok() { "static" } else { "dylib" };
    println!("cargo:rustc-link-lib={}=raylib", kind);

    // A static raylib pulls in the platform libraries it was built against
    if kind == "static" {
        let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
        if target_os == "linux" {
            for lib in ["GL", "m", "pthread", "dl", "rt", "X11"] {
                println!("cargo:rustc-link-lib={}", lib);
            }
        } else if target_os == "windows" {
            for lib in ["opengl32", "gdi32", "winmm", "user32", "shell32"] {
                println!("cargo:rustc-link-lib={}", lib);
            }
        } else if target_os == "macos" {
            for framework in ["OpenGL", "Cocoa", "IOKit", "CoreAudio", "CoreVideo"] {
                println!("cargo:rustc-link-lib=framework={}", framework);
            }
        }
    }
}
