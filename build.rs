use std::env;

fn main() {
    if env::var("CARGO_CFG_TARGET_OS").unwrap_or_default() == "macos" {
        // SkyLight is a private framework and is not on the default search path.
        println!("cargo:rustc-link-search=framework=/System/Library/PrivateFrameworks");
        println!("cargo:rustc-link-lib=framework=SkyLight");
        println!("cargo:rustc-link-lib=framework=ColorSync");
        println!("cargo:rustc-link-lib=framework=CoreFoundation");
        println!("cargo:rustc-link-lib=framework=AppKit");
    }
    println!("cargo:rerun-if-changed=build.rs");
}
