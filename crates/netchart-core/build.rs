// File: crates/netchart-core/build.rs
// Summary: Link Windows system libraries that the Skia raster backend and ICU need.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW, RegQueryInfoKeyW, etc.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
