fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Plugin libraries are only accepted from the same compiler.
    let rustc = rustc_version::version_meta()?;
    println!(
        "cargo:rustc-env=NAMEFORGE_RUSTC_VERSION={}",
        rustc.short_version_string
    );
    println!("cargo:rerun-if-changed=build.rs");
    Ok(())
}
