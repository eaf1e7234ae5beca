//! Build script for hyperlet-cri
//!
//! Compiles the CRI proto definitions.

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tonic_build::configure()
        .build_server(true)
        .build_client(true) // used by the end-to-end tests
        .compile(&["proto/runtime.proto"], &["proto"])?;

    println!("cargo:rerun-if-changed=proto/runtime.proto");

    Ok(())
}
