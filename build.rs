//! Embeds the build number, timestamp and profile for `build_info`

use std::fs;
use std::io;
use std::path::Path;

const BUILD_NUMBER_FILE: &str = "build_number.txt";

/// Read the stored build number, store its successor and return it
fn next_build_number(path: &Path) -> io::Result<u64> {
    let previous = match fs::read_to_string(path) {
        Ok(text) => text.trim().parse().unwrap_or(0),
        Err(e) if e.kind() == io::ErrorKind::NotFound => 0,
        Err(e) => return Err(e),
    };
    let next = previous + 1;
    fs::write(path, next.to_string())?;
    Ok(next)
}

fn main() -> io::Result<()> {
    println!("cargo:rerun-if-changed=src");

    let build_number = next_build_number(Path::new(BUILD_NUMBER_FILE))?;
    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "unknown".to_string());

    println!("cargo:rustc-env=FITCALC_BUILD_NUMBER={}", build_number);
    println!("cargo:rustc-env=FITCALC_BUILD_TIMESTAMP={}", timestamp);
    println!("cargo:rustc-env=FITCALC_BUILD_PROFILE={}", profile);
    Ok(())
}
