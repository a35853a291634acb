// SPDX-License-Identifier: Apache-2.0

use std::process::Command;

fn main() {
    // Tagged releases report clean semver, dev builds carry a hash suffix.
    // Example: v0.2.1 tag → "0.2.1", dev commit → "0.2.1-890abd9"
    let pkg_version = env!("CARGO_PKG_VERSION");

    let on_tag = Command::new("git")
        .args(["describe", "--tags", "--exact-match", "HEAD"])
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false);

    let mut full_version = pkg_version.to_string();
    if !on_tag
        && let Ok(output) = Command::new("git")
            .args(["rev-parse", "--short", "HEAD"])
            .output()
    {
        let hash = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if !hash.is_empty() {
            full_version = format!("{}-{}", pkg_version, hash);
        }
    }

    println!("cargo:rustc-env=PSEUDOVER_VERSION={}", full_version);

    // Re-run if git state changes (new commit or tag)
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/heads/");
    println!("cargo:rerun-if-changed=.git/refs/tags/");
}
