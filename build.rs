use chrono::{SecondsFormat, Utc};

fn main() {
    // read by the footer and logged at server start-up
    let stamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    println!("cargo:rustc-env=BUILD_TIME={stamp}");
    println!("cargo:rerun-if-changed=build.rs");
}
