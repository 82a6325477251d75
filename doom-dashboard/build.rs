use std::env;
use std::fs;
use std::path::Path;

const DATASET_HEADER: &str =
    "ISO,Start Year,Disaster Type,Total Deaths,Total Affected,Total Damages ('000 US$)\n";
const EMPTY_BOUNDARIES: &str = r#"{"type":"FeatureCollection","features":[]}"#;

/// Copy a fixture into OUT_DIR for include_str, or write `fallback`.
fn stage(out_dir: &Path, name: &str, fallback: &str) {
    let src = Path::new("../fixtures").join(name);
    let dest = out_dir.join(name);
    if src.exists() {
        fs::copy(&src, &dest).unwrap();
    } else {
        fs::write(&dest, fallback).unwrap();
    }
    println!("cargo:rerun-if-changed=../fixtures/{}", name);
}

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let out_dir = Path::new(&out_dir);

    stage(out_dir, "data.csv", DATASET_HEADER);
    stage(out_dir, "countries.geo.json", EMPTY_BOUNDARIES);

    println!("cargo:rerun-if-changed=build.rs");
}
