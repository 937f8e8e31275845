
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

/// Writes a config file pointing the search at `endpoint`; returns its path.
pub fn write_config(dir: &Path, endpoint: &str) -> String {
    let path = dir.join("imgdl.toml");
    fs::write(&path, format!("[search]\nendpoint = \"{}\"\n", endpoint)).unwrap();
    path.to_string_lossy().into_owned()
}

pub fn imgdl(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_imgdl"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("run imgdl")
}
