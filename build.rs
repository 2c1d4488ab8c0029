use std::{
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Config {
    name: String,
    product_name: String,
    company: String,
    version: String,
    program: String,
    entry_point: String,
    #[serde(default)]
    install_dir: String,
}

fn main() {
    let out_dir = std::env::var("OUT_DIR").expect("OUT_DIR not set");
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set");
    let config = load_config(Path::new(&manifest_dir)).unwrap_or_else(|err| {
        panic!("failed to load config.toml: {err}");
    });

    if let Err(err) = write_config_rs(&PathBuf::from(&out_dir), &config) {
        panic!("failed to write config: {err}");
    }
}

fn load_config(manifest_dir: &Path) -> io::Result<Config> {
    let config_path = manifest_dir.join("config.toml");
    println!("cargo:rerun-if-changed={}", config_path.display());
    let contents = fs::read_to_string(&config_path)?;
    let cfg: Config = toml::from_str(&contents)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
    Ok(cfg)
}

fn write_config_rs(out_dir: &Path, config: &Config) -> io::Result<()> {
    let out_path = out_dir.join("storygrid_config.rs");
    let mut file = File::create(&out_path)?;
    writeln!(file, "pub const NAME: &str = {:?};", config.name)?;
    writeln!(file, "pub const PRODUCT_NAME: &str = {:?};", config.product_name)?;
    writeln!(file, "pub const COMPANY: &str = {:?};", config.company)?;
    writeln!(file, "pub const VERSION: &str = {:?};", config.version)?;
    writeln!(file, "pub const PROGRAM: &str = {:?};", config.program)?;
    writeln!(file, "pub const ENTRY_POINT: &str = {:?};", config.entry_point)?;
    writeln!(file, "pub const INSTALL_DIR: &str = {:?};", config.install_dir)?;
    Ok(())
}
