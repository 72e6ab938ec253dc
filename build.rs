use camino::Utf8Path;
use formrelay_cfg::Config;
use std::{error::Error, fs};

fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-changed=formrelay-cfg/src/lib.rs");
    let cfg = Config::default();

    let demos = Utf8Path::new("demos");
    fs::create_dir_all(demos)?;
    let toml = toml::to_string(&cfg)?;
    fs::write(demos.join("config.toml"), toml)?;

    Ok(())
}
