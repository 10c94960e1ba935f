use std::env;
use std::fs;
use std::path::Path;
use vergen::{BuildBuilder, CargoBuilder, Emitter, RustcBuilder};
use vergen_gitcl::{Emitter as GitEmitter, GitclBuilder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let build = BuildBuilder::default().build_timestamp(true).build()?;

    let cargo = CargoBuilder::default()
        .opt_level(true)
        .target_triple(true)
        .build()?;

    let rustc = RustcBuilder::default()
        .semver(true)
        .channel(true)
        .build()?;

    // Git metadata is optional; outside a checkout gitcl only warns
    let gitcl = GitclBuilder::default()
        .sha(true)
        .branch(true)
        .commit_timestamp(true)
        .dirty(true)
        .build()?;

    Emitter::default()
        .add_instructions(&build)?
        .add_instructions(&cargo)?
        .add_instructions(&rustc)?
        .emit()?;

    GitEmitter::default().add_instructions(&gitcl)?.emit()?;

    copy_configs()?;

    Ok(())
}

/// Copies profile files next to the binary, where `AppConfig::load` looks first
///
/// Release builds ship only `release.toml`; debug builds get every profile.
fn copy_configs() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = env::var("OUT_DIR")?;
    let profile = env::var("PROFILE")?;

    // OUT_DIR is target/<profile>/build/<pkg>-<hash>/out
    let target_dir = Path::new(&out_dir)
        .ancestors()
        .nth(3)
        .ok_or("Could not determine target directory")?;

    let config_out_dir = target_dir.join("config");
    fs::create_dir_all(&config_out_dir)?;

    let profiles: &[&str] = if profile == "release" {
        &["release"]
    } else {
        &["debug", "release"]
    };

    for name in profiles {
        let file = format!("{}.toml", name);
        let source = Path::new("config").join(&file);
        println!("cargo:rerun-if-changed={}", source.display());
        if source.exists() {
            fs::copy(&source, config_out_dir.join(&file))?;
        }
    }

    Ok(())
}
