use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Get a Command for nodeplan
pub fn nodeplan() -> Command {
    cargo_bin_cmd!("nodeplan")
}

/// nodeplan run from `dir`, isolated from the user's config and environment
pub fn nodeplan_in(dir: &Path) -> Command {
    let mut cmd = nodeplan();
    cmd.current_dir(dir)
        .env("NODEPLAN_CONFIG_DIR", dir.join("config"))
        .env_remove("NODEPLAN_NETWORK")
        .env_remove("NODEPLAN_OWNED")
        .env_remove("NODEPLAN_LOG");
    cmd
}

/// The sample network shipped in `demos/`
#[allow(dead_code)]
pub fn demo_network() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("demos")
        .join("velia.toml")
}

/// Copy the sample network into `dir` as `network.toml` with an owned list
#[allow(dead_code)]
pub fn setup_demo(dir: &Path, owned: &str) {
    fs::copy(demo_network(), dir.join("network.toml")).unwrap();
    fs::write(dir.join("owned"), owned).unwrap();
}

#[allow(dead_code)]
pub const DEMO_OWNED: &str = "\
Bartali Farm
Bartali Farm: Farming -- Velia
Toscani Farm
";
