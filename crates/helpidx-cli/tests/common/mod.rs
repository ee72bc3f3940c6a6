#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;
use std::time::Duration;

#[allow(dead_code)]
pub const CMD_TIMEOUT: Duration = Duration::from_secs(15);

/// Create a `helpidx` command isolated from the caller's environment.
#[allow(dead_code)]
pub fn helpidx_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("helpidx"));
    cmd.timeout(CMD_TIMEOUT);
    cmd.env_remove("HELPIDX_ROOT");
    cmd.env_remove("HELPIDX_OUTPUT");
    cmd.env_remove("HELPIDX_CONFIG");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Lay out a documentation tree with the two default concept listings.
#[allow(dead_code)]
pub fn write_doc_tree(root: &Path, examples: &str, man: &str) {
    let tex = root.join("docs/tex");
    fs::create_dir_all(&tex).expect("create docs/tex");
    fs::write(tex.join("exampleconcepts"), examples).expect("write exampleconcepts");
    fs::write(tex.join("manconcepts"), man).expect("write manconcepts");
}
