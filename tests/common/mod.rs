#![allow(dead_code)]

use assert_cmd::Command;

pub const NPUB: &str = "npub1srf6g8v2qpnecqg9l2kzehmkg0ym5f5rtnlsj6lhl8r6pmhger7q5mtt3q";
pub const NPUB_HEX: &str = "80d3a41d8a00679c0105faac2cdf7643c9ba26835cff096bf7f9c7a0eee8c8fc";

pub fn notescan_cmd() -> Command {
    let mut cmd = Command::cargo_bin("notescan").unwrap();
    cmd.env_remove("NOTESCAN_CONFIG");
    cmd.env_remove("RUST_LOG");
    cmd
}
