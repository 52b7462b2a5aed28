use std::fs;

use barblocks::{
    blocks::render_path_exists,
    config::PathExistsBlockConfig,
    providers::FileSystemPathProbe,
    types::ColorTag,
};
use tempfile::TempDir;

#[test]
fn existing_file_reports_yes() {
    let tmp = TempDir::new().expect("tempdir should be created");
    let marker = tmp.path().join("mounted");
    fs::write(&marker, "").expect("marker file");

    let config = PathExistsBlockConfig::new("Backup", marker.to_str().expect("utf-8 path"));
    let out = render_path_exists(&FileSystemPathProbe, &config);

    assert_eq!(out.full_text, "Backup: yes");
    assert_eq!(out.color, Some(ColorTag::Good));
}

#[test]
fn removed_file_flips_to_down_format() {
    let tmp = TempDir::new().expect("tempdir should be created");
    let marker = tmp.path().join("vpn.pid");
    fs::write(&marker, "1234").expect("marker file");

    let config = PathExistsBlockConfig {
        format_down: Some("%title is %status".to_string()),
        ..PathExistsBlockConfig::new("VPN", marker.to_str().expect("utf-8 path"))
    };

    let up = render_path_exists(&FileSystemPathProbe, &config);
    assert_eq!(up.full_text, "VPN: yes");

    fs::remove_file(&marker).expect("remove marker");
    let down = render_path_exists(&FileSystemPathProbe, &config);
    assert_eq!(down.full_text, "VPN is no");
    assert_eq!(down.color, Some(ColorTag::Bad));
}

#[test]
fn missing_path_without_down_format_uses_primary() {
    let tmp = TempDir::new().expect("tempdir should be created");
    let missing = tmp.path().join("nope");

    let config = PathExistsBlockConfig::new("Mount", missing.to_str().expect("utf-8 path"));
    let out = render_path_exists(&FileSystemPathProbe, &config);

    assert_eq!(out.full_text, "Mount: no");
    assert_eq!(out.color, Some(ColorTag::Bad));
}

#[test]
fn instances_distinguish_multiple_watchers() {
    let tmp = TempDir::new().expect("tempdir should be created");
    let a = tmp.path().join("a");
    let b = tmp.path().join("b");
    fs::create_dir(&a).expect("dir a");

    let a_path = a.to_str().expect("utf-8 path");
    let b_path = b.to_str().expect("utf-8 path");
    let out_a = render_path_exists(&FileSystemPathProbe, &PathExistsBlockConfig::new("X", a_path));
    let out_b = render_path_exists(&FileSystemPathProbe, &PathExistsBlockConfig::new("X", b_path));

    assert_eq!(out_a.instance.as_deref(), Some(a_path));
    assert_eq!(out_b.instance.as_deref(), Some(b_path));
    assert_eq!(out_a.full_text, "X: yes");
    assert_eq!(out_b.full_text, "X: no");
}
