use std::fs;

use m3u_tools::config::ConfigLoader;
use m3u_tools::tooling::cli::{CliContext, Commands, ExportArgs, PrintArgs};

use crate::integration::support::{canonical_temp, music_fixture, playlist_fixture};

fn context() -> CliContext {
    CliContext::with_config(ConfigLoader::default())
}

#[test]
fn print_command_returns_tree_text() {
    let (_temp, root) = canonical_temp();
    let playlist = playlist_fixture(&root);

    let output = context()
        .execute(&Commands::Print(PrintArgs {
            file: playlist,
            expand_m3u: true,
            ..PrintArgs::default()
        }))
        .unwrap();

    assert_eq!(
        output,
        "root.m3u\n├── song1.mp3\n└── nested.m3u\n    └── song2.mp3"
    );
}

#[test]
fn export_command_writes_relative_flattened_playlist() {
    let (_temp, root) = canonical_temp();
    let playlist = playlist_fixture(&root);
    let target = root.join("flat.m3u");

    context()
        .execute(&Commands::Export(ExportArgs {
            file: playlist,
            export_path: target.clone(),
            flatten_m3u: true,
            ..ExportArgs::default()
        }))
        .unwrap();

    assert_eq!(fs::read_to_string(&target).unwrap(), "song1.mp3\nsong2.mp3\n");
}

#[test]
fn export_command_forces_m3u_extension() {
    let (_temp, root) = canonical_temp();
    let playlist = playlist_fixture(&root);

    let message = context()
        .execute(&Commands::Export(ExportArgs {
            file: playlist,
            export_path: root.join("flat.txt"),
            ..ExportArgs::default()
        }))
        .unwrap();

    assert!(!root.join("flat.txt").exists());
    assert_eq!(
        fs::read_to_string(root.join("flat.m3u")).unwrap(),
        "song1.mp3\nnested.m3u\n"
    );
    assert!(message.ends_with("flat.m3u"));
}

#[test]
fn export_command_keeps_m3u8_target() {
    let (_temp, root) = canonical_temp();
    let playlist = playlist_fixture(&root);

    context()
        .execute(&Commands::Export(ExportArgs {
            file: playlist,
            export_path: root.join("keep.m3u8"),
            ..ExportArgs::default()
        }))
        .unwrap();

    assert!(root.join("keep.m3u8").is_file());
    assert!(!root.join("keep.m3u").exists());
}

#[test]
fn export_command_into_directory_absolute() {
    let (_temp, root) = canonical_temp();
    let music = music_fixture(&root);
    let out_dir = root.join("exported");
    fs::create_dir(&out_dir).unwrap();

    context()
        .execute(&Commands::Export(ExportArgs {
            file: music.clone(),
            export_path: out_dir.clone(),
            absolute: true,
            flatten_dir: true,
            ..ExportArgs::default()
        }))
        .unwrap();

    let written = fs::read_to_string(out_dir.join("playlist.m3u")).unwrap();
    let mut lines: Vec<&str> = written.lines().collect();
    lines.sort();
    let expected_c = music.join("sub").join("c.mp3").to_string_lossy().into_owned();
    assert_eq!(lines.len(), 3);
    assert!(lines.contains(&expected_c.as_str()));
    assert!(written.ends_with('\n'));
}

#[test]
fn export_command_remove_duplicates_flag() {
    let (_temp, root) = canonical_temp();
    fs::write(root.join("again.mp3"), "").unwrap();
    fs::write(root.join("inner-dup.m3u"), "again.mp3\n").unwrap();
    fs::write(root.join("outer-dup.m3u"), "again.mp3\ninner-dup.m3u\n").unwrap();

    let target = root.join("dedup.m3u");
    context()
        .execute(&Commands::Export(ExportArgs {
            file: root.join("outer-dup.m3u"),
            export_path: target.clone(),
            flatten_m3u: true,
            remove_duplicates: true,
            ..ExportArgs::default()
        }))
        .unwrap();
    assert_eq!(fs::read_to_string(&target).unwrap(), "again.mp3\n");

    context()
        .execute(&Commands::Export(ExportArgs {
            file: root.join("outer-dup.m3u"),
            export_path: target.clone(),
            flatten_m3u: true,
            ..ExportArgs::default()
        }))
        .unwrap();
    assert_eq!(fs::read_to_string(&target).unwrap(), "again.mp3\nagain.mp3\n");
}

#[test]
fn context_new_with_missing_config_file_fails() {
    let (_temp, root) = canonical_temp();
    assert!(CliContext::new(Some(root.join("absent.toml"))).is_err());
}

#[test]
fn context_new_with_config_file_applies_export_name() {
    let (_temp, root) = canonical_temp();
    let config_path = root.join("config.toml");
    fs::write(&config_path, "[export]\nfile_name = \"from-config.m3u\"\n").unwrap();

    let context = CliContext::new(Some(config_path)).unwrap();
    assert_eq!(context.config().export.file_name, "from-config.m3u");
}
