use std::fs;

use m3u_tools::io::write_lines;
use m3u_tools::tree::{ExportOptions, Node};

use crate::integration::support::{canonical_temp, music_fixture, playlist_fixture};

#[test]
fn relative_export_reloads_to_same_lines() {
    let (_temp, root) = canonical_temp();
    let playlist = playlist_fixture(&root);
    let target = root.join("copy.m3u");
    let options = ExportOptions {
        base: Some(target.clone()),
        ..ExportOptions::default()
    };

    let first = Node::open(&playlist).unwrap().export(&options);
    write_lines(&target, &first).unwrap();
    let second = Node::open(&target).unwrap().export(&options);

    assert_eq!(first, second);
}

#[test]
fn absolute_flattened_export_reloads_to_same_lines() {
    let (_temp, root) = canonical_temp();
    let music = music_fixture(&root);
    let out_dir = root.join("out");
    fs::create_dir(&out_dir).unwrap();
    let target = out_dir.join("all.m3u");
    let options = ExportOptions {
        flatten_dirs: true,
        ..ExportOptions::default()
    };

    let first = Node::open(&music).unwrap().export(&options);
    write_lines(&target, &first).unwrap();
    let second = Node::open(&target).unwrap().export(&options);

    assert_eq!(first.len(), 3);
    assert_eq!(first, second);
}
