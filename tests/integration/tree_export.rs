use std::fs;

use m3u_tools::tree::{ExportOptions, Node};
use m3u_tools::types::NodeKind;

use crate::integration::support::{canonical_temp, music_fixture, playlist_fixture, sorted};

#[test]
fn directory_export_lists_subdirectory_as_itself() {
    let (_temp, root) = canonical_temp();
    let music = music_fixture(&root);

    let tree = Node::open(&music).unwrap();
    let lines = tree.export(&ExportOptions {
        base: Some(music.clone()),
        ..ExportOptions::default()
    });

    assert_eq!(sorted(lines), vec!["a.mp3", "b.mp3", "sub"]);
}

#[test]
fn directory_export_flattens_subdirectory() {
    let (_temp, root) = canonical_temp();
    let music = music_fixture(&root);

    let tree = Node::open(&music).unwrap();
    let lines = tree.export(&ExportOptions {
        base: Some(music.clone()),
        flatten_dirs: true,
        ..ExportOptions::default()
    });

    assert_eq!(sorted(lines), vec!["a.mp3", "b.mp3", "sub/c.mp3"]);
}

#[test]
fn absolute_flattened_directory_export_lists_every_leaf_once() {
    let (_temp, root) = canonical_temp();
    let music = music_fixture(&root);
    fs::create_dir_all(music.join("sub").join("deeper")).unwrap();
    fs::write(music.join("sub").join("deeper").join("d.mp3"), "").unwrap();

    let tree = Node::open(&music).unwrap();
    let lines = tree.export(&ExportOptions {
        flatten_dirs: true,
        ..ExportOptions::default()
    });

    let expected: Vec<String> = vec![
        music.join("a.mp3"),
        music.join("b.mp3"),
        music.join("sub").join("c.mp3"),
        music.join("sub").join("deeper").join("d.mp3"),
    ]
    .into_iter()
    .map(|p| p.to_string_lossy().into_owned())
    .collect();
    assert_eq!(sorted(lines), expected);
}

#[test]
fn playlist_export_flattening_toggle() {
    let (_temp, root) = canonical_temp();
    let playlist = playlist_fixture(&root);
    let tree = Node::open(&playlist).unwrap();

    let flat = tree.export(&ExportOptions {
        base: Some(playlist.clone()),
        flatten_playlists: true,
        ..ExportOptions::default()
    });
    assert_eq!(flat, vec!["song1.mp3", "song2.mp3"]);

    let nested = tree.export(&ExportOptions {
        base: Some(playlist.clone()),
        ..ExportOptions::default()
    });
    assert_eq!(nested, vec!["song1.mp3", "nested.m3u"]);
}

#[test]
fn playlist_export_relative_to_other_directory() {
    let (_temp, root) = canonical_temp();
    let playlist = playlist_fixture(&root);
    let exports = root.join("exports");
    fs::create_dir(&exports).unwrap();

    let tree = Node::open(&playlist).unwrap();
    let lines = tree.export(&ExportOptions {
        base: Some(exports.join("mix.m3u")),
        ..ExportOptions::default()
    });

    assert_eq!(lines, vec!["../song1.mp3", "../nested.m3u"]);
}

#[test]
fn playlist_lines_each_produce_one_entry() {
    let (_temp, root) = canonical_temp();
    let names = ["t1.flac", "t2.flac", "t3.flac", "t4.flac"];
    for name in names {
        fs::write(root.join(name), "").unwrap();
    }
    fs::write(root.join("four.m3u"), names.join("\n")).unwrap();

    let tree = Node::open(root.join("four.m3u")).unwrap();
    let lines = tree.export(&ExportOptions {
        base: Some(root.join("four.m3u")),
        ..ExportOptions::default()
    });

    assert_eq!(lines, names.to_vec());
}

#[test]
fn cyclic_playlist_export_terminates() {
    let (_temp, root) = canonical_temp();
    fs::write(root.join("x.mp3"), "").unwrap();
    fs::write(root.join("left.m3u"), "x.mp3\nright.m3u\n").unwrap();
    fs::write(root.join("right.m3u"), "left.m3u\n").unwrap();

    let tree = Node::open(root.join("left.m3u")).unwrap();
    let right = &tree.children()[1];
    assert_eq!(right.kind(), NodeKind::Playlist);
    let left_again = &right.children()[0];
    assert!(left_again.children().is_empty());

    let lines = tree.export(&ExportOptions {
        base: Some(root.join("left.m3u")),
        flatten_playlists: true,
        ..ExportOptions::default()
    });
    assert_eq!(lines, vec!["x.mp3"]);
}
