use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use tempfile::tempdir;

use super::*;

fn track(artist: &str, title: &str) -> Track {
    Track {
        path: PathBuf::from(format!("/music/{title}.mp3")),
        title: title.into(),
        artist: artist.into(),
    }
}

#[test]
fn add_tracks_appends_in_supplied_order() {
    let mut lib = Library::new();
    lib.add_tracks([PathBuf::from("/music/one.wav"), PathBuf::from("/music/two.wav")]);

    assert_eq!(lib.tracks.len(), 2);
    assert_eq!(lib.tracks[0].path, PathBuf::from("/music/one.wav"));
    assert_eq!(lib.tracks[1].path, PathBuf::from("/music/two.wav"));
}

#[test]
fn add_tracks_empty_input_is_noop() {
    let mut lib = Library::new();
    lib.add_tracks(Vec::new());
    assert!(lib.tracks.is_empty());
}

#[test]
fn add_tracks_does_not_deduplicate() {
    let mut lib = Library::new();
    let p = PathBuf::from("/music/same.wav");
    lib.add_tracks([p.clone(), p]);
    assert_eq!(lib.tracks.len(), 2);
}

#[test]
fn create_playlist_rejects_blank_names() {
    let mut lib = Library::new();
    assert!(matches!(
        lib.create_playlist(""),
        Err(LibraryError::InvalidName)
    ));
    assert!(matches!(
        lib.create_playlist("   "),
        Err(LibraryError::InvalidName)
    ));
    assert!(lib.playlists.is_empty());
}

#[test]
fn create_playlist_overwrites_in_place() {
    let mut lib = Library::new();
    lib.create_playlist("Road Trip").unwrap();
    lib.create_playlist("Chill").unwrap();

    lib.playlists[0].tracks.push(track("A", "T"));

    // Re-creating resets the playlist but keeps its position.
    lib.create_playlist("Road Trip").unwrap();
    assert_eq!(lib.playlists.len(), 2);
    assert_eq!(lib.playlists[0].name, "Road Trip");
    assert!(lib.playlists[0].is_empty());
    assert_eq!(lib.playlists[1].name, "Chill");
}

#[test]
fn add_to_playlist_unknown_name_mutates_nothing() {
    let mut lib = Library::new();
    lib.create_playlist("Known").unwrap();

    let err = lib
        .add_to_playlist("Missing", [PathBuf::from("/music/a.wav")])
        .unwrap_err();
    assert!(matches!(err, LibraryError::PlaylistNotFound(ref n) if n == "Missing"));
    assert!(lib.playlist("Known").unwrap().is_empty());
    assert!(lib.tracks.is_empty());
}

#[test]
fn add_to_playlist_appends_tracks() {
    let mut lib = Library::new();
    lib.create_playlist("Mix").unwrap();
    lib.add_to_playlist("Mix", [PathBuf::from("/music/a.wav"), PathBuf::from("/music/b.wav")])
        .unwrap();

    let playlist = lib.playlist("Mix").unwrap();
    assert_eq!(playlist.len(), 2);
    // Playlist additions never touch the master list.
    assert!(lib.tracks.is_empty());
}

#[test]
fn delete_playlist_removes_only_the_named_one() {
    let mut lib = Library::new();
    lib.tracks.push(track("A", "T"));
    lib.create_playlist("One").unwrap();
    lib.create_playlist("Two").unwrap();

    lib.delete_playlist("One").unwrap();
    assert_eq!(lib.playlists.len(), 1);
    assert_eq!(lib.playlists[0].name, "Two");
    assert_eq!(lib.tracks.len(), 1);

    assert!(matches!(
        lib.delete_playlist("One"),
        Err(LibraryError::PlaylistNotFound(_))
    ));
}

#[test]
fn clear_empties_master_list_but_keeps_playlists() {
    let mut lib = Library::new();
    lib.tracks.push(track("A", "T"));
    lib.create_playlist("Keep").unwrap();
    lib.playlists[0].tracks.push(track("B", "U"));

    lib.clear();
    assert!(lib.tracks.is_empty());
    assert_eq!(lib.playlist("Keep").unwrap().len(), 1);
}

#[test]
fn render_catalog_orders_master_then_playlists() {
    let mut lib = Library::new();
    lib.tracks.push(track("A", "T"));
    lib.tracks.push(track("B", "U"));
    lib.create_playlist("P1").unwrap();
    lib.create_playlist("P2").unwrap();
    lib.playlists[0].tracks.push(track("C", "V"));
    lib.playlists[1].tracks.push(track("D", "W"));

    assert_eq!(
        lib.render_catalog(),
        vec![
            "A - T".to_string(),
            "B - U".to_string(),
            "C - V (Playlist: P1)".to_string(),
            "D - W (Playlist: P2)".to_string(),
        ]
    );
}

#[test]
fn remove_tracks_removes_by_combined_display_index() {
    let mut lib = Library::new();
    lib.tracks.push(track("A", "T0"));
    lib.tracks.push(track("A", "T1"));
    lib.tracks.push(track("A", "T2"));

    lib.remove_tracks(&BTreeSet::from([0]));
    assert_eq!(lib.tracks.len(), 2);
    assert_eq!(lib.tracks[0].title, "T1");

    // Multiple indices remove the right entries regardless of shifting.
    lib.tracks.push(track("A", "T3"));
    lib.remove_tracks(&BTreeSet::from([0, 2]));
    assert_eq!(lib.tracks.len(), 1);
    assert_eq!(lib.tracks[0].title, "T2");
}

#[test]
fn remove_tracks_ignores_playlist_rows_and_out_of_bounds() {
    let mut lib = Library::new();
    lib.tracks.push(track("A", "T"));
    lib.create_playlist("P1").unwrap();
    lib.playlists[0].tracks.push(track("B", "U"));

    // Index 1 is the first playlist row in the combined display ordering.
    lib.remove_tracks(&BTreeSet::from([1]));
    assert_eq!(lib.tracks.len(), 1);
    assert_eq!(lib.playlist("P1").unwrap().len(), 1);

    lib.remove_tracks(&BTreeSet::from([99]));
    assert_eq!(lib.tracks.len(), 1);
}

#[test]
fn export_csv_writes_header_master_rows_then_playlist_rows() {
    let mut lib = Library::new();
    lib.tracks.push(track("A", "T"));
    lib.create_playlist("P1").unwrap();
    lib.playlists[0].tracks.push(track("B", "U"));

    let dir = tempdir().unwrap();
    let dest = dir.path().join("catalog.csv");
    lib.export_csv(&dest).unwrap();

    let content = fs::read_to_string(&dest).unwrap();
    assert_eq!(content, "Artiste,Titre,Playlist\nA,T,\nB,U,P1\n");
}

#[test]
fn export_csv_quotes_values_containing_commas() {
    let mut lib = Library::new();
    lib.tracks.push(track("Last, First", "Song"));

    let dir = tempdir().unwrap();
    let dest = dir.path().join("catalog.csv");
    lib.export_csv(&dest).unwrap();

    let content = fs::read_to_string(&dest).unwrap();
    assert_eq!(content, "Artiste,Titre,Playlist\n\"Last, First\",Song,\n");
}

#[test]
fn export_csv_fails_on_unwritable_destination() {
    let lib = Library::new();
    let err = lib
        .export_csv(std::path::Path::new("/nonexistent-dir/catalog.csv"))
        .unwrap_err();
    assert!(matches!(err, LibraryError::Csv(_) | LibraryError::Io(_)));
}
