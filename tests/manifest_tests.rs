use mosaic::{Query, TileManifest};

#[test]
fn roundtrip_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tiles.manifest");

    let mut manifest = TileManifest::new(32, 500);
    manifest.set_block_count(Query { x: 0, y: 0 }, 12);
    manifest.set_block_count(Query { x: 3, y: 9 }, 7);
    manifest.save(&path).unwrap();

    let loaded = TileManifest::load(&path).unwrap();
    assert_eq!(loaded, manifest);
    assert_eq!(loaded.block_count(Query { x: 3, y: 9 }), Some(7));
    assert_eq!(loaded.block_count(Query { x: 1, y: 1 }), None);
}

#[test]
fn block_count_is_keyed_on_the_serialized_query() {
    let mut manifest = TileManifest::new(10, 600);
    let q = Query { x: 5, y: 6 };
    manifest.set_block_count(q, 3);
    assert_eq!(manifest.block_count_for_key(&q.key()), Some(3));
    assert_eq!(manifest.queries().count(), 1);
}

#[test]
fn updating_a_query_overwrites_its_count() {
    let mut manifest = TileManifest::new(10, 600);
    let q = Query { x: 1, y: 1 };
    manifest.set_block_count(q, 3);
    manifest.set_block_count(q, 8);
    assert_eq!(manifest.block_count(q), Some(8));
    assert_eq!(manifest.len(), 1);
}

#[test]
fn garbage_file_is_a_manifest_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.manifest");
    std::fs::write(&path, b"\xFF\xFF\xFF\xFF not bincode").unwrap();
    assert!(TileManifest::load(&path).is_err());
}

#[test]
fn missing_file_is_an_io_error() {
    assert!(TileManifest::load("/nonexistent/tiles.manifest").is_err());
}
