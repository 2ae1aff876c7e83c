use assert_fs::TempDir;
use assert_fs::fixture::ChildPath;
use assert_fs::prelude::*;
use rusqlite::Connection;

const FIXTURE_SCHEMA: &str = "
    CREATE TABLE Tags (id INTEGER PRIMARY KEY, name TEXT NOT NULL);
    CREATE TABLE Albums (id INTEGER PRIMARY KEY, relativePath TEXT NOT NULL);
    CREATE TABLE Images (id INTEGER PRIMARY KEY, album INTEGER NOT NULL, name TEXT NOT NULL);
    CREATE TABLE ImageTags (imageid INTEGER NOT NULL, tagid INTEGER NOT NULL);
";

/// Lay out a drive root with a digiKam-shaped collection:
///
/// - `IMG_0001.jpg` — bride pick
/// - `IMG_0002.jpg` — groom pick
/// - `IMG_0003.jpg` — tagged into both bride and groom
/// - `IMG_0004.jpg` — tagged bride but never accepted
///
/// The `common` tag exists but has no accepted images.
pub fn setup_collection(temp_dir: &TempDir) -> ChildPath {
    setup_collection_inner(temp_dir, true)
}

/// Same layout, but the `common` tag is absent from the Tags table.
pub fn setup_collection_without_common_tag(temp_dir: &TempDir) -> ChildPath {
    setup_collection_inner(temp_dir, false)
}

fn setup_collection_inner(temp_dir: &TempDir, with_common_tag: bool) -> ChildPath {
    let root = temp_dir.child("drive");

    root.child("pics/wedding/ceremony/IMG_0001.jpg")
        .write_str("bride bytes")
        .unwrap();
    root.child("pics/wedding/ceremony/IMG_0002.jpg")
        .write_str("groom bytes")
        .unwrap();
    root.child("pics/wedding/reception/IMG_0003.jpg")
        .write_str("shared bytes")
        .unwrap();
    root.child("pics/wedding/ceremony/IMG_0004.jpg")
        .write_str("rejected bytes")
        .unwrap();

    let conn = Connection::open(root.child("pics/digikam4.db").path()).unwrap();
    conn.execute_batch(FIXTURE_SCHEMA).unwrap();

    conn.execute_batch(
        "INSERT INTO Tags VALUES (1, 'bride'), (2, 'groom'), (9, 'Pick Label Accepted');",
    )
    .unwrap();
    if with_common_tag {
        conn.execute_batch("INSERT INTO Tags VALUES (3, 'common');")
            .unwrap();
    }

    conn.execute_batch(
        "INSERT INTO Albums VALUES (10, '/wedding/ceremony'), (11, '/wedding/reception');
         INSERT INTO Images VALUES (100, 10, 'IMG_0001.jpg'),
                                   (101, 10, 'IMG_0002.jpg'),
                                   (102, 11, 'IMG_0003.jpg'),
                                   (103, 10, 'IMG_0004.jpg');
         INSERT INTO ImageTags VALUES (100, 1), (100, 9),
                                      (101, 2), (101, 9),
                                      (102, 1), (102, 2), (102, 9),
                                      (103, 1);",
    )
    .unwrap();

    root
}
