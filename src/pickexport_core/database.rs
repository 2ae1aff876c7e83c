use crate::pickexport_core::category::{ACCEPTED_TAG_NAME, Category};
use crate::pickexport_core::error::{PickexportError, Result};
use rusqlite::{Connection, OpenFlags, OptionalExtension, params};
use std::path::Path;

/// Both legs of the self-join run over `ImageTags`: the first leg filters to
/// the category tag, the second to the accepted tag on the same image.
const ACCEPTED_IMAGES_QUERY: &str = "SELECT i.name, a.relativePath
     FROM ImageTags it1
     JOIN Images i ON it1.imageid = i.id
     JOIN Albums a ON a.id = i.album
     JOIN ImageTags it2 ON it1.imageid = it2.imageid
     WHERE it1.tagid = ?1 AND it2.tagid = ?2";

/// Row produced by the accepted-image query: the image file name and its
/// album path relative to the collection root.
#[derive(Debug, Clone)]
pub struct ImageRow {
    pub name: String,
    pub relative_path: String,
}

/// Resolved ids for the three category tags and the accepted tag.
#[derive(Debug, Clone, Copy)]
pub struct TagIds {
    pub bride: i64,
    pub groom: i64,
    pub common: i64,
    pub accepted: i64,
}

impl TagIds {
    pub fn for_category(&self, category: Category) -> i64 {
        match category {
            Category::Bride => self.bride,
            Category::Groom => self.groom,
            Category::Common => self.common,
        }
    }
}

/// Read-only access to a digiKam database.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the digiKam database at the specified path. The database belongs
    /// to digiKam, so it is opened read-only.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PickexportError::DatabaseNotFound(path.to_path_buf()));
        }

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;

        Ok(Database { conn })
    }

    /// Look up a tag id by name.
    pub fn tag_id(&self, name: &str) -> Result<Option<i64>> {
        let id = self
            .conn
            .query_row("SELECT id FROM Tags WHERE name = ?1", params![name], |row| {
                row.get(0)
            })
            .optional()?;

        Ok(id)
    }

    /// Resolve the three category tags and the accepted tag, failing with a
    /// named error on any absent tag.
    pub fn resolve_tags(&self) -> Result<TagIds> {
        Ok(TagIds {
            bride: self.require_tag(Category::Bride.as_str())?,
            groom: self.require_tag(Category::Groom.as_str())?,
            common: self.require_tag(Category::Common.as_str())?,
            accepted: self.require_tag(ACCEPTED_TAG_NAME)?,
        })
    }

    fn require_tag(&self, name: &str) -> Result<i64> {
        self.tag_id(name)?
            .ok_or_else(|| PickexportError::TagNotFound(name.to_string()))
    }

    /// Images carrying both the category tag and the accepted tag, one row
    /// per qualifying (image, category) pairing, unordered. An image tagged
    /// into several categories shows up in each category's result set.
    pub fn accepted_images(&self, category_tag: i64, accepted_tag: i64) -> Result<Vec<ImageRow>> {
        let mut stmt = self.conn.prepare(ACCEPTED_IMAGES_QUERY)?;

        let rows = stmt.query_map(params![category_tag, accepted_tag], |row| {
            Ok(ImageRow {
                name: row.get(0)?,
                relative_path: row.get(1)?,
            })
        })?;

        let mut images = Vec::new();
        for row in rows {
            images.push(row?);
        }

        Ok(images)
    }

    /// Number of image-tag assignments carrying the given tag.
    pub fn tag_usage_count(&self, tag_id: i64) -> Result<i64> {
        let count = self.conn.query_row(
            "SELECT COUNT(*) FROM ImageTags WHERE tagid = ?1",
            params![tag_id],
            |row| row.get(0),
        )?;

        Ok(count)
    }
}
