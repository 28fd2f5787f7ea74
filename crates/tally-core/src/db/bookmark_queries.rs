//! Bookmark and tag operations and queries.

use jiff::Timestamp;
use rusqlite::{params, Connection, OptionalExtension};

use super::{contains_pattern, count_column, timestamp_column};
use crate::{
    error::{DatabaseResultExt, Result, TrackerError},
    models::{Bookmark, BookmarkChanges, BookmarkFilter, NewBookmark, TagCount},
};

const BOOKMARK_COLUMNS: &str =
    "b.id, b.title, b.url, b.notes, b.is_favorite, b.clicks, b.created_at";
const INSERT_BOOKMARK_SQL: &str = "INSERT INTO bookmarks (title, url, notes, is_favorite, clicks, created_at) VALUES (?1, ?2, ?3, ?4, 0, ?5)";
const UPDATE_BOOKMARK_SQL: &str =
    "UPDATE bookmarks SET title = ?1, url = ?2, notes = ?3, is_favorite = ?4 WHERE id = ?5";
const INCREMENT_CLICKS_SQL: &str = "UPDATE bookmarks SET clicks = clicks + 1 WHERE id = ?1";
const TOGGLE_FAVORITE_SQL: &str =
    "UPDATE bookmarks SET is_favorite = NOT is_favorite WHERE id = ?1";
const DELETE_BOOKMARK_SQL: &str = "DELETE FROM bookmarks WHERE id = ?1";
const SELECT_BOOKMARK_TAGS_SQL: &str = "SELECT t.name FROM tags t JOIN bookmark_tags bt ON bt.tag_id = t.id WHERE bt.bookmark_id = ?1 ORDER BY t.name";
const CLEAR_BOOKMARK_TAGS_SQL: &str = "DELETE FROM bookmark_tags WHERE bookmark_id = ?1";
const INSERT_TAG_SQL: &str = "INSERT OR IGNORE INTO tags (name) VALUES (?1)";
const SELECT_TAG_ID_SQL: &str = "SELECT id FROM tags WHERE name = ?1";
const LINK_TAG_SQL: &str =
    "INSERT OR IGNORE INTO bookmark_tags (bookmark_id, tag_id) VALUES (?1, ?2)";
const SELECT_ALL_TAGS_SQL: &str = "SELECT name FROM tags ORDER BY name";
const SELECT_TOP_TAGS_SQL: &str = "SELECT t.name, COUNT(*) AS uses FROM bookmark_tags bt JOIN tags t ON t.id = bt.tag_id GROUP BY t.id ORDER BY uses DESC, t.name ASC LIMIT ?1";

impl super::Database {
    /// Helper function to construct a Bookmark from a database row. Tags are
    /// loaded separately.
    fn build_bookmark_from_row(row: &rusqlite::Row) -> rusqlite::Result<Bookmark> {
        Ok(Bookmark {
            id: row.get::<_, i64>(0)? as u64,
            title: row.get(1)?,
            url: row.get(2)?,
            notes: row.get(3)?,
            favorite: row.get(4)?,
            clicks: count_column(row, 5)?,
            created_at: timestamp_column(row, 6)?,
            tags: Vec::new(),
        })
    }

    fn select_tags(connection: &Connection, bookmark_id: u64) -> Result<Vec<String>> {
        let mut stmt = connection
            .prepare(SELECT_BOOKMARK_TAGS_SQL)
            .db_context("Failed to prepare query")?;

        let rows = stmt
            .query_map(params![bookmark_id as i64], |row| row.get(0))
            .db_context("Failed to query bookmark tags")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch bookmark tags")?;

        Ok(rows)
    }

    fn select_bookmark(connection: &Connection, id: u64) -> Result<Option<Bookmark>> {
        let bookmark = connection
            .query_row(
                &format!("SELECT {BOOKMARK_COLUMNS} FROM bookmarks b WHERE b.id = ?1"),
                params![id as i64],
                Self::build_bookmark_from_row,
            )
            .optional()
            .db_context("Failed to query bookmark")?;

        match bookmark {
            Some(mut bookmark) => {
                bookmark.tags = Self::select_tags(connection, bookmark.id)?;
                Ok(Some(bookmark))
            }
            None => Ok(None),
        }
    }

    /// Replace the tag set of a bookmark, creating tags that don't exist yet.
    fn replace_tags(connection: &Connection, bookmark_id: u64, names: &[String]) -> Result<()> {
        connection
            .execute(CLEAR_BOOKMARK_TAGS_SQL, params![bookmark_id as i64])
            .db_context("Failed to clear bookmark tags")?;

        for name in names {
            connection
                .execute(INSERT_TAG_SQL, params![name])
                .db_context("Failed to insert tag")?;
            let tag_id: i64 = connection
                .query_row(SELECT_TAG_ID_SQL, params![name], |row| row.get(0))
                .db_context("Failed to look up tag")?;
            connection
                .execute(LINK_TAG_SQL, params![bookmark_id as i64, tag_id])
                .db_context("Failed to link tag")?;
        }

        Ok(())
    }

    /// Saves a new bookmark together with its tags.
    pub fn create_bookmark(&mut self, bookmark: &NewBookmark) -> Result<Bookmark> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();

        tx.execute(
            INSERT_BOOKMARK_SQL,
            params![
                bookmark.title,
                bookmark.url,
                bookmark.notes,
                bookmark.favorite,
                now.to_string()
            ],
        )
        .db_context("Failed to insert bookmark")?;

        let id = tx.last_insert_rowid() as u64;
        Self::replace_tags(&tx, id, &bookmark.tags)?;
        let tags = Self::select_tags(&tx, id)?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Bookmark {
            id,
            title: bookmark.title.clone(),
            url: bookmark.url.clone(),
            notes: bookmark.notes.clone(),
            favorite: bookmark.favorite,
            clicks: 0,
            created_at: now,
            tags,
        })
    }

    /// Retrieves a bookmark and its tags by ID.
    pub fn get_bookmark(&self, id: u64) -> Result<Option<Bookmark>> {
        Self::select_bookmark(&self.connection, id)
    }

    /// Lists bookmarks matching the filter. Favorites always come first.
    pub fn list_bookmarks(&self, filter: &BookmarkFilter) -> Result<Vec<Bookmark>> {
        let mut query = format!("SELECT {BOOKMARK_COLUMNS} FROM bookmarks b");

        let mut conditions = Vec::new();
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(ref text) = filter.query {
            conditions.push(
                "(fold_case(b.title) LIKE ? ESCAPE '\\' OR fold_case(IFNULL(b.notes, '')) LIKE ? ESCAPE '\\' OR fold_case(b.url) LIKE ? ESCAPE '\\')",
            );
            let pattern = contains_pattern(text);
            params_vec.push(Box::new(pattern.clone()));
            params_vec.push(Box::new(pattern.clone()));
            params_vec.push(Box::new(pattern));
        }

        if let Some(ref tag) = filter.tag {
            conditions.push("EXISTS (SELECT 1 FROM bookmark_tags bt JOIN tags t ON t.id = bt.tag_id WHERE bt.bookmark_id = b.id AND t.name = ?)");
            params_vec.push(Box::new(tag.clone()));
        }

        if filter.favorites_only {
            conditions.push("b.is_favorite = 1");
        }

        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }

        query.push_str(" ORDER BY ");
        query.push_str(filter.sort.order_by());

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        let mut bookmarks = stmt
            .query_map(&params_refs[..], Self::build_bookmark_from_row)
            .db_context("Failed to query bookmarks")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch bookmarks")?;

        for bookmark in &mut bookmarks {
            bookmark.tags = Self::select_tags(&self.connection, bookmark.id)?;
        }

        Ok(bookmarks)
    }

    /// Applies field changes to a bookmark. Providing tags replaces the whole
    /// tag set.
    pub fn update_bookmark(
        &mut self,
        id: u64,
        changes: &BookmarkChanges,
    ) -> Result<Option<Bookmark>> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let Some(mut bookmark) = Self::select_bookmark(&tx, id)? else {
            return Ok(None);
        };

        if let Some(ref title) = changes.title {
            bookmark.title = title.clone();
        }
        if let Some(ref url) = changes.url {
            bookmark.url = url.clone();
        }
        if let Some(ref notes) = changes.notes {
            bookmark.notes = notes.clone();
        }
        if let Some(favorite) = changes.favorite {
            bookmark.favorite = favorite;
        }

        tx.execute(
            UPDATE_BOOKMARK_SQL,
            params![
                bookmark.title,
                bookmark.url,
                bookmark.notes,
                bookmark.favorite,
                id as i64
            ],
        )
        .db_context("Failed to update bookmark")?;

        if let Some(ref tags) = changes.tags {
            Self::replace_tags(&tx, id, tags)?;
            bookmark.tags = Self::select_tags(&tx, id)?;
        }

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Some(bookmark))
    }

    /// Records a visit, returning the bookmark with its new click count.
    pub fn visit_bookmark(&mut self, id: u64) -> Result<Option<Bookmark>> {
        self.bump_bookmark(id, INCREMENT_CLICKS_SQL, "Failed to record visit")
    }

    /// Flips the favorite flag of a bookmark.
    pub fn toggle_favorite(&mut self, id: u64) -> Result<Option<Bookmark>> {
        self.bump_bookmark(id, TOGGLE_FAVORITE_SQL, "Failed to toggle favorite")
    }

    fn bump_bookmark(&mut self, id: u64, sql: &str, message: &str) -> Result<Option<Bookmark>> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let rows = tx.execute(sql, params![id as i64]).db_context(message)?;
        if rows == 0 {
            return Ok(None);
        }

        let bookmark = Self::select_bookmark(&tx, id)?;
        tx.commit().db_context("Failed to commit transaction")?;

        Ok(bookmark)
    }

    /// Permanently deletes a bookmark. Its tag links go with it.
    pub fn delete_bookmark(&mut self, id: u64) -> Result<()> {
        let rows = self
            .connection
            .execute(DELETE_BOOKMARK_SQL, params![id as i64])
            .db_context("Failed to delete bookmark")?;

        if rows == 0 {
            return Err(TrackerError::BookmarkNotFound { id });
        }
        Ok(())
    }

    /// All tag names, alphabetical.
    pub fn list_tags(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_ALL_TAGS_SQL)
            .db_context("Failed to prepare query")?;

        let rows = stmt
            .query_map([], |row| row.get(0))
            .db_context("Failed to query tags")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch tags")?;

        Ok(rows)
    }

    /// Most used tags with the number of bookmarks carrying each.
    pub fn top_tags(&self, limit: usize) -> Result<Vec<TagCount>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_TOP_TAGS_SQL)
            .db_context("Failed to prepare query")?;

        let rows = stmt
            .query_map(params![limit as i64], |row| {
                Ok(TagCount {
                    name: row.get(0)?,
                    count: count_column(row, 1)?,
                })
            })
            .db_context("Failed to query tag counts")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch tag counts")?;

        Ok(rows)
    }

    /// Most recently added bookmarks, newest first.
    pub fn recent_bookmarks(&self, limit: usize) -> Result<Vec<Bookmark>> {
        let mut stmt = self
            .connection
            .prepare(&format!(
                "SELECT {BOOKMARK_COLUMNS} FROM bookmarks b ORDER BY b.id DESC LIMIT ?1"
            ))
            .db_context("Failed to prepare query")?;

        let mut bookmarks = stmt
            .query_map(params![limit as i64], Self::build_bookmark_from_row)
            .db_context("Failed to query recent bookmarks")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch recent bookmarks")?;

        for bookmark in &mut bookmarks {
            bookmark.tags = Self::select_tags(&self.connection, bookmark.id)?;
        }

        Ok(bookmarks)
    }
}
