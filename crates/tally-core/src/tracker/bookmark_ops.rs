//! Bookmark and tag operations for the Tracker.

use log::debug;

use super::Tracker;
use crate::{
    display::{Bookmarks, UpdateResult},
    error::{Result, TrackerError},
    models::{Bookmark, BookmarkChanges, BookmarkFilter, NewBookmark},
    params::{CreateBookmark, Delete, Id, ListBookmarks, UpdateBookmark},
};

impl Tracker {
    /// Saves a new bookmark. Tags that don't exist yet are created.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InvalidInput` if the title is blank or too
    /// long, the URL isn't an absolute http(s) URL, or a tag is too long.
    pub async fn create_bookmark(&self, params: &CreateBookmark) -> Result<Bookmark> {
        let bookmark = NewBookmark::try_from(params)?;
        debug!("Creating bookmark '{}' -> {}", bookmark.title, bookmark.url);
        self.with_database(move |db| db.create_bookmark(&bookmark)).await
    }

    /// Retrieves a bookmark and its tags by ID.
    pub async fn get_bookmark(&self, params: &Id) -> Result<Option<Bookmark>> {
        let id = params.id;
        self.with_database(move |db| db.get_bookmark(id)).await
    }

    /// Lists bookmarks, favorites first, then in the requested order.
    pub async fn list_bookmarks(&self, params: &ListBookmarks) -> Result<Bookmarks> {
        let filter = BookmarkFilter::try_from(params)?;
        debug!("Listing bookmarks with {filter:?}");
        let bookmarks = self
            .with_database(move |db| db.list_bookmarks(&filter))
            .await?;
        Ok(Bookmarks(bookmarks))
    }

    /// Applies field changes to a bookmark. Given tags replace the current
    /// set; an empty tag list removes them all.
    pub async fn update_bookmark(&self, params: &UpdateBookmark) -> Result<UpdateResult<Bookmark>> {
        let id = params.id;
        let changes = BookmarkChanges::try_from(params)?;

        let mut described = Vec::new();
        if changes.title.is_some() {
            described.push("Updated title".to_string());
        }
        if changes.url.is_some() {
            described.push("Updated URL".to_string());
        }
        if let Some(ref notes) = changes.notes {
            described.push(if notes.is_some() { "Updated notes" } else { "Cleared notes" }.to_string());
        }
        if let Some(favorite) = changes.favorite {
            described.push(
                if favorite { "Marked as favorite" } else { "Removed from favorites" }.to_string(),
            );
        }
        if let Some(ref tags) = changes.tags {
            described.push(if tags.is_empty() {
                "Removed all tags".to_string()
            } else {
                format!("Set tags to {}", tags.join(", "))
            });
        }

        debug!("Updating bookmark {id}");
        let bookmark = self
            .with_database(move |db| db.update_bookmark(id, &changes))
            .await?
            .ok_or(TrackerError::BookmarkNotFound { id })?;

        Ok(UpdateResult::with_changes(bookmark, described))
    }

    /// Records a visit and returns the bookmark with its new click count.
    pub async fn visit_bookmark(&self, params: &Id) -> Result<Bookmark> {
        let id = params.id;
        let bookmark = self
            .with_database(move |db| db.visit_bookmark(id))
            .await?
            .ok_or(TrackerError::BookmarkNotFound { id })?;

        debug!("Bookmark {id} visited ({} clicks)", bookmark.clicks);
        Ok(bookmark)
    }

    /// Flips the favorite flag of a bookmark.
    pub async fn toggle_favorite(&self, params: &Id) -> Result<Bookmark> {
        let id = params.id;
        self.with_database(move |db| db.toggle_favorite(id))
            .await?
            .ok_or(TrackerError::BookmarkNotFound { id })
    }

    /// Permanently deletes a bookmark, returning it for confirmation.
    pub async fn delete_bookmark(&self, params: &Delete) -> Result<Bookmark> {
        params.ensure_confirmed("Bookmark")?;
        let id = params.id;

        self.with_database(move |db| {
            let bookmark = db
                .get_bookmark(id)?
                .ok_or(TrackerError::BookmarkNotFound { id })?;
            db.delete_bookmark(id)?;
            Ok(bookmark)
        })
        .await
    }

    /// All tag names, alphabetical.
    pub async fn list_tags(&self) -> Result<Vec<String>> {
        self.with_database(|db| db.list_tags()).await
    }
}
