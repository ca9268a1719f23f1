//! The gallery core: an ordered photo collection plus one movable cursor.
//!
//! All mutation and navigation logic lives here. The TUI only observes the
//! gallery through [`Gallery::snapshot`] and mutates it through the public
//! operations, so the core stays testable without a terminal.

use thiserror::Error;

/// Errors produced by gallery operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GalleryError {
    #[error("Photo '{0}' not found!")]
    NotFound(String),
}

/// A single photo record.
///
/// The name is the identity; both locators are derived from it at
/// construction and never change (same name, same locators).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub name: String,
    pub url: String,
    pub thumb_url: String,
}

impl Photo {
    /// Create a photo from its name, deriving both picsum locators.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let seed = urlencoding::encode(&name).into_owned();
        Self {
            url: format!("https://picsum.photos/seed/{seed}/1200/800"),
            thumb_url: format!("https://picsum.photos/seed/{seed}/200/300"),
            name,
        }
    }
}

/// Read-only view of the gallery for rendering
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub photos: &'a [Photo],
    pub current_index: Option<usize>,
}

impl<'a> Snapshot<'a> {
    /// The currently viewed photo, if any
    pub fn current(&self) -> Option<&'a Photo> {
        self.current_index.map(|i| &self.photos[i])
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }
}

/// Ordered photo collection with a single cursor.
///
/// Invariants:
/// - `current` is `None` exactly when `photos` is empty
/// - when set, `current` is a valid index into `photos`
/// - duplicate names are allowed; delete-by-name removes the first match
#[derive(Debug, Default)]
pub struct Gallery {
    photos: Vec<Photo>,
    current: Option<usize>,
}

impl Gallery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a photo. The first photo inserted into an empty gallery
    /// becomes current; otherwise the cursor is untouched.
    ///
    /// Callers are responsible for rejecting empty names before calling.
    pub fn insert(&mut self, name: &str) {
        self.photos.push(Photo::new(name));
        if self.current.is_none() {
            self.current = Some(0);
        }
    }

    /// Remove the first photo whose name matches, repairing the cursor.
    ///
    /// Cursor repair after removing index `i`:
    /// - gallery now empty: cursor unset
    /// - the removed photo was current: advance to its successor, which now
    ///   sits at index `i`; if `i` was the last index, wrap to the head
    /// - removed before the cursor: shift the cursor down by one so it keeps
    ///   pointing at the same photo
    ///
    /// Fails with [`GalleryError::NotFound`] (no mutation) when nothing matches.
    pub fn delete(&mut self, name: &str) -> Result<(), GalleryError> {
        let i = self
            .photos
            .iter()
            .position(|p| p.name == name)
            .ok_or_else(|| GalleryError::NotFound(name.to_string()))?;

        let was_current = self.current == Some(i);
        self.photos.remove(i);

        self.current = if self.photos.is_empty() {
            None
        } else if was_current {
            if i < self.photos.len() { Some(i) } else { Some(0) }
        } else {
            self.current.map(|c| if i < c { c - 1 } else { c })
        };
        Ok(())
    }

    /// Move the cursor forward, wrapping from the last photo to the first.
    /// No-op on an empty gallery.
    pub fn next(&mut self) {
        let Some(current) = self.current else { return };
        self.current = Some(if current + 1 < self.photos.len() {
            current + 1
        } else {
            0
        });
    }

    /// Move the cursor backward, wrapping from the first photo to the last.
    /// No-op on an empty gallery.
    pub fn previous(&mut self) {
        let Some(current) = self.current else { return };
        self.current = Some(if current == 0 {
            self.photos.len() - 1
        } else {
            current - 1
        });
    }

    /// Set the cursor directly. `index` must be in range; callers only
    /// produce indices from an enumeration of the current photos.
    pub fn select(&mut self, index: usize) {
        assert!(
            index < self.photos.len(),
            "select index {index} out of range (len {})",
            self.photos.len()
        );
        self.current = Some(index);
    }

    /// Read-only view of the current state. The sole channel through which
    /// the renderer observes the core.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            photos: &self.photos,
            current_index: self.current,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery_of(names: &[&str]) -> Gallery {
        let mut gallery = Gallery::new();
        for name in names {
            gallery.insert(name);
        }
        gallery
    }

    fn current_name(gallery: &Gallery) -> Option<String> {
        gallery.snapshot().current().map(|p| p.name.clone())
    }

    #[test]
    fn test_new_gallery_is_empty_with_unset_cursor() {
        let gallery = Gallery::new();
        let snap = gallery.snapshot();
        assert!(snap.is_empty());
        assert_eq!(snap.current_index, None);
        assert!(snap.current().is_none());
    }

    #[test]
    fn test_insert_preserves_order_and_count() {
        let gallery = gallery_of(&["sunset", "beach", "mountain", "beach"]);
        let snap = gallery.snapshot();
        assert_eq!(snap.len(), 4);
        let names: Vec<&str> = snap.photos.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["sunset", "beach", "mountain", "beach"]);
    }

    #[test]
    fn test_first_insert_sets_cursor_later_inserts_do_not() {
        let mut gallery = Gallery::new();
        gallery.insert("a");
        assert_eq!(gallery.snapshot().current_index, Some(0));

        gallery.insert("b");
        gallery.insert("c");
        assert_eq!(gallery.snapshot().current_index, Some(0));

        gallery.next();
        gallery.insert("d");
        assert_eq!(gallery.snapshot().current_index, Some(1));
        assert_eq!(current_name(&gallery).as_deref(), Some("b"));
    }

    #[test]
    fn test_locators_derived_from_name() {
        let photo = Photo::new("sunset");
        assert_eq!(photo.url, "https://picsum.photos/seed/sunset/1200/800");
        assert_eq!(photo.thumb_url, "https://picsum.photos/seed/sunset/200/300");
    }

    #[test]
    fn test_locators_percent_encode_names() {
        let photo = Photo::new("golden gate");
        assert_eq!(
            photo.url,
            "https://picsum.photos/seed/golden%20gate/1200/800"
        );
        // Same name produces the same locators
        assert_eq!(photo, Photo::new("golden gate"));
    }

    #[test]
    fn test_next_is_circular() {
        let mut gallery = gallery_of(&["a", "b", "c"]);
        gallery.select(1);
        for _ in 0..3 {
            gallery.next();
        }
        assert_eq!(gallery.snapshot().current_index, Some(1));
    }

    #[test]
    fn test_next_wraps_at_end_previous_wraps_at_start() {
        let mut gallery = gallery_of(&["a", "b", "c"]);
        gallery.select(2);
        gallery.next();
        assert_eq!(gallery.snapshot().current_index, Some(0));

        gallery.previous();
        assert_eq!(gallery.snapshot().current_index, Some(2));
    }

    #[test]
    fn test_previous_inverts_next_at_every_position() {
        let mut gallery = gallery_of(&["a", "b", "c", "d"]);
        for start in 0..4 {
            gallery.select(start);
            gallery.next();
            gallery.previous();
            assert_eq!(gallery.snapshot().current_index, Some(start));

            gallery.previous();
            gallery.next();
            assert_eq!(gallery.snapshot().current_index, Some(start));
        }
    }

    #[test]
    fn test_navigation_is_noop_on_empty_gallery() {
        let mut gallery = Gallery::new();
        gallery.next();
        gallery.previous();
        assert_eq!(gallery.snapshot().current_index, None);
    }

    #[test]
    fn test_delete_current_advances_to_successor() {
        let mut gallery = gallery_of(&["a", "b", "c"]);
        gallery.select(1);
        gallery.delete("b").unwrap();
        assert_eq!(gallery.snapshot().current_index, Some(1));
        assert_eq!(current_name(&gallery).as_deref(), Some("c"));
    }

    #[test]
    fn test_delete_current_last_wraps_to_head() {
        let mut gallery = gallery_of(&["a", "b", "c"]);
        gallery.select(2);
        gallery.delete("c").unwrap();
        assert_eq!(gallery.snapshot().current_index, Some(0));
        assert_eq!(current_name(&gallery).as_deref(), Some("a"));
    }

    #[test]
    fn test_delete_before_cursor_shifts_it_down() {
        let mut gallery = gallery_of(&["a", "b", "c"]);
        gallery.select(2);
        gallery.delete("a").unwrap();
        assert_eq!(gallery.snapshot().current_index, Some(1));
        assert_eq!(current_name(&gallery).as_deref(), Some("c"));
    }

    #[test]
    fn test_delete_after_cursor_leaves_it_unchanged() {
        let mut gallery = gallery_of(&["a", "b", "c"]);
        gallery.select(0);
        gallery.delete("c").unwrap();
        assert_eq!(gallery.snapshot().current_index, Some(0));
        assert_eq!(current_name(&gallery).as_deref(), Some("a"));
    }

    #[test]
    fn test_delete_only_photo_unsets_cursor() {
        let mut gallery = gallery_of(&["a"]);
        gallery.delete("a").unwrap();
        let snap = gallery.snapshot();
        assert!(snap.is_empty());
        assert_eq!(snap.current_index, None);

        // Navigation stays a no-op afterwards
        gallery.next();
        gallery.previous();
        assert_eq!(gallery.snapshot().current_index, None);
    }

    #[test]
    fn test_delete_absent_name_fails_without_mutation() {
        let mut gallery = gallery_of(&["a", "b"]);
        gallery.select(1);

        let err = gallery.delete("zzz").unwrap_err();
        assert_eq!(err, GalleryError::NotFound("zzz".to_string()));

        let snap = gallery.snapshot();
        assert_eq!(snap.len(), 2);
        assert_eq!(snap.current_index, Some(1));
    }

    #[test]
    fn test_delete_duplicate_name_removes_first_match() {
        let mut gallery = gallery_of(&["dup", "other", "dup"]);
        gallery.select(2);
        gallery.delete("dup").unwrap();

        let snap = gallery.snapshot();
        let names: Vec<&str> = snap.photos.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["other", "dup"]);
        // Cursor shifted down with the removal of an earlier photo
        assert_eq!(snap.current_index, Some(1));
    }

    #[test]
    fn test_worked_scenario_a_b_c() {
        let mut gallery = gallery_of(&["a", "b", "c"]);
        assert_eq!(gallery.snapshot().current_index, Some(0));

        gallery.next();
        gallery.next();
        assert_eq!(current_name(&gallery).as_deref(), Some("c"));

        gallery.delete("a").unwrap();
        assert_eq!(gallery.snapshot().current_index, Some(1));
        assert_eq!(current_name(&gallery).as_deref(), Some("c"));

        gallery.delete("c").unwrap();
        assert_eq!(gallery.snapshot().current_index, Some(0));
        assert_eq!(current_name(&gallery).as_deref(), Some("b"));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_select_out_of_range_panics() {
        let mut gallery = gallery_of(&["a"]);
        gallery.select(1);
    }
}
