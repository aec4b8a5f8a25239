//! The field store of one wizard session.
//!
//! All writes go through the methods below; none of them validate scalar
//! content (validation is deferred to step transitions), but the collection
//! edits enforce their own structural limits at write time.

use thiserror::Error;

use crate::model::{ProjectDetail, TeamMember};

use super::file::FileHandle;

/// Client-side upload limit per image, in bytes (2 MiB).
pub const MAX_IMAGE_BYTES: u64 = 2 * 1024 * 1024;
/// Maximum number of images per project.
pub const MAX_IMAGES: usize = 2;

/// Scalar fields of the draft, addressed by name from the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarField {
    Title,
    Description,
    RepositoryUrl,
    VideoUrl,
    CategoryId,
}

/// One editable field of a team member row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberField {
    Name,
    Class,
    Position,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DraftError {
    #[error("This image is {size} bytes; the limit is 2 MiB per image.")]
    ImageTooLarge { size: u64 },
    #[error("A project can have at most 2 images.")]
    TooManyImages,
}

/// An image staged for upload, paired with its display name.
/// The name starts empty and must be filled before the images step is left.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageEntry<F> {
    pub file: F,
    pub name: String,
}

/// The in-progress submission. Owned by exactly one wizard session,
/// dropped on successful submit or when the wizard unmounts.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft<F: FileHandle> {
    pub title: String,
    pub description: String,
    pub repository_url: String,
    pub video_url: String,
    pub category_id: String,
    pub technology: Vec<String>,
    pub images: Vec<ImageEntry<F>>,
    pub team_members: Vec<TeamMember>,
    /// When set, a synthetic leader member is prepended at assembly time.
    pub include_uploader: bool,
}

impl<F: FileHandle> Default for Draft<F> {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            repository_url: String::new(),
            video_url: String::new(),
            category_id: String::new(),
            technology: Vec::new(),
            images: Vec::new(),
            team_members: Vec::new(),
            include_uploader: true,
        }
    }
}

impl<F: FileHandle> Draft<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_scalar(&mut self, field: ScalarField, value: &str) {
        let slot = match field {
            ScalarField::Title => &mut self.title,
            ScalarField::Description => &mut self.description,
            ScalarField::RepositoryUrl => &mut self.repository_url,
            ScalarField::VideoUrl => &mut self.video_url,
            ScalarField::CategoryId => &mut self.category_id,
        };
        *slot = value.to_string();
    }

    pub fn scalar(&self, field: ScalarField) -> &str {
        match field {
            ScalarField::Title => &self.title,
            ScalarField::Description => &self.description,
            ScalarField::RepositoryUrl => &self.repository_url,
            ScalarField::VideoUrl => &self.video_url,
            ScalarField::CategoryId => &self.category_id,
        }
    }

    /// Commits a technology tag from raw input. A trailing separator comma is
    /// stripped, the result is trimmed, and empty or duplicate (exact,
    /// case-sensitive) tags are ignored. Returns whether a tag was added.
    pub fn commit_technology(&mut self, raw: &str) -> bool {
        let tag = raw.trim().trim_end_matches(',').trim();
        if tag.is_empty() || self.technology.iter().any(|t| t == tag) {
            return false;
        }
        self.technology.push(tag.to_string());
        true
    }

    /// Removes the tag at `index`; out-of-range is a no-op.
    pub fn remove_technology(&mut self, index: usize) {
        if index < self.technology.len() {
            self.technology.remove(index);
        }
    }

    /// Stages an image, enforcing the per-file size limit and the image cap.
    pub fn add_image(&mut self, file: F) -> Result<(), DraftError> {
        if self.images.len() >= MAX_IMAGES {
            return Err(DraftError::TooManyImages);
        }
        let size = file.byte_size();
        if size > MAX_IMAGE_BYTES {
            return Err(DraftError::ImageTooLarge { size });
        }
        self.images.push(ImageEntry {
            file,
            name: String::new(),
        });
        Ok(())
    }

    pub fn set_image_name(&mut self, index: usize, name: &str) {
        if let Some(entry) = self.images.get_mut(index) {
            entry.name = name.to_string();
        }
    }

    /// Removes both the file and its paired name; out-of-range is a no-op.
    pub fn remove_image(&mut self, index: usize) {
        if index < self.images.len() {
            self.images.remove(index);
        }
    }

    pub fn add_team_member(&mut self) {
        self.team_members.push(TeamMember::default());
    }

    pub fn remove_team_member(&mut self, index: usize) {
        if index < self.team_members.len() {
            self.team_members.remove(index);
        }
    }

    pub fn set_team_member_field(&mut self, index: usize, field: MemberField, value: &str) {
        if let Some(member) = self.team_members.get_mut(index) {
            let slot = match field {
                MemberField::Name => &mut member.name,
                MemberField::Class => &mut member.class,
                MemberField::Position => &mut member.position,
            };
            *slot = value.to_string();
        }
    }

    /// Pre-populates the draft from an existing project (edit variant).
    /// Images cannot be rehydrated into browser file handles and stay empty.
    pub fn populate_from(&mut self, detail: &ProjectDetail) {
        self.title = detail.title.clone();
        self.description = detail.description.clone();
        self.repository_url = detail.repository_url.clone();
        self.video_url = detail.video_url.clone();
        self.category_id = detail.category_id.clone();
        self.technology = detail
            .technology
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
        self.team_members = detail.team_members.clone();
    }

    /// Drops everything entered so far.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Canonical string of everything the user has entered, used for dirty
    /// tracking (hashed against a baseline taken at mount).
    pub fn snapshot(&self) -> String {
        let mut out = String::new();
        for part in [
            &self.title,
            &self.description,
            &self.repository_url,
            &self.video_url,
            &self.category_id,
        ] {
            out.push_str(part);
            out.push('\x1f');
        }
        out.push_str(&self.technology.join(","));
        out.push('\x1f');
        for entry in &self.images {
            out.push_str(&entry.name);
            out.push('\x1f');
        }
        for member in &self.team_members {
            out.push_str(&member.name);
            out.push('\x1f');
            out.push_str(&member.class);
            out.push('\x1f');
            out.push_str(&member.position);
            out.push('\x1f');
        }
        out.push(if self.include_uploader { '1' } else { '0' });
        out
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::FakeFile;
    use super::*;

    #[test]
    fn technology_commit_trims_separator_and_dedupes() {
        let mut draft: Draft<FakeFile> = Draft::new();
        assert!(draft.commit_technology("React,"));
        assert_eq!(draft.technology, vec!["React"]);
        // Committing the same tag again leaves the list unchanged.
        assert!(!draft.commit_technology("React,"));
        assert_eq!(draft.technology, vec!["React"]);
    }

    #[test]
    fn technology_ignores_empty_and_whitespace() {
        let mut draft: Draft<FakeFile> = Draft::new();
        assert!(!draft.commit_technology(""));
        assert!(!draft.commit_technology("   ,"));
        assert!(draft.commit_technology("  Rust , "));
        assert_eq!(draft.technology, vec!["Rust"]);
    }

    #[test]
    fn technology_dedup_is_case_sensitive() {
        let mut draft: Draft<FakeFile> = Draft::new();
        draft.commit_technology("react");
        assert!(draft.commit_technology("React"));
        assert_eq!(draft.technology, vec!["react", "React"]);
    }

    #[test]
    fn remove_technology_out_of_range_is_noop() {
        let mut draft: Draft<FakeFile> = Draft::new();
        draft.commit_technology("Rust");
        draft.remove_technology(5);
        assert_eq!(draft.technology, vec!["Rust"]);
        draft.remove_technology(0);
        assert!(draft.technology.is_empty());
    }

    #[test]
    fn oversized_image_is_rejected() {
        let mut draft: Draft<FakeFile> = Draft::new();
        let err = draft
            .add_image(FakeFile::new("big.png", MAX_IMAGE_BYTES + 1))
            .unwrap_err();
        assert_eq!(
            err,
            DraftError::ImageTooLarge {
                size: MAX_IMAGE_BYTES + 1
            }
        );
        assert!(draft.images.is_empty());
    }

    #[test]
    fn image_at_exact_limit_is_accepted() {
        let mut draft: Draft<FakeFile> = Draft::new();
        draft
            .add_image(FakeFile::new("edge.png", MAX_IMAGE_BYTES))
            .unwrap();
        assert_eq!(draft.images.len(), 1);
        assert_eq!(draft.images[0].name, "");
    }

    #[test]
    fn image_list_never_exceeds_cap() {
        let mut draft: Draft<FakeFile> = Draft::new();
        draft.add_image(FakeFile::new("a.png", 100)).unwrap();
        draft.add_image(FakeFile::new("b.png", 100)).unwrap();
        assert_eq!(
            draft.add_image(FakeFile::new("c.png", 100)),
            Err(DraftError::TooManyImages)
        );
        assert_eq!(draft.images.len(), MAX_IMAGES);
    }

    #[test]
    fn remove_image_drops_file_and_name() {
        let mut draft: Draft<FakeFile> = Draft::new();
        draft.add_image(FakeFile::new("a.png", 100)).unwrap();
        draft.add_image(FakeFile::new("b.png", 100)).unwrap();
        draft.set_image_name(0, "First");
        draft.set_image_name(1, "Second");
        draft.remove_image(0);
        assert_eq!(draft.images.len(), 1);
        assert_eq!(draft.images[0].name, "Second");
        assert_eq!(draft.images[0].file.file_name(), "b.png");
    }

    #[test]
    fn team_member_edits() {
        let mut draft: Draft<FakeFile> = Draft::new();
        draft.add_team_member();
        draft.set_team_member_field(0, MemberField::Name, "Binh");
        draft.set_team_member_field(0, MemberField::Class, "SE1705");
        draft.set_team_member_field(0, MemberField::Position, "backend");
        assert_eq!(draft.team_members[0].name, "Binh");
        // Out-of-range writes and removals are no-ops.
        draft.set_team_member_field(3, MemberField::Name, "ghost");
        draft.remove_team_member(3);
        assert_eq!(draft.team_members.len(), 1);
        draft.remove_team_member(0);
        assert!(draft.team_members.is_empty());
    }

    #[test]
    fn populate_from_splits_technology() {
        use crate::model::ProjectDetail;
        let mut draft: Draft<FakeFile> = Draft::new();
        let detail = ProjectDetail {
            title: "Old title".to_string(),
            technology: "React, Node , ,Rust".to_string(),
            ..ProjectDetail::default()
        };
        draft.populate_from(&detail);
        assert_eq!(draft.title, "Old title");
        assert_eq!(draft.technology, vec!["React", "Node", "Rust"]);
        assert!(draft.images.is_empty());
    }

    #[test]
    fn snapshot_changes_with_content() {
        let mut draft: Draft<FakeFile> = Draft::new();
        let before = draft.snapshot();
        draft.set_scalar(ScalarField::Title, "x");
        assert_ne!(before, draft.snapshot());
        draft.clear();
        assert_eq!(before, draft.snapshot());
    }
}
