//! Turns an accepted draft into the ordered field list of the multipart
//! request. No validation happens here: assembly only runs after the
//! terminal step passed.

use crate::model::{Actor, TeamMember};

use super::draft::Draft;
use super::file::FileHandle;

/// Position label given to the synthetic uploader member.
pub const LEADER_POSITION: &str = "leader";
/// Class literal used when the uploader's profile carries no class.
pub const CLASS_FALLBACK: &str = "N/A";

/// One field of the outgoing multipart form.
#[derive(Debug, Clone, PartialEq)]
pub enum Part<F> {
    Text { name: String, value: String },
    File { name: String, file: F },
}

fn text<F>(parts: &mut Vec<Part<F>>, name: &str, value: &str) {
    parts.push(Part::Text {
        name: name.to_string(),
        value: value.to_string(),
    });
}

/// Builds the wire payload. Empty scalars are omitted entirely rather than
/// sent as empty strings. When the draft's `include_uploader` flag is set and
/// an actor is available, a synthetic leader member is prepended to the
/// user-entered rows.
pub fn assemble<F: FileHandle + Clone>(draft: &Draft<F>, uploader: Option<&Actor>) -> Vec<Part<F>> {
    let mut parts = Vec::new();

    for (name, value) in [
        ("title", &draft.title),
        ("description", &draft.description),
        ("repositoryUrl", &draft.repository_url),
        ("videoUrl", &draft.video_url),
        ("categoryId", &draft.category_id),
    ] {
        if !value.is_empty() {
            text(&mut parts, name, value);
        }
    }

    if !draft.technology.is_empty() {
        text(&mut parts, "technology", &draft.technology.join(","));
    }

    for (i, entry) in draft.images.iter().enumerate() {
        parts.push(Part::File {
            name: "images[]".to_string(),
            file: entry.file.clone(),
        });
        if !entry.name.is_empty() {
            text(&mut parts, &format!("imageNames[{}]", i), &entry.name);
        }
    }

    let mut members: Vec<TeamMember> = Vec::new();
    if draft.include_uploader {
        if let Some(actor) = uploader {
            members.push(TeamMember {
                name: actor.name.clone(),
                class: actor
                    .class_name
                    .clone()
                    .unwrap_or_else(|| CLASS_FALLBACK.to_string()),
                position: LEADER_POSITION.to_string(),
            });
        }
    }
    members.extend(draft.team_members.iter().cloned());

    for (i, member) in members.iter().enumerate() {
        text(
            &mut parts,
            &format!("teamMembers[{}][memberName]", i),
            &member.name,
        );
        text(
            &mut parts,
            &format!("teamMembers[{}][memberClass]", i),
            &member.class,
        );
        text(
            &mut parts,
            &format!("teamMembers[{}][memberPosition]", i),
            &member.position,
        );
    }

    parts
}

#[cfg(test)]
mod tests {
    use super::super::draft::{MemberField, ScalarField};
    use super::super::testing::FakeFile;
    use super::*;

    fn uploader() -> Actor {
        Actor {
            name: "An Nguyen".to_string(),
            class_name: Some("SE1704".to_string()),
        }
    }

    fn text_value<'a>(parts: &'a [Part<FakeFile>], name: &str) -> Option<&'a str> {
        parts.iter().find_map(|p| match p {
            Part::Text { name: n, value } if n == name => Some(value.as_str()),
            _ => None,
        })
    }

    #[test]
    fn empty_scalars_are_omitted() {
        let mut draft: Draft<FakeFile> = Draft::new();
        draft.set_scalar(ScalarField::Title, "Only a title");
        draft.include_uploader = false;
        let parts = assemble(&draft, None);
        assert_eq!(text_value(&parts, "title"), Some("Only a title"));
        assert!(text_value(&parts, "description").is_none());
        assert!(text_value(&parts, "repositoryUrl").is_none());
    }

    #[test]
    fn technology_is_comma_joined() {
        let mut draft: Draft<FakeFile> = Draft::new();
        draft.commit_technology("React");
        draft.commit_technology("Rust");
        let parts = assemble(&draft, None);
        assert_eq!(text_value(&parts, "technology"), Some("React,Rust"));
    }

    #[test]
    fn image_names_are_index_addressed_and_optional() {
        let mut draft: Draft<FakeFile> = Draft::new();
        draft.add_image(FakeFile::new("a.png", 100)).unwrap();
        draft.add_image(FakeFile::new("b.png", 100)).unwrap();
        draft.set_image_name(1, "Second screen");
        let parts = assemble(&draft, None);

        let files: Vec<_> = parts
            .iter()
            .filter(|p| matches!(p, Part::File { name, .. } if name == "images[]"))
            .collect();
        assert_eq!(files.len(), 2);
        assert!(text_value(&parts, "imageNames[0]").is_none());
        assert_eq!(text_value(&parts, "imageNames[1]"), Some("Second screen"));
    }

    #[test]
    fn uploader_is_prepended_before_entered_members() {
        let mut draft: Draft<FakeFile> = Draft::new();
        draft.include_uploader = true;
        draft.add_team_member();
        draft.set_team_member_field(0, MemberField::Name, "Binh");
        draft.add_team_member();
        draft.set_team_member_field(1, MemberField::Name, "Chi");
        let parts = assemble(&draft, Some(&uploader()));

        assert_eq!(text_value(&parts, "teamMembers[0][memberName]"), Some("An Nguyen"));
        assert_eq!(text_value(&parts, "teamMembers[0][memberClass]"), Some("SE1704"));
        assert_eq!(
            text_value(&parts, "teamMembers[0][memberPosition]"),
            Some(LEADER_POSITION)
        );
        assert_eq!(text_value(&parts, "teamMembers[1][memberName]"), Some("Binh"));
        assert_eq!(text_value(&parts, "teamMembers[2][memberName]"), Some("Chi"));
        assert!(text_value(&parts, "teamMembers[3][memberName]").is_none());
    }

    #[test]
    fn uploader_class_falls_back_when_absent() {
        let mut draft: Draft<FakeFile> = Draft::new();
        draft.include_uploader = true;
        let actor = Actor {
            name: "Staff".to_string(),
            class_name: None,
        };
        let parts = assemble(&draft, Some(&actor));
        assert_eq!(
            text_value(&parts, "teamMembers[0][memberClass]"),
            Some(CLASS_FALLBACK)
        );
    }

    #[test]
    fn flag_off_means_no_synthetic_member() {
        let mut draft: Draft<FakeFile> = Draft::new();
        draft.include_uploader = false;
        let parts = assemble(&draft, Some(&uploader()));
        assert!(text_value(&parts, "teamMembers[0][memberName]").is_none());
    }
}
