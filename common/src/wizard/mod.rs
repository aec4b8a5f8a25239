//! The multi-step submission wizard core.
//!
//! One wizard session owns one [`Draft`] and walks a fixed step list
//! (Detail, Images, Team) under a [`WizardController`]. Forward transitions
//! are gated by [`validate`]; the terminal step hands off to [`assemble`],
//! whose output the frontend turns into a multipart request. The response is
//! interpreted by [`interpret_response`] into a [`SubmitOutcome`].
//!
//! Nothing here touches the browser: file handles come in through the
//! [`FileHandle`] trait so the whole flow is unit-testable.

pub mod assemble;
pub mod draft;
pub mod file;
pub mod steps;
pub mod submit;
pub mod validate;

pub use assemble::{assemble, Part};
pub use draft::{Draft, DraftError, MemberField, ScalarField, MAX_IMAGES, MAX_IMAGE_BYTES};
pub use file::FileHandle;
pub use steps::{Advance, Step, WizardController};
pub use submit::{interpret_response, SubmitOutcome, GENERIC_SUBMIT_ERROR};
pub use validate::{validate, StepCheck, ValidationPolicy};


#[cfg(test)]
mod flow_tests {
    use super::testing::FakeFile;
    use super::*;
    use crate::model::Actor;

    fn uploader() -> Actor {
        Actor {
            name: "An Nguyen".to_string(),
            class_name: Some("SE1704".to_string()),
        }
    }

    fn fill_detail(draft: &mut Draft<FakeFile>) {
        draft.set_scalar(ScalarField::Title, "Campus Marketplace");
        draft.set_scalar(ScalarField::Description, "A marketplace for students.");
        draft.set_scalar(ScalarField::RepositoryUrl, "https://github.com/x/y");
        draft.set_scalar(
            ScalarField::VideoUrl,
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
        );
        draft.set_scalar(ScalarField::CategoryId, "cat-7");
        draft.commit_technology("React,");
    }

    /// Happy path: valid detail, one named 1 MB image, zero manual members
    /// with the uploader flag left on.
    #[test]
    fn full_wizard_run_assembles_expected_payload() {
        let mut wizard: WizardController<FakeFile> = WizardController::new();
        fill_detail(wizard.draft_mut());
        assert_eq!(wizard.next(), Advance::Moved(Step::Images));

        wizard
            .draft_mut()
            .add_image(FakeFile::new("home.png", 1_048_576))
            .unwrap();
        wizard.draft_mut().set_image_name(0, "Home screen");
        assert_eq!(wizard.next(), Advance::Moved(Step::Team));

        assert!(wizard.draft().include_uploader);
        assert_eq!(wizard.next(), Advance::Submit);

        let parts = assemble(wizard.draft(), Some(&uploader()));
        let image_parts: Vec<_> = parts
            .iter()
            .filter(|p| matches!(p, Part::File { name, .. } if name == "images[]"))
            .collect();
        assert_eq!(image_parts.len(), 1);
        assert!(parts.iter().any(|p| matches!(
            p,
            Part::Text { name, value }
                if name == "teamMembers[0][memberName]" && value == "An Nguyen"
        )));

        // Simulated 201: the draft is cleared and the flow ends in success.
        let outcome = interpret_response(201, r#"{"id":"p1","slug":"campus-marketplace"}"#);
        match outcome {
            SubmitOutcome::Created(p) => assert_eq!(p.slug, "campus-marketplace"),
            other => panic!("expected Created, got {:?}", other),
        }
        wizard.reset();
        assert!(wizard.draft().title.is_empty());
        assert_eq!(wizard.step(), Step::Detail);
    }

    /// Same flow, but the server rejects with a 422: the draft must survive
    /// untouched and the surfaced text must be the server's message.
    #[test]
    fn rejected_submission_preserves_draft() {
        let mut wizard: WizardController<FakeFile> = WizardController::new();
        fill_detail(wizard.draft_mut());
        assert_eq!(wizard.next(), Advance::Moved(Step::Images));
        wizard
            .draft_mut()
            .add_image(FakeFile::new("home.png", 1_048_576))
            .unwrap();
        wizard.draft_mut().set_image_name(0, "Home screen");
        assert_eq!(wizard.next(), Advance::Moved(Step::Team));
        assert_eq!(wizard.next(), Advance::Submit);

        let outcome = interpret_response(422, r#"{"message":"Validation failed"}"#);
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected("Validation failed".to_string())
        );
        assert_eq!(outcome.error_text(), Some("Validation failed"));

        // No reset on failure; everything is still there for a manual retry.
        assert_eq!(wizard.draft().title, "Campus Marketplace");
        assert_eq!(wizard.draft().images.len(), 1);
        assert_eq!(wizard.step(), Step::Team);
    }
}
