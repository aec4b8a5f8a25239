//! The step sequencer: a fixed forward/backward walk over the step list,
//! gated by validation on the way forward only.

use super::draft::Draft;
use super::file::FileHandle;
use super::validate::{validate, ValidationPolicy};

/// The ordered pages of the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Detail,
    Images,
    Team,
}

impl Step {
    pub const ALL: [Step; 3] = [Step::Detail, Step::Images, Step::Team];

    pub fn title(&self) -> &'static str {
        match self {
            Step::Detail => "Project details",
            Step::Images => "Screenshots",
            Step::Team => "Team",
        }
    }
}

/// Outcome of a forward transition request.
#[derive(Debug, Clone, PartialEq)]
pub enum Advance {
    /// Validation passed; the wizard is now on this step.
    Moved(Step),
    /// Validation failed; the wizard stays and this message is surfaced.
    Blocked(String),
    /// The terminal step passed; the caller should assemble and submit.
    Submit,
}

/// Owns the draft and the step index for one wizard session.
pub struct WizardController<F: FileHandle> {
    draft: Draft<F>,
    index: usize,
    policy: ValidationPolicy,
}

impl<F: FileHandle> Default for WizardController<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FileHandle> WizardController<F> {
    pub fn new() -> Self {
        Self::with_policy(ValidationPolicy::default())
    }

    pub fn with_policy(policy: ValidationPolicy) -> Self {
        Self {
            draft: Draft::new(),
            index: 0,
            policy,
        }
    }

    pub fn step(&self) -> Step {
        Step::ALL[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_last(&self) -> bool {
        self.index == Step::ALL.len() - 1
    }

    pub fn policy(&self) -> &ValidationPolicy {
        &self.policy
    }

    pub fn draft(&self) -> &Draft<F> {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut Draft<F> {
        &mut self.draft
    }

    /// Validates the current step and advances on success. On the terminal
    /// step a pass reports [`Advance::Submit`] instead of incrementing.
    pub fn next(&mut self) -> Advance {
        let check = validate(&self.draft, self.step(), &self.policy);
        if !check.ok {
            return Advance::Blocked(
                check
                    .message
                    .unwrap_or_else(|| "Please complete this step first.".to_string()),
            );
        }
        if self.is_last() {
            return Advance::Submit;
        }
        self.index += 1;
        Advance::Moved(self.step())
    }

    /// Steps backward without validating and without touching the draft.
    /// Returns false when already on the first step.
    pub fn prev(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Drops the draft and returns to the first step (successful submit).
    pub fn reset(&mut self) {
        self.draft.clear();
        self.index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::super::draft::ScalarField;
    use super::super::testing::FakeFile;
    use super::*;

    fn controller_with_valid_detail() -> WizardController<FakeFile> {
        let mut wizard = WizardController::new();
        let draft = wizard.draft_mut();
        draft.set_scalar(ScalarField::Title, "Title");
        draft.set_scalar(ScalarField::Description, "Description");
        draft.set_scalar(ScalarField::VideoUrl, "https://youtu.be/dQw4w9WgXcQ");
        draft.set_scalar(ScalarField::CategoryId, "cat-1");
        draft.commit_technology("Rust");
        wizard
    }

    #[test]
    fn next_blocks_on_incomplete_detail() {
        let mut wizard: WizardController<FakeFile> = WizardController::new();
        assert!(matches!(wizard.next(), Advance::Blocked(_)));
        assert_eq!(wizard.step(), Step::Detail);
    }

    #[test]
    fn next_advances_regardless_of_video_url_shape() {
        let mut wizard = controller_with_valid_detail();
        wizard
            .draft_mut()
            .set_scalar(ScalarField::VideoUrl, "https://vimeo.com/1234567");
        assert_eq!(wizard.next(), Advance::Moved(Step::Images));
    }

    #[test]
    fn prev_floors_at_zero_and_never_mutates_the_draft() {
        let mut wizard = controller_with_valid_detail();
        assert!(!wizard.prev());
        assert_eq!(wizard.step(), Step::Detail);

        assert_eq!(wizard.next(), Advance::Moved(Step::Images));
        let before = wizard.draft().clone();
        assert!(wizard.prev());
        assert_eq!(wizard.step(), Step::Detail);
        assert_eq!(*wizard.draft(), before);
    }

    #[test]
    fn terminal_step_reports_submit_without_advancing() {
        let mut wizard = controller_with_valid_detail();
        assert_eq!(wizard.next(), Advance::Moved(Step::Images));
        wizard
            .draft_mut()
            .add_image(FakeFile::new("a.png", 100))
            .unwrap();
        wizard.draft_mut().set_image_name(0, "Home");
        assert_eq!(wizard.next(), Advance::Moved(Step::Team));
        assert_eq!(wizard.next(), Advance::Submit);
        assert_eq!(wizard.step(), Step::Team);
        // Submit is re-reported on a retry, not consumed.
        assert_eq!(wizard.next(), Advance::Submit);
    }

    #[test]
    fn images_step_blocks_until_every_image_is_named() {
        let mut wizard = controller_with_valid_detail();
        assert_eq!(wizard.next(), Advance::Moved(Step::Images));
        assert!(matches!(wizard.next(), Advance::Blocked(_)));
        wizard
            .draft_mut()
            .add_image(FakeFile::new("a.png", 100))
            .unwrap();
        assert!(matches!(wizard.next(), Advance::Blocked(_)));
        wizard.draft_mut().set_image_name(0, "Home");
        assert_eq!(wizard.next(), Advance::Moved(Step::Team));
    }

    #[test]
    fn reset_clears_draft_and_rewinds() {
        let mut wizard = controller_with_valid_detail();
        wizard.next();
        wizard.reset();
        assert_eq!(wizard.step(), Step::Detail);
        assert!(wizard.draft().title.is_empty());
    }
}
