use common::model::{Category, ProjectDetail};
use common::wizard::{MemberField, ScalarField, SubmitOutcome};

pub enum Msg {
    CategoriesLoaded(Vec<Category>),
    CategoriesFailed,
    ProjectLoaded(Box<ProjectDetail>),
    UpdateScalar(ScalarField, String),
    SetDescriptionTab(String),
    TechnologyInput(String),
    CommitTechnology,
    RemoveTechnology(usize),
    OpenFileDialog,
    FilesSelected(Vec<web_sys::File>),
    ThumbnailReady { image_id: String, data_url: String },
    SetImageName(usize, String),
    RemoveImage(usize),
    AddTeamMember,
    RemoveTeamMember(usize),
    SetTeamMemberField(usize, MemberField, String),
    ToggleIncludeUploader(bool),
    Next,
    Prev,
    SubmitFinished(SubmitOutcome),
    DismissError,
}
