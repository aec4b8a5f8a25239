use serde::{Deserialize, Serialize};

/// One team member row of a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    #[serde(rename = "memberName", default)]
    pub name: String,
    #[serde(rename = "memberClass", default)]
    pub class: String,
    #[serde(rename = "memberPosition", default)]
    pub position: String,
}

impl TeamMember {
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.class.trim().is_empty()
            && !self.position.trim().is_empty()
    }
}

/// Minimal shape of a successful `POST /api/projects` response.
/// The server sends more fields; everything unknown is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreatedProject {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub slug: String,
}

/// Full project shape used to pre-populate the wizard in the edit variant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectDetail {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "repositoryUrl", default)]
    pub repository_url: String,
    #[serde(rename = "videoUrl", default)]
    pub video_url: String,
    #[serde(rename = "categoryId", default)]
    pub category_id: String,
    /// Comma-joined on the wire, split back into tags on load.
    #[serde(default)]
    pub technology: String,
    #[serde(rename = "teamMembers", default)]
    pub team_members: Vec<TeamMember>,
}
