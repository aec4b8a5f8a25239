pub mod actor;
pub mod category;
pub mod project;
pub mod session;

pub use actor::Actor;
pub use category::Category;
pub use project::{CreatedProject, ProjectDetail, TeamMember};
pub use session::Session;
