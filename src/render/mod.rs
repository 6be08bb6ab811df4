pub mod placeholders;
pub mod template;

pub use placeholders::Placeholders;
pub use template::{render_artifact, substitute, verify_templates, ArtifactKind};
