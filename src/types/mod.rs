// Public modules
pub mod generation;
pub mod model;
pub mod portfolio;
pub mod transcript;
pub mod turn;

// Re-exports
pub use generation::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
    PromptFeedback, UsageMetadata,
};
pub use model::{KnownModel, Model};
pub use portfolio::{
    MAX_SKILL_LEVEL, Project, ProjectCategory, Service, Skill, SkillCategory,
};
pub use transcript::{DEFAULT_CONTEXT_WINDOW, Transcript};
pub use turn::{Speaker, Turn};
