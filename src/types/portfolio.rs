use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The discipline a portfolio project belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectCategory {
    /// Interface and experience design.
    #[serde(rename = "UI/UX")]
    UiUx,

    /// Print and digital graphic work.
    #[serde(rename = "Graphic Design")]
    GraphicDesign,

    /// Identity systems.
    #[serde(rename = "Branding")]
    Branding,
}

impl ProjectCategory {
    /// Every category, in display order.
    pub const ALL: [ProjectCategory; 3] = [
        ProjectCategory::UiUx,
        ProjectCategory::GraphicDesign,
        ProjectCategory::Branding,
    ];
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectCategory::UiUx => write!(f, "UI/UX"),
            ProjectCategory::GraphicDesign => write!(f, "Graphic Design"),
            ProjectCategory::Branding => write!(f, "Branding"),
        }
    }
}

impl FromStr for ProjectCategory {
    type Err = Error;

    /// Accepts the display name or a compact spelling such as `uiux` or
    /// `graphic-design`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        match compact.as_str() {
            "uiux" => Ok(ProjectCategory::UiUx),
            "graphicdesign" | "graphic" => Ok(ProjectCategory::GraphicDesign),
            "branding" | "brand" => Ok(ProjectCategory::Branding),
            _ => Err(Error::validation(
                format!("unknown project category: {s}"),
                Some("category".to_string()),
            )),
        }
    }
}

/// A showcased piece of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub category: ProjectCategory,
    pub image_url: String,
    pub description: String,
    pub tools: Vec<String>,
}

impl Project {
    /// The template a freshly added project starts from.
    pub fn placeholder(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: "New Project".to_string(),
            category: ProjectCategory::UiUx,
            image_url: "https://picsum.photos/seed/new/1200/800".to_string(),
            description: "Project description goes here...".to_string(),
            tools: vec!["Figma".to_string()],
        }
    }
}

/// How a skill is grouped on the expertise chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SkillCategory {
    /// Software the designer works in.
    Tool,

    /// A core competency; these are the ones charted.
    #[serde(rename = "Hard Skill")]
    HardSkill,

    /// A way of working.
    Process,
}

impl SkillCategory {
    /// Every category, in display order.
    pub const ALL: [SkillCategory; 3] = [
        SkillCategory::Tool,
        SkillCategory::HardSkill,
        SkillCategory::Process,
    ];
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkillCategory::Tool => write!(f, "Tool"),
            SkillCategory::HardSkill => write!(f, "Hard Skill"),
            SkillCategory::Process => write!(f, "Process"),
        }
    }
}

impl FromStr for SkillCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        match compact.as_str() {
            "tool" => Ok(SkillCategory::Tool),
            "hardskill" | "hard" => Ok(SkillCategory::HardSkill),
            "process" => Ok(SkillCategory::Process),
            _ => Err(Error::validation(
                format!("unknown skill category: {s}"),
                Some("category".to_string()),
            )),
        }
    }
}

/// Highest mastery level a skill can carry.
pub const MAX_SKILL_LEVEL: u8 = 100;

/// A named competency with a mastery level from 0 to 100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
    pub category: SkillCategory,
}

impl Skill {
    /// Create a skill.
    pub fn new(name: impl Into<String>, level: u8, category: SkillCategory) -> Self {
        Self {
            name: name.into(),
            level,
            category,
        }
    }

    /// The template a freshly added skill starts from.
    pub fn placeholder() -> Self {
        Self::new("New Skill", 80, SkillCategory::Tool)
    }
}

/// An offered service, as listed on the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub title: String,
    #[serde(rename = "desc")]
    pub description: String,
}

impl Service {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}
