//! Content editing behind an injected repository.
//!
//! Presentation code (the admin REPL) talks to a [`PortfolioRepository`] and
//! never touches storage directly. [`InMemoryRepository`] is the only
//! implementation: it is seeded from the catalog and lives as long as the
//! process.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::portfolio::catalog;
use crate::types::{MAX_SKILL_LEVEL, Project, ProjectCategory, Skill, SkillCategory};

/// A project attribute that can be edited in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectField {
    Title,
    Category,
    ImageUrl,
    Description,
    Tools,
}

impl fmt::Display for ProjectField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectField::Title => write!(f, "title"),
            ProjectField::Category => write!(f, "category"),
            ProjectField::ImageUrl => write!(f, "image"),
            ProjectField::Description => write!(f, "description"),
            ProjectField::Tools => write!(f, "tools"),
        }
    }
}

impl FromStr for ProjectField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "title" => Ok(ProjectField::Title),
            "category" => Ok(ProjectField::Category),
            "image" | "image_url" | "imageurl" => Ok(ProjectField::ImageUrl),
            "description" | "desc" => Ok(ProjectField::Description),
            "tools" => Ok(ProjectField::Tools),
            _ => Err(Error::validation(
                format!("unknown project field: {s}"),
                Some("field".to_string()),
            )),
        }
    }
}

/// A single-field edit to a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectUpdate {
    Title(String),
    Category(ProjectCategory),
    ImageUrl(String),
    Description(String),
    Tools(Vec<String>),
}

impl ProjectUpdate {
    /// Parse a raw value for `field`. Tools are comma-separated.
    pub fn parse(field: ProjectField, value: &str) -> Result<Self> {
        let value = value.trim();
        Ok(match field {
            ProjectField::Title => ProjectUpdate::Title(value.to_string()),
            ProjectField::Category => ProjectUpdate::Category(value.parse()?),
            ProjectField::ImageUrl => ProjectUpdate::ImageUrl(value.to_string()),
            ProjectField::Description => ProjectUpdate::Description(value.to_string()),
            ProjectField::Tools => ProjectUpdate::Tools(
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|tool| !tool.is_empty())
                    .map(str::to_string)
                    .collect(),
            ),
        })
    }

    /// The field this update touches.
    pub fn field(&self) -> ProjectField {
        match self {
            ProjectUpdate::Title(_) => ProjectField::Title,
            ProjectUpdate::Category(_) => ProjectField::Category,
            ProjectUpdate::ImageUrl(_) => ProjectField::ImageUrl,
            ProjectUpdate::Description(_) => ProjectField::Description,
            ProjectUpdate::Tools(_) => ProjectField::Tools,
        }
    }

    fn apply(self, project: &mut Project) {
        match self {
            ProjectUpdate::Title(title) => project.title = title,
            ProjectUpdate::Category(category) => project.category = category,
            ProjectUpdate::ImageUrl(url) => project.image_url = url,
            ProjectUpdate::Description(description) => project.description = description,
            ProjectUpdate::Tools(tools) => project.tools = tools,
        }
    }
}

/// A single-field edit to a skill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkillUpdate {
    Name(String),
    Level(u8),
    Category(SkillCategory),
}

/// Headline numbers for the admin dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub project_count: usize,
    pub skill_count: usize,
    /// Mean skill level, or 0.0 with no skills.
    pub average_skill_level: f32,
}

/// Storage for editable portfolio content.
pub trait PortfolioRepository {
    fn list_projects(&self) -> Vec<Project>;

    /// Add a project. An empty id is replaced with a fresh one.
    fn add_project(&mut self, project: Project) -> Result<Project>;

    fn update_project(&mut self, id: &str, update: ProjectUpdate) -> Result<Project>;

    fn delete_project(&mut self, id: &str) -> Result<Project>;

    fn list_skills(&self) -> Vec<Skill>;

    /// Add a skill. Names are unique and levels are at most 100.
    fn add_skill(&mut self, skill: Skill) -> Result<Skill>;

    fn update_skill(&mut self, name: &str, update: SkillUpdate) -> Result<Skill>;

    fn delete_skill(&mut self, name: &str) -> Result<Skill>;

    fn summary(&self) -> DashboardSummary {
        let skills = self.list_skills();
        let average_skill_level = if skills.is_empty() {
            0.0
        } else {
            skills.iter().map(|s| s.level as f32).sum::<f32>() / skills.len() as f32
        };
        DashboardSummary {
            project_count: self.list_projects().len(),
            skill_count: skills.len(),
            average_skill_level,
        }
    }

    /// Skills grouped by category, each group in listing order.
    fn skills_by_category(&self) -> BTreeMap<SkillCategory, Vec<Skill>> {
        let mut groups: BTreeMap<SkillCategory, Vec<Skill>> = BTreeMap::new();
        for skill in self.list_skills() {
            groups.entry(skill.category).or_default().push(skill);
        }
        groups
    }

    /// The skills drawn on the expertise chart.
    fn chart_skills(&self) -> Vec<Skill> {
        self.list_skills()
            .into_iter()
            .filter(|skill| skill.category == SkillCategory::HardSkill)
            .collect()
    }
}

/// A process-lifetime repository.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    projects: Vec<Project>,
    skills: Vec<Skill>,
    next_id: u64,
}

impl InMemoryRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::with_content(Vec::new(), Vec::new())
    }

    /// Creates a repository holding the catalog content.
    pub fn seeded() -> Self {
        Self::with_content(catalog::projects(), catalog::skills())
    }

    /// Creates a repository holding the given content.
    pub fn with_content(projects: Vec<Project>, skills: Vec<Skill>) -> Self {
        let highest = projects
            .iter()
            .filter_map(|p| p.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self {
            projects,
            skills,
            next_id: highest.saturating_add(1),
        }
    }

    fn fresh_id(&mut self) -> Result<String> {
        loop {
            let id = self.next_id.to_string();
            self.next_id = self.next_id.checked_add(1).ok_or_else(|| {
                Error::validation("no project ids left to assign", Some("id".to_string()))
            })?;
            if !self.projects.iter().any(|p| p.id == id) {
                return Ok(id);
            }
        }
    }

    fn project_mut(&mut self, id: &str) -> Result<&mut Project> {
        self.projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| project_not_found(id))
    }

    fn skill_index(&self, name: &str) -> Result<usize> {
        self.skills
            .iter()
            .position(|s| s.name == name)
            .ok_or_else(|| skill_not_found(name))
    }

    fn check_skill_name(&self, name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(Error::validation(
                "skill name must not be empty",
                Some("name".to_string()),
            ));
        }
        if self.skills.iter().any(|s| s.name == name) {
            return Err(Error::validation(
                format!("a skill named {name:?} already exists"),
                Some("name".to_string()),
            ));
        }
        Ok(())
    }
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn check_level(level: u8) -> Result<()> {
    if level > MAX_SKILL_LEVEL {
        return Err(Error::validation(
            format!("skill level must be between 0 and {MAX_SKILL_LEVEL}, got {level}"),
            Some("level".to_string()),
        ));
    }
    Ok(())
}

fn project_not_found(id: &str) -> Error {
    Error::not_found(
        format!("no project with id {id}"),
        Some("project".to_string()),
        Some(id.to_string()),
    )
}

fn skill_not_found(name: &str) -> Error {
    Error::not_found(
        format!("no skill named {name:?}"),
        Some("skill".to_string()),
        Some(name.to_string()),
    )
}

impl PortfolioRepository for InMemoryRepository {
    fn list_projects(&self) -> Vec<Project> {
        self.projects.clone()
    }

    fn add_project(&mut self, mut project: Project) -> Result<Project> {
        if project.id.is_empty() {
            project.id = self.fresh_id()?;
        } else if self.projects.iter().any(|p| p.id == project.id) {
            return Err(Error::validation(
                format!("a project with id {} already exists", project.id),
                Some("id".to_string()),
            ));
        }
        self.projects.push(project.clone());
        Ok(project)
    }

    fn update_project(&mut self, id: &str, update: ProjectUpdate) -> Result<Project> {
        let project = self.project_mut(id)?;
        update.apply(project);
        Ok(project.clone())
    }

    fn delete_project(&mut self, id: &str) -> Result<Project> {
        let index = self
            .projects
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| project_not_found(id))?;
        Ok(self.projects.remove(index))
    }

    fn list_skills(&self) -> Vec<Skill> {
        self.skills.clone()
    }

    fn add_skill(&mut self, skill: Skill) -> Result<Skill> {
        self.check_skill_name(&skill.name)?;
        check_level(skill.level)?;
        self.skills.push(skill.clone());
        Ok(skill)
    }

    fn update_skill(&mut self, name: &str, update: SkillUpdate) -> Result<Skill> {
        let index = self.skill_index(name)?;
        match update {
            SkillUpdate::Name(new_name) => {
                if new_name != name {
                    self.check_skill_name(&new_name)?;
                }
                self.skills[index].name = new_name;
            }
            SkillUpdate::Level(level) => {
                check_level(level)?;
                self.skills[index].level = level;
            }
            SkillUpdate::Category(category) => self.skills[index].category = category,
        }
        Ok(self.skills[index].clone())
    }

    fn delete_skill(&mut self, name: &str) -> Result<Skill> {
        let index = self.skill_index(name)?;
        Ok(self.skills.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_matches_catalog() {
        let repo = InMemoryRepository::seeded();
        assert_eq!(repo.list_projects(), catalog::projects());
        assert_eq!(repo.list_skills(), catalog::skills());
    }

    #[test]
    fn add_project_assigns_fresh_ids() {
        let mut repo = InMemoryRepository::seeded();
        let first = repo.add_project(Project::placeholder("")).unwrap();
        let second = repo.add_project(Project::placeholder("")).unwrap();
        assert_eq!(first.id, "5");
        assert_eq!(second.id, "6");
        assert_eq!(first.title, "New Project");
        assert_eq!(repo.list_projects().len(), 6);
    }

    #[test]
    fn add_project_rejects_duplicate_id() {
        let mut repo = InMemoryRepository::seeded();
        let err = repo.add_project(Project::placeholder("2")).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(repo.list_projects().len(), 4);
    }

    #[test]
    fn fresh_id_skips_taken_ids() {
        let mut repo = InMemoryRepository::new();
        repo.add_project(Project::placeholder("draft")).unwrap();
        repo.add_project(Project::placeholder("")).unwrap();
        repo.add_project(Project::placeholder("3")).unwrap();
        let next = repo.add_project(Project::placeholder("")).unwrap();
        let also = repo.add_project(Project::placeholder("")).unwrap();
        assert_eq!(next.id, "2");
        assert_eq!(also.id, "4");
    }

    #[test]
    fn exhausted_ids_are_a_validation_error() {
        let mut repo =
            InMemoryRepository::with_content(vec![Project::placeholder(u64::MAX.to_string())], vec![]);
        let err = repo.add_project(Project::placeholder("")).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(repo.list_projects().len(), 1);
        repo.add_project(Project::placeholder("draft")).unwrap();
    }

    #[test]
    fn update_project_fields() {
        let mut repo = InMemoryRepository::seeded();
        let updated = repo
            .update_project("1", ProjectUpdate::Title("Lumina 2.0".to_string()))
            .unwrap();
        assert_eq!(updated.title, "Lumina 2.0");

        let update = ProjectUpdate::parse(ProjectField::Tools, "Figma, Framer ,").unwrap();
        let updated = repo.update_project("1", update).unwrap();
        assert_eq!(updated.tools, vec!["Figma", "Framer"]);

        let update = ProjectUpdate::parse(ProjectField::Category, "branding").unwrap();
        let updated = repo.update_project("1", update).unwrap();
        assert_eq!(updated.category, ProjectCategory::Branding);
        assert_eq!(repo.list_projects()[0], updated);
    }

    #[test]
    fn update_missing_project_is_not_found() {
        let mut repo = InMemoryRepository::seeded();
        let err = repo
            .update_project("99", ProjectUpdate::Title("x".to_string()))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn bad_category_value_is_rejected() {
        let err = ProjectUpdate::parse(ProjectField::Category, "sculpture").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn delete_project_by_id() {
        let mut repo = InMemoryRepository::seeded();
        let removed = repo.delete_project("3").unwrap();
        assert_eq!(removed.title, "Zenith E-Commerce App");
        assert!(repo.list_projects().iter().all(|p| p.id != "3"));
        assert!(repo.delete_project("3").unwrap_err().is_not_found());
    }

    #[test]
    fn add_skill_validates() {
        let mut repo = InMemoryRepository::seeded();
        repo.add_skill(Skill::new("Motion", 70, SkillCategory::HardSkill))
            .unwrap();
        assert!(
            repo.add_skill(Skill::new("Figma", 50, SkillCategory::Tool))
                .unwrap_err()
                .is_validation()
        );
        assert!(
            repo.add_skill(Skill::new("Sketch", 101, SkillCategory::Tool))
                .unwrap_err()
                .is_validation()
        );
        assert!(
            repo.add_skill(Skill::new("  ", 10, SkillCategory::Tool))
                .unwrap_err()
                .is_validation()
        );
        assert_eq!(repo.list_skills().len(), 10);
    }

    #[test]
    fn update_skill_level_and_name() {
        let mut repo = InMemoryRepository::seeded();
        let skill = repo.update_skill("Figma", SkillUpdate::Level(99)).unwrap();
        assert_eq!(skill.level, 99);
        assert!(
            repo.update_skill("Figma", SkillUpdate::Level(150))
                .unwrap_err()
                .is_validation()
        );
        assert!(
            repo.update_skill("Figma", SkillUpdate::Name("Photoshop".to_string()))
                .unwrap_err()
                .is_validation()
        );
        let renamed = repo
            .update_skill("Figma", SkillUpdate::Name("Figma Pro".to_string()))
            .unwrap();
        assert_eq!(renamed.name, "Figma Pro");
        assert!(
            repo.update_skill("Figma", SkillUpdate::Level(1))
                .unwrap_err()
                .is_not_found()
        );
    }

    #[test]
    fn delete_skill_by_name() {
        let mut repo = InMemoryRepository::seeded();
        let removed = repo.delete_skill("UX Research").unwrap();
        assert_eq!(removed.level, 80);
        assert_eq!(repo.list_skills().len(), 8);
        assert!(repo.delete_skill("UX Research").unwrap_err().is_not_found());
    }

    #[test]
    fn dashboard_summary() {
        let repo = InMemoryRepository::seeded();
        let summary = repo.summary();
        assert_eq!(summary.project_count, 4);
        assert_eq!(summary.skill_count, 9);
        // (95 + 85 + 90 + 92 + 98 + 80 + 90 + 85 + 95) / 9 = 90
        assert!((summary.average_skill_level - 90.0).abs() < 1e-4);

        let empty = InMemoryRepository::new().summary();
        assert_eq!(empty.skill_count, 0);
        assert_eq!(empty.average_skill_level, 0.0);
    }

    #[test]
    fn grouping_and_chart() {
        let repo = InMemoryRepository::seeded();
        let groups = repo.skills_by_category();
        assert_eq!(groups[&SkillCategory::Tool].len(), 4);
        assert_eq!(groups[&SkillCategory::HardSkill].len(), 3);
        assert_eq!(groups[&SkillCategory::Process].len(), 2);

        let chart: Vec<String> = repo.chart_skills().into_iter().map(|s| s.name).collect();
        assert_eq!(chart, vec!["UI Design", "UX Research", "Prototyping"]);
    }

    #[test]
    fn project_field_names() {
        assert_eq!("image".parse::<ProjectField>().unwrap(), ProjectField::ImageUrl);
        assert_eq!("Desc".parse::<ProjectField>().unwrap(), ProjectField::Description);
        assert!("owner".parse::<ProjectField>().is_err());
        for field in [
            ProjectField::Title,
            ProjectField::Category,
            ProjectField::ImageUrl,
            ProjectField::Description,
            ProjectField::Tools,
        ] {
            assert_eq!(field.to_string().parse::<ProjectField>().unwrap(), field);
        }
    }
}
