//! Command parsing for the content admin REPL.
//!
//! Each input line is one command. Parsing never fails outright: malformed
//! input becomes [`AdminCommand::Invalid`] carrying a message for the user.

use crate::error::{Error, Result};
use crate::portfolio::repository::{
    DashboardSummary, PortfolioRepository, ProjectField, ProjectUpdate, SkillUpdate,
};
use crate::types::{Project, Skill, SkillCategory};

/// A parsed admin command.
#[derive(Debug, Clone, PartialEq)]
pub enum AdminCommand {
    /// List every project.
    ListProjects,

    /// List every skill.
    ListSkills,

    /// Add a placeholder project.
    AddProject,

    /// Add a skill.
    AddSkill(Skill),

    /// Edit one field of a project.
    SetProject { id: String, update: ProjectUpdate },

    /// Change a skill's mastery level.
    SetLevel { name: String, level: u8 },

    /// Delete a project by id.
    DeleteProject(String),

    /// Delete a skill by name.
    DeleteSkill(String),

    /// Show the dashboard numbers.
    Summary,

    /// Display help information.
    Help,

    /// Exit the admin REPL.
    Quit,

    /// Report a parsing error back to the caller.
    Invalid(String),
}

/// What a command did to the repository.
#[derive(Debug, Clone, PartialEq)]
pub enum AdminOutcome {
    Projects(Vec<Project>),
    Skills(Vec<Skill>),
    ProjectAdded(Project),
    SkillAdded(Skill),
    ProjectUpdated(Project),
    SkillUpdated(Skill),
    ProjectDeleted(Project),
    SkillDeleted(Skill),
    Summary(DashboardSummary),
}

/// Parses one line of admin input.
///
/// Returns `None` for blank input.
///
/// # Examples
///
/// ```
/// # use folio::portfolio::{AdminCommand, parse_admin_command};
/// assert_eq!(parse_admin_command("list projects"), Some(AdminCommand::ListProjects));
/// assert_eq!(parse_admin_command("   "), None);
/// ```
pub fn parse_admin_command(input: &str) -> Option<AdminCommand> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    let words: Vec<&str> = input.split_whitespace().collect();
    let verb = words[0].to_lowercase();
    let noun = words.get(1).map(|w| w.to_lowercase());
    let rest = &words[words.len().min(2)..];

    let result = match (verb.as_str(), noun.as_deref()) {
        ("list" | "ls", Some("projects" | "project")) => AdminCommand::ListProjects,
        ("list" | "ls", Some("skills" | "skill")) => AdminCommand::ListSkills,
        ("list" | "ls", _) => {
            AdminCommand::Invalid("list expects 'projects' or 'skills'".to_string())
        }
        ("add", Some("project")) => AdminCommand::AddProject,
        ("add", Some("skill")) => parse_add_skill(rest),
        ("add", _) => AdminCommand::Invalid("add expects 'project' or 'skill'".to_string()),
        ("set", _) => parse_set(&words[1..]),
        ("level", _) => parse_level(&words[1..]),
        ("delete" | "rm", Some("project")) => match rest {
            [id] => AdminCommand::DeleteProject(id.to_string()),
            _ => AdminCommand::Invalid("delete project requires an id".to_string()),
        },
        ("delete" | "rm", Some("skill")) if !rest.is_empty() => {
            AdminCommand::DeleteSkill(rest.join(" "))
        }
        ("delete" | "rm", Some("skill")) => {
            AdminCommand::Invalid("delete skill requires a name".to_string())
        }
        ("delete" | "rm", _) => {
            AdminCommand::Invalid("delete expects 'project <id>' or 'skill <name>'".to_string())
        }
        ("summary" | "dashboard", _) => AdminCommand::Summary,
        ("help" | "?", _) => AdminCommand::Help,
        ("quit" | "exit" | "q", _) => AdminCommand::Quit,
        _ => AdminCommand::Invalid(format!("Unknown command: {verb}")),
    };

    Some(result)
}

/// `add skill <name...> <level> [category...]`
///
/// Categories never contain digits, so the last numeric word is the level.
fn parse_add_skill(args: &[&str]) -> AdminCommand {
    let Some(level_at) = args.iter().rposition(|w| w.parse::<i64>().is_ok()) else {
        return AdminCommand::Invalid("add skill requires <name> <level> [category]".to_string());
    };
    if level_at == 0 {
        return AdminCommand::Invalid("add skill requires a name before the level".to_string());
    }
    let name = args[..level_at].join(" ");
    let level = match parse_level_value(args[level_at]) {
        Ok(level) => level,
        Err(message) => return AdminCommand::Invalid(message),
    };
    let category = if level_at + 1 < args.len() {
        match args[level_at + 1..].join(" ").parse::<SkillCategory>() {
            Ok(category) => category,
            Err(err) => return AdminCommand::Invalid(err.to_string()),
        }
    } else {
        SkillCategory::Tool
    };
    AdminCommand::AddSkill(Skill::new(name, level, category))
}

/// `set <id> <field> <value...>`
fn parse_set(args: &[&str]) -> AdminCommand {
    let [id, field, value @ ..] = args else {
        return AdminCommand::Invalid("set requires <id> <field> <value>".to_string());
    };
    let field = match field.parse::<ProjectField>() {
        Ok(field) => field,
        Err(err) => return AdminCommand::Invalid(err.to_string()),
    };
    if value.is_empty() {
        return AdminCommand::Invalid(format!("set {field} requires a value"));
    }
    match ProjectUpdate::parse(field, &value.join(" ")) {
        Ok(update) => AdminCommand::SetProject {
            id: id.to_string(),
            update,
        },
        Err(err) => AdminCommand::Invalid(err.to_string()),
    }
}

/// `level <name...> <level>`
fn parse_level(args: &[&str]) -> AdminCommand {
    let [name @ .., level] = args else {
        return AdminCommand::Invalid("level requires <name> <level>".to_string());
    };
    if name.is_empty() {
        return AdminCommand::Invalid("level requires <name> <level>".to_string());
    }
    match parse_level_value(level) {
        Ok(level) => AdminCommand::SetLevel {
            name: name.join(" "),
            level,
        },
        Err(message) => AdminCommand::Invalid(message),
    }
}

fn parse_level_value(value: &str) -> std::result::Result<u8, String> {
    match value.parse::<u8>() {
        Ok(level) if level <= 100 => Ok(level),
        _ => Err("level expects an integer between 0 and 100".to_string()),
    }
}

impl AdminCommand {
    /// Run a repository command.
    ///
    /// Returns `Ok(None)` for commands that do not touch the repository
    /// (`Help`, `Quit`).
    ///
    /// # Errors
    ///
    /// Returns a validation error for `Invalid`, and whatever the repository
    /// reports otherwise.
    pub fn apply<R: PortfolioRepository + ?Sized>(
        self,
        repo: &mut R,
    ) -> Result<Option<AdminOutcome>> {
        let outcome = match self {
            AdminCommand::ListProjects => AdminOutcome::Projects(repo.list_projects()),
            AdminCommand::ListSkills => AdminOutcome::Skills(repo.list_skills()),
            AdminCommand::AddProject => {
                AdminOutcome::ProjectAdded(repo.add_project(Project::placeholder(""))?)
            }
            AdminCommand::AddSkill(skill) => AdminOutcome::SkillAdded(repo.add_skill(skill)?),
            AdminCommand::SetProject { id, update } => {
                AdminOutcome::ProjectUpdated(repo.update_project(&id, update)?)
            }
            AdminCommand::SetLevel { name, level } => {
                AdminOutcome::SkillUpdated(repo.update_skill(&name, SkillUpdate::Level(level))?)
            }
            AdminCommand::DeleteProject(id) => {
                AdminOutcome::ProjectDeleted(repo.delete_project(&id)?)
            }
            AdminCommand::DeleteSkill(name) => {
                AdminOutcome::SkillDeleted(repo.delete_skill(&name)?)
            }
            AdminCommand::Summary => AdminOutcome::Summary(repo.summary()),
            AdminCommand::Help | AdminCommand::Quit => return Ok(None),
            AdminCommand::Invalid(message) => return Err(Error::validation(message, None)),
        };
        Ok(Some(outcome))
    }
}

/// Returns help text describing admin commands.
pub fn admin_help_text() -> &'static str {
    r#"Available commands:
  list projects                          List all projects
  list skills                            List all skills
  add project                            Add a placeholder project
  add skill <name> <level> [category]    Add a skill (category: Tool, Hard Skill, Process)
  set <id> <field> <value>               Edit a project (title, category, image, description, tools)
  level <name> <level>                   Set a skill's mastery level (0-100)
  delete project <id>                    Delete a project
  delete skill <name>                    Delete a skill
  summary                                Show dashboard numbers
  help                                   Show this help message
  quit                                   Exit"#
}
