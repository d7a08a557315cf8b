//! Content admin REPL for the portfolio.
//!
//! Edits projects and skills in an in-memory repository seeded with the
//! site's catalog. Changes last until the process exits.
//!
//! # Usage
//!
//! ```bash
//! folio-admin
//! folio-admin --empty --no-color
//! ```

use arrrg::CommandLine;
use arrrg_derive::CommandLine;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use folio::chat::{PlainTextRenderer, Renderer};
use folio::portfolio::{
    AdminCommand, AdminOutcome, InMemoryRepository, admin_help_text, parse_admin_command,
};
use folio::types::{Project, Skill};

/// Command-line arguments for the folio-admin tool.
#[derive(CommandLine, Debug, Default, PartialEq, Eq)]
struct AdminArgs {
    #[arrrg(flag, "Start with no projects or skills")]
    empty: bool,

    #[arrrg(flag, "Disable ANSI colors/styles")]
    no_color: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (args, _) = AdminArgs::from_command_line_relaxed("folio-admin [OPTIONS]");
    let mut repo = if args.empty {
        InMemoryRepository::new()
    } else {
        InMemoryRepository::seeded()
    };
    let mut renderer = PlainTextRenderer::with_color(!args.no_color);
    let mut rl = DefaultEditor::new()?;

    println!("Folio Admin");
    println!("Type help for commands, quit to exit\n");

    loop {
        match rl.readline("admin> ") {
            Ok(line) => {
                let Some(command) = parse_admin_command(&line) else {
                    continue;
                };
                let _ = rl.add_history_entry(line.as_str());

                match command {
                    AdminCommand::Quit => break,
                    AdminCommand::Help => {
                        for line in admin_help_text().lines() {
                            println!("    {}", line);
                        }
                    }
                    command => match command.apply(&mut repo) {
                        Ok(Some(outcome)) => print_outcome(&mut renderer, outcome),
                        Ok(None) => {}
                        Err(err) => renderer.print_error(&err.to_string()),
                    },
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!();
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                renderer.print_error(&format!("Input error: {}", err));
                break;
            }
        }
    }

    Ok(())
}

fn print_outcome(renderer: &mut dyn Renderer, outcome: AdminOutcome) {
    match outcome {
        AdminOutcome::Projects(projects) => {
            if projects.is_empty() {
                renderer.print_info("No projects.");
            }
            for project in &projects {
                print_project(project);
            }
        }
        AdminOutcome::Skills(skills) => {
            if skills.is_empty() {
                renderer.print_info("No skills.");
            }
            for skill in &skills {
                print_skill(skill);
            }
        }
        AdminOutcome::ProjectAdded(project) => {
            renderer.print_info(&format!("Added project {}.", project.id));
            print_project(&project);
        }
        AdminOutcome::SkillAdded(skill) => {
            renderer.print_info(&format!("Added skill {}.", skill.name));
        }
        AdminOutcome::ProjectUpdated(project) => {
            renderer.print_info(&format!("Updated project {}.", project.id));
            print_project(&project);
        }
        AdminOutcome::SkillUpdated(skill) => {
            renderer.print_info("Updated skill.");
            print_skill(&skill);
        }
        AdminOutcome::ProjectDeleted(project) => {
            renderer.print_info(&format!("Deleted project {} ({}).", project.id, project.title));
        }
        AdminOutcome::SkillDeleted(skill) => {
            renderer.print_info(&format!("Deleted skill {}.", skill.name));
        }
        AdminOutcome::Summary(summary) => {
            println!("    Total projects: {}", summary.project_count);
            println!("    Skills listed: {}", summary.skill_count);
            println!("    Average level: {:.1}%", summary.average_skill_level);
        }
    }
}

fn print_project(project: &Project) {
    println!("    [{}] {} ({})", project.id, project.title, project.category);
    println!("        {}", project.description);
    println!("        Image: {}", project.image_url);
    println!("        Tools: {}", project.tools.join(", "));
}

fn print_skill(skill: &Skill) {
    println!("    {:<16} {:>3}%  {}", skill.name, skill.level, skill.category);
}
