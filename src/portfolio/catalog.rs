//! The content the site ships with.

use crate::types::{Project, ProjectCategory, Service, Skill, SkillCategory};

fn project(
    id: &str,
    title: &str,
    category: ProjectCategory,
    seed: &str,
    description: &str,
    tools: &[&str],
) -> Project {
    Project {
        id: id.to_string(),
        title: title.to_string(),
        category,
        image_url: format!("https://picsum.photos/seed/{seed}/1200/800"),
        description: description.to_string(),
        tools: tools.iter().map(|tool| tool.to_string()).collect(),
    }
}

/// The showcased projects.
pub fn projects() -> Vec<Project> {
    vec![
        project(
            "1",
            "Lumina Fintech Dashboard",
            ProjectCategory::UiUx,
            "fintech",
            "A comprehensive wealth management platform focusing on clarity and data visualization.",
            &["Figma", "React", "D3.js"],
        ),
        project(
            "2",
            "Vanguard Brand Identity",
            ProjectCategory::Branding,
            "brand",
            "Reimagining modern security with a bold, minimalist visual language.",
            &["Illustrator", "Photoshop", "Indesign"],
        ),
        project(
            "3",
            "Zenith E-Commerce App",
            ProjectCategory::UiUx,
            "shop",
            "A frictionless shopping experience with integrated AR product previews.",
            &["Figma", "Protopie", "After Effects"],
        ),
        project(
            "4",
            "Hyperion Poster Series",
            ProjectCategory::GraphicDesign,
            "art",
            "A series of conceptual posters exploring the intersection of brutalism and digital art.",
            &["Photoshop", "Cinema 4D"],
        ),
    ]
}

/// The listed skills.
pub fn skills() -> Vec<Skill> {
    use SkillCategory::*;
    vec![
        Skill::new("Figma", 95, Tool),
        Skill::new("Adobe XD", 85, Tool),
        Skill::new("Photoshop", 90, Tool),
        Skill::new("Illustrator", 92, Tool),
        Skill::new("UI Design", 98, HardSkill),
        Skill::new("UX Research", 80, HardSkill),
        Skill::new("Prototyping", 90, HardSkill),
        Skill::new("Design Systems", 85, Process),
        Skill::new("Wireframing", 95, Process),
    ]
}

/// The offered services.
pub fn services() -> Vec<Service> {
    vec![
        Service::new(
            "UI/UX Design",
            "Crafting intuitive digital experiences that convert.",
        ),
        Service::new(
            "Brand Identity",
            "Building memorable visual languages for startups.",
        ),
        Service::new(
            "Graphic Design",
            "Creative assets that tell a story across platforms.",
        ),
        Service::new(
            "Mobile First",
            "Responsive designs optimized for touch interaction.",
        ),
        Service::new(
            "Web Design",
            "Modern landing pages with cutting-edge layouts.",
        ),
        Service::new(
            "Interaction Design",
            "Bringing interfaces to life with smooth animations.",
        ),
    ]
}
