//! Portfolio content and page state.
//!
//! - [`catalog`]: the projects, skills, and services the site ships with
//! - [`repository`]: editable content behind the [`PortfolioRepository`] trait
//! - [`view`]: the landing page's transient display state
//! - [`admin`]: command parsing for the content admin REPL

pub mod admin;
pub mod catalog;
pub mod repository;
pub mod view;

pub use admin::{AdminCommand, AdminOutcome, admin_help_text, parse_admin_command};
pub use repository::{
    DashboardSummary, InMemoryRepository, PortfolioRepository, ProjectField, ProjectUpdate,
    SkillUpdate,
};
pub use view::{IntroPhase, PageView, Section};
