//! The project registry.
//!
//! [`Registry`] wraps a `'static` table of [`Project`] records and answers
//! identifier lookups. The built-in table lives in [`crate::catalog`];
//! tests construct registries over their own tables.

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::ids::{is_route_id, normalize_id};
use crate::model::{Project, Showcase};

/// Read-only view over a table of project records.
#[derive(Debug, Clone, Copy)]
pub struct Registry {
    projects: &'static [Project],
}

impl Registry {
    /// Wrap a table of records. Call [`Registry::validate`] before serving it.
    pub const fn new(projects: &'static [Project]) -> Self {
        Self { projects }
    }

    /// The registry holding the site's own projects.
    pub const fn builtin() -> Self {
        Self::new(crate::catalog::PROJECTS)
    }

    /// Records in display order.
    pub fn projects(&self) -> &'static [Project] {
        self.projects
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Whether the registry has no records.
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Find the record registered under `id`.
    pub fn get(&self, id: &str) -> Option<&'static Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Find the record registered under `id`, or fail with
    /// [`Error::ProjectNotFound`].
    pub fn lookup(&self, id: &str) -> Result<&'static Project> {
        match self.get(id) {
            Some(project) => Ok(project),
            None => {
                log::debug!("no project registered under '{id}'");
                Err(Error::not_found(id))
            }
        }
    }

    /// Check the table's invariants.
    ///
    /// Identifiers must be unique route ids; every record needs a title and
    /// at least one tech-stack badge; web records need screenshots and design
    /// records need galleries.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for project in self.projects {
            if !is_route_id(project.id) {
                let suggestion = normalize_id(project.id);
                let hint = if is_route_id(&suggestion) {
                    format!(" (try '{suggestion}')")
                } else {
                    String::new()
                };
                return Err(Error::invalid_registry(format!(
                    "'{}' is not a lowercase kebab-case identifier{hint}",
                    project.id
                )));
            }
            if !seen.insert(project.id) {
                return Err(Error::invalid_registry(format!(
                    "identifier '{}' is registered more than once",
                    project.id
                )));
            }
            if project.title.trim().is_empty() {
                return Err(Error::invalid_registry(format!(
                    "'{}' has an empty title",
                    project.id
                )));
            }
            if project.tech_stack.is_empty() {
                return Err(Error::invalid_registry(format!(
                    "'{}' has no tech-stack badges",
                    project.id
                )));
            }
            let has_showcase = match project.showcase {
                Showcase::Web { screenshots, .. } => !screenshots.is_empty(),
                Showcase::Design { galleries } => !galleries.is_empty(),
            };
            if !has_showcase {
                return Err(Error::invalid_registry(format!(
                    "'{}' has nothing to showcase",
                    project.id
                )));
            }
        }
        log::debug!("registry valid: {} projects", self.projects.len());
        Ok(())
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}
