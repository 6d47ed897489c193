//! Route classification
//!
//! Maps the host's page path onto the board it renders. Only exact board
//! routes are recognized; everything else is a skip, not an error.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static TEAM_BOARD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^/jira/core/projects/([^/]+)/board$").expect("route pattern compiles")
});

static COMPANY_BOARD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^/jira/software/c/projects/([^/]+)/boards/[^/]+$")
        .expect("route pattern compiles")
});

static COMPANY_BACKLOG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^/jira/software/c/projects/([^/]+)/boards/[^/]+/backlog$")
        .expect("route pattern compiles")
});

/// The two structurally distinct board layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    /// Team-managed project board
    TeamManaged,
    /// Company-managed project board
    CompanyManaged,
}

/// The board a route points at
///
/// Recomputed on every navigation event and owned by the activation that
/// computed it; never cached across events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectContext {
    /// Project key as it appears in the route
    pub key: String,
    /// Board layout variant
    pub variant: Variant,
}

/// Classify a page path into a [`ProjectContext`]
///
/// Returns `None` for any path that is not one of the supported board
/// routes.
#[must_use]
pub fn detect_project(path: &str) -> Option<ProjectContext> {
    let captures = TEAM_BOARD
        .captures(path)
        .or_else(|| COMPANY_BOARD.captures(path))
        .or_else(|| COMPANY_BACKLOG.captures(path))?;
    let key = captures.get(1)?.as_str().to_string();
    let variant = if path.starts_with("/jira/core") {
        Variant::TeamManaged
    } else {
        Variant::CompanyManaged
    };
    Some(ProjectContext { key, variant })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn team_board_route() {
        assert_eq!(
            detect_project("/jira/core/projects/ABC/board"),
            Some(ProjectContext {
                key: "ABC".to_string(),
                variant: Variant::TeamManaged,
            })
        );
    }

    #[test]
    fn company_board_route() {
        assert_eq!(
            detect_project("/jira/software/c/projects/XYZ/boards/42"),
            Some(ProjectContext {
                key: "XYZ".to_string(),
                variant: Variant::CompanyManaged,
            })
        );
    }

    #[test]
    fn company_backlog_route() {
        assert_eq!(
            detect_project("/jira/software/c/projects/XYZ/boards/42/backlog"),
            Some(ProjectContext {
                key: "XYZ".to_string(),
                variant: Variant::CompanyManaged,
            })
        );
    }

    #[test]
    fn non_board_routes_are_skipped() {
        assert_eq!(detect_project("/jira/core/projects/ABC/summary"), None);
        assert_eq!(detect_project("/jira/core/projects/ABC/board/extra"), None);
        assert_eq!(detect_project("/jira/software/c/projects/XYZ/boards"), None);
        assert_eq!(detect_project("/dashboard"), None);
        assert_eq!(detect_project(""), None);
    }

    #[test]
    fn key_may_contain_non_path_separators() {
        let context = detect_project("/jira/core/projects/a.b_c/board").unwrap();
        assert_eq!(context.key, "a.b_c");
    }
}
