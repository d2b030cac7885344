use super::error::ProjectError;
use super::types::Project;

/// Maximum length of a project name, in characters.
pub const MAX_PROJECT_NAME_LEN: usize = 120;

/// Validates a project before creation or update.
pub fn validate_project(project: &Project) -> Result<(), ProjectError> {
    if project.name.trim().is_empty() {
        return Err(ProjectError::EmptyName);
    }
    if project.name.chars().count() > MAX_PROJECT_NAME_LEN {
        return Err(ProjectError::NameTooLong);
    }
    if let Some(budget) = project.daily_budget {
        if !budget.is_finite() || budget <= 0.0 {
            return Err(ProjectError::InvalidBudget);
        }
    }
    if project.base.is_some_and(|base| !base.is_valid()) {
        return Err(ProjectError::InvalidBase);
    }
    if project.shoot_window.is_some_and(|window| !window.is_valid()) {
        return Err(ProjectError::InvalidShootWindow);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::Coordinates;
    use crate::project::TenantId;
    use crate::storage::DateRange;
    use chrono::NaiveDate;

    fn project(name: &str) -> Project {
        Project::new(TenantId::new(), name)
    }

    #[test]
    fn test_valid_project() {
        let project = project("Harbour Lights")
            .with_base(Coordinates::new(53.4084, -2.9916))
            .with_daily_budget(2_500.0);

        assert_eq!(validate_project(&project), Ok(()));
    }

    #[test]
    fn test_name_rules() {
        assert_eq!(validate_project(&project("   ")), Err(ProjectError::EmptyName));
        assert_eq!(
            validate_project(&project(&"x".repeat(121))),
            Err(ProjectError::NameTooLong)
        );
        // Multi-byte names are measured in characters, not bytes.
        assert_eq!(validate_project(&project(&"é".repeat(120))), Ok(()));
    }

    #[test]
    fn test_budget_must_be_positive_and_finite() {
        assert_eq!(
            validate_project(&project("A").with_daily_budget(0.0)),
            Err(ProjectError::InvalidBudget)
        );
        assert_eq!(
            validate_project(&project("A").with_daily_budget(f64::NAN)),
            Err(ProjectError::InvalidBudget)
        );
    }

    #[test]
    fn test_invalid_base() {
        let project = project("A").with_base(Coordinates::new(91.0, 0.0));

        assert_eq!(validate_project(&project), Err(ProjectError::InvalidBase));
    }

    #[test]
    fn test_inverted_shoot_window() {
        let mut project = project("A");
        project.shoot_window = Some(DateRange {
            start: NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        });

        assert_eq!(
            validate_project(&project),
            Err(ProjectError::InvalidShootWindow)
        );
    }
}
