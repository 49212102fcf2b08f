//! Catalog crate owning the job-position records shown throughout the UI.
//!
//! The catalog is embedded at build time and deserialized once at startup.
//! Records are immutable for the lifetime of the process; the positions page
//! renders edit/delete controls, but nothing mutates or removes entries.

use hireview_types::{JobPosition, JobStatus};

/// JSON document embedded during the build.
const EMBEDDED_POSITIONS: &str = include_str!("../data/positions.json");

/// Errors raised while loading or consulting the catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("embedded position catalog is invalid: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate position id '{0}' in catalog")]
    DuplicateId(String),
}

/// Immutable collection of job positions.
#[derive(Debug, Clone, Default)]
pub struct JobCatalog {
    positions: Vec<JobPosition>,
}

impl JobCatalog {
    /// Loads the catalog embedded in the binary.
    ///
    /// # Errors
    ///
    /// Fails when the embedded document does not parse or contains a
    /// duplicate position id.
    pub fn from_embedded() -> Result<Self, CatalogError> {
        let positions: Vec<JobPosition> = serde_json::from_str(EMBEDDED_POSITIONS)?;
        Self::from_positions(positions)
    }

    /// Builds a catalog from already-loaded positions, enforcing id
    /// uniqueness.
    pub fn from_positions(positions: Vec<JobPosition>) -> Result<Self, CatalogError> {
        for (idx, position) in positions.iter().enumerate() {
            if positions[..idx].iter().any(|p| p.id == position.id) {
                return Err(CatalogError::DuplicateId(position.id.clone()));
            }
        }
        Ok(Self { positions })
    }

    /// All positions in catalog order.
    pub fn positions(&self) -> &[JobPosition] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Looks up a position by id.
    pub fn find(&self, id: &str) -> Option<&JobPosition> {
        self.positions.iter().find(|p| p.id == id)
    }

    /// Number of positions currently accepting applicants.
    pub fn active_count(&self) -> usize {
        self.positions
            .iter()
            .filter(|p| p.status == JobStatus::Active)
            .count()
    }

    /// Distinct department names in first-seen order, for the filter select.
    pub fn departments(&self) -> Vec<&str> {
        let mut departments: Vec<&str> = Vec::new();
        for position in &self.positions {
            if !departments.contains(&position.department.as_str()) {
                departments.push(&position.department);
            }
        }
        departments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_loads() {
        let catalog = JobCatalog::from_embedded().expect("load embedded catalog");
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.active_count(), 2);
    }

    #[test]
    fn find_by_id() {
        let catalog = JobCatalog::from_embedded().expect("load embedded catalog");
        let job = catalog.find("2").expect("position 2 exists");
        assert_eq!(job.title, "Data Scientist");
        assert_eq!(job.department, "Data & Analytics");
        assert!(catalog.find("99").is_none());
    }

    #[test]
    fn departments_are_distinct_and_ordered() {
        let catalog = JobCatalog::from_embedded().expect("load embedded catalog");
        assert_eq!(
            catalog.departments(),
            vec!["Engineering", "Data & Analytics", "Design"]
        );
    }

    #[test]
    fn duplicate_ids_rejected() {
        let catalog = JobCatalog::from_embedded().expect("load embedded catalog");
        let mut positions = catalog.positions().to_vec();
        positions.push(positions[0].clone());
        let err = JobCatalog::from_positions(positions).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "1"));
    }
}
