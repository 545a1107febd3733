#[cfg(test)]
use mockall::automock;

use crate::domain::entities::WorkFile;

/// Port for the repository object being exported
#[cfg_attr(test, automock)]
pub trait RepositoryWork: Send + Sync {
    /// Content files in export order
    fn files(&self) -> Vec<WorkFile>;

    /// Aggregate rights text, if the work has any
    fn rights(&self) -> Option<String>;
}
