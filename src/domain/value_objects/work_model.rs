use crate::domain::errors::DomainError;

/// Declared content type of the deposited work
///
/// Only a few models change how records are grouped (host related items);
/// anything else is carried through as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum WorkModel {
    Article,
    Dataset,
    Thesis,
    #[default]
    Generic,
    Other(String),
}

impl WorkModel {
    pub fn as_str(&self) -> &str {
        match self {
            WorkModel::Article => "article",
            WorkModel::Dataset => "dataset",
            WorkModel::Thesis => "thesis",
            WorkModel::Generic => "generic",
            WorkModel::Other(name) => name,
        }
    }
}

impl std::fmt::Display for WorkModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for WorkModel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        match name.as_str() {
            "" => Err(DomainError::InvalidWorkModel(
                "Work model cannot be empty".to_string(),
            )),
            "article" => Ok(WorkModel::Article),
            "dataset" => Ok(WorkModel::Dataset),
            "thesis" => Ok(WorkModel::Thesis),
            "generic" | "work" => Ok(WorkModel::Generic),
            _ => Ok(WorkModel::Other(name)),
        }
    }
}
