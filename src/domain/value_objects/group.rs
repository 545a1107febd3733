/// How commits to a group combine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cardinality {
    /// Has one: commits merge into a single mapping, last write wins per key
    One,
    /// Has many: every commit appends a new mapping
    Many,
}

/// Target attribute groups of the repository work schema
///
/// Cardinality and nesting are declared here once; every commit site goes
/// through these declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    BibliographicInformation,
    Publishers,
    Event,
    ItemDescriptionAndEmbargoInformation,
    AdminInformation,
    LicenceAndRightsInformation,
    CreatorsAndContributors,
    Funders,
    RelatedItems,
}

impl Group {
    pub const ALL: [Group; 9] = [
        Group::BibliographicInformation,
        Group::Publishers,
        Group::Event,
        Group::ItemDescriptionAndEmbargoInformation,
        Group::AdminInformation,
        Group::LicenceAndRightsInformation,
        Group::CreatorsAndContributors,
        Group::Funders,
        Group::RelatedItems,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Group::BibliographicInformation => "bibliographic_information",
            Group::Publishers => "publishers",
            Group::Event => "event",
            Group::ItemDescriptionAndEmbargoInformation => {
                "item_description_and_embargo_information"
            }
            Group::AdminInformation => "admin_information",
            Group::LicenceAndRightsInformation => "licence_and_rights_information",
            Group::CreatorsAndContributors => "creators_and_contributors",
            Group::Funders => "funders",
            Group::RelatedItems => "related_items",
        }
    }

    pub fn cardinality(self) -> Cardinality {
        match self {
            Group::Event
            | Group::CreatorsAndContributors
            | Group::Funders
            | Group::RelatedItems => Cardinality::Many,
            _ => Cardinality::One,
        }
    }

    /// Enclosing group; parents are always singletons
    pub fn parent(self) -> Option<Group> {
        match self {
            Group::Publishers | Group::Event => Some(Group::BibliographicInformation),
            _ => None,
        }
    }

    /// Key under which the group appears in the mapped tree
    pub fn attributes_key(self) -> String {
        format!("{}_attributes", self.name())
    }
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parents_are_singletons() {
        for group in Group::ALL {
            if let Some(parent) = group.parent() {
                assert_eq!(parent.cardinality(), Cardinality::One, "{group}");
                assert!(parent.parent().is_none(), "only two levels of nesting");
            }
        }
    }

    #[test]
    fn test_attributes_key() {
        assert_eq!(
            Group::Publishers.attributes_key(),
            "publishers_attributes"
        );
        assert_eq!(Group::Funders.cardinality(), Cardinality::Many);
        assert_eq!(Group::AdminInformation.cardinality(), Cardinality::One);
    }
}
