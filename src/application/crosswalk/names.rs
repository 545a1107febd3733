//! Name records: people, funders, publishers and other corporate bodies

use serde_json::{json, Value};
use tracing::debug;

use super::tables::{self, FUNDER_IDENTIFIER_FIELD};
use super::{map_fields, stage_fields, CrosswalkContext};
use crate::domain::entities::{AttributeTree, Attributes};
use crate::domain::errors::DomainError;
use crate::domain::value_objects::{Group, Record};

/// Where a name record is routed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    CommissioningBody,
    RightsHolder,
    Funder,
    Publisher,
    Person,
}

struct NameRule {
    name_type: &'static str,
    role: &'static str,
    kind: NameKind,
}

/// Checked in order; the first rule that matches wins
const NAME_RULES: &[NameRule] = &[
    NameRule {
        name_type: "corporate",
        role: "Commissioning body",
        kind: NameKind::CommissioningBody,
    },
    NameRule {
        name_type: "corporate",
        role: "Copyright holder",
        kind: NameKind::RightsHolder,
    },
    NameRule {
        name_type: "corporate",
        role: "Funder",
        kind: NameKind::Funder,
    },
    NameRule {
        name_type: "corporate",
        role: "Publisher",
        kind: NameKind::Publisher,
    },
];

/// Classify a name by its type and role labels
pub fn classify_name(name_type: Option<&str>, roles: &[&str]) -> NameKind {
    NAME_RULES
        .iter()
        .find(|rule| name_type == Some(rule.name_type) && roles.contains(&rule.role))
        .map(|rule| rule.kind)
        .unwrap_or(NameKind::Person)
}

pub(super) fn map_names(
    record: &Record<'_>,
    context: &CrosswalkContext<'_>,
    tree: &mut AttributeTree,
) -> Result<(), DomainError> {
    for name in record.records("names")? {
        let roles = role_labels(&name)?;
        let kind = classify_name(name.first_str("type")?, &roles);
        debug!("Routing name {} as {:?}", name.path(), kind);

        match kind {
            NameKind::CommissioningBody => tree.commit(
                Group::BibliographicInformation,
                map_fields(&name, tables::COMMISSIONING_BODY_FIELDS)?,
            ),
            NameKind::RightsHolder => tree.commit(
                Group::LicenceAndRightsInformation,
                map_fields(&name, tables::RIGHTS_HOLDER_FIELDS)?,
            ),
            NameKind::Funder => tree.commit(Group::Funders, map_funder(&name)?),
            NameKind::Publisher => tree.commit(Group::Publishers, map_publisher(&name)?),
            NameKind::Person => {
                tree.commit(Group::CreatorsAndContributors, map_person(&name, context)?)
            }
        }
    }
    Ok(())
}

/// `role_term` of every role, falling back to `role_title`
fn role_labels<'a>(name: &Record<'a>) -> Result<Vec<&'a str>, DomainError> {
    let mut labels = Vec::new();
    for role in name.records("roles")? {
        let label = match role.first_str("role_term")? {
            Some(term) => Some(term),
            None => role.first_str("role_title")?,
        };
        labels.extend(label);
    }
    Ok(labels)
}

fn map_person(name: &Record<'_>, context: &CrosswalkContext<'_>) -> Result<Attributes, DomainError> {
    let mut person = map_fields(name, tables::PERSON_NAME_FIELDS)?;

    if let Some(affiliation) = name.mapping("affiliation")? {
        stage_fields(&affiliation, tables::AFFILIATION_FIELDS, &mut person)?;
    }
    for institution in name.records("institution")? {
        stage_fields(&institution, tables::INSTITUTION_FIELDS, &mut person)?;
    }

    if let Some(identifier) = name.mapping("identifier")? {
        let mut others = Vec::new();
        for (scheme, value) in identifier.entries() {
            let Some(first) = identifier.leaf_values(scheme, value)?.into_iter().next() else {
                continue;
            };
            match tables::CONTRIBUTOR_IDENTIFIER_FIELDS
                .iter()
                .find(|(source, _)| *source == scheme)
            {
                Some((_, target)) => person.set(*target, first.clone()),
                None => {
                    let mut other = Attributes::new();
                    other.set("contributor_identifier_scheme", json!(scheme));
                    other.set("contributor_identifier", first.clone());
                    others.push(other);
                }
            }
        }
        person.set_records("contributor_identifier", others);
    }

    let roles = name
        .records("roles")?
        .iter()
        .map(|role| map_role(role, context))
        .collect::<Result<Vec<_>, _>>()?;
    person.set_records("roles", roles);

    Ok(person)
}

fn map_role(role: &Record<'_>, context: &CrosswalkContext<'_>) -> Result<Attributes, DomainError> {
    let mut mapped = map_fields(role, tables::ROLE_FIELDS)?;
    if let Some(title) = role.first("role_title")? {
        let et_al = title.as_str().is_some_and(|t| context.is_et_al(t));
        mapped.set("et_al", Value::Bool(et_al));
    }
    Ok(mapped)
}

fn map_funder(name: &Record<'_>) -> Result<Attributes, DomainError> {
    let mut funder = map_fields(name, tables::FUNDER_FIELDS)?;
    if let Some(identifier) = funder_identifier(name)? {
        funder.set(FUNDER_IDENTIFIER_FIELD.1, identifier.clone());
    }

    let grants = name
        .records("grants")?
        .iter()
        .map(|grant| map_fields(grant, tables::GRANT_FIELDS))
        .collect::<Result<Vec<_>, _>>()?;
    funder.set_records("funder_grant", grants);

    Ok(funder)
}

/// A funder identifier is either a value list or a scheme mapping; for a
/// mapping the first scheme carrying a value wins.
fn funder_identifier<'a>(name: &Record<'a>) -> Result<Option<&'a Value>, DomainError> {
    let (source, _) = FUNDER_IDENTIFIER_FIELD;
    if !matches!(name.get(source), Some(Value::Object(_))) {
        return name.first(source);
    }

    if let Some(schemes) = name.mapping(source)? {
        for (scheme, value) in schemes.entries() {
            if let Some(first) = schemes.leaf_values(scheme, value)?.into_iter().next() {
                return Ok(Some(first));
            }
        }
    }
    Ok(None)
}

fn map_publisher(name: &Record<'_>) -> Result<Attributes, DomainError> {
    let mut publisher = map_fields(name, tables::PUBLISHER_NAME_FIELDS)?;
    if let Some(identifier) = name.mapping("identifier")? {
        stage_fields(&identifier, tables::PUBLISHER_IDENTIFIER_FIELDS, &mut publisher)?;
    }
    Ok(publisher)
}
