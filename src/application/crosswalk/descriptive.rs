//! Descriptive metadata concerns

use serde_json::{json, Value};
use tracing::{debug, warn};

use super::tables::{self, find_route};
use super::{map_fields, set_top_level, CrosswalkContext, Staging};
use crate::domain::entities::{AttributeTree, Attributes};
use crate::domain::errors::DomainError;
use crate::domain::value_objects::{Group, Record};

pub(super) fn map_access_condition(
    record: &Record<'_>,
    _context: &CrosswalkContext<'_>,
    tree: &mut AttributeTree,
) -> Result<(), DomainError> {
    let Some(access_condition) = record.mapping("access_condition")? else {
        return Ok(());
    };

    let mut staging = Staging::default();
    staging.stage_routes(&access_condition, tables::ACCESS_CONDITION_ROUTES)?;
    staging.commit(tree);
    Ok(())
}

pub(super) fn map_abstract(
    record: &Record<'_>,
    _context: &CrosswalkContext<'_>,
    tree: &mut AttributeTree,
) -> Result<(), DomainError> {
    set_top_level(record, tables::ABSTRACT_FIELDS, false, tree)?;
    tree.commit(
        Group::BibliographicInformation,
        map_fields(record, tables::SUMMARY_FIELDS)?,
    );
    Ok(())
}

pub(super) fn map_dataset(
    record: &Record<'_>,
    _context: &CrosswalkContext<'_>,
    tree: &mut AttributeTree,
) -> Result<(), DomainError> {
    tree.commit(
        Group::BibliographicInformation,
        map_fields(record, tables::DATASET_FIELDS)?,
    );
    Ok(())
}

pub(super) fn map_genre(
    record: &Record<'_>,
    _context: &CrosswalkContext<'_>,
    tree: &mut AttributeTree,
) -> Result<(), DomainError> {
    tree.commit(
        Group::ItemDescriptionAndEmbargoInformation,
        map_fields(record, tables::GENRE_FIELDS)?,
    );
    Ok(())
}

/// Known schemes go to their routed field; every other scheme becomes a
/// generic record identifier, in document order.
pub(super) fn map_identifiers(
    record: &Record<'_>,
    _context: &CrosswalkContext<'_>,
    tree: &mut AttributeTree,
) -> Result<(), DomainError> {
    let Some(identifiers) = record.mapping("identifiers")? else {
        return Ok(());
    };

    let mut staging = Staging::default();
    let mut others = Vec::new();
    for (scheme, value) in identifiers.entries() {
        let Some(first) = identifiers.leaf_values(scheme, value)?.into_iter().next() else {
            continue;
        };
        match find_route(tables::IDENTIFIER_ROUTES, scheme) {
            Some(route) => staging.group_mut(route.group).set(route.target, first.clone()),
            None => {
                let mut other = Attributes::new();
                other.set("record_identifier_scheme", json!(scheme));
                other.set("record_identifier", first.clone());
                others.push(other);
            }
        }
    }

    if !others.is_empty() {
        debug!("Keeping {} generic record identifiers", others.len());
    }
    staging
        .group_mut(Group::ItemDescriptionAndEmbargoInformation)
        .set_records("record_identifiers", others);
    staging.commit(tree);
    Ok(())
}

/// `headers.in_progress` flags a deposit that is still being edited
///
/// A recognised flag is stored as a boolean; `false` means the depositor has
/// finished, so the record is queued for review.
pub(super) fn map_in_progress(
    record: &Record<'_>,
    _context: &CrosswalkContext<'_>,
    tree: &mut AttributeTree,
) -> Result<(), DomainError> {
    let Some(headers) = record.mapping("headers")? else {
        return Ok(());
    };
    let Some(value) = headers.first("in_progress")? else {
        return Ok(());
    };

    let mut admin = Attributes::new();
    match parse_flag(value) {
        Some(in_progress) => {
            admin.set("deposit_in_progress", Value::Bool(in_progress));
            if !in_progress {
                admin.set("record_requires_review", Value::Bool(true));
            }
        }
        None => {
            warn!("Unrecognised in_progress header value: {}", value);
            admin.set("deposit_in_progress", value.clone());
        }
    }
    tree.commit(Group::AdminInformation, admin);
    Ok(())
}

fn parse_flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(flag) => Some(*flag),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

pub(super) fn map_language(
    record: &Record<'_>,
    _context: &CrosswalkContext<'_>,
    tree: &mut AttributeTree,
) -> Result<(), DomainError> {
    set_top_level(record, tables::LANGUAGE_FIELDS, true, tree)
}

pub(super) fn map_location(
    record: &Record<'_>,
    _context: &CrosswalkContext<'_>,
    tree: &mut AttributeTree,
) -> Result<(), DomainError> {
    tree.commit(
        Group::AdminInformation,
        map_fields(record, tables::LOCATION_FIELDS)?,
    );
    Ok(())
}

pub(super) fn map_note(
    record: &Record<'_>,
    _context: &CrosswalkContext<'_>,
    tree: &mut AttributeTree,
) -> Result<(), DomainError> {
    set_top_level(record, tables::NOTE_FIELDS, false, tree)
}

pub(super) fn map_origin_info(
    record: &Record<'_>,
    _context: &CrosswalkContext<'_>,
    tree: &mut AttributeTree,
) -> Result<(), DomainError> {
    tree.commit(
        Group::Publishers,
        map_fields(record, tables::ORIGIN_INFO_FIELDS)?,
    );
    tree.commit(
        Group::LicenceAndRightsInformation,
        map_fields(record, tables::COPYRIGHT_FIELDS)?,
    );
    Ok(())
}

pub(super) fn map_patent(
    record: &Record<'_>,
    _context: &CrosswalkContext<'_>,
    tree: &mut AttributeTree,
) -> Result<(), DomainError> {
    tree.commit(
        Group::BibliographicInformation,
        map_fields(record, tables::PATENT_FIELDS)?,
    );
    Ok(())
}

pub(super) fn map_physical_description(
    record: &Record<'_>,
    _context: &CrosswalkContext<'_>,
    tree: &mut AttributeTree,
) -> Result<(), DomainError> {
    let Some(form) = record.mapping("form")? else {
        return Ok(());
    };
    tree.commit(
        Group::BibliographicInformation,
        map_fields(&form, tables::PHYSICAL_FORM_FIELDS)?,
    );
    Ok(())
}

pub(super) fn map_subject(
    record: &Record<'_>,
    _context: &CrosswalkContext<'_>,
    tree: &mut AttributeTree,
) -> Result<(), DomainError> {
    set_top_level(record, tables::SUBJECT_FIELDS, true, tree)
}

pub(super) fn map_thesis(
    record: &Record<'_>,
    _context: &CrosswalkContext<'_>,
    tree: &mut AttributeTree,
) -> Result<(), DomainError> {
    tree.commit(
        Group::BibliographicInformation,
        map_fields(record, tables::THESIS_FIELDS)?,
    );
    Ok(())
}

pub(super) fn map_title(
    record: &Record<'_>,
    _context: &CrosswalkContext<'_>,
    tree: &mut AttributeTree,
) -> Result<(), DomainError> {
    set_top_level(record, tables::TITLE_FIELDS, false, tree)
}
