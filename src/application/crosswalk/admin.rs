//! Administrative metadata concerns

use super::tables;
use super::{map_fields, CrosswalkContext, Staging};
use crate::domain::entities::AttributeTree;
use crate::domain::errors::DomainError;
use crate::domain::value_objects::{Group, Record};

pub(super) fn map_deposit_licence(
    record: &Record<'_>,
    _context: &CrosswalkContext<'_>,
    tree: &mut AttributeTree,
) -> Result<(), DomainError> {
    tree.commit(
        Group::AdminInformation,
        map_fields(record, tables::DEPOSIT_LICENCE_FIELDS)?,
    );
    Ok(())
}

pub(super) fn map_record_info(
    record: &Record<'_>,
    _context: &CrosswalkContext<'_>,
    tree: &mut AttributeTree,
) -> Result<(), DomainError> {
    let mut staging = Staging::default();
    *staging.group_mut(Group::AdminInformation) = map_fields(record, tables::RECORD_INFO_FIELDS)?;
    if let Some(note) = record.mapping("recordInfoNote")? {
        staging.stage_routes(&note, tables::RECORD_INFO_NOTE_ROUTES)?;
    }
    staging.commit(tree);
    Ok(())
}

pub(super) fn map_ora_admin(
    record: &Record<'_>,
    _context: &CrosswalkContext<'_>,
    tree: &mut AttributeTree,
) -> Result<(), DomainError> {
    let Some(admin_info) = record.mapping("admin_info")? else {
        return Ok(());
    };

    let mut staging = Staging::default();
    staging.stage_routes(&admin_info, tables::ORA_ADMIN_ROUTES)?;

    let history = admin_info
        .records("history_actions")?
        .iter()
        .map(|action| map_fields(action, tables::HISTORY_ACTION_FIELDS))
        .collect::<Result<Vec<_>, _>>()?;
    staging
        .group_mut(Group::AdminInformation)
        .set_records("history", history);

    staging.commit(tree);
    Ok(())
}

pub(super) fn map_ref_admin(
    record: &Record<'_>,
    _context: &CrosswalkContext<'_>,
    tree: &mut AttributeTree,
) -> Result<(), DomainError> {
    if let Some(ref_admin) = record.mapping("ref_admin")? {
        tree.commit(
            Group::AdminInformation,
            map_fields(&ref_admin, tables::REF_ADMIN_FIELDS)?,
        );
    }
    Ok(())
}

pub(super) fn map_thesis_admin(
    record: &Record<'_>,
    _context: &CrosswalkContext<'_>,
    tree: &mut AttributeTree,
) -> Result<(), DomainError> {
    if let Some(thesis_admin) = record.mapping("thesis_admin")? {
        tree.commit(
            Group::AdminInformation,
            map_fields(&thesis_admin, tables::THESIS_ADMIN_FIELDS)?,
        );
    }
    Ok(())
}

/// Embargo details travel inside `thesis_admin`
pub(super) fn map_embargo(
    record: &Record<'_>,
    _context: &CrosswalkContext<'_>,
    tree: &mut AttributeTree,
) -> Result<(), DomainError> {
    if let Some(thesis_admin) = record.mapping("thesis_admin")? {
        tree.commit(
            Group::ItemDescriptionAndEmbargoInformation,
            map_fields(&thesis_admin, tables::EMBARGO_FIELDS)?,
        );
    }
    Ok(())
}
