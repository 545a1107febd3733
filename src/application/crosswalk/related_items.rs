//! Related items: host publications, series, events and other linked works

use tracing::debug;

use super::tables::{self, FieldTable};
use super::{map_fields, set_top_level, CrosswalkContext};
use crate::domain::entities::AttributeTree;
use crate::domain::errors::DomainError;
use crate::domain::value_objects::{Group, Record, WorkModel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelatedItemKind {
    Host,
    Series,
    Event,
    RelatedItem,
}

/// The two labels a related item is classified by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RelatedItemTraits<'a> {
    pub item_type: Option<&'a str>,
    pub other_type: Option<&'a str>,
}

struct RelatedItemRule {
    matches: fn(&RelatedItemTraits<'_>) -> bool,
    kind: RelatedItemKind,
}

fn is_host(traits: &RelatedItemTraits<'_>) -> bool {
    traits.item_type == Some("host")
}

fn is_series(traits: &RelatedItemTraits<'_>) -> bool {
    traits.item_type == Some("series")
}

fn is_event(traits: &RelatedItemTraits<'_>) -> bool {
    traits.other_type == Some("event")
}

fn is_related_item(traits: &RelatedItemTraits<'_>) -> bool {
    traits.other_type == Some("related_item")
}

/// Checked in order; the first rule that matches wins
const RELATED_ITEM_RULES: &[RelatedItemRule] = &[
    RelatedItemRule {
        matches: is_host,
        kind: RelatedItemKind::Host,
    },
    RelatedItemRule {
        matches: is_series,
        kind: RelatedItemKind::Series,
    },
    RelatedItemRule {
        matches: is_event,
        kind: RelatedItemKind::Event,
    },
    RelatedItemRule {
        matches: is_related_item,
        kind: RelatedItemKind::RelatedItem,
    },
];

/// `None` when no rule matches; such items are skipped
pub fn classify_related_item(traits: &RelatedItemTraits<'_>) -> Option<RelatedItemKind> {
    RELATED_ITEM_RULES
        .iter()
        .find(|rule| (rule.matches)(traits))
        .map(|rule| rule.kind)
}

pub(super) fn map_related_items(
    record: &Record<'_>,
    context: &CrosswalkContext<'_>,
    tree: &mut AttributeTree,
) -> Result<(), DomainError> {
    for item in record.records("related_items")? {
        let traits = RelatedItemTraits {
            item_type: item.first_str("type")?,
            other_type: item.first_str("other_type")?,
        };

        let Some(kind) = classify_related_item(&traits) else {
            debug!("Skipping unclassified related item {}", item.path());
            continue;
        };

        match kind {
            RelatedItemKind::Host => map_host(&item, context.model, tree)?,
            RelatedItemKind::Series => {
                tree.commit(Group::Publishers, map_fields(&item, tables::SERIES_FIELDS)?)
            }
            RelatedItemKind::Event => {
                tree.commit(Group::Event, map_fields(&item, tables::EVENT_FIELDS)?)
            }
            RelatedItemKind::RelatedItem => tree.commit(
                Group::RelatedItems,
                map_fields(&item, tables::RELATED_ITEM_FIELDS)?,
            ),
        }
    }
    Ok(())
}

fn map_host(item: &Record<'_>, model: &WorkModel, tree: &mut AttributeTree) -> Result<(), DomainError> {
    tree.commit(Group::Publishers, map_fields(item, tables::HOST_FIELDS)?);
    set_top_level(item, tables::HOST_STATUS_FIELDS, false, tree)?;

    if let Some(extra) = host_fields_for(model) {
        tree.commit(Group::Publishers, map_fields(item, extra)?);
    }
    Ok(())
}

fn host_fields_for(model: &WorkModel) -> Option<FieldTable> {
    match model {
        WorkModel::Dataset => Some(tables::HOST_DATASET_FIELDS),
        WorkModel::Article => Some(tables::HOST_ARTICLE_FIELDS),
        _ => None,
    }
}
