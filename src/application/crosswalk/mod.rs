//! Attribute crosswalk: deposit metadata document → mapped attribute tree
//!
//! Each metadata concern reads the document through its own field table,
//! stages values per target group and commits them through
//! [`AttributeTree::commit`], which applies the group's declared
//! cardinality. Concerns run in a fixed order; later singleton writes win.

mod admin;
mod descriptive;
mod files;
mod names;
mod related_items;
pub mod tables;

use indexmap::IndexMap;
use serde_json::Value;
use tracing::{debug, info};

use crate::application::errors::CrosswalkError;
use crate::domain::entities::{AttributeTree, Attributes};
use crate::domain::errors::DomainError;
use crate::domain::value_objects::{DepositDocument, FileMetadataRecord, Group, Record, WorkModel};
use tables::{FieldTable, Route};

pub use files::{is_permitted_file_set_attribute, FileSetAttributes, MappedFileMetadata};
pub use names::{classify_name, NameKind};
pub use related_items::{classify_related_item, RelatedItemKind, RelatedItemTraits};

/// Document-wide facts a concern may need besides its own fields
pub(crate) struct CrosswalkContext<'a> {
    pub model: &'a WorkModel,
    pub et_al_roles: Vec<String>,
}

impl<'a> CrosswalkContext<'a> {
    fn from_document(model: &'a WorkModel, record: &Record<'_>) -> Result<Self, DomainError> {
        let et_al_roles = record
            .values("et_al_roles")?
            .into_iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect();
        Ok(Self { model, et_al_roles })
    }

    pub fn is_et_al(&self, role_title: &str) -> bool {
        self.et_al_roles.iter().any(|r| r == role_title)
    }
}

type Concern =
    fn(&Record<'_>, &CrosswalkContext<'_>, &mut AttributeTree) -> Result<(), DomainError>;

/// Every concern, in application order
const CONCERNS: &[(&str, Concern)] = &[
    // descriptive metadata
    ("access condition", descriptive::map_access_condition),
    ("abstract", descriptive::map_abstract),
    ("dataset", descriptive::map_dataset),
    ("genre", descriptive::map_genre),
    ("identifiers", descriptive::map_identifiers),
    ("language", descriptive::map_language),
    ("location", descriptive::map_location),
    ("names", names::map_names),
    ("note", descriptive::map_note),
    ("origin info", descriptive::map_origin_info),
    ("patent", descriptive::map_patent),
    ("physical description", descriptive::map_physical_description),
    ("related items", related_items::map_related_items),
    ("subject", descriptive::map_subject),
    ("thesis", descriptive::map_thesis),
    ("title", descriptive::map_title),
    // admin metadata
    ("deposit licence", admin::map_deposit_licence),
    ("record info", admin::map_record_info),
    ("ORA admin", admin::map_ora_admin),
    ("REF admin", admin::map_ref_admin),
    ("thesis admin", admin::map_thesis_admin),
    ("embargo", admin::map_embargo),
    // deposit state from the headers overrides review flags in the document
    ("in progress", descriptive::map_in_progress),
];

/// Maps deposit metadata documents for one declared work model
#[derive(Debug, Clone, Default)]
pub struct AttributeCrosswalk {
    model: WorkModel,
}

impl AttributeCrosswalk {
    pub fn new(model: WorkModel) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &WorkModel {
        &self.model
    }

    /// Build the mapped attribute tree for `document`
    ///
    /// Absent and empty fields are skipped. A field with the wrong shape
    /// aborts the whole call; no partial tree is returned.
    pub fn map(&self, document: &DepositDocument) -> Result<AttributeTree, CrosswalkError> {
        let record = document.root();
        let context = CrosswalkContext::from_document(&self.model, &record)?;
        let mut tree = AttributeTree::new();

        for (name, concern) in CONCERNS {
            debug!("Mapping {} metadata", name);
            concern(&record, &context, &mut tree)?;
        }

        info!("Mapped deposit metadata for {} work", self.model);
        Ok(tree)
    }

    /// Map one file's metadata sub-mapping into flat file attributes
    pub fn map_file_metadata(
        &self,
        file: &FileMetadataRecord,
    ) -> Result<MappedFileMetadata, CrosswalkError> {
        let document = file.metadata_document();
        let attributes = files::map_file_fields(&document.root())?;

        Ok(MappedFileMetadata {
            file_id: file.file_id.clone(),
            dmd_id: file.dmd_id.clone(),
            file_path: file.file_path.clone(),
            attributes,
        })
    }

    /// Map every file record that carries metadata, keeping input order
    pub fn map_files(
        &self,
        files: &[FileMetadataRecord],
    ) -> Result<Vec<MappedFileMetadata>, CrosswalkError> {
        let mapped = files
            .iter()
            .filter(|file| file.has_metadata())
            .map(|file| self.map_file_metadata(file))
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Mapped metadata for {} of {} files", mapped.len(), files.len());
        Ok(mapped)
    }
}

/// Stage the first value of every table field present in `record`
pub(crate) fn stage_fields(
    record: &Record<'_>,
    table: FieldTable,
    staged: &mut Attributes,
) -> Result<(), DomainError> {
    for (source, target) in table {
        if let Some(value) = record.first(source)? {
            staged.set(*target, value.clone());
        }
    }
    Ok(())
}

pub(crate) fn map_fields(record: &Record<'_>, table: FieldTable) -> Result<Attributes, DomainError> {
    let mut staged = Attributes::new();
    stage_fields(record, table, &mut staged)?;
    Ok(staged)
}

/// Set top-level tree fields; `all_values` keeps the whole value list
pub(crate) fn set_top_level(
    record: &Record<'_>,
    table: FieldTable,
    all_values: bool,
    tree: &mut AttributeTree,
) -> Result<(), DomainError> {
    for (source, target) in table {
        let values = record.values(source)?;
        if values.is_empty() {
            continue;
        }
        let value = if all_values {
            Value::Array(values.into_iter().cloned().collect())
        } else {
            values[0].clone()
        };
        tree.set_field(*target, value);
    }
    Ok(())
}

/// Per-group staging for concerns that feed several groups
#[derive(Debug, Default)]
pub(crate) struct Staging {
    groups: IndexMap<Group, Attributes>,
}

impl Staging {
    pub fn group_mut(&mut self, group: Group) -> &mut Attributes {
        self.groups.entry(group).or_default()
    }

    pub fn stage_routes(
        &mut self,
        record: &Record<'_>,
        routes: &'static [Route],
    ) -> Result<(), DomainError> {
        for route in routes {
            if let Some(value) = record.first(route.source)? {
                self.group_mut(route.group).set(route.target, value.clone());
            }
        }
        Ok(())
    }

    pub fn commit(self, tree: &mut AttributeTree) {
        for (group, staged) in self.groups {
            tree.commit(group, staged);
        }
    }
}
