//! Field tables for every crosswalk concern
//!
//! Tables are plain data: `(source field, target field)` pairs for a single
//! target, or [`Route`]s when one concern feeds several groups.

use crate::domain::value_objects::Group;

/// `(source field, target field)` pairs
pub type FieldTable = &'static [(&'static str, &'static str)];

/// Source field routed to a field of a specific group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub source: &'static str,
    pub group: Group,
    pub target: &'static str,
}

const fn route(source: &'static str, group: Group, target: &'static str) -> Route {
    Route {
        source,
        group,
        target,
    }
}

pub fn find_route(routes: &'static [Route], source: &str) -> Option<&'static Route> {
    routes.iter().find(|r| r.source == source)
}

// ---------------------------------------------------------------------------
// Descriptive metadata
// ---------------------------------------------------------------------------

/// Top-level single-valued fields
pub const TITLE_FIELDS: FieldTable = &[("title", "title"), ("subtitle", "alternative_title")];

pub const ABSTRACT_FIELDS: FieldTable = &[("abstract", "abstract")];

pub const NOTE_FIELDS: FieldTable = &[("additional_information", "additional_information")];

/// Top-level fields that keep every value
pub const LANGUAGE_FIELDS: FieldTable = &[("language", "language")];

pub const SUBJECT_FIELDS: FieldTable = &[("genre", "keyword"), ("topic", "subject")];

/// Routed to bibliographic information
pub const SUMMARY_FIELDS: FieldTable = &[("summary_documentation", "summary_documentation")];

/// Keys of the `access_condition` mapping
pub const ACCESS_CONDITION_ROUTES: &[Route] = &[
    route("license", Group::LicenceAndRightsInformation, "license"),
    route(
        "license_statement",
        Group::LicenceAndRightsInformation,
        "license_statement",
    ),
    route(
        "license_start_date",
        Group::LicenceAndRightsInformation,
        "license_start_date",
    ),
    route("license_url", Group::LicenceAndRightsInformation, "license_url"),
    route(
        "rights_statement",
        Group::LicenceAndRightsInformation,
        "rights_statement",
    ),
    route(
        "record_ora_deposit_licence",
        Group::AdminInformation,
        "record_ora_deposit_licence",
    ),
];

pub const DATASET_FIELDS: FieldTable = &[
    ("data_collection_start", "data_collection_start_date"),
    ("data_collection_end", "data_collection_end_date"),
    ("dataset_spatial", "data_coverage_spatial"),
    ("data_coverage_start", "data_coverage_temporal_start_date"),
    ("data_coverage_end", "data_coverage_temporal_end_date"),
    ("dataset_type", "data_format"),
    ("digital_storage_location", "data_digital_storage_location"),
    ("dataset_extent", "data_digital_data_total_file_size"),
    ("dataset_format", "data_digital_data_format"),
    ("dataset_version", "data_digital_data_version"),
    ("physical_storage_location", "data_physical_storage_location"),
    ("dataset_references", "data_management_plan_url"),
];

pub const GENRE_FIELDS: FieldTable = &[
    ("sub_type_of_work", "sub_type_of_work"),
    ("type_of_work", "type_of_work"),
];

/// Identifier schemes with a dedicated target field; any other scheme
/// becomes a generic `record_identifiers` entry
pub const IDENTIFIER_ROUTES: &[Route] = &[
    // publisher identifiers
    route("doi", Group::Publishers, "identifier_doi"),
    route("eisbn", Group::Publishers, "identifier_eisbn"),
    route("eissn", Group::Publishers, "identifier_eissn"),
    route("isbn", Group::Publishers, "identifier_isbn_10"),
    route("isbn13", Group::Publishers, "identifier_isbn_13"),
    route("issn", Group::Publishers, "identifier_issn"),
    // item description identifiers
    route("pii", Group::ItemDescriptionAndEmbargoInformation, "pii"),
    route(
        "pmid",
        Group::ItemDescriptionAndEmbargoInformation,
        "identifier_pmid",
    ),
    route(
        "pubs_id",
        Group::ItemDescriptionAndEmbargoInformation,
        "identifier_pubs_identifier",
    ),
    route("tinypid", Group::ItemDescriptionAndEmbargoInformation, "tinypid"),
    route(
        "uuid",
        Group::ItemDescriptionAndEmbargoInformation,
        "identifier_uuid",
    ),
    // admin identifiers
    route(
        "source_identifier",
        Group::AdminInformation,
        "identifier_source_identifier",
    ),
    route(
        "tombstone",
        Group::AdminInformation,
        "identifier_tombstone_record_identifier",
    ),
    // bibliographic identifiers
    route("paper_number", Group::BibliographicInformation, "paper_number"),
];

pub const LOCATION_FIELDS: FieldTable = &[("url", "has_public_url")];

pub const ORIGIN_INFO_FIELDS: FieldTable = &[
    ("date_of_acceptance", "acceptance_date"),
    ("date_issued", "citation_publication_date"),
    ("publication_place", "citation_place_of_publication"),
    ("publication_url", "publication_url"),
];

pub const COPYRIGHT_FIELDS: FieldTable = &[("copyright_date", "rights_copyright_date")];

pub const PATENT_FIELDS: FieldTable = &[
    ("patent_number", "patent_number"),
    ("patent_application_number", "patent_application_number"),
    ("patent_publication_number", "patent_publication_number"),
    ("patent_awarded_date", "patent_awarded_date"),
    ("patent_filed_date", "patent_filed_date"),
    ("patent_status", "patent_status"),
    ("patent_territory", "patent_territory"),
    (
        "patent_cooperative_classification",
        "patent_cooperative_classification",
    ),
    (
        "patent_european_classification",
        "patent_european_classification",
    ),
    (
        "patent_international_classification",
        "patent_international_classification",
    ),
];

/// Keys of the `form` mapping
pub const PHYSICAL_FORM_FIELDS: FieldTable = &[
    ("physical_form", "physical_form"),
    ("physical_dimensions", "physical_dimensions"),
];

pub const THESIS_FIELDS: FieldTable = &[
    ("thesis_degree_institution", "thesis_degree_institution"),
    ("thesis_degree_level", "thesis_degree_level"),
    ("thesis_degree_name", "thesis_degree_name"),
    (
        "thesis_leave_to_supplicate_date",
        "thesis_leave_to_supplicate_date",
    ),
];

// ---------------------------------------------------------------------------
// Names
// ---------------------------------------------------------------------------

pub const PERSON_NAME_FIELDS: FieldTable = &[
    ("family", "family_name"),
    ("given", "given_names"),
    ("initials", "initials"),
    ("display_form", "display_name"),
    ("preferred_family", "preferred_family_name"),
    ("preferred_given", "preferred_given_name"),
    ("preferred_email", "preferred_contributor_email"),
    ("type", "contributor_type"),
];

pub const AFFILIATION_FIELDS: FieldTable = &[
    ("division", "division"),
    ("department", "department"),
    ("sub_department", "sub_department"),
    ("research_group", "research_group"),
    ("oxford_college", "oxford_college"),
    ("sub_unit", "sub_unit"),
];

pub const INSTITUTION_FIELDS: FieldTable = &[
    ("institution", "institution"),
    ("identifier", "institution_identifier"),
];

/// Contributor identifier schemes with a dedicated field
pub const CONTRIBUTOR_IDENTIFIER_FIELDS: FieldTable = &[
    ("email_address", "contributor_email"),
    ("website", "contributor_website_url"),
    (
        "contributor_record_identifier",
        "contributor_record_identifier",
    ),
    ("sso", "contributor_institutional_identifier"),
    ("orcid_identifier", "orcid_identifier"),
];

pub const ROLE_FIELDS: FieldTable = &[("role_title", "role_title"), ("role_order", "role_order")];

pub const COMMISSIONING_BODY_FIELDS: FieldTable = &[("display_form", "commissioning_body")];

pub const RIGHTS_HOLDER_FIELDS: FieldTable = &[("display_form", "rights_holders")];

pub const FUNDER_FIELDS: FieldTable = &[
    ("display_form", "funder_name"),
    ("funding_programme", "funder_funding_programme"),
    ("funder_compliance", "funder_compliance_met"),
];

/// A funder's `identifier` may be a value list or a scheme mapping
pub const FUNDER_IDENTIFIER_FIELD: (&str, &str) = ("identifier", "funder_identifier");

pub const GRANT_FIELDS: FieldTable = &[
    ("grant_identifier", "grant_identifier"),
    ("is_funding_for", "is_funding_for"),
];

pub const PUBLISHER_NAME_FIELDS: FieldTable = &[("display_form", "publisher_name")];

/// Keys of a publisher's `identifier` mapping
pub const PUBLISHER_IDENTIFIER_FIELDS: FieldTable = &[("website", "publisher_website_url")];

// ---------------------------------------------------------------------------
// Related items
// ---------------------------------------------------------------------------

pub const EVENT_FIELDS: FieldTable = &[
    ("related_item_title", "event_title"),
    ("related_item_physical_location", "event_location"),
    ("related_item_url", "event_website_url"),
    ("related_item_event_start_date", "event_start_date"),
    ("related_item_event_end_date", "event_end_date"),
];

pub const RELATED_ITEM_FIELDS: FieldTable = &[
    ("related_item_title", "related_item_title"),
    ("related_item_url", "related_item_identifier"),
    ("related_item_citation_text", "related_item_citation_text"),
];

pub const HOST_FIELDS: FieldTable = &[
    ("related_item_chapter_number", "chapter_number"),
    ("related_item_edition", "edition"),
    ("related_item_issue", "issue_number"),
    ("related_item_pages", "pagination"),
    ("related_item_series_number", "series_number"),
    ("related_item_volume", "volume"),
];

/// Host fields that land on the top level of the tree
pub const HOST_STATUS_FIELDS: FieldTable = &[
    ("related_item_status", "host_publication_status"),
    ("related_item_peer_reviewed", "host_peer_review_status"),
];

pub const HOST_DATASET_FIELDS: FieldTable = &[
    ("related_item_title", "host_title"),
    ("related_item_subtitle", "journal_title"),
];

pub const HOST_ARTICLE_FIELDS: FieldTable = &[
    ("related_item_title", "journal_title"),
    ("related_item_article_number", "article_number"),
    ("related_item_url", "journal_website_url"),
];

pub const SERIES_FIELDS: FieldTable = &[
    ("related_item_title", "series_title"),
    ("related_item_series_number", "series_number"),
];

// ---------------------------------------------------------------------------
// Administrative metadata
// ---------------------------------------------------------------------------

pub const DEPOSIT_LICENCE_FIELDS: FieldTable =
    &[("record_ora_deposit_licence", "record_ora_deposit_licence")];

pub const RECORD_INFO_FIELDS: FieldTable = &[
    ("recordCreationDate", "record_creation_date"),
    ("recordContentSource", "record_content_source"),
];

/// Keys of the `recordInfoNote` mapping
pub const RECORD_INFO_NOTE_ROUTES: &[Route] = &[
    route("accept_updates", Group::AdminInformation, "record_accept_updates"),
    route("admin_notes", Group::AdminInformation, "admin_notes"),
    route(
        "confidential_report",
        Group::BibliographicInformation,
        "confidential_report",
    ),
    route(
        "deposit_note",
        Group::LicenceAndRightsInformation,
        "deposit_note",
    ),
    route(
        "ora_data_model_version",
        Group::AdminInformation,
        "ora_data_model_version",
    ),
    route(
        "pre_counter_downloads",
        Group::AdminInformation,
        "pre_counter_downloads",
    ),
    route("pre_counter_views", Group::AdminInformation, "pre_counter_views"),
    route(
        "requires_review",
        Group::AdminInformation,
        "record_requires_review",
    ),
];

/// Keys of the `admin_info` mapping
pub const ORA_ADMIN_ROUTES: &[Route] = &[
    route("doi_requested", Group::Publishers, "doi_requested"),
    route("depositor_contacted", Group::AdminInformation, "depositor_contacted"),
    route(
        "depositor_contact_email_template",
        Group::AdminInformation,
        "depositor_contact_email_template",
    ),
    route(
        "record_first_reviewed_by",
        Group::AdminInformation,
        "record_first_reviewed_by",
    ),
    route(
        "incorrect_version_deposited",
        Group::AdminInformation,
        "incorrect_version_deposited",
    ),
    route("record_deposit_date", Group::AdminInformation, "record_deposit_date"),
    route(
        "record_publication_date",
        Group::AdminInformation,
        "record_publication_date",
    ),
    route(
        "record_review_status",
        Group::AdminInformation,
        "record_review_status",
    ),
    route(
        "record_review_status_other",
        Group::AdminInformation,
        "record_review_status_other",
    ),
    route("record_version", Group::AdminInformation, "record_version"),
    route("rt_ticket_number", Group::AdminInformation, "rt_ticket_number"),
    route(
        "rights_third_party_copyright_material",
        Group::LicenceAndRightsInformation,
        "rights_third_party_copyright_material",
    ),
    route(
        "rights_third_party_copyright_permission_received",
        Group::LicenceAndRightsInformation,
        "rights_third_party_copyright_permission_received",
    ),
];

/// Keys of each `admin_info.history_actions` entry
pub const HISTORY_ACTION_FIELDS: FieldTable = &[
    ("note", "action_comment"),
    ("date", "action_date"),
    ("description", "action_description"),
    ("temporal", "action_duration"),
    ("contributor", "action_responsibility"),
];

/// Keys of the `ref_admin` mapping
pub const REF_ADMIN_FIELDS: FieldTable = &[
    ("apc_admin_apc_number", "apc_admin_apc_number"),
    ("apc_admin_review_status", "apc_admin_apc_review_status"),
    (
        "apc_admin_spreadsheet_identifier",
        "apc_admin_apc_spreadsheet_identifier",
    ),
    ("ref_compliant_at_deposit", "ref_compliant_at_deposit"),
    ("ref_compliant_availability", "ref_compliant_availability"),
    ("ref_exception_required", "ref_exception_required"),
    ("ref_exception_note", "ref_other_exception_note"),
];

/// Keys of the `thesis_admin` mapping routed to admin information
pub const THESIS_ADMIN_FIELDS: FieldTable = &[
    (
        "thesis_archive_version_completed",
        "thesis_archive_version_complete",
    ),
    (
        "thesis_student_system_updated",
        "thesis_student_system_updated",
    ),
    (
        "thesis_dispensation_from_consultation_granted",
        "thesis_dispensation_from_consultation_granted",
    ),
    ("thesis_voluntary_deposit", "thesis_voluntary_deposit"),
];

/// Keys of the `thesis_admin` mapping routed to the embargo group
pub const EMBARGO_FIELDS: FieldTable = &[
    ("record_embargo_end_date", "record_embargo_end_date"),
    ("record_embargo_reason", "record_embargo_reason"),
    (
        "record_embargo_release_method",
        "record_embargo_release_method",
    ),
];

// ---------------------------------------------------------------------------
// Files
// ---------------------------------------------------------------------------

pub const FILE_FIELDS: FieldTable = &[
    ("title", "file_name"),
    ("format", "file_format"),
    ("extent", "file_size"),
    ("hasVersion", "file_version"),
    ("location", "file_path"),
    ("datastream", "file_admin_fedora3_datastream_identifier"),
    ("version", "file_rioxx_version"),
    ("embargoedUntil", "file_embargo_end_date"),
    ("embargoComment", "file_embargo_comment"),
    ("embargoReleaseMethod", "file_embargo_release_method"),
    ("reasonForEmbargo", "file_embargo_reason"),
    ("lastAccessRequestDate", "file_last_access_request_date"),
    ("fileOrder", "file_order"),
    ("accessConditionAtDeposit", "access_condition_at_deposit"),
    (
        "fileAndRecordDoNotMatch",
        "file_admin_file_and_record_do_not_match",
    ),
    ("hasPublicUrl", "file_public_url"),
];

/// File-set attributes accepted besides the mapped file fields
pub const FILE_SET_EXTRA_PERMITTED: &[&str] =
    &["edit_users", "edit_groups", "read_groups", "visibility"];
