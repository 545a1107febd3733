//! End-to-end tests for the attribute crosswalk

use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use deposit_crosswalk::application::crosswalk::AttributeCrosswalk;
use deposit_crosswalk::application::errors::CrosswalkError;
use deposit_crosswalk::domain_errors::DomainError;
use deposit_crosswalk::entities::AttributeTree;
use deposit_crosswalk::value_objects::{DepositDocument, Group, WorkModel};

const ARTICLE_DEPOSIT: &str = include_str!("fixtures/article_deposit.json");

fn map(model: WorkModel, value: Value) -> Result<AttributeTree, CrosswalkError> {
    let document = DepositDocument::from_value(value).unwrap();
    AttributeCrosswalk::new(model).map(&document)
}

#[test]
fn test_article_deposit_maps_to_expected_tree() {
    let document = DepositDocument::from_json_str(ARTICLE_DEPOSIT).unwrap();
    let tree = AttributeCrosswalk::new(WorkModel::Article)
        .map(&document)
        .unwrap();

    let expected = json!({
        "title": "Crosswalking deposit metadata",
        "alternative_title": "A worked example",
        "abstract": "How deposit fields land in the repository model.",
        "language": ["English", "French"],
        "additional_information": "Deposited via SWORD",
        "keyword": ["metadata", "repositories"],
        "subject": ["Digital libraries"],
        "host_publication_status": "Published",
        "host_peer_review_status": "Peer reviewed",
        "bibliographic_information_attributes": [{
            "summary_documentation": "See README",
            "physical_form": "Electronic",
            "publishers_attributes": [{
                "identifier_doi": "10.1000/xyz123",
                "identifier_issn": "1234-5678",
                "acceptance_date": "2020-12-15",
                "citation_publication_date": "2021-03-01",
                "publisher_name": "Example University Press",
                "publisher_website_url": "https://press.example",
                "volume": "12",
                "issue_number": "3",
                "pagination": "1-20",
                "journal_title": "Journal of Metadata",
                "doi_requested": "No"
            }],
            "event_attributes": [{
                "event_title": "Open Repositories 2021",
                "event_location": "Online"
            }]
        }],
        "licence_and_rights_information_attributes": [{
            "license": "CC Attribution (CC BY)",
            "license_url": "https://creativecommons.org/licenses/by/4.0/",
            "rights_copyright_date": "2021"
        }],
        "admin_information_attributes": [{
            "record_ora_deposit_licence": "Deposit licence v1",
            "deposit_in_progress": false,
            "record_requires_review": true,
            "has_public_url": "https://ora.example/objects/uuid:1234",
            "admin_notes": "Checked",
            "record_version": "Publisher version",
            "history_attributes": [{
                "action_date": "2021-03-02",
                "action_description": "Record created"
            }],
            "ref_compliant_at_deposit": "Yes"
        }],
        "item_description_and_embargo_information_attributes": [{
            "type_of_work": "Journal article",
            "identifier_pmid": "998877",
            "identifier_uuid": "uuid:1234",
            "record_identifiers_attributes": [{
                "record_identifier_scheme": "handle",
                "record_identifier": "20.500.1/abc"
            }]
        }],
        "creators_and_contributors_attributes": [
            {
                "family_name": "Lovelace",
                "given_names": "Ada",
                "display_name": "Lovelace, Ada",
                "contributor_type": "personal",
                "division": "MPLS",
                "department": "Computer Science",
                "institution": "University of Oxford",
                "orcid_identifier": "0000-0002-1825-0097",
                "contributor_identifier_attributes": [{
                    "contributor_identifier_scheme": "researcherid",
                    "contributor_identifier": "A-1234-2010"
                }],
                "roles_attributes": [{
                    "role_title": "Author",
                    "role_order": "1",
                    "et_al": false
                }]
            },
            {
                "family_name": "Babbage",
                "given_names": "Charles",
                "contributor_type": "personal",
                "roles_attributes": [{
                    "role_title": "Contributor",
                    "role_order": "2",
                    "et_al": true
                }]
            }
        ],
        "funders_attributes": [{
            "funder_name": "Engineering Research Council",
            "funder_funding_programme": "Analytical Engines",
            "funder_identifier": "10.13039/501100000266",
            "funder_grant_attributes": [{
                "grant_identifier": "EP/123",
                "is_funding_for": "Ada Lovelace"
            }]
        }],
        "related_items_attributes": [{
            "related_item_title": "Dataset for this article",
            "related_item_identifier": "https://data.example/1"
        }]
    });

    assert_eq!(tree.to_json(), expected);
    assert_eq!(serde_json::to_value(&tree).unwrap(), expected);
}

#[test]
fn test_identifier_routing() {
    let tree = map(
        WorkModel::Generic,
        json!({"identifiers": {"doi": ["10.1/x"], "pmid": ["1"], "custom-id": ["abc"]}}),
    )
    .unwrap();

    assert_eq!(
        tree.group(Group::Publishers)[0].get("identifier_doi"),
        Some(&json!("10.1/x"))
    );
    let item = &tree.group(Group::ItemDescriptionAndEmbargoInformation)[0];
    assert_eq!(item.get("identifier_pmid"), Some(&json!("1")));
    assert_eq!(
        item.records("record_identifiers")[0].get("record_identifier_scheme"),
        Some(&json!("custom-id"))
    );
}

#[test]
fn test_host_fields_depend_on_model() {
    let deposit = json!({"related_items": [{
        "type": ["host"],
        "related_item_title": ["Host title"],
        "related_item_subtitle": ["Host subtitle"]
    }]});

    let article = map(WorkModel::Article, deposit.clone()).unwrap();
    assert_eq!(
        article.group(Group::Publishers)[0].get("journal_title"),
        Some(&json!("Host title"))
    );

    let dataset = map(WorkModel::Dataset, deposit.clone()).unwrap();
    let publisher = &dataset.group(Group::Publishers)[0];
    assert_eq!(publisher.get("host_title"), Some(&json!("Host title")));
    assert_eq!(publisher.get("journal_title"), Some(&json!("Host subtitle")));

    let thesis = map(WorkModel::Thesis, deposit).unwrap();
    assert!(thesis.group(Group::Publishers).is_empty());
}

#[test]
fn test_empty_values_produce_no_keys() {
    let tree = map(
        WorkModel::Generic,
        json!({
            "title": [],
            "abstract": null,
            "names": [],
            "identifiers": {},
            "form": {},
            "admin_info": {"history_actions": []},
            "related_items": [{"type": ["host"]}]
        }),
    )
    .unwrap();

    assert!(tree.is_empty(), "unexpected keys: {}", tree.to_json());
}

#[test]
fn test_malformed_names_abort_mapping() {
    let err = map(
        WorkModel::Generic,
        json!({"title": ["t"], "names": [{"family": ["A"]}, "not a record"]}),
    )
    .unwrap_err();

    match err {
        CrosswalkError::Domain(DomainError::MalformedShape {
            field,
            expected,
            found,
        }) => {
            assert_eq!(field, "names[1]");
            assert_eq!(expected, "a mapping");
            assert_eq!(found, "a string");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_completed_deposit_header_marks_record_for_review() {
    let tree = map(
        WorkModel::Generic,
        json!({
            "headers": {"in_progress": ["false"]},
            "recordInfoNote": {"requires_review": ["false"]}
        }),
    )
    .unwrap();

    assert_eq!(
        tree.to_json(),
        json!({"admin_information_attributes": [{
            "deposit_in_progress": false,
            "record_requires_review": true
        }]})
    );
}

#[test]
fn test_mapping_is_deterministic() {
    let document = DepositDocument::from_json_str(ARTICLE_DEPOSIT).unwrap();
    let crosswalk = AttributeCrosswalk::new(WorkModel::Article);
    assert_eq!(
        crosswalk.map(&document).unwrap(),
        crosswalk.map(&document).unwrap()
    );
}
