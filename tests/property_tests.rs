//! Property-based tests using proptest
//!
//! Invariants of the crosswalk and the METS assembler that should hold for
//! any input of the right shape.

use std::sync::Arc;

use proptest::prelude::*;
use serde_json::{json, Map, Value};

use deposit_crosswalk::application::crosswalk::tables::{find_route, IDENTIFIER_ROUTES};
use deposit_crosswalk::application::crosswalk::{classify_name, AttributeCrosswalk, NameKind};
use deposit_crosswalk::application::mets::{normalize_location, MetsAssembler};
use deposit_crosswalk::entities::{AttributeTree, WorkFile};
use deposit_crosswalk::infrastructure::manifest::{ManifestFile, StaticRenderer, WorkManifest};
use deposit_crosswalk::value_objects::{DepositDocument, Group, WorkModel};
use deposit_crosswalk::Config;

/// Keys read from the top level of a deposit document
const TOP_LEVEL_KEYS: &[&str] = &[
    "title",
    "subtitle",
    "abstract",
    "summary_documentation",
    "language",
    "genre",
    "topic",
    "type_of_work",
    "additional_information",
    "date_issued",
    "copyright_date",
    "patent_number",
    "thesis_degree_name",
    "dataset_format",
    "url",
    "recordCreationDate",
    "record_ora_deposit_licence",
    "names",
    "related_items",
];

/// Strategy for generating short non-empty text values
fn value_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 ]{1,24}"
}

/// Strategy for generating identifier schemes without a dedicated field
fn unknown_scheme_strategy() -> impl Strategy<Value = String> {
    "[a-z_]{3,12}".prop_filter("scheme has a dedicated field", |s| {
        find_route(IDENTIFIER_ROUTES, s).is_none()
    })
}

fn map(model: WorkModel, value: Value) -> AttributeTree {
    let document = DepositDocument::from_value(value).unwrap();
    AttributeCrosswalk::new(model).map(&document).unwrap()
}

proptest! {
    /// Single-valued targets take the first value of the source list
    #[test]
    fn first_value_only(values in prop::collection::vec(value_strategy(), 1..6)) {
        let tree = map(WorkModel::Generic, json!({"title": values.clone()}));
        prop_assert_eq!(tree.field("title"), Some(&json!(values[0])));
    }

    /// Multi-valued targets keep every value in order
    #[test]
    fn multi_valued_keep_all(values in prop::collection::vec(value_strategy(), 1..6)) {
        let tree = map(WorkModel::Generic, json!({"topic": values.clone()}));
        prop_assert_eq!(tree.field("subject"), Some(&json!(values)));
    }

    /// Absent or empty source fields never produce keys
    #[test]
    fn empty_fields_produce_nothing(
        keys in prop::sample::subsequence(TOP_LEVEL_KEYS, 0..TOP_LEVEL_KEYS.len()),
        use_null in any::<bool>(),
    ) {
        let mut document = Map::new();
        for key in keys {
            let empty = if use_null { Value::Null } else { json!([]) };
            document.insert(key.to_string(), empty);
        }

        let tree = map(WorkModel::Article, Value::Object(document));
        prop_assert!(tree.is_empty(), "unexpected keys: {}", tree.to_json());
    }

    /// Unknown identifier schemes are kept with the scheme label as given
    #[test]
    fn unknown_schemes_preserved(scheme in unknown_scheme_strategy(), value in value_strategy()) {
        let tree = map(
            WorkModel::Generic,
            json!({"identifiers": {scheme.clone(): [value.clone()]}}),
        );

        let item = &tree.group(Group::ItemDescriptionAndEmbargoInformation)[0];
        let others = item.records("record_identifiers");
        prop_assert_eq!(others.len(), 1);
        prop_assert_eq!(others[0].get("record_identifier_scheme"), Some(&json!(scheme)));
        prop_assert_eq!(others[0].get("record_identifier"), Some(&json!(value)));
    }

    /// Repeating groups append one entry per record, in input order
    #[test]
    fn events_append_in_order(titles in prop::collection::vec(value_strategy(), 0..8)) {
        let items: Vec<Value> = titles
            .iter()
            .map(|t| json!({"other_type": ["event"], "related_item_title": [t]}))
            .collect();
        let tree = map(WorkModel::Generic, json!({"related_items": items}));

        let events = tree.group(Group::Event);
        prop_assert_eq!(events.len(), titles.len());
        for (event, title) in events.iter().zip(&titles) {
            prop_assert_eq!(event.get("event_title"), Some(&json!(title)));
        }
    }

    /// Mapping the same document twice yields deep-equal trees
    #[test]
    fn mapping_is_deterministic(
        title in value_strategy(),
        topics in prop::collection::vec(value_strategy(), 0..4),
        scheme in unknown_scheme_strategy(),
        family in value_strategy(),
    ) {
        let document = DepositDocument::from_value(json!({
            "title": [title],
            "topic": topics,
            "identifiers": {"doi": ["10.1/x"], scheme: ["v"]},
            "names": [{"family": [family], "roles": [{"role_title": ["Author"]}]}]
        }))
        .unwrap();
        let crosswalk = AttributeCrosswalk::new(WorkModel::Article);

        prop_assert_eq!(crosswalk.map(&document).unwrap(), crosswalk.map(&document).unwrap());
    }

    /// Non-corporate names are always people, whatever their roles
    #[test]
    fn non_corporate_names_are_people(
        name_type in "[a-z]{0,10}".prop_filter("corporate", |t| t != "corporate"),
        roles in prop::sample::subsequence(
            &["Funder", "Publisher", "Copyright holder", "Commissioning body", "Author"][..],
            0..5,
        ),
    ) {
        prop_assert_eq!(classify_name(Some(name_type.as_str()), &roles), NameKind::Person);
    }

    /// Bare paths gain the file URI prefix, URLs pass through
    #[test]
    fn locations_normalized(
        segments in prop::collection::vec("[a-z0-9]{1,8}", 1..5),
        https in any::<bool>(),
    ) {
        let path = segments.join("/");
        if https {
            let url = format!("https://repo.example/{}", path);
            prop_assert_eq!(normalize_location(&url, "file:///"), url);
        } else {
            prop_assert_eq!(normalize_location(&path, "file:///"), format!("file:///{}", path));
        }
    }

    /// Files are numbered 1..n without gaps, with or without locations
    #[test]
    fn file_ids_are_sequential(locations in prop::collection::vec(prop::option::of("[a-z]{1,8}"), 0..12)) {
        let files = locations
            .iter()
            .enumerate()
            .map(|(i, location)| {
                let mut file = WorkFile::new(format!("f{}", i));
                file.location = location.clone();
                ManifestFile { file, descriptive_xml: None }
            })
            .collect();
        let manifest = WorkManifest { files, ..WorkManifest::default() };

        let renderer = Arc::new(StaticRenderer::from_manifest(&manifest).unwrap());
        let assembler = MetsAssembler::new(renderer.clone(), renderer, &Config::default()).unwrap();
        let doc = assembler.assemble(&manifest).unwrap();

        let ids: Vec<String> = doc
            .root()
            .find_all("mets:file")
            .iter()
            .filter_map(|e| e.attr("ID").map(str::to_string))
            .collect();
        let expected: Vec<String> = (1..=locations.len()).map(|n| format!("FILENAME{}", n)).collect();
        prop_assert_eq!(ids, expected);

        let divs = doc
            .root()
            .child("mets:structMap")
            .and_then(|m| m.child("mets:div"))
            .map(|d| d.elements().count());
        prop_assert_eq!(divs, Some(locations.len()));
    }
}
