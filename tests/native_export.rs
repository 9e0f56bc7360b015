//! Document structure produced by the native XML export filter.

use nativexml::dom::Node;
use nativexml::error::PluginError;
use nativexml::model::{MetadataField, PUBLISHER_ID};
use nativexml::{
    Deployment, DeploymentConfig, Element, Error, PluginRegistry, PubIdPlugin, StoredPubIdPlugin,
    Submission, SubmissionSerializer,
};

const NS: &str = "http://pkp.sfu.ca";

/// Always issues the same DOI, like a plugin backed by a fixed prefix.
struct FixedDoi(&'static str);

impl PubIdPlugin for FixedDoi {
    fn pub_id(&self, _: &Submission, _: bool) -> Result<Option<String>, PluginError> {
        Ok(Some(self.0.to_string()))
    }

    fn pub_id_type(&self) -> &str {
        "doi"
    }
}

fn serializer_with(plugins: PluginRegistry) -> SubmissionSerializer {
    let config = DeploymentConfig {
        schema_filename: "pkp-native.xsd".to_string(),
        ..Default::default()
    };
    SubmissionSerializer::new(Deployment::new(config, plugins).expect("valid deployment"))
}

fn serializer() -> SubmissionSerializer {
    serializer_with(PluginRegistry::new())
}

fn ids(el: &Element) -> Vec<(String, String)> {
    el.children_named("id")
        .map(|e| (e.attribute("type").unwrap_or_default().to_string(), e.text()))
        .collect()
}

fn names(el: &Element) -> Vec<&str> {
    el.child_elements().map(|e| e.name.as_str()).collect()
}

#[test]
fn test_single_submission_is_root() {
    let doc = serializer()
        .serialize(&[Submission::new(1, "en_US")])
        .expect("serialize");

    assert_eq!(doc.root.name, "submission");
    assert_eq!(doc.root.attribute("locale"), Some("en_US"));
    assert_eq!(
        doc.root.attribute("xmlns:xsi"),
        Some("http://www.w3.org/2001/XMLSchema-instance")
    );
    assert_eq!(
        doc.root.attribute("xsi:schemaLocation"),
        Some("http://pkp.sfu.ca pkp-native.xsd")
    );
}

#[test]
fn test_multiple_submissions_are_wrapped_in_order() {
    let doc = serializer()
        .serialize(&[Submission::new(1, "en_US"), Submission::new(2, "fr_CA")])
        .expect("serialize");

    assert_eq!(doc.root.name, "submissions");
    assert_eq!(doc.root.namespace.as_deref(), Some(NS));
    assert!(doc.root.attribute("xsi:schemaLocation").is_some());

    let children: Vec<_> = doc.root.child_elements().collect();
    assert_eq!(children.len(), 2);
    assert_eq!(ids(children[0])[0].1, "1");
    assert_eq!(ids(children[1])[0].1, "2");
    assert_eq!(children[1].attribute("locale"), Some("fr_CA"));
    // Schema attributes belong to the wrapper only.
    assert!(children[0].attribute("xsi:schemaLocation").is_none());
}

#[test]
fn test_empty_locale_values_are_suppressed() {
    let sub = Submission::new(1, "en")
        .with_field(MetadataField::Title, "en", "Title")
        .with_field(MetadataField::Title, "fr", "");
    let doc = serializer().serialize(&[sub]).expect("serialize");

    let titles: Vec<_> = doc.root.children_named("title").collect();
    assert_eq!(titles.len(), 1);
    assert_eq!(titles[0].attribute("locale"), Some("en"));
    assert_eq!(titles[0].text(), "Title");
}

#[test]
fn test_plugin_identifier_follows_internal() {
    let plugins = PluginRegistry::new().with_plugin(0, FixedDoi("doi:10.1/x"));
    let doc = serializer_with(plugins)
        .serialize(&[Submission::new(42, "en")])
        .expect("serialize");

    assert_eq!(
        ids(&doc.root),
        [
            ("internal".to_string(), "42".to_string()),
            ("doi".to_string(), "doi:10.1/x".to_string()),
        ]
    );
}

#[test]
fn test_public_identifier_between_internal_and_plugins() {
    let plugins = PluginRegistry::new().with_plugin(0, FixedDoi("doi:10.1/x"));
    let sub = Submission::new(42, "en").with_pub_id(PUBLISHER_ID, "pub-99");
    let doc = serializer_with(plugins).serialize(&[sub]).expect("serialize");

    let types: Vec<_> = ids(&doc.root).into_iter().map(|(t, _)| t).collect();
    assert_eq!(types, ["internal", "public", "doi"]);
    assert_eq!(ids(&doc.root)[1].1, "pub-99");
}

#[test]
fn test_plugins_run_in_registration_order() {
    let plugins = PluginRegistry::new()
        .with_plugin(0, StoredPubIdPlugin::new("urn"))
        .with_plugin(0, StoredPubIdPlugin::new("ark"));
    let sub = Submission::new(1, "en")
        .with_pub_id("ark", "ark:/1/2")
        .with_pub_id("urn", "urn:nbn:x");
    let doc = serializer_with(plugins).serialize(&[sub]).expect("serialize");

    let types: Vec<_> = ids(&doc.root).into_iter().map(|(t, _)| t).collect();
    assert_eq!(types, ["internal", "urn", "ark"]);
}

#[test]
fn test_metadata_follows_fixed_field_order() {
    // Fields populated in reverse so any incidental ordering would show.
    let mut sub = Submission::new(1, "en");
    for field in MetadataField::ALL.iter().rev() {
        sub = sub.with_field(*field, "en", field.element_name());
    }
    let doc = serializer().serialize(&[sub]).expect("serialize");

    assert_eq!(
        names(&doc.root),
        [
            "id",
            "title",
            "prefix",
            "subtitle",
            "abstract",
            "subject_class",
            "coverage_geo",
            "coverage_chron",
            "coverage_sample",
            "type",
            "source",
            "rights",
        ]
    );
}

#[test]
fn test_locales_keep_insertion_order() {
    let sub = Submission::new(1, "en")
        .with_field(MetadataField::Abstract, "fr_CA", "Résumé")
        .with_field(MetadataField::Abstract, "en_US", "Summary");
    let doc = serializer().serialize(&[sub]).expect("serialize");

    let locales: Vec<_> = doc
        .root
        .children_named("abstract")
        .filter_map(|e| e.attribute("locale"))
        .collect();
    assert_eq!(locales, ["fr_CA", "en_US"]);
}

#[test]
fn test_identical_input_gives_identical_tree() {
    let build = || {
        let plugins = PluginRegistry::new()
            .with_plugin(0, FixedDoi("10.5/y"))
            .with_plugin(0, StoredPubIdPlugin::new("urn"));
        let subs = [
            Submission::new(3, "en")
                .with_field(MetadataField::Title, "en", "A")
                .with_field(MetadataField::Rights, "de", "B")
                .with_pub_id("urn", "urn:1"),
            Submission::new(4, "de").with_published(true),
        ];
        serializer_with(plugins).serialize(&subs).expect("serialize")
    };

    assert_eq!(build(), build());
}

#[test]
fn test_input_is_not_mutated() {
    let subs = vec![Submission::new(9, "en").with_field(MetadataField::Title, "en", "T")];
    let before = subs.clone();
    serializer().serialize(&subs).expect("serialize");
    assert_eq!(subs, before);
}

#[test]
fn test_minimal_submission_end_to_end() {
    let sub = Submission::new(7, "en").with_field(MetadataField::Title, "en", "Hello");
    let doc = serializer().serialize(&[sub]).expect("serialize");

    assert_eq!(doc.root.name, "submission");
    assert_eq!(doc.root.attribute("locale"), Some("en"));
    assert_eq!(doc.root.children.len(), 2);

    match &doc.root.children[..] {
        [Node::Element(id), Node::Element(title)] => {
            assert_eq!(id.name, "id");
            assert_eq!(id.attribute("type"), Some("internal"));
            assert_eq!(id.text(), "7");
            assert_eq!(title.name, "title");
            assert_eq!(title.attribute("locale"), Some("en"));
            assert_eq!(title.text(), "Hello");
        }
        other => panic!("unexpected children: {other:?}"),
    }
    assert_eq!(doc.root.children_named("abstract").count(), 0);
}

#[test]
fn test_failing_plugin_aborts_whole_batch() {
    struct Broken;

    impl PubIdPlugin for Broken {
        fn pub_id(&self, s: &Submission, _: bool) -> Result<Option<String>, PluginError> {
            if s.id == 2 {
                Err(format!("no identifier for {}", s.id).into())
            } else {
                Ok(None)
            }
        }

        fn pub_id_type(&self) -> &str {
            "handle"
        }
    }

    let serializer = serializer_with(PluginRegistry::new().with_plugin(0, Broken));
    let err = serializer
        .serialize(&[Submission::new(1, "en"), Submission::new(2, "en")])
        .unwrap_err();

    assert!(matches!(err, Error::Plugin { ref pub_id_type, .. } if pub_id_type == "handle"));
    assert_eq!(
        err.to_string(),
        "pub-id plugin `handle` failed: no identifier for 2"
    );
}

#[test]
fn test_blank_namespace_is_a_configuration_error() {
    let config = DeploymentConfig {
        namespace: String::new(),
        ..Default::default()
    };
    let err = Deployment::new(config, PluginRegistry::new()).unwrap_err();
    assert!(matches!(err, Error::MissingDeployment("namespace")));
}

#[test]
fn test_tag_name_that_is_not_an_xml_name_is_rejected() {
    let config = DeploymentConfig {
        submission_node_name: "my submission".to_string(),
        ..Default::default()
    };
    let err = Deployment::new(config, PluginRegistry::new()).unwrap_err();
    assert!(matches!(err, Error::InvalidDeployment("submission_node_name")));
}

#[test]
fn test_custom_tag_names() {
    let config = DeploymentConfig {
        namespace: "urn:example:native".to_string(),
        submission_node_name: "article".to_string(),
        submissions_node_name: "articles".to_string(),
        schema_filename: "native.xsd".to_string(),
        context_id: 0,
    };
    let serializer =
        SubmissionSerializer::new(Deployment::new(config, PluginRegistry::new()).unwrap());
    let doc = serializer
        .serialize(&[Submission::new(1, "en"), Submission::new(2, "en")])
        .unwrap();

    assert_eq!(doc.root.name, "articles");
    assert_eq!(names(&doc.root), ["article", "article"]);
    assert_eq!(
        doc.root.attribute("xsi:schemaLocation"),
        Some("urn:example:native native.xsd")
    );
}
