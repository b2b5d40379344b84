#![allow(non_snake_case)]

use super::*;

#[test]
fn LibraryReference___parse___three_segments() {
    let lib = LibraryReference::parse("org.foo:bar:1.0").unwrap();

    assert_eq!(lib.group, "org.foo");
    assert_eq!(lib.name, "bar");
    assert_eq!(lib.version, "1.0");
    assert_eq!(lib.classifier, None);
    assert_eq!(lib.url, None);
}

#[test]
fn LibraryReference___parse___empty_classifier_with_url() {
    let lib = LibraryReference::parse("org.foo:bar:1.0::http://x.com/a.jar").unwrap();

    assert_eq!(lib.classifier, None);
    assert_eq!(lib.url.as_deref(), Some("http://x.com/a.jar"));
}

#[test]
fn LibraryReference___parse___classifier_only() {
    let lib = LibraryReference::parse("org.foo:bar:1.0:api").unwrap();

    assert_eq!(lib.classifier.as_deref(), Some("api"));
    assert_eq!(lib.url, None);
}

#[test]
fn LibraryReference___parse___url_keeps_its_colons() {
    let lib = LibraryReference::parse("net.x:y:2:natives:https://host:8080/p/y.jar").unwrap();

    assert_eq!(lib.classifier.as_deref(), Some("natives"));
    assert_eq!(lib.url.as_deref(), Some("https://host:8080/p/y.jar"));
}

#[test]
fn LibraryReference___parse___empty_url_segment_is_kept() {
    let lib = LibraryReference::parse("org.foo:bar:1.0:api:").unwrap();

    assert_eq!(lib.url.as_deref(), Some(""));
}

#[test]
fn LibraryReference___parse___two_segments_is_malformed() {
    let err = LibraryReference::parse("org.foo:bar").unwrap_err();

    assert!(matches!(
        err,
        PackError::MalformedCoordinate { ref line } if line == "org.foo:bar"
    ));
}

#[test]
fn LibraryReference___parse___empty_line_is_malformed() {
    assert!(LibraryReference::parse("").is_err());
}

#[test]
fn LibraryReference___parse___empty_version_is_malformed() {
    assert!(LibraryReference::parse("org.foo:bar:").is_err());
}

#[test]
fn LibraryReference___from_str___delegates_to_parse() {
    let lib: LibraryReference = "a:b:c".parse().unwrap();

    assert_eq!(lib.name, "b");
}

#[test]
fn LibraryReference___display___includes_classifier_not_url() {
    let lib = LibraryReference::parse("org.foo:bar:1.0:api:http://x").unwrap();

    assert_eq!(lib.to_string(), "org.foo:bar:1.0:api");
}

#[test]
fn LibraryReference___parse_list___preserves_line_order() {
    let libs = LibraryReference::parse_list("a:one:1\n  b:two:2  \nc:three:3\n").unwrap();

    let names: Vec<_> = libs.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, ["one", "two", "three"]);
}

#[test]
fn LibraryReference___parse_list___blank_line_fails() {
    let err = LibraryReference::parse_list("a:one:1\n\nb:two:2\n").unwrap_err();

    assert!(matches!(err, PackError::MalformedCoordinate { .. }));
}

#[test]
fn LibraryReference___parse_list___empty_content_is_empty_list() {
    assert!(LibraryReference::parse_list("").unwrap().is_empty());
}
