use super::*;

fn run(schema: Schema, text: &str) -> Vec<String> {
    let file = DataFile::from_text("x.json", "css", text);
    SchemaCheck::new(schema).check(&file).unwrap()
}

fn has_problem_at(problems: &[String], path: &str) -> bool {
    problems.iter().any(|p| p.starts_with(&format!("{path}: ")))
}

#[test]
fn valid_compat_document_passes() {
    let problems = run(
        Schema::Compat,
        r#"{"css": {"properties": {"color": {"__compat": {
            "mdn_url": "https://developer.mozilla.org/docs/Web/CSS/color",
            "spec_url": ["https://drafts.csswg.org/css-color/#the-color-property"],
            "support": {
                "chrome": {"version_added": "1"},
                "firefox": [
                    {"version_added": "3", "notes": "x"},
                    {"version_added": "1", "prefix": "-moz-"},
                    {"version_added": "2", "flags": [
                        {"type": "preference", "name": "layout.css.color", "value_to_set": "true"}
                    ]}
                ]
            },
            "status": {"experimental": false, "standard_track": true, "deprecated": false}
        }}}}}"#,
    );
    assert!(problems.is_empty(), "{problems:?}");
}

#[test]
fn missing_support_is_reported() {
    let problems = run(Schema::Compat, r#"{"css": {"a": {"__compat": {}}}}"#);
    assert_eq!(problems.len(), 1, "{problems:?}");
    assert!(has_problem_at(&problems, "css.a.__compat"));
    assert!(problems[0].contains("support"));
}

#[test]
fn unknown_properties_are_reported() {
    let problems = run(
        Schema::Compat,
        r#"{"css": {"a": {"__compat": {"support": {"chrome": {"version_added": "1", "colour": 1}}, "bogus": 1}}}}"#,
    );
    assert!(has_problem_at(&problems, "css.a.__compat"), "{problems:?}");
    assert!(has_problem_at(&problems, "css.a.__compat.support.chrome"), "{problems:?}");
    assert!(problems.iter().any(|p| p.contains("bogus")));
    assert!(problems.iter().any(|p| p.contains("colour")));
}

#[test]
fn unknown_meta_property_is_reported() {
    let problems = run(Schema::Compat, r#"{"css": {"a": {"__meta": {}}}}"#);
    assert!(
        problems
            .iter()
            .any(|p| p.starts_with("css.a") && p.contains("__meta")),
        "{problems:?}"
    );
}

#[test]
fn statement_requires_version_added() {
    let problems = run(
        Schema::Compat,
        r#"{"api": {"A": {"__compat": {"support": {"chrome": [{"version_removed": "3"}]}}}}}"#,
    );
    assert!(has_problem_at(&problems, "api.A.__compat.support.chrome.0"), "{problems:?}");
    assert!(problems.iter().any(|p| p.contains("version_added")));
}

#[test]
fn empty_statement_array_is_reported() {
    let problems = run(
        Schema::Compat,
        r#"{"api": {"A": {"__compat": {"support": {"chrome": []}}}}}"#,
    );
    assert_eq!(problems.len(), 1, "{problems:?}");
    assert!(has_problem_at(&problems, "api.A.__compat.support.chrome"));
}

#[test]
fn flag_entries_are_validated() {
    let problems = run(
        Schema::Compat,
        r#"{"api": {"A": {"__compat": {"support": {"chrome": {
            "version_added": "1", "flags": [42, {"bogus": 1}]
        }}}}}}"#,
    );
    assert!(has_problem_at(&problems, "api.A.__compat.support.chrome.flags.0"), "{problems:?}");
    assert!(has_problem_at(&problems, "api.A.__compat.support.chrome.flags.1"), "{problems:?}");
}

#[test]
fn non_object_root_is_reported() {
    let problems = run(Schema::Compat, "[1, 2]");
    assert!(has_problem_at(&problems, "document"), "{problems:?}");
}

#[test]
fn malformed_json_throws() {
    let file = DataFile::from_text("x.json", "css", "{");
    assert!(SchemaCheck::new(Schema::Compat).check(&file).is_err());
}

#[test]
fn valid_browser_document_passes() {
    let problems = run(
        Schema::Browsers,
        r#"{"browsers": {"firefox": {"name": "Firefox", "type": "desktop",
            "accepts_flags": true, "accepts_webextensions": true, "releases": {
            "1": {"release_date": "2004-11-09", "status": "retired"},
            "130": {"status": "current", "engine": "Gecko", "engine_version": "130"}
        }}}}"#,
    );
    assert!(problems.is_empty(), "{problems:?}");
}

#[test]
fn browser_schema_rejects_compat_shape() {
    let problems = run(
        Schema::Browsers,
        r#"{"css": {"a": {"__compat": {"support": {}}}}}"#,
    );
    assert!(has_problem_at(&problems, "document"), "{problems:?}");
    assert!(problems.iter().any(|p| p.contains("browsers")));
}

#[test]
fn browser_field_types_are_validated() {
    let problems = run(
        Schema::Browsers,
        r#"{"browsers": {"x": {"name": "X", "type": "desktop",
            "accepts_flags": "yes", "upstream": 7, "releases": {
            "1": {"status": "retired", "engine": 12}
        }}}}"#,
    );
    assert!(has_problem_at(&problems, "browsers.x.accepts_flags"), "{problems:?}");
    assert!(has_problem_at(&problems, "browsers.x.upstream"), "{problems:?}");
    assert!(has_problem_at(&problems, "browsers.x.releases.1.engine"), "{problems:?}");
}

#[test]
fn browser_release_rules() {
    let problems = run(
        Schema::Browsers,
        r#"{"browsers": {"x": {"name": "X", "type": "toaster", "releases": {
            "1": {"release_date": "09/11/2004", "status": "gone"}
        }}}}"#,
    );
    assert!(has_problem_at(&problems, "browsers.x.type"), "{problems:?}");
    assert!(has_problem_at(&problems, "browsers.x.releases.1.status"), "{problems:?}");
    assert!(has_problem_at(&problems, "browsers.x.releases.1.release_date"), "{problems:?}");
}

#[test]
fn json_pointer_tokens_are_unescaped() {
    assert_eq!(dotted_path(""), "document");
    assert_eq!(dotted_path("/css/a~1b/c~0d"), "css.a/b.c~d");
}
