use sift_query::{DefaultCut, QueryBuilder};

fn vals(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

#[test]
fn lookups_are_case_insensitive() {
    let mut qb = QueryBuilder::new();
    qb.add("Foo", "1");
    let q = qb.build(None);
    assert_eq!(q.get("foo"), Some(&vals(&["1"])[..]));
    assert_eq!(q.get("FOO"), Some(&vals(&["1"])[..]));
    assert!(q.has("fOo"));
    assert!(!q.has("bar"));
    assert_eq!(q.get("bar"), None);
}

#[test]
fn add_splits_unquoted_values() {
    let mut qb = QueryBuilder::new();
    qb.add("tag", "a,b").add("tag", ",,c,").add("tag", "b");
    let q = qb.build(None);
    assert_eq!(q.get("tag"), Some(&vals(&["a", "b", "c", "b"])[..]));
}

#[test]
fn add_strips_every_quote_from_quoted_values() {
    let mut qb = QueryBuilder::new();
    qb.add("a", r#""x, "y" z""#).add("b", "'it''s'").add("c", r#"'say "hi"'"#);
    let q = qb.build(None);
    assert_eq!(q.get_one("a"), "x, y z");
    assert_eq!(q.get_one("b"), "its");
    assert_eq!(q.get_one("c"), r#"say "hi""#);
}

#[test]
fn add_collapses_spaces_first() {
    let mut qb = QueryBuilder::new();
    qb.add("a", "x   y,  z");
    let q = qb.build(None);
    assert_eq!(q.get("a"), Some(&vals(&["x y", " z"])[..]));
}

#[test]
fn add_without_values_still_creates_name() {
    let mut qb = QueryBuilder::new();
    qb.add("Empty", "").add("commas", ",,,");
    let q = qb.build(None);
    assert_eq!(q.get("empty"), Some(&[][..]));
    assert_eq!(q.get("commas"), Some(&[][..]));
    assert_eq!(q.get_one("empty"), "");
}

#[test]
fn get_one_returns_last_value() {
    let mut qb = QueryBuilder::new();
    qb.add("site", "a.com").add("site", "b.com");
    let q = qb.build(None);
    assert_eq!(q.get_one("site"), "b.com");
    assert_eq!(q.get_one("missing"), "");
}

#[test]
fn add_leaves_other_names_alone() {
    let mut qb = QueryBuilder::new();
    qb.add("a", "1,2").add("b", "3").add("a", "4");
    let q = qb.build(None);
    assert_eq!(q.get("a"), Some(&vals(&["1", "2", "4"])[..]));
    assert_eq!(q.get("b"), Some(&vals(&["3"])[..]));
}

#[test]
fn build_normalizes_raw_text() {
    let mut qb = QueryBuilder::new();
    qb.push_raw("  hello ").push_raw("  wor$ld  ");
    assert_eq!(qb.build(Some(&DefaultCut)).raw(), "hello world");

    let mut qb = QueryBuilder::new();
    qb.push_raw(" wor$ld ");
    assert_eq!(qb.build(None).raw(), "wor$ld");
}

#[test]
fn display_is_sorted_canonical_form() {
    let mut qb = QueryBuilder::new();
    qb.add("tag", "b,a").add("author", r#""jane doe""#).push_raw("hello  world");
    let q = qb.build(None);
    assert_eq!(q.to_string(), r#"author:"jane doe" tag:"a" tag:"b" hello world"#);
    // display does not reorder the stored values
    assert_eq!(q.get("tag"), Some(&vals(&["b", "a"])[..]));
}

#[test]
fn display_of_empty_query_is_empty() {
    let q = QueryBuilder::new().build(None);
    assert_eq!(q.to_string(), "");
    assert!(q.is_empty());

    let mut qb = QueryBuilder::new();
    qb.push_raw("just text");
    assert_eq!(qb.build(None).to_string(), "just text");
}

#[test]
fn raw_only_query_has_no_filters_but_is_not_empty() {
    let mut qb = QueryBuilder::new();
    qb.push_raw("text");
    let q = qb.build(None);
    assert_eq!(q.filter_count(), 0);
    assert!(!q.is_empty());

    let mut qb = QueryBuilder::new();
    qb.add("tag", "");
    let q = qb.build(None);
    assert_eq!(q.filter_count(), 1);
    assert!(!q.is_empty());
}

#[test]
fn parsed_display_reparses_to_same_filters() {
    let q = sift_query::parse(r#"rust tag:a,b author:"jane doe""#);
    let again = sift_query::parse(&q.to_string());
    assert_eq!(again.get("author"), q.get("author"));
    assert_eq!(again.get("tag"), q.get("tag"));
    assert_eq!(again.raw(), q.raw());
}

#[test]
fn results_are_shareable_across_threads() {
    let q = std::sync::Arc::new(sift_query::parse("tag:x y"));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let q = q.clone();
            std::thread::spawn(move || q.get_one("tag").to_string())
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), "x");
    }
}

#[cfg(feature = "json")]
#[test]
fn serializes_as_json() {
    let q = sift_query::parse("hello tag:a,b");
    let v = serde_json::to_value(&q).unwrap();
    assert_eq!(v, serde_json::json!({ "raw": "hello", "filters": { "tag": ["a", "b"] } }));
}
