use exproute_rs::{MergeError, Route, Trie};
use std::sync::Arc;

fn trie(pattern: &str, location: &'static str) -> Trie<&'static str> {
    Trie::parse(pattern, location).expect("pattern should parse")
}

fn location_of(trie: &Trie<&'static str>, path: &str) -> Option<&'static str> {
    trie.find(path).map(|m| **m.location)
}

#[test]
fn merge_when_one_route_prefixes_another_then_both_resolve() {
    let merged = trie("/a", "d1")
        .merge(&trie("/ab", "d2"))
        .expect("prefix routes should merge");

    assert_eq!(location_of(&merged, "/a"), Some("d1"));
    assert_eq!(location_of(&merged, "/ab"), Some("d2"));
    assert_eq!(location_of(&merged, "/abc"), None);
    assert_eq!(merged.len(), 2);
}

#[test]
fn merge_when_longer_route_comes_first_then_both_resolve() {
    let merged = trie("/ab", "d2")
        .merge(&trie("/a", "d1"))
        .expect("prefix routes should merge in either order");

    assert_eq!(location_of(&merged, "/a"), Some("d1"));
    assert_eq!(location_of(&merged, "/ab"), Some("d2"));
}

#[test]
fn merge_when_same_pattern_registered_twice_then_returns_duplicate_leaf() {
    let err = trie("/a", "d1")
        .merge(&trie("/a", "d2"))
        .expect_err("identical patterns must conflict");

    match &err {
        MergeError::DuplicateLeaf { left, right } => {
            assert_eq!(left, "leaf(a)");
            assert_eq!(right, "leaf(a)");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.is_conflict());
}

#[test]
fn merge_when_same_pattern_and_same_destination_then_still_conflicts() {
    let err = trie("/users/<id>", "users")
        .merge(&trie("/users/<id>", "users"))
        .expect_err("duplicate registration is a configuration error");

    assert!(matches!(err, MergeError::DuplicateLeaf { .. }));
}

#[test]
fn merge_when_matcher_registered_before_literal_then_matcher_wins() {
    let merged = trie("/<x>", "capture")
        .merge(&trie("/abc", "literal"))
        .expect("routes should merge");

    assert_eq!(location_of(&merged, "/abc"), Some("capture"));
    assert_eq!(location_of(&merged, "/abd"), Some("capture"));
}

#[test]
fn merge_when_literal_registered_before_matcher_then_literal_wins() {
    let merged = trie("/abc", "literal")
        .merge(&trie("/<x>", "capture"))
        .expect("routes should merge");

    assert_eq!(location_of(&merged, "/abc"), Some("literal"));
    assert_eq!(location_of(&merged, "/abd"), Some("capture"));
}

#[test]
fn merge_when_first_branch_fails_then_next_sibling_is_tried() {
    let merged = trie("/<x>/edit", "edit")
        .merge(&trie("/abc", "literal"))
        .expect("routes should merge");

    assert_eq!(location_of(&merged, "/abc"), Some("literal"));
    assert_eq!(location_of(&merged, "/abc/edit"), Some("edit"));

    let found = merged.find("/abc").expect("literal route should match");
    assert!(found.params.is_empty(), "captures from failed branch leak");
}

#[test]
fn merge_when_equal_matchers_then_siblings_are_folded() {
    let merged = trie("/users/<id>", "user")
        .merge(&trie("/users/<id>/posts", "posts"))
        .expect("routes should merge");

    let slash = &merged.root().children()[0];
    let mut node = &**slash;
    for _ in 0.."users/".len() {
        assert_eq!(node.children().len(), 1);
        node = &*node.children()[0];
    }
    assert_eq!(node.children().len(), 1, "matcher nodes should fold");
    assert_eq!(location_of(&merged, "/users/7"), Some("user"));
    assert_eq!(location_of(&merged, "/users/7/posts"), Some("posts"));
}

#[test]
fn merge_when_matchers_differ_by_name_then_both_kept_in_order() {
    let merged = trie("/<a>/x", "a")
        .merge(&trie("/<b>/y", "b"))
        .expect("routes should merge");

    assert_eq!(merged.root().children()[0].children().len(), 2);
    assert_eq!(location_of(&merged, "/q/x"), Some("a"));
    assert_eq!(location_of(&merged, "/q/y"), Some("b"));
}

#[test]
fn merge_when_leaf_already_has_children_then_all_routes_survive() {
    let merged = trie("/a", "a")
        .merge(&trie("/ab", "ab"))
        .and_then(|t| t.merge(&trie("/ac", "ac")))
        .and_then(|t| t.merge(&trie("/<x>", "x")))
        .expect("routes should merge");

    assert_eq!(location_of(&merged, "/a"), Some("a"));
    assert_eq!(location_of(&merged, "/ab"), Some("ab"));
    assert_eq!(location_of(&merged, "/ac"), Some("ac"));
    assert_eq!(location_of(&merged, "/zz"), Some("x"));
    assert_eq!(merged.len(), 4);
}

#[test]
fn merge_when_it_fails_then_inputs_are_untouched() {
    let left = trie("/a", "d1").merge(&trie("/b", "d2")).expect("should merge");
    let right = trie("/b", "d3");

    let err = left.merge(&right).expect_err("duplicate /b must fail");
    assert!(matches!(err, MergeError::DuplicateLeaf { .. }));

    assert_eq!(location_of(&left, "/a"), Some("d1"));
    assert_eq!(location_of(&left, "/b"), Some("d2"));
    assert_eq!(location_of(&right, "/b"), Some("d3"));
}

#[test]
fn merge_when_subtree_has_no_counterpart_then_it_is_shared() {
    let left = trie("/x/abc", "x");
    let right = trie("/y", "y");
    let merged = left.merge(&right).expect("should merge");

    let merged_slash = &merged.root().children()[0];
    let left_slash = &left.root().children()[0];
    let right_slash = &right.root().children()[0];

    assert!(Arc::ptr_eq(
        &merged_slash.children()[0],
        &left_slash.children()[0]
    ));
    assert!(Arc::ptr_eq(
        &merged_slash.children()[1],
        &right_slash.children()[0]
    ));
    assert!(!merged.ptr_eq(&left));
}

#[test]
fn merge_when_operand_is_not_a_trie_then_returns_type_mismatch() {
    let path = Route::path("/a", "a").expect("pattern should parse");
    let regex = Route::regex("/b.*", "b").expect("regex should compile");

    assert!(!path.can_merge(&regex));
    assert!(!regex.can_merge(&path));

    let err = path.merge(&regex).expect_err("trie and regex must not merge");
    assert_eq!(
        err,
        MergeError::TypeMismatch {
            left: "trie",
            right: "regex"
        }
    );
    assert!(!err.is_conflict());
}

#[test]
fn merge_when_both_operands_are_tries_then_route_merge_succeeds() {
    let left = Route::path("/a", "a").expect("pattern should parse");
    let right = Route::path("/b", "b").expect("pattern should parse");

    assert!(left.can_merge(&right));
    let merged = left.merge(&right).expect("tries should merge");
    let trie = merged.as_trie().expect("merge of tries is a trie");
    assert_eq!(location_of(trie, "/b"), Some("b"));
}

#[test]
fn merge_when_patterns_have_maximum_length_then_default_thread_stack_suffices() {
    // std::thread::spawn uses the default 2 MiB stack
    let handle = std::thread::spawn(|| {
        let long_a = format!("/{}", "a".repeat(4095));
        let long_b = format!("/{}b", "a".repeat(4094));
        assert_eq!(long_a.len(), 4096);
        assert_eq!(long_b.len(), 4096);

        let merged = trie(&long_a, "a")
            .merge(&trie(&long_b, "b"))
            .expect("long patterns should merge");

        assert_eq!(merged.len(), 2);
        assert_eq!(merged.depth(), 4096);
        assert_eq!(location_of(&merged, &long_a), Some("a"));
        assert_eq!(location_of(&merged, &long_b), Some("b"));
        assert_eq!(location_of(&merged, &long_a[..4095]), None);
        assert_eq!(merged.to_string().lines().count(), 4096 + 2);

        let err = merged
            .merge(&trie(&long_b, "again"))
            .expect_err("duplicate at full depth must conflict");
        assert!(err.is_conflict());
    });
    handle.join().expect("merge thread should not overflow its stack");
}
