//! End-to-end and property tests for indexing and search.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use orgtree_index::{
    DEFAULT_LIMIT, EntryKind, MatchField, SearchParams, Session, Snapshot, build_index, search,
};
use orgtree_roster::load_roster;
use proptest::prelude::*;

/// Header with two org levels.
const HEADER: &str = "部コード,部名,課コード,課名,職員番号,氏名,役職コード,役職";

/// Two sections under one department.
fn general_affairs() -> String {
    format!(
        "{HEADER}\n\
         10,総務部,11,人事課,1001,山田太郎,200,課長\n\
         10,総務部,12,庶務課,1002,佐藤花子,300,主事\n"
    )
}

#[test]
fn end_to_end_exact_department_name() {
    let mut session = Session::default();
    session.load_csv(&general_affairs()).unwrap();

    let tree = session.tree().unwrap();
    let dept = tree.units().next().unwrap();
    assert_eq!(tree.children.len(), 1);
    assert_eq!(dept.total_members, 2);
    assert_eq!(dept.children.len(), 2);

    let hits = session.search("総務部", &SearchParams::default());
    assert_eq!(hits[0].entry.kind, EntryKind::Org);
    assert_eq!(hits[0].entry.org_name, "総務部");
    assert_eq!(hits[0].score, 100);
    assert_eq!(hits[0].field, MatchField::OrgName);
}

#[test]
fn end_to_end_partial_department_name() {
    let mut session = Session::default();
    session.load_csv(&general_affairs()).unwrap();

    let hits = session.search("総務", &SearchParams::default());
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].entry.org_name, "総務部");
    assert_eq!(hits[0].score, 50);
    assert_eq!(hits[0].entry.path_text(), "総務部");
}

#[test]
fn member_hits_carry_path() {
    let mut session = Session::default();
    session.load_csv(&general_affairs()).unwrap();

    let hits = session.search("佐藤花子", &SearchParams::default());
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].score, 100);
    assert_eq!(hits[0].entry.path_text(), "総務部 > 庶務課");
    let member = hits[0].entry.member.as_ref().unwrap();
    assert_eq!(member.employee_number, "1002");
}

#[test]
fn dropped_rows_are_not_searchable() {
    let csv = format!("{}\n,人事課,11,人事課,1003,高橋,300,主事", general_affairs().trim_end());
    let mut session = Session::default();
    let report = *session.load_csv(&csv).unwrap();
    assert_eq!(report.dropped, 1);
    assert!(session.search("高橋", &SearchParams::default()).is_empty());
}

#[test]
fn snapshot_json_restores_search() {
    let mut session = Session::default();
    session.load_csv(&general_affairs()).unwrap();
    let json = session.snapshot().unwrap().to_json().unwrap();

    let mut restored = Session::default();
    restored.restore(Snapshot::from_json(&json).unwrap());
    let hits = restored.search("課長", &SearchParams::default());
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].match_text, "課長");
    assert_eq!(hits[0].score, 80);
}

/// Renders `count` members under one department, all titled 主任.
fn staff(count: usize) -> String {
    let mut csv = String::from(HEADER);
    for i in 0..count {
        csv.push_str(&format!("\n10,総務部,,,{i},職員{i},300,主任"));
    }
    csv
}

proptest! {
    #[test]
    fn prop_hits_are_bounded_and_ordered(count in 0usize..40, limit in 1usize..20) {
        let tree = load_roster(&staff(count)).unwrap().tree;
        let index = build_index(&tree);
        let hits = search(&index, "職員", &SearchParams::with_limit(limit));
        prop_assert_eq!(hits.len(), count.min(limit));
        prop_assert!(hits.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn prop_ties_keep_index_order(count in 0usize..40) {
        let tree = load_roster(&staff(count)).unwrap().tree;
        let index = build_index(&tree);
        let hits = search(&index, "主任", &SearchParams::default());
        let numbers: Vec<usize> = hits
            .iter()
            .map(|h| h.entry.member.as_ref().unwrap().employee_number.parse().unwrap())
            .collect();
        let expected: Vec<usize> = (0..count.min(DEFAULT_LIMIT)).collect();
        prop_assert_eq!(numbers, expected);
    }

    #[test]
    fn prop_match_text_contains_query(query in "[0-9職員]{1,3}", count in 1usize..30) {
        let tree = load_roster(&staff(count)).unwrap().tree;
        let index = build_index(&tree);
        for hit in search(&index, &query, &SearchParams::with_limit(usize::MAX)) {
            prop_assert!(hit.match_text.to_lowercase().contains(&query));
            let (exact, substring) = hit.field.weights();
            prop_assert!(hit.score == exact || hit.score == substring);
        }
    }
}
