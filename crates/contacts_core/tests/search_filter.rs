use contacts_core::{filter_by_name, Contact};

fn contact(id: i64, name: &str) -> Contact {
    Contact {
        id,
        name: name.to_string(),
        age: "30".to_string(),
        email: format!("c{id}@x.com"),
        phone: "123".to_string(),
    }
}

fn sample() -> Vec<Contact> {
    vec![
        contact(3, "Mariana"),
        contact(1, "Bob"),
        contact(7, "ANA"),
        contact(2, "Roberto"),
    ]
}

#[test]
fn empty_query_returns_input_unchanged() {
    let contacts = sample();
    assert_eq!(filter_by_name(&contacts, ""), contacts);
}

#[test]
fn substring_match_ignores_case_and_keeps_order() {
    let hits = filter_by_name(&sample(), "aN");
    let ids: Vec<i64> = hits.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![3, 7]);
}

#[test]
fn matches_inside_the_name_not_only_prefix() {
    let hits = filter_by_name(&sample(), "ber");
    assert_eq!(hits, vec![contact(2, "Roberto")]);
}

#[test]
fn only_name_is_searched() {
    let hits = filter_by_name(&sample(), "x.com");
    assert!(hits.is_empty());
}

#[test]
fn no_match_yields_empty_result() {
    assert!(filter_by_name(&sample(), "zz").is_empty());
    assert!(filter_by_name(&[], "a").is_empty());
}

#[test]
fn result_is_exactly_the_matching_subsequence() {
    let contacts = sample();
    for query in ["a", "o", "B", "ri", "Mariana"] {
        let expected: Vec<Contact> = contacts
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&query.to_lowercase()))
            .cloned()
            .collect();
        assert_eq!(filter_by_name(&contacts, query), expected, "query={query}");
    }
}
