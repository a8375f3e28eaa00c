mod helpers;

use frogmemo::application::{unique_tags, MemoFilter};
use frogmemo::domain::SearchScope;
use helpers::{alpha_beta, block};

#[test]
fn given_select_term_in_content_scope_when_filtering_then_returns_alpha_only() {
    // Arrange
    let blocks = alpha_beta();
    let filter = MemoFilter::new("all", "select", SearchScope::Content);

    // Act
    let result = filter.apply(&blocks);

    // Assert
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].title, "Alpha");
}

#[test]
fn given_search_term_when_filtering_then_active_tag_has_no_effect() {
    // Arrange
    let blocks = alpha_beta();

    // Act
    let results: Vec<Vec<String>> = ["all", "work", "personal", "missing"]
        .iter()
        .map(|tag| {
            MemoFilter::new(*tag, "e", SearchScope::All)
                .apply(&blocks)
                .iter()
                .map(|b| b.id.clone())
                .collect()
        })
        .collect();

    // Assert
    assert!(results.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn given_filtered_result_when_comparing_to_input_then_is_ordered_subsequence() {
    // Arrange
    let blocks = vec![
        block("1", "one", "", &["a"]),
        block("2", "two", "", &["b"]),
        block("3", "three", "", &["a"]),
        block("4", "four", "", &["a", "b"]),
    ];

    // Act
    let result = MemoFilter::by_tag("a").apply(&blocks);

    // Assert
    let ids: Vec<&str> = result.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3", "4"]);
}

#[test]
fn given_unknown_tag_when_filtering_then_returns_nothing() {
    let blocks = alpha_beta();

    assert!(MemoFilter::by_tag("archive").apply(&blocks).is_empty());
}

#[test]
fn given_title_scope_when_term_only_in_content_then_no_match() {
    let blocks = alpha_beta();

    let result = MemoFilter::by_search("select", SearchScope::Title).apply(&blocks);

    assert!(result.is_empty());
}

#[test]
fn given_blocks_when_collecting_tags_then_sorted_union() {
    assert_eq!(unique_tags(&alpha_beta()), vec!["personal", "work"]);
}

#[test]
fn given_filtered_result_when_filtering_again_then_unchanged() {
    // Arrange
    let blocks = vec![
        block("1", "Alpha", "SELECT * FROM t", &["work"]),
        block("2", "Beta", "let x=1", &["personal"]),
        block("3", "Gamma", "select later", &["work"]),
    ];
    let filters = [
        MemoFilter::by_tag("work"),
        MemoFilter::by_search("select", SearchScope::Content),
        MemoFilter::new("personal", "a", SearchScope::Title),
    ];

    for filter in filters {
        // Act
        let once: Vec<_> = filter.apply(&blocks).into_iter().cloned().collect();
        let twice: Vec<_> = filter.apply(&once).into_iter().cloned().collect();

        // Assert
        assert_eq!(once, twice);
    }
}
