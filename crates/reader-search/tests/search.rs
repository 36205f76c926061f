//! Search behaviour against the sample collection.

use reader_model::{ArticleCatalog, ArticleId, StarredSet};
use reader_search::{QueryMatcher, Segment, filter_and_sort, highlight};

fn marked(segments: &[Segment<'_>]) -> String {
    segments
        .iter()
        .map(|s| {
            if s.is_match() {
                format!("[{}]", s.text)
            } else {
                s.text.to_string()
            }
        })
        .collect()
}

fn visible_ids(query: &str, starred_only: bool, starred: &StarredSet) -> Vec<i64> {
    let catalog = ArticleCatalog::sample();
    let matcher = QueryMatcher::compile(query).unwrap();
    filter_and_sort(catalog.articles(), matcher.as_ref(), starred_only, starred)
        .iter()
        .map(|a| a.id.get())
        .collect()
}

#[test]
fn single_word_query_selects_one_article() {
    assert_eq!(visible_ids("artificial", false, &StarredSet::new()), vec![1]);
}

#[test]
fn short_token_matches_inside_words() {
    // "ai" also occurs in "Sustainable", "remain" and "training".
    assert_eq!(visible_ids("AI", false, &StarredSet::new()), vec![1, 2, 3, 5]);
}

#[test]
fn multiple_tokens_are_alternatives() {
    assert_eq!(
        visible_ids("solar cybersecurity", false, &StarredSet::new()),
        vec![2, 5]
    );
}

#[test]
fn no_match_yields_empty_list() {
    assert!(visible_ids("xyz123", false, &StarredSet::new()).is_empty());
}

#[test]
fn starred_energy_article_alone_in_starred_only() {
    let starred = StarredSet::new().toggled(ArticleId(2));
    assert_eq!(visible_ids("", true, &starred), vec![2]);
    assert_eq!(visible_ids("", false, &starred), vec![2, 1, 3, 4, 5]);

    let unstarred = starred.toggled(ArticleId(2));
    assert_eq!(visible_ids("", false, &unstarred), vec![1, 2, 3, 4, 5]);
}

#[test]
fn highlight_ai_in_content() {
    let catalog = ArticleCatalog::sample();
    let matcher = QueryMatcher::compile("AI").unwrap();
    let article = catalog.get(ArticleId(1)).unwrap();

    insta::assert_snapshot!(
        marked(&highlight(&article.content, matcher.as_ref())),
        @"Artificial intelligence is transforming industries across the globe. From healthcare to finance, [AI] is making processes more efficient and creating new opportunities for innovation."
    );
}

#[test]
fn highlight_multiple_tokens_in_title() {
    let catalog = ArticleCatalog::sample();
    let matcher = QueryMatcher::compile("machine HEALTH").unwrap();
    let article = catalog.get(ArticleId(4)).unwrap();

    insta::assert_snapshot!(
        marked(&highlight(&article.title, matcher.as_ref())),
        @"[Machine] Learning in [Health]care"
    );
}
