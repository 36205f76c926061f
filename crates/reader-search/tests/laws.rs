//! Property tests for matching, highlighting, and ordering.

use proptest::prelude::*;

use reader_model::{Article, ArticleId, StarredSet};
use reader_search::{QueryMatcher, filter_and_sort, highlight};

fn articles_strategy() -> impl Strategy<Value = Vec<Article>> {
    prop::collection::vec(("[a-cA-C ]{0,12}", "[a-cA-C .]{0,24}"), 0..12).prop_map(|fields| {
        fields
            .into_iter()
            .enumerate()
            .map(|(idx, (title, content))| Article::new(idx as i64, title, content))
            .collect()
    })
}

fn tokens_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-cA-C.]{1,3}", 0..4)
}

fn contains_ignore_case(text: &str, token: &str) -> bool {
    text.to_ascii_lowercase()
        .contains(&token.to_ascii_lowercase())
}

proptest! {
    #[test]
    fn query_keeps_exactly_articles_containing_a_token(
        articles in articles_strategy(),
        tokens in tokens_strategy(),
    ) {
        let query = tokens.join(" ");
        let matcher = QueryMatcher::compile(&query).unwrap();
        let visible = filter_and_sort(&articles, matcher.as_ref(), false, &StarredSet::new());

        let expected: Vec<ArticleId> = articles
            .iter()
            .filter(|a| {
                tokens.is_empty()
                    || tokens.iter().any(|t| {
                        contains_ignore_case(&a.title, t) || contains_ignore_case(&a.content, t)
                    })
            })
            .map(|a| a.id)
            .collect();
        let actual: Vec<ArticleId> = visible.iter().map(|a| a.id).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn highlight_segments_concatenate_to_input(
        text in "\\PC{0,40}",
        query in "\\PC{0,10}",
    ) {
        let matcher = QueryMatcher::compile(&query).unwrap();
        let segments = highlight(&text, matcher.as_ref());
        let joined: String = segments.iter().map(|s| s.text).collect();
        prop_assert_eq!(joined, text);
    }

    #[test]
    fn highlighted_segments_are_tokens(
        text in "[a-cA-C .]{0,40}",
        tokens in tokens_strategy(),
    ) {
        let matcher = QueryMatcher::compile(&tokens.join(" ")).unwrap();
        for segment in highlight(&text, matcher.as_ref()) {
            prop_assert!(!segment.text.is_empty() || matcher.is_none());
            if segment.is_match() {
                prop_assert!(tokens.iter().any(|t| t.eq_ignore_ascii_case(segment.text)));
            }
        }
    }

    #[test]
    fn starred_first_and_stable(
        articles in articles_strategy(),
        starred_mask in prop::collection::vec(any::<bool>(), 12),
        starred_only in any::<bool>(),
    ) {
        let starred: StarredSet = articles
            .iter()
            .zip(&starred_mask)
            .filter(|(_, is_starred)| **is_starred)
            .map(|(a, _)| a.id)
            .collect();

        let visible = filter_and_sort(&articles, None::<&QueryMatcher>, starred_only, &starred);

        // Starred block first, then unstarred.
        let first_unstarred = visible
            .iter()
            .position(|a| !starred.contains(a.id))
            .unwrap_or(visible.len());
        prop_assert!(visible[first_unstarred..].iter().all(|a| !starred.contains(a.id)));
        prop_assert!(visible[..first_unstarred].iter().all(|a| starred.contains(a.id)));

        // Each group keeps source order (ids were assigned in source order).
        let (head, tail) = visible.split_at(first_unstarred);
        prop_assert!(head.windows(2).all(|w| w[0].id < w[1].id));
        prop_assert!(tail.windows(2).all(|w| w[0].id < w[1].id));

        // Nothing invented, nothing lost.
        let expected_len = if starred_only { starred.len() } else { articles.len() };
        prop_assert_eq!(visible.len(), expected_len);
    }
}
