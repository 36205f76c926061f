//! Visible-list computation: filter by query and starred flag, then float
//! starred articles to the top.

use reader_model::{Article, StarredSet};

use crate::Matcher;

/// Whether `article` passes the query filter.
///
/// Title and content are tested independently; a hit in either is enough.
/// No matcher means every article passes.
pub fn article_matches<M>(article: &Article, matcher: Option<&M>) -> bool
where
    M: Matcher + ?Sized,
{
    matcher.is_none_or(|m| m.is_match(&article.title) || m.is_match(&article.content))
}

/// Compute the ordered visible list.
///
/// 1. Keep articles matching the query (all of them when there is none).
/// 2. With `starred_only`, keep only starred articles.
/// 3. Stable-partition: starred first, then the rest, each group in source order.
///
/// The result is always a sub-sequence of `articles` per group.
pub fn filter_and_sort<'a, M>(
    articles: &'a [Article],
    matcher: Option<&M>,
    starred_only: bool,
    starred: &StarredSet,
) -> Vec<&'a Article>
where
    M: Matcher + ?Sized,
{
    let (mut visible, unstarred): (Vec<&Article>, Vec<&Article>) = articles
        .iter()
        .filter(|article| article_matches(article, matcher))
        .filter(|article| !starred_only || starred.contains(article.id))
        .partition(|article| starred.contains(article.id));

    visible.extend(unstarred);

    tracing::debug!(
        total = articles.len(),
        visible = visible.len(),
        starred_only,
        "Filtered article list"
    );
    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::QueryMatcher;
    use reader_model::{ArticleCatalog, ArticleId};

    fn ids(list: &[&Article]) -> Vec<i64> {
        list.iter().map(|a| a.id.get()).collect()
    }

    fn starred(ids: &[i64]) -> StarredSet {
        ids.iter().copied().map(ArticleId).collect()
    }

    #[test]
    fn test_no_filter_keeps_source_order() {
        let catalog = ArticleCatalog::sample();
        let visible =
            filter_and_sort(catalog.articles(), None::<&QueryMatcher>, false, &StarredSet::new());
        assert_eq!(ids(&visible), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_starred_float_to_top_stably() {
        let catalog = ArticleCatalog::sample();
        let visible =
            filter_and_sort(catalog.articles(), None::<&QueryMatcher>, false, &starred(&[4, 2]));
        assert_eq!(ids(&visible), vec![2, 4, 1, 3, 5]);
    }

    #[test]
    fn test_starred_only() {
        let catalog = ArticleCatalog::sample();
        let visible =
            filter_and_sort(catalog.articles(), None::<&QueryMatcher>, true, &starred(&[5, 2]));
        assert_eq!(ids(&visible), vec![2, 5]);
    }

    #[test]
    fn test_query_matches_title_or_content() {
        let catalog = ArticleCatalog::sample();
        let matcher = QueryMatcher::compile("healthcare").unwrap();
        let visible =
            filter_and_sort(catalog.articles(), matcher.as_ref(), false, &StarredSet::new());
        // Article 1 mentions healthcare in its content, article 4 in its title.
        assert_eq!(ids(&visible), vec![1, 4]);
    }

    #[test]
    fn test_query_and_starred_combine() {
        let catalog = ArticleCatalog::sample();
        let matcher = QueryMatcher::compile("healthcare").unwrap();
        let visible = filter_and_sort(catalog.articles(), matcher.as_ref(), false, &starred(&[4]));
        assert_eq!(ids(&visible), vec![4, 1]);

        let visible = filter_and_sort(catalog.articles(), matcher.as_ref(), true, &starred(&[2]));
        assert!(visible.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let visible = filter_and_sort(&[], None::<&QueryMatcher>, true, &StarredSet::new());
        assert!(visible.is_empty());
    }
}
