//! Search term handling and local search over the node map.
//!
//! The bookmark page normally delegates searching to the backing service and
//! receives finished result lists. [`search_nodes`] provides the same result
//! shape locally for hosts without a search service.

use crate::domain::{NodeMap, ROOT_NODE_ID};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Returns the term to search for, or `None` when the term means "no search".
///
/// Empty terms never start a search.
#[must_use]
pub fn effective_term(term: Option<&str>) -> Option<&str> {
    term.filter(|t| !t.is_empty())
}

/// Finds nodes whose title or url fuzzily matches every token of `term`.
///
/// Tokens are whitespace separated and matched case-insensitively. Results are
/// ordered by combined match score (best first), then by id. The root node is
/// never returned.
///
/// # Examples
///
/// ```
/// use bookmark_store::app::search::search_nodes;
/// use bookmark_store::domain::normalize_tree;
/// use bookmark_store::TreeNode;
///
/// let nodes = normalize_tree(&TreeNode::folder("0", "", vec![
///     TreeNode::bookmark("1", "Rust Book", "https://doc.rust-lang.org/book"),
///     TreeNode::bookmark("2", "Cooking", "https://food.example"),
/// ]));
///
/// assert_eq!(search_nodes(&nodes, "rust book"), vec!["1"]);
/// ```
#[must_use]
pub fn search_nodes(nodes: &NodeMap, term: &str) -> Vec<String> {
    let _span = tracing::debug_span!("search_nodes",
        node_count = nodes.len(),
        term_len = term.len()
    )
    .entered();

    let tokens: Vec<String> = term.split_whitespace().map(str::to_lowercase).collect();
    if tokens.is_empty() {
        return vec![];
    }

    let matcher = SkimMatcherV2::default();

    let mut scored: Vec<(i64, &str)> = nodes
        .values()
        .filter(|node| node.id != ROOT_NODE_ID)
        .filter_map(|node| {
            let haystack = node.url.as_ref().map_or_else(
                || node.title.to_lowercase(),
                |url| format!("{} {}", node.title, url).to_lowercase(),
            );

            tokens
                .iter()
                .map(|token| matcher.fuzzy_match(&haystack, token))
                .sum::<Option<i64>>()
                .map(|score| (score, node.id.as_str()))
        })
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(b.1)));

    tracing::debug!(result_count = scored.len(), "local search finished");

    scored.into_iter().map(|(_, id)| id.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{normalize_tree, TreeNode};

    fn nodes() -> NodeMap {
        normalize_tree(&TreeNode::folder(
            ROOT_NODE_ID,
            "",
            vec![
                TreeNode::folder("1", "Recipes", vec![
                    TreeNode::bookmark("3", "Bread", "https://bake.example"),
                ]),
                TreeNode::bookmark("2", "Tokio docs", "https://docs.rs/tokio"),
            ],
        ))
    }

    #[test]
    fn test_effective_term() {
        assert_eq!(effective_term(None), None);
        assert_eq!(effective_term(Some("")), None);
        assert_eq!(effective_term(Some("foo")), Some("foo"));
    }

    #[test]
    fn test_search_matches_title_and_url() {
        let nodes = nodes();
        assert_eq!(search_nodes(&nodes, "bread"), vec!["3"]);
        assert_eq!(search_nodes(&nodes, "docs.rs"), vec!["2"]);
    }

    #[test]
    fn test_search_is_case_insensitive_and_includes_folders() {
        let nodes = nodes();
        assert_eq!(search_nodes(&nodes, "RECIPES"), vec!["1"]);
    }

    #[test]
    fn test_all_tokens_must_match() {
        let nodes = nodes();
        assert_eq!(search_nodes(&nodes, "tokio docs"), vec!["2"]);
        assert!(search_nodes(&nodes, "tokio bread").is_empty());
    }

    #[test]
    fn test_blank_term_finds_nothing() {
        assert!(search_nodes(&nodes(), "   ").is_empty());
    }
}
