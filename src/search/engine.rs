//! Search traversal and result shaping.
//!
//! A pure function of the metadata tree and the query: recursive,
//! order-preserving, with one level of fan-out under matching parents,
//! dedup by group id, and a stable final sort. The engine never touches the
//! registry or any live state — that is what lets it run against a freshly
//! rebuilt tree on every keystroke.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::node::model::{GroupNode, ItemNode, Node, NodeId, Presentation};
use crate::search::normalize::Query;
use crate::search::score::score;

/// Log target for search events.
pub const LOG_TARGET: &str = "prefpane::search";

// ---------------------------------------------------------------------------
// SearchResult / SearchOutcome
// ---------------------------------------------------------------------------

/// One entry in the shaped result list. The surfaced node is always a group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// The matched group.
    pub group: GroupNode,
    /// Child items to show inline under the group. Empty for navigation
    /// results. When a leaf group surfaces, *all* of its items are listed,
    /// not just the ones that matched.
    pub matched_items: Vec<ItemNode>,
    /// Render as a single tappable row (`true`) or as an expanded section
    /// with inline items (`false`).
    pub is_navigation: bool,
    /// The score that surfaced this instance; dedup and sorting operate on
    /// it. Fan-out entries carry the score of the parent that surfaced them.
    pub score: u32,
    /// Traversal position of the group in the tree, used as the stable
    /// tie-break.
    pub order_index: usize,
}

/// Caller-facing search state: distinguishes "nothing typed" from "typed but
/// zero matches".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SearchOutcome {
    /// The query is empty — search is not active.
    Inactive,
    /// A non-empty query matched nothing.
    NoMatches {
        /// The query as typed, for "no results for X" presentation.
        query: String,
    },
    /// Ranked, deduplicated results.
    Matches(Vec<SearchResult>),
}

// ---------------------------------------------------------------------------
// SearchEngine
// ---------------------------------------------------------------------------

/// The replaceable search contract: callers may substitute any algorithm
/// with this signature.
///
/// `query` is never empty — the caller bypasses search entirely for empty
/// queries (see [`search_outcome`]).
pub trait SearchEngine {
    fn search(&self, tree: &[Node], query: &str) -> Vec<SearchResult>;
}

/// Run a search through the outcome wrapper, handling the empty-query case
/// the engine itself never sees.
pub fn search_outcome(engine: &dyn SearchEngine, tree: &[Node], query: &str) -> SearchOutcome {
    if query.is_empty() {
        return SearchOutcome::Inactive;
    }
    let results = engine.search(tree, query);
    if results.is_empty() {
        SearchOutcome::NoMatches {
            query: query.to_owned(),
        }
    } else {
        SearchOutcome::Matches(results)
    }
}

// ---------------------------------------------------------------------------
// DefaultSearchEngine
// ---------------------------------------------------------------------------

/// The built-in traversal described above.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultSearchEngine;

impl SearchEngine for DefaultSearchEngine {
    fn search(&self, tree: &[Node], query: &str) -> Vec<SearchResult> {
        debug_assert!(!query.is_empty(), "engine called with an empty query");
        let query = Query::new(query);
        let order = order_indices(tree);

        let mut results = Vec::new();
        for node in tree {
            if let Node::Group(group) = node {
                visit(group, &query, &order, &mut results);
            }
        }

        let mut results = dedup_by_id(results);
        // Descending score, then declaration order, then title as a
        // defensive last resort (order indices are unique in practice).
        results.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then(a.order_index.cmp(&b.order_index))
                .then_with(|| a.group.title.cmp(&b.group.title))
        });
        tracing::debug!(
            target: LOG_TARGET,
            query = %query.raw,
            results = results.len(),
            "search complete"
        );
        results
    }
}

/// Pre-pass assigning every group its pre-order traversal position.
///
/// Indices are assigned at visit time, before descending, so a group's index
/// is the same whether it later surfaces via fan-out or via direct
/// recursion. First occurrence wins on duplicate ids.
fn order_indices(tree: &[Node]) -> HashMap<NodeId, usize> {
    fn walk(node: &Node, next: &mut usize, out: &mut HashMap<NodeId, usize>) {
        if let Node::Group(group) = node {
            out.entry(group.id).or_insert(*next);
            *next += 1;
            for child in &group.children {
                walk(child, next, out);
            }
        }
    }
    let mut out = HashMap::new();
    let mut next = 0;
    for node in tree {
        walk(node, &mut next, &mut out);
    }
    out
}

fn visit(
    group: &GroupNode,
    query: &Query,
    order: &HashMap<NodeId, usize>,
    results: &mut Vec<SearchResult>,
) {
    let own_score = score(&group.title, &group.tags, query);

    if group.is_leaf() {
        // Whole leaf groups surface together: once the group or any
        // searchable child matches, every child item is listed. Inline
        // leaves were spliced away by the builder; if one appears anyway it
        // is never emitted directly.
        let child_best = group
            .item_children()
            .filter(|item| item.searchable)
            .map(|item| score(&item.title, &item.tags, query))
            .max()
            .unwrap_or(0);
        let result_score = own_score.max(child_best);
        if group.presentation == Presentation::Navigation && result_score > 0 {
            results.push(SearchResult {
                group: group.clone(),
                matched_items: group.item_children().cloned().collect(),
                is_navigation: false,
                score: result_score,
                order_index: order_index(order, group.id),
            });
        }
        return;
    }

    // Parent group: emit itself on a match (navigation presentation only —
    // inline parents stay transparent), then fan out exactly one level of
    // immediate navigation-style group children.
    if own_score > 0 {
        if group.presentation == Presentation::Navigation {
            results.push(SearchResult {
                group: group.clone(),
                matched_items: Vec::new(),
                is_navigation: true,
                score: own_score,
                order_index: order_index(order, group.id),
            });
        }
        for child in group.group_children() {
            if child.presentation != Presentation::Navigation {
                continue;
            }
            // Fan-out entries ride on the parent's score: they surfaced
            // because the parent matched, not on their own merits.
            if child.is_leaf() {
                results.push(SearchResult {
                    group: child.clone(),
                    matched_items: child.item_children().cloned().collect(),
                    is_navigation: false,
                    score: own_score,
                    order_index: order_index(order, child.id),
                });
            } else {
                results.push(SearchResult {
                    group: child.clone(),
                    matched_items: Vec::new(),
                    is_navigation: true,
                    score: own_score,
                    order_index: order_index(order, child.id),
                });
            }
        }
    }

    // Always recurse: a match at depth five must surface even when nothing
    // above it matched.
    for child in group.group_children() {
        visit(child, query, order, results);
    }
}

fn order_index(order: &HashMap<NodeId, usize>, id: NodeId) -> usize {
    order.get(&id).copied().unwrap_or(usize::MAX)
}

/// Deduplicate by group id, keeping the higher-scoring instance. On a score
/// tie the earlier instance survives.
fn dedup_by_id(results: Vec<SearchResult>) -> Vec<SearchResult> {
    let mut kept: Vec<SearchResult> = Vec::with_capacity(results.len());
    for candidate in results {
        match kept.iter_mut().find(|r| r.group.id == candidate.group.id) {
            Some(existing) => {
                if candidate.score > existing.score {
                    *existing = candidate;
                }
            }
            None => kept.push(candidate),
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::identity::{node_id, NodeKind};
    use crate::search::score::{EXACT, NORM_PREFIX, TAG};

    fn group(title: &str, tags: &[&str], children: Vec<Node>) -> Node {
        named_group(title, tags, Presentation::Navigation, children)
    }

    fn inline_group(title: &str, tags: &[&str], children: Vec<Node>) -> Node {
        named_group(title, tags, Presentation::Inline, children)
    }

    fn named_group(
        title: &str,
        tags: &[&str],
        presentation: Presentation,
        children: Vec<Node>,
    ) -> Node {
        Node::Group(GroupNode {
            id: node_id(NodeKind::Group, title, None, Some(presentation)),
            title: title.to_owned(),
            icon: None,
            tags: tags.iter().map(|t| (*t).to_owned()).collect(),
            presentation,
            children,
        })
    }

    fn item(title: &str) -> Node {
        tagged_item(title, &[], true)
    }

    fn tagged_item(title: &str, tags: &[&str], searchable: bool) -> Node {
        Node::Item(ItemNode {
            id: node_id(NodeKind::Item, title, None, None),
            title: title.to_owned(),
            icon: None,
            tags: tags.iter().map(|t| (*t).to_owned()).collect(),
            searchable,
        })
    }

    fn search(tree: &[Node], query: &str) -> Vec<SearchResult> {
        DefaultSearchEngine.search(tree, query)
    }

    fn titles(results: &[SearchResult]) -> Vec<&str> {
        results.iter().map(|r| r.group.title.as_str()).collect()
    }

    #[test]
    fn leaf_group_surfaces_whole() {
        let tree = vec![group("Bluetooth", &[], vec![item("Toggle")])];
        let results = search(&tree, "bluetooth");
        assert_eq!(results.len(), 1);
        let result = &results[0];
        assert!(!result.is_navigation);
        assert_eq!(result.group.title, "Bluetooth");
        assert_eq!(result.score, EXACT);
        // All items listed, not just title-matching ones.
        assert_eq!(result.matched_items.len(), 1);
        assert_eq!(result.matched_items[0].title, "Toggle");
    }

    #[test]
    fn leaf_group_surfaces_on_child_match() {
        let tree = vec![group("Radios", &[], vec![item("Wi-Fi"), item("Bluetooth")])];
        let results = search(&tree, "bluetooth");
        assert_eq!(titles(&results), vec!["Radios"]);
        assert_eq!(results[0].matched_items.len(), 2);
        assert_eq!(results[0].score, EXACT);
    }

    #[test]
    fn unsearchable_items_do_not_surface_their_group() {
        let tree = vec![group(
            "Hidden",
            &[],
            vec![tagged_item("Bluetooth", &[], false)],
        )];
        assert!(search(&tree, "bluetooth").is_empty());
    }

    #[test]
    fn tag_only_match_surfaces() {
        let tree = vec![group("Sharing", &["airdrop"], vec![item("Enable")])];
        let results = search(&tree, "airdrop");
        assert_eq!(titles(&results), vec!["Sharing"]);
        assert_eq!(results[0].score, TAG);
    }

    #[test]
    fn item_match_with_non_matching_parent() {
        let tree = vec![group("Misc", &[], vec![item("Telemetry")])];
        let results = search(&tree, "telemetry");
        assert_eq!(titles(&results), vec!["Misc"]);
    }

    #[test]
    fn deep_match_surfaces_without_matching_ancestors() {
        let tree = vec![group(
            "A",
            &[],
            vec![group("B", &[], vec![group("C", &[], vec![item("X")])])],
        )];
        let results = search(&tree, "c");
        assert_eq!(titles(&results), vec!["C"]);
        assert!(!results[0].is_navigation);
    }

    #[test]
    fn matching_parent_emits_navigation_result_and_fans_out() {
        let tree = vec![group(
            "Main",
            &[],
            vec![
                group("Sub1", &[], vec![group("Sub1a", &[], vec![])]),
                group("Sub2", &[], vec![item("Row")]),
            ],
        )];
        let results = search(&tree, "main");

        // Main itself, then its immediate group children — but never Sub1a,
        // which is only reachable via recursion, not fan-out.
        assert_eq!(titles(&results), vec!["Main", "Sub1", "Sub2"]);

        let main = &results[0];
        assert!(main.is_navigation);
        assert!(main.matched_items.is_empty());

        // Non-leaf fan-out child is navigation-style.
        let sub1 = &results[1];
        assert!(sub1.is_navigation);
        assert_eq!(sub1.score, EXACT);

        // Leaf fan-out child is leaf-style with its items listed.
        let sub2 = &results[2];
        assert!(!sub2.is_navigation);
        assert_eq!(sub2.matched_items.len(), 1);
    }

    #[test]
    fn fan_out_is_exactly_one_level() {
        let tree = vec![group(
            "Main",
            &[],
            vec![group("Sub1", &[], vec![group("Sub1a", &[], vec![])])],
        )];
        let results = search(&tree, "main");
        assert!(!titles(&results).contains(&"Sub1a"));
    }

    #[test]
    fn fan_out_skips_inline_children() {
        let tree = vec![group(
            "Main",
            &[],
            vec![
                inline_group("Spliced", &[], vec![item("Row")]),
                group("Nav", &[], vec![]),
            ],
        )];
        let results = search(&tree, "main");
        assert_eq!(titles(&results), vec!["Main", "Nav"]);
    }

    #[test]
    fn inline_parent_fans_out_without_emitting_itself() {
        // Inline groups are spliced away by the builder; if a tree from
        // another source still contains one, it stays transparent.
        let tree = vec![inline_group(
            "Transparent",
            &[],
            vec![group("Child", &[], vec![group("Grand", &[], vec![])])],
        )];
        let results = search(&tree, "transparent");
        assert_eq!(titles(&results), vec!["Child"]);
        assert!(results[0].is_navigation);
    }

    #[test]
    fn inline_leaf_is_never_emitted() {
        let tree = vec![inline_group("Spliced", &[], vec![item("Row")])];
        assert!(search(&tree, "spliced").is_empty());
    }

    #[test]
    fn dedup_keeps_the_higher_scoring_instance() {
        // The same declaration under two matching parents: one exact match,
        // one prefix match. The duplicate id must survive once, at the
        // higher score.
        let dup = || group("Dup", &[], vec![]);
        let tree = vec![
            group("net", &[], vec![dup()]),
            group("net hub", &[], vec![dup()]),
        ];
        let results = search(&tree, "net");

        let dups: Vec<_> = results.iter().filter(|r| r.group.title == "Dup").collect();
        assert_eq!(dups.len(), 1);
        assert_eq!(dups[0].score, EXACT);

        let net = results.iter().find(|r| r.group.title == "net").unwrap();
        assert_eq!(net.score, EXACT);
        let hub = results.iter().find(|r| r.group.title == "net hub").unwrap();
        assert_eq!(hub.score, NORM_PREFIX);
    }

    #[test]
    fn score_ties_break_by_declaration_order() {
        let tree = vec![
            group("Zeta", &["shared"], vec![item("A")]),
            group("Alpha", &["shared"], vec![item("B")]),
        ];
        let results = search(&tree, "shared");
        // Both score TAG; the earlier-declared group sorts first despite the
        // later title sorting lower lexicographically.
        assert_eq!(titles(&results), vec!["Zeta", "Alpha"]);
        assert!(results[0].order_index < results[1].order_index);
    }

    #[test]
    fn results_sort_by_score_descending() {
        let tree = vec![
            group("Network Extras", &[], vec![item("A")]),
            group("Network", &[], vec![item("B")]),
        ];
        let results = search(&tree, "network");
        assert_eq!(titles(&results), vec!["Network", "Network Extras"]);
    }

    #[test]
    fn no_matches_yields_empty_vec() {
        let tree = vec![group("Bluetooth", &[], vec![item("Toggle")])];
        assert!(search(&tree, "zzzzz").is_empty());
    }

    #[test]
    fn outcome_distinguishes_inactive_from_no_matches() {
        let tree = vec![group("Bluetooth", &[], vec![item("Toggle")])];
        let engine = DefaultSearchEngine;

        assert_eq!(
            search_outcome(&engine, &tree, ""),
            SearchOutcome::Inactive
        );
        assert_eq!(
            search_outcome(&engine, &tree, "zzzzz"),
            SearchOutcome::NoMatches {
                query: "zzzzz".to_owned()
            }
        );
        assert!(matches!(
            search_outcome(&engine, &tree, "bluetooth"),
            SearchOutcome::Matches(_)
        ));
    }

    #[test]
    fn search_is_pure_and_repeatable() {
        let tree = vec![group("Main", &[], vec![group("Sub", &[], vec![item("Row")])])];
        let first = search(&tree, "main");
        let second = search(&tree, "main");
        assert_eq!(first, second);
    }

    #[test]
    fn custom_engine_is_substitutable() {
        struct NoopEngine;
        impl SearchEngine for NoopEngine {
            fn search(&self, _tree: &[Node], _query: &str) -> Vec<SearchResult> {
                Vec::new()
            }
        }
        let tree = vec![group("Bluetooth", &[], vec![])];
        assert_eq!(
            search_outcome(&NoopEngine, &tree, "bluetooth"),
            SearchOutcome::NoMatches {
                query: "bluetooth".to_owned()
            }
        );
    }
}
