//! Comment tree reconstruction.
//!
//! The backend delivers comments as a flat, time-ordered list where a reply
//! carries the id of its parent. Rendering wants a forest of root comments
//! with nested `replies`. The builder here is a pure, stable transform:
//! the caller's slice is never mutated, and sibling order within every
//! reply list follows flat-input order.

use super::model::Comment;
use std::collections::HashMap;

/// Builds a nested reply forest from a flat comment list.
///
/// Each output root carries its replies recursively in `replies`. Input
/// order is preserved within every sibling group, including the roots.
///
/// Policy decisions:
/// - A comment whose `reply_to_comment_id` does not resolve within the
///   batch is promoted to a root rather than dropped.
/// - Comments forming a reference cycle are unreachable from any root and
///   are omitted from the output. Every node has at most one incoming edge,
///   so the region reachable from the roots is a forest and assembly always
///   terminates.
///
/// Depth is unbounded here; capping nesting for display is a rendering
/// policy, not a builder concern.
pub fn build_comment_tree(flat: &[Comment]) -> Vec<Comment> {
    if flat.is_empty() {
        return Vec::new();
    }

    let index_of: HashMap<i64, usize> = flat
        .iter()
        .enumerate()
        .map(|(idx, comment)| (comment.id, idx))
        .collect();

    // Copy-before-link: fresh nodes with empty reply lists, so callers
    // retaining the flat list never observe the linking.
    let mut nodes: Vec<Option<Comment>> = flat
        .iter()
        .map(|comment| {
            let mut copy = comment.clone();
            copy.replies = Vec::new();
            Some(copy)
        })
        .collect();

    let mut children: Vec<Vec<usize>> = vec![Vec::new(); flat.len()];
    let mut roots: Vec<usize> = Vec::new();

    for (idx, comment) in flat.iter().enumerate() {
        match comment.reply_to_comment_id.and_then(|pid| index_of.get(&pid)) {
            Some(&parent_idx) => children[parent_idx].push(idx),
            // No parent reference, or parent absent from the batch:
            // orphan promotion.
            None => roots.push(idx),
        }
    }

    roots
        .into_iter()
        .map(|idx| assemble(idx, &mut nodes, &children))
        .collect()
}

fn assemble(idx: usize, nodes: &mut Vec<Option<Comment>>, children: &[Vec<usize>]) -> Comment {
    let replies: Vec<Comment> = children[idx]
        .iter()
        .map(|&child| assemble(child, nodes, children))
        .collect();
    // Each index is reachable from at most one parent, so the node is
    // still present here.
    let mut node = nodes[idx].take().unwrap_or_else(|| {
        unreachable!("comment node consumed twice during tree assembly")
    });
    node.replies = replies;
    node
}

/// Counts all comments in a forest, nested replies included.
pub fn count_comments(roots: &[Comment]) -> usize {
    roots
        .iter()
        .map(|comment| 1 + count_comments(&comment.replies))
        .sum()
}
