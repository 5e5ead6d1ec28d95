use colored::*;

use crate::models::{Issue, ReactionContent};

pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

pub fn format_reaction(content: ReactionContent) -> ColoredString {
    let label = format!("{} {}", content.emoji(), content.as_str());
    match content {
        ReactionContent::ThumbsUp | ReactionContent::Heart | ReactionContent::Hooray | ReactionContent::Rocket => label.green(),
        ReactionContent::ThumbsDown | ReactionContent::Confused => label.red(),
        ReactionContent::Unknown => label.dimmed(),
        _ => label.normal(),
    }
}

/// Reactions of an issue on one line, in response order.
pub fn format_reactions(issue: &Issue) -> Option<String> {
    if issue.reactions.edges.is_empty() {
        return None;
    }

    Some(
        issue
            .reactions
            .edges
            .iter()
            .map(|edge| format_reaction(edge.node.content).to_string())
            .collect::<Vec<_>>()
            .join("  "),
    )
}

pub fn pluralize(count: u64, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 8), "abcde...");
        assert_eq!(truncate("ééééééé", 5), "éé...");
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(1, "issue", "issues"), "1 issue");
        assert_eq!(pluralize(3, "issue", "issues"), "3 issues");
    }
}
