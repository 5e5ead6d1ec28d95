use serde::{Deserialize, Serialize};

use super::Edge;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IssueConnection {
    pub edges: Vec<Edge<Issue>>,
    pub total_count: u64,
    pub page_info: PageInfo,
}

impl IssueConnection {
    pub fn issues(&self) -> impl Iterator<Item = &Issue> {
        self.edges.iter().map(|edge| &edge.node)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub end_cursor: Option<String>,
    pub has_next_page: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Issue {
    pub id: String,
    pub title: String,
    pub url: String,
    pub reactions: ReactionConnection,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct ReactionConnection {
    pub edges: Vec<Edge<Reaction>>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Reaction {
    pub id: String,
    pub content: ReactionContent,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReactionContent {
    ThumbsUp,
    ThumbsDown,
    Laugh,
    Hooray,
    Confused,
    Heart,
    Rocket,
    Eyes,
    #[serde(other)]
    Unknown,
}

impl ReactionContent {
    pub fn emoji(&self) -> &'static str {
        match self {
            ReactionContent::ThumbsUp => "👍",
            ReactionContent::ThumbsDown => "👎",
            ReactionContent::Laugh => "😄",
            ReactionContent::Hooray => "🎉",
            ReactionContent::Confused => "😕",
            ReactionContent::Heart => "❤️",
            ReactionContent::Rocket => "🚀",
            ReactionContent::Eyes => "👀",
            ReactionContent::Unknown => "?",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReactionContent::ThumbsUp => "THUMBS_UP",
            ReactionContent::ThumbsDown => "THUMBS_DOWN",
            ReactionContent::Laugh => "LAUGH",
            ReactionContent::Hooray => "HOORAY",
            ReactionContent::Confused => "CONFUSED",
            ReactionContent::Heart => "HEART",
            ReactionContent::Rocket => "ROCKET",
            ReactionContent::Eyes => "EYES",
            ReactionContent::Unknown => "UNKNOWN",
        }
    }
}
