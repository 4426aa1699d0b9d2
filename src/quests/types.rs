use crate::items::types::Rank;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuestRewards {
    pub exp: u64,
    pub coins: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub objective: String,
    pub rank: Rank,
    pub rewards: QuestRewards,
    #[serde(default)]
    pub is_completed: bool,
}

impl Quest {
    pub fn new(id: &str, title: &str, rank: Rank, exp: u64, coins: u64) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            objective: String::new(),
            rank,
            rewards: QuestRewards { exp, coins },
            is_completed: false,
        }
    }

    pub fn with_text(mut self, description: &str, objective: &str) -> Self {
        self.description = description.to_string();
        self.objective = objective.to_string();
        self
    }
}
