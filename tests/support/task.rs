use repository_patterns::RepositoryItem;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    pub done: bool,
}

impl RepositoryItem for Task {
    type Identifier = u32;

    fn identifier(&self) -> u32 {
        self.id
    }
}

pub fn task(id: u32, title: &str) -> Task {
    Task {
        id,
        title: title.to_string(),
        done: false,
    }
}
