use std::collections::HashMap;

use anyhow::{anyhow, Result};
use aws_sdk_dynamodb::types::AttributeValue;
use maplit::hashmap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single ToDo entry. Persistence is keyed by `id`, which never changes once assigned.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ToDo {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl ToDo {
    pub fn new(title: impl Into<String>) -> ToDo {
        ToDo {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Gives the ToDo a fresh UUID unless the caller already picked one.
    pub fn assign_id(&mut self) {
        if self.id.is_empty() {
            self.id = Uuid::new_v4().to_string();
        }
    }

    pub fn from_dynamo_item(item: &HashMap<String, AttributeValue>) -> Result<ToDo> {
        let id = item
            .get("id")
            .and_then(|attr| attr.as_s().ok())
            .ok_or_else(|| anyhow!("id attribute is missing in the ToDo entry"))?
            .to_owned();

        Ok(ToDo {
            id,
            title: item
                .get("title")
                .and_then(|attr| attr.as_s().ok())
                .cloned()
                .unwrap_or_default(),
            completed: item
                .get("completed")
                .and_then(|attr| attr.as_bool().ok())
                .copied()
                .unwrap_or(false),
        })
    }

    pub fn to_dynamo_item(&self) -> HashMap<String, AttributeValue> {
        hashmap! {
            "id".to_string() => AttributeValue::S(self.id.clone()),
            "title".to_string() => AttributeValue::S(self.title.clone()),
            "completed".to_string() => AttributeValue::Bool(self.completed),
        }
    }
}

pub fn key(id: &str) -> HashMap<String, AttributeValue> {
    hashmap! {
        "id".to_string() => AttributeValue::S(id.to_string())
    }
}
