use crate::utils::error::FetchError;
use serde::{Deserialize, Serialize};

/// One recipe document as served by the upstream bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub headline: String,
    pub description: String,
    pub difficulty: i64,
    /// ISO-8601-like duration token, kept verbatim (e.g. `PT1H30M`).
    pub prep_time: String,
    pub image_link: String,
    pub ingredients: Vec<Ingredient>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Ingredient {
    pub name: String,
    pub image_link: String,
}

impl Recipe {
    /// 空 id 代表未取得的資料，不可出現在結果中
    pub fn is_retrieved(&self) -> bool {
        !self.id.is_empty()
    }
}

pub type FetchOutcome = std::result::Result<Recipe, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_upstream_document() {
        let body = serde_json::json!({
            "id": "1",
            "name": "Crispy Chicken",
            "headline": "with roasted potatoes",
            "description": "Crunchy.",
            "difficulty": 2,
            "prepTime": "PT35M",
            "imageLink": "https://img/1.jpg",
            "ingredients": [
                {"name": "Chicken", "imageLink": "https://img/chicken.png"},
                {"name": "Potato", "imageLink": "https://img/potato.png"}
            ]
        });

        let recipe: Recipe = serde_json::from_value(body).unwrap();

        assert!(recipe.is_retrieved());
        assert_eq!(recipe.prep_time, "PT35M");
        assert_eq!(recipe.difficulty, 2);
        assert_eq!(recipe.ingredients.len(), 2);
        assert_eq!(recipe.ingredients[1].name, "Potato");
    }

    #[test]
    fn test_missing_fields_default_and_empty_id_is_not_retrieved() {
        let recipe: Recipe = serde_json::from_str(r#"{"name": "Nameless"}"#).unwrap();
        assert!(!recipe.is_retrieved());
        assert!(recipe.ingredients.is_empty());
    }

    #[test]
    fn test_serializes_camel_case_fields() {
        let recipe = Recipe {
            id: "3".to_string(),
            prep_time: "PT1H".to_string(),
            image_link: "https://img/3.jpg".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&recipe).unwrap();
        assert_eq!(value["prepTime"], "PT1H");
        assert_eq!(value["imageLink"], "https://img/3.jpg");
        assert!(value.get("prep_time").is_none());
    }
}
