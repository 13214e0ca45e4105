// src/model/category.rs
use serde::{Deserialize, Serialize};

/// A category as returned by `GET /wp/v2/categories`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    /// Number of published posts in the category.
    #[serde(default)]
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_category_ignoring_extra_fields() {
        let category: Category = serde_json::from_str(
            r#"{
                "id": 3,
                "count": 12,
                "description": "",
                "link": "https://example.com/category/news/",
                "name": "News",
                "slug": "news",
                "taxonomy": "category",
                "parent": 0
            }"#,
        )
        .unwrap();

        assert_eq!(
            category,
            Category {
                id: 3,
                name: "News".to_string(),
                slug: "news".to_string(),
                count: 12,
            }
        );
    }
}
