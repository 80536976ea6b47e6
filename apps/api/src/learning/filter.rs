use serde::Deserialize;

use crate::models::learning::LearningResourceRow;

/// Filter value meaning "do not filter on this field".
const ANY: &str = "all";

/// Catalog filter from query parameters. Absent or `all` disables a field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResourceFilter {
    pub category: Option<String>,
    pub resource_type: Option<String>,
    pub difficulty: Option<String>,
}

impl ResourceFilter {
    /// Category is taken from the resource's skill; a resource with no skill
    /// never matches a concrete category.
    pub fn matches(&self, resource: &LearningResourceRow) -> bool {
        field_matches(&self.category, resource.skill_category.as_deref())
            && field_matches(&self.resource_type, Some(&resource.resource_type))
            && field_matches(&self.difficulty, Some(&resource.difficulty_level))
    }

    pub fn apply(&self, resources: Vec<LearningResourceRow>) -> Vec<LearningResourceRow> {
        resources.into_iter().filter(|r| self.matches(r)).collect()
    }
}

fn field_matches(wanted: &Option<String>, actual: Option<&str>) -> bool {
    match wanted.as_deref() {
        None | Some(ANY) => true,
        Some(w) => actual == Some(w),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn resource(category: Option<&str>, kind: &str, difficulty: &str) -> LearningResourceRow {
        LearningResourceRow {
            id: Uuid::new_v4(),
            title: "Speech and Language Processing".to_string(),
            description: String::new(),
            resource_type: kind.to_string(),
            url: "https://example.org".to_string(),
            provider: "Stanford".to_string(),
            skill_id: category.map(|_| Uuid::new_v4()),
            difficulty_level: difficulty.to_string(),
            duration_hours: Some(20.0),
            rating: Some(4.8),
            is_free: true,
            skill_name: None,
            skill_category: category.map(String::from),
        }
    }

    fn filter(category: &str, kind: &str, difficulty: &str) -> ResourceFilter {
        ResourceFilter {
            category: Some(category.to_string()),
            resource_type: Some(kind.to_string()),
            difficulty: Some(difficulty.to_string()),
        }
    }

    #[test]
    fn test_default_filter_matches_everything() {
        let f = ResourceFilter::default();
        assert!(f.matches(&resource(None, "book", "advanced")));
        assert!(filter("all", "all", "all").matches(&resource(Some("AI"), "course", "beginner")));
    }

    #[test]
    fn test_each_field_narrows() {
        let r = resource(Some("NLP"), "course", "intermediate");
        assert!(filter("NLP", "course", "intermediate").matches(&r));
        assert!(!filter("AI", "all", "all").matches(&r));
        assert!(!filter("all", "book", "all").matches(&r));
        assert!(!filter("all", "all", "beginner").matches(&r));
    }

    #[test]
    fn test_uncategorized_resource_excluded_by_category() {
        let r = resource(None, "article", "beginner");
        assert!(!filter("AI", "all", "all").matches(&r));
    }

    #[test]
    fn test_apply_preserves_order() {
        let resources = vec![
            resource(Some("AI"), "course", "beginner"),
            resource(Some("NLP"), "course", "beginner"),
            resource(Some("AI"), "tutorial", "advanced"),
        ];
        let ids: Vec<_> = vec![resources[0].id, resources[2].id];
        let kept = filter("AI", "all", "all").apply(resources);
        assert_eq!(kept.iter().map(|r| r.id).collect::<Vec<_>>(), ids);
    }
}
