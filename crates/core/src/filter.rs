use serde::Deserialize;

use crate::recipe::Recipe;

/// Search over an already-fetched recipe list: free text against the title,
/// optional exact category against the cuisine. Both case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RecipeFilter {
    #[serde(default, rename = "q")]
    pub text: String,
    #[serde(default)]
    pub category: Option<String>,
}

impl RecipeFilter {
    pub fn new(text: impl Into<String>, category: Option<String>) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }

    pub fn matches(&self, recipe: &Recipe) -> bool {
        let text = self.text.trim().to_lowercase();
        let text_ok = text.is_empty() || recipe.title.to_lowercase().contains(&text);

        let category_ok = match self.category.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(category) => recipe.cuisine.trim().to_lowercase() == category.to_lowercase(),
        };

        text_ok && category_ok
    }

    /// Matching recipes, in input order.
    pub fn apply<'a>(&self, recipes: &'a [Recipe]) -> Vec<&'a Recipe> {
        recipes.iter().filter(|r| self.matches(r)).collect()
    }
}

/// Distinct non-empty cuisines, sorted, for a category selector.
pub fn categories(recipes: &[Recipe]) -> Vec<String> {
    let mut out: Vec<String> = recipes
        .iter()
        .map(|r| r.cuisine.trim())
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect();
    out.sort();
    out.dedup();
    out
}
