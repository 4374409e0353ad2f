use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::category::Category;

/// A project snapshot carrying its owning category.
///
/// `category` is `None` when the reference could not be resolved by the
/// data-access layer; every decision on such a project is a denial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Project {
    pub id: Uuid,
    #[serde(default)]
    #[schema(example = "Launch Planning")]
    pub name: String,
    pub visible: bool,
    pub internal: bool,
    pub category: Option<Category>,
}

impl Project {
    pub fn new(category: Category, visible: bool, internal: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            visible,
            internal,
            category: Some(category),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}
