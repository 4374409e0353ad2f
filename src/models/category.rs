use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Root of the resource hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Category {
    pub id: Uuid,
    #[serde(default)]
    #[schema(example = "Infrastructure")]
    pub name: String,
    pub visible: bool,
    pub internal: bool,
}

impl Category {
    pub fn new(visible: bool, internal: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            visible,
            internal,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}
