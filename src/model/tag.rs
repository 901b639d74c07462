use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TagDto {
    pub id: i32,
    pub name: String,
    pub slug: String,
}
