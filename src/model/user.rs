use serde::{Deserialize, Serialize};

use crate::model::recipe::ShortRecipeDto;

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
}

/// A followed user with a preview of their recipes
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SubscriptionDto {
    pub id: i32,
    pub username: String,
    /// Always true when listed among the viewer's subscriptions
    pub is_subscribed: bool,
    /// Newest recipes of the user, at most `recipes_limit`
    pub recipes: Vec<ShortRecipeDto>,
    pub recipes_count: u64,
}

/// Query parameters for listing subscriptions
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SubscriptionListParams {
    /// Maximum number of recipes per user, defaults to 3
    pub recipes_limit: Option<usize>,
}
