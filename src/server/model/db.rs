//! Database model type aliases.
//!
//! Convenient aliases for the SeaORM models from the `entity` crate so signatures across
//! the data and service layers stay short.

/// Type alias for recipebox user database model.
///
/// Users are owned by the external authentication service, this crate only references them.
pub type UserModel = entity::recipebox_user::Model;

/// Type alias for ingredient database model.
///
/// # Fields (from `entity::ingredient::Model`)
/// - `id` - Primary key
/// - `name` - Ingredient name
/// - `measurement_unit` - Unit amounts of this ingredient are expressed in, unique together with `name`
pub type IngredientModel = entity::ingredient::Model;

/// Type alias for recipe database model.
///
/// # Fields (from `entity::recipe::Model`)
/// - `id` - Primary key
/// - `name` - Recipe name
/// - `text` - Cooking instructions
/// - `cooking_time` - Cooking time in minutes
/// - `author_id` - Foreign key to the authoring user
/// - `short_code` - Random public code, set once at creation when the random strategy is in use
/// - `created_at` - Timestamp when the recipe was created
pub type RecipeModel = entity::recipe::Model;

/// Type alias for a recipe's ingredient line.
pub type RecipeIngredientModel = entity::recipe_ingredient::Model;

/// Type alias for a shopping cart entry.
pub type ShoppingCartModel = entity::shopping_cart::Model;

/// Type alias for a favorite entry.
pub type FavoriteModel = entity::favorite::Model;

/// Type alias for a subscription of one user to another.
pub type SubscriptionModel = entity::subscription::Model;

/// Type alias for tag database model.
///
/// # Fields (from `entity::tag::Model`)
/// - `id` - Primary key
/// - `name` - Display name, unique
/// - `slug` - URL-safe identifier used by recipe list filters, unique
pub type TagModel = entity::tag::Model;

/// Type alias for the assignment of a tag to a recipe.
pub type RecipeTagModel = entity::recipe_tag::Model;
