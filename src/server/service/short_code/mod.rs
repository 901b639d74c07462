//! Short code service.
//!
//! Maps recipes to compact public identifiers used in `/s/{code}/` links and resolves
//! them back. One [`ShortCodeStrategy`] is chosen per deployment:
//!
//! - [`ShortCodeStrategy::Random`] stores an 8 symbol random code on the recipe row at
//!   creation time, retrying on collision.
//! - [`ShortCodeStrategy::Encoded`] derives the code from the recipe ID and stores nothing.

pub mod encoded;
pub mod random;

#[cfg(test)]
mod tests;

use std::{fmt, str::FromStr};

use sea_orm::{ConnectionTrait, TransactionTrait};

use crate::server::{
    data::recipe::RecipeRepository,
    error::{recipe::RecipeError, short_code::ShortCodeError, Error},
    model::{db::RecipeModel, recipe::NewRecipe},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ShortCodeStrategy {
    #[default]
    Random,
    Encoded,
}

impl FromStr for ShortCodeStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(Self::Random),
            "encoded" => Ok(Self::Encoded),
            other => Err(format!("expected random or encoded, got {:?}", other)),
        }
    }
}

impl fmt::Display for ShortCodeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Random => write!(f, "random"),
            Self::Encoded => write!(f, "encoded"),
        }
    }
}

/// Service generating and resolving recipe short codes.
///
/// Generic over the connection so recipe creation can run inside the caller's
/// transaction, random code attempts then become savepoints of that transaction.
pub struct ShortCodeService<'a, C: ConnectionTrait + TransactionTrait> {
    db: &'a C,
    strategy: ShortCodeStrategy,
}

impl<'a, C: ConnectionTrait + TransactionTrait> ShortCodeService<'a, C> {
    /// Creates a new instance of [`ShortCodeService`]
    pub fn new(db: &'a C, strategy: ShortCodeStrategy) -> Self {
        Self { db, strategy }
    }

    /// Inserts the recipe row, assigning its short code under the random strategy.
    ///
    /// Ingredient lines are left to the caller.
    ///
    /// # Arguments
    /// - `recipe` - Validated recipe to insert
    ///
    /// # Returns
    /// - `Ok(Model)` - Inserted recipe, carrying its short code under the random strategy
    /// - `Err(Error::ShortCodeError(CapacityExhausted))` - No unused code found within the
    ///   attempt limit
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_recipe(&self, recipe: &NewRecipe) -> Result<RecipeModel, Error> {
        match self.strategy {
            ShortCodeStrategy::Random => {
                let codes =
                    std::iter::repeat_with(|| random::generate_code(random::SHORT_CODE_LENGTH));

                random::create_with_codes(self.db, recipe, codes).await
            }
            ShortCodeStrategy::Encoded => Ok(RecipeRepository::new(self.db)
                .create_with_short_code(recipe, None)
                .await?),
        }
    }

    /// Returns the public code of a recipe.
    ///
    /// # Returns
    /// - `Ok(String)` - Stored code (random) or encoded recipe ID (encoded)
    /// - `Err(Error::ShortCodeError(Unassigned))` - Random strategy but the recipe has no
    ///   stored code, it was created while the encoded strategy was configured
    pub fn code_for(&self, recipe: &RecipeModel) -> Result<String, Error> {
        match self.strategy {
            ShortCodeStrategy::Random => recipe
                .short_code
                .clone()
                .ok_or_else(|| ShortCodeError::Unassigned(recipe.id).into()),
            ShortCodeStrategy::Encoded => Ok(encoded::encode_id(recipe.id)?),
        }
    }

    /// Looks up a recipe by ID and returns its public code.
    ///
    /// # Returns
    /// - `Ok(String)` - Code of the recipe, see [`Self::code_for`]
    /// - `Err(Error::RecipeError(NotFound))` - Recipe does not exist
    pub async fn code_for_recipe_id(&self, recipe_id: i32) -> Result<String, Error> {
        let recipe = RecipeRepository::new(self.db)
            .find_by_id(recipe_id)
            .await?
            .ok_or(RecipeError::NotFound(recipe_id))?;

        self.code_for(&recipe)
    }

    /// Resolves a public code to the ID of the recipe it names.
    ///
    /// # Returns
    /// - `Ok(i32)` - ID of the recipe
    /// - `Err(Error::ShortCodeError(InvalidCode))` - Code is malformed for the strategy, no
    ///   lookup is made
    /// - `Err(Error::ShortCodeError(NotFound))` - Code is well formed but names no recipe
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn resolve(&self, code: &str) -> Result<i32, Error> {
        let recipe_repo = RecipeRepository::new(self.db);

        let recipe = match self.strategy {
            ShortCodeStrategy::Random => {
                if !random::is_well_formed(code) {
                    return Err(ShortCodeError::InvalidCode(code.to_string()).into());
                }

                recipe_repo.find_by_short_code(code).await?
            }
            ShortCodeStrategy::Encoded => {
                let recipe_id = encoded::decode_code(code)?;

                recipe_repo.find_by_id(recipe_id).await?
            }
        };

        recipe
            .map(|recipe| recipe.id)
            .ok_or_else(|| ShortCodeError::NotFound(code.to_string()).into())
    }
}
