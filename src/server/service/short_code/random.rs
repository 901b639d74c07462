//! Randomly drawn short codes stored on the recipe row.

use rand::{distr::Alphanumeric, Rng};
use sea_orm::{ConnectionTrait, TransactionSession, TransactionTrait};

use crate::server::{
    data::recipe::RecipeRepository,
    error::{is_unique_violation, short_code::ShortCodeError, Error},
    model::{db::RecipeModel, recipe::NewRecipe},
};

/// Number of symbols in a random short code
pub const SHORT_CODE_LENGTH: usize = 8;
/// Draws attempted before recipe creation gives up with
/// [`ShortCodeError::CapacityExhausted`]
pub const MAX_SHORT_CODE_ATTEMPTS: usize = 100;

/// Draws `length` symbols uniformly from `[0-9a-zA-Z]`
pub fn generate_code(length: usize) -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Returns true if the code could have been produced by [`generate_code`]
pub fn is_well_formed(code: &str) -> bool {
    code.len() == SHORT_CODE_LENGTH && code.bytes().all(|symbol| symbol.is_ascii_alphanumeric())
}

/// Inserts the recipe row with the first unused code from `codes`
///
/// Each candidate is checked with [`RecipeRepository::exists_short_code`] first, then the
/// insert runs in a savepoint so a code taken by a concurrent insert only rolls back that
/// attempt. At most [`MAX_SHORT_CODE_ATTEMPTS`] candidates are tried.
pub(super) async fn create_with_codes<C, I>(
    db: &C,
    recipe: &NewRecipe,
    codes: I,
) -> Result<RecipeModel, Error>
where
    C: ConnectionTrait + TransactionTrait,
    I: IntoIterator<Item = String>,
{
    let mut attempts = 0;

    for code in codes.into_iter().take(MAX_SHORT_CODE_ATTEMPTS) {
        attempts += 1;

        if RecipeRepository::new(db).exists_short_code(&code).await? {
            tracing::debug!("Short code {:?} already taken, drawing again", code);
            continue;
        }

        match insert_with_code(db, recipe, &code).await? {
            Some(model) => return Ok(model),
            None => tracing::debug!("Short code {:?} taken during insert, drawing again", code),
        }
    }

    Err(ShortCodeError::CapacityExhausted { attempts }.into())
}

/// Inserts the recipe row with `code` inside a savepoint of `db`
///
/// Returns `Ok(None)` when the code violates the unique constraint, the savepoint is rolled
/// back and `db` stays usable for the next attempt.
pub(super) async fn insert_with_code<C>(
    db: &C,
    recipe: &NewRecipe,
    code: &str,
) -> Result<Option<RecipeModel>, Error>
where
    C: ConnectionTrait + TransactionTrait,
{
    let savepoint = db.begin().await?;

    match RecipeRepository::new(&savepoint)
        .create_with_short_code(recipe, Some(code))
        .await
    {
        Ok(model) => {
            savepoint.commit().await?;

            Ok(Some(model))
        }
        Err(err) if is_unique_violation(&err) => {
            savepoint.rollback().await?;

            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::{generate_code, is_well_formed, SHORT_CODE_LENGTH};

    /// Expect generated codes to be 8 alphanumeric symbols
    #[test]
    fn generates_well_formed_codes() {
        for _ in 0..100 {
            let code = generate_code(SHORT_CODE_LENGTH);

            assert_eq!(code.len(), SHORT_CODE_LENGTH);
            assert!(is_well_formed(&code));
        }
    }

    /// Expect codes of the wrong length or with other symbols to be rejected
    #[test]
    fn rejects_malformed_codes() {
        assert!(!is_well_formed(""));
        assert!(!is_well_formed("abc"));
        assert!(!is_well_formed("abcdefghi"));
        assert!(!is_well_formed("abcd-fgh"));
        assert!(!is_well_formed("!!!"));
    }
}
