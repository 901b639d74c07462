//! Aggregated shopping list and its plaintext export format.
//!
//! The rendered text is parsed by existing clients, so the header, separators and the
//! terminating period must stay exactly as they are.

/// Header line of the plaintext shopping list export
pub const SHOPPING_LIST_HEADER: &str = "Полный список ингредиентов:";
/// Separator placed between rendered ingredient lines
pub const SHOPPING_LIST_SEPARATOR: &str = ";\n";
/// File name the export is offered as
pub const SHOPPING_LIST_FILE_NAME: &str = "shopping_cart.txt";

/// Summed quantity of a single ingredient across every recipe in a cart
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AggregatedLine {
    pub ingredient_id: i32,
    pub ingredient_name: String,
    pub measurement_unit: String,
    pub total_amount: i64,
}

impl AggregatedLine {
    /// Renders the line as `{name} ({unit}) — {total}`
    pub fn render(&self) -> String {
        format!(
            "{} ({}) — {}",
            self.ingredient_name, self.measurement_unit, self.total_amount
        )
    }
}

/// Ordered list of aggregated lines for one user's cart
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShoppingList(pub Vec<AggregatedLine>);

impl ShoppingList {
    pub fn lines(&self) -> &[AggregatedLine] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Renders the plaintext export body
    ///
    /// An empty list renders as the header followed by a lone period.
    pub fn render(&self) -> String {
        let entries = self
            .0
            .iter()
            .map(AggregatedLine::render)
            .collect::<Vec<_>>()
            .join(SHOPPING_LIST_SEPARATOR);

        format!("{}\n{}.", SHOPPING_LIST_HEADER, entries)
    }
}
