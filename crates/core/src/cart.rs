//! Cart arithmetic.
//!
//! Prices are integers (smallest currency unit); quantities are positive.

/// Subtotal of a single cart line.
pub fn line_subtotal(amount: i64, price: i64) -> i64 {
    amount * price
}

/// Total over `(amount, price)` pairs. An empty cart totals zero.
pub fn cart_total<I>(lines: I) -> i64
where
    I: IntoIterator<Item = (i64, i64)>,
{
    lines
        .into_iter()
        .map(|(amount, price)| line_subtotal(amount, price))
        .sum()
}
