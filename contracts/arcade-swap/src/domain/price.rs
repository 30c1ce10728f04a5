use super::errors::SwapError;

/// Token units paid out per game point
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PointPrice(i128);

impl PointPrice {
    /// Accepts only strictly positive prices
    pub fn new(price: i128) -> Result<Self, SwapError> {
        if price <= 0 {
            return Err(SwapError::InvalidPrice);
        }
        Ok(Self(price))
    }

    /// Reads a stored price, where zero means the game was never priced
    pub fn configured(raw: i128) -> Result<Self, SwapError> {
        if raw <= 0 {
            return Err(SwapError::PriceNotConfigured);
        }
        Ok(Self(raw))
    }

    pub fn value(&self) -> i128 {
        self.0
    }

    /// Token amount owed for `points`
    pub fn quote(&self, points: i128) -> Result<i128, SwapError> {
        if points <= 0 {
            return Err(SwapError::InvalidPoints);
        }
        points
            .checked_mul(self.0)
            .ok_or(SwapError::AmountOverflow)
    }
}

/// Rejects zero and negative token amounts
pub fn ensure_positive_amount(amount: i128) -> Result<(), SwapError> {
    if amount <= 0 {
        return Err(SwapError::InvalidAmount);
    }
    Ok(())
}
