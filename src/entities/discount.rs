use serde::{Deserialize, Serialize};

/// A coupon code that takes a fixed amount off the fare.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlatDiscount {
    pub code: String,
    pub amount: f64,
}

impl FlatDiscount {
    pub fn new(code: impl Into<String>, amount: f64) -> Self {
        Self {
            code: code.into(),
            amount,
        }
    }

    /// Amount to subtract for the given coupon, if it is the recognized one.
    pub fn amount_for(&self, coupon_code: Option<&str>) -> Option<f64> {
        match coupon_code {
            Some(code) if code == self.code => Some(self.amount),
            _ => None,
        }
    }
}

impl Default for FlatDiscount {
    fn default() -> Self {
        Self::new("123", 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_exact_code_applies() {
        let discount = FlatDiscount::default();

        assert_eq!(discount.amount_for(Some("123")), Some(100.0));
        assert_eq!(discount.amount_for(Some("1234")), None);
        assert_eq!(discount.amount_for(Some("")), None);
        assert_eq!(discount.amount_for(None), None);
    }
}
