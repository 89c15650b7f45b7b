
use num_bigint::BigUint;

use crate::{FrenchConverter, FrenchLanguage};

fn n(v: u64) -> BigUint {
    BigUint::from(v)
}

fn fresh_converter() -> FrenchConverter {
    FrenchConverter::new(FrenchLanguage::new())
}
