use crate::model::Product as ProductModel;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: Option<String>,
}

impl From<ProductModel> for ProductResponse {
    fn from(value: ProductModel) -> Self {
        ProductResponse {
            id: value.id,
            name: value.name,
            description: value.description,
            price: value.price.to_f64().unwrap_or_default(),
            category: value.category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal::prelude::FromPrimitive;

    #[test]
    fn two_decimal_prices_survive_the_decimal_float_round_trip() {
        let model = ProductModel {
            id: 1,
            name: "Test Product".into(),
            description: Some("Desc".into()),
            price: Decimal::from_f64(19.99).unwrap(),
            category: Some("Category A".into()),
        };

        let response = ProductResponse::from(model);
        assert_eq!(response.price, 19.99);
    }
}
