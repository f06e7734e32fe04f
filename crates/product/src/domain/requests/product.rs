use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(custom(function = "validate_price"))]
    pub price: Decimal,

    #[validate(range(min = 0, message = "Quantity must not be negative"))]
    pub quantity: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindProductRequest {
    pub id: Uuid,
}

/// `delta_quantity` is the amount to take off the stored stock, not the new stock level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate)]
pub struct UpdateProductQuantityRequest {
    pub id: Uuid,

    #[validate(range(min = 0, message = "Delta quantity must not be negative"))]
    pub delta_quantity: i32,
}

impl From<&UpdateProductQuantityRequest> for FindProductRequest {
    fn from(value: &UpdateProductQuantityRequest) -> Self {
        FindProductRequest { id: value.id }
    }
}

fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if *price < Decimal::ZERO {
        let mut err = ValidationError::new("price");
        err.message = Some("Price must not be negative".into());
        return Err(err);
    }
    Ok(())
}
