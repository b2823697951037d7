//! # Validation Module
//!
//! Rules a product record must satisfy before it enters the catalog.
//!
//! ## Usage
//! ```rust
//! use dondurma_core::validation::validate_product_name;
//!
//! assert!(validate_product_name("Vanilyalı").is_ok());
//! assert!(validate_product_name("   ").is_err());
//! ```

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::types::Product;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest product name the card layout accepts.
pub const MAX_PRODUCT_NAME_LEN: usize = 100;

/// Highest unit price a catalog product may carry (₺100 000).
///
/// Keeps line and basket totals far inside the `i64` kuruş range.
pub const MAX_PRICE_KURUS: i64 = 10_000_000;

/// Validates a product name.
///
/// ## Rules
/// - Must not be blank
/// - At most [`MAX_PRODUCT_NAME_LEN`] characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a unit price in kuruş.
///
/// ## Rules
/// - Must be positive
/// - At most [`MAX_PRICE_KURUS`]
pub fn validate_price_kurus(price_kurus: i64) -> ValidationResult<()> {
    if price_kurus <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    if price_kurus > MAX_PRICE_KURUS {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 1,
            max: MAX_PRICE_KURUS,
        });
    }

    Ok(())
}

pub fn validate_unit(unit: &str) -> ValidationResult<()> {
    if unit.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "unit".to_string(),
        });
    }
    Ok(())
}

/// Validates an image URL.
///
/// Accepts absolute paths (`/img/vanilla.png`) and http(s) URLs.
pub fn validate_image_url(url: &str) -> ValidationResult<()> {
    let url = url.trim();

    if url.is_empty() {
        return Err(ValidationError::Required {
            field: "imageUrl".to_string(),
        });
    }

    if !(url.starts_with('/') || url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ValidationError::InvalidFormat {
            field: "imageUrl".to_string(),
            reason: "must be an absolute path or an http(s) URL".to_string(),
        });
    }

    Ok(())
}

/// Runs every field rule on one product.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_product_name(&product.name)?;
    validate_price_kurus(product.price_kurus)?;
    validate_unit(&product.unit)?;
    validate_image_url(&product.image_url)?;
    Ok(())
}

/// Validates a whole catalog: every product, plus unique ids.
pub fn validate_catalog(products: &[Product]) -> ValidationResult<()> {
    let mut seen = HashSet::with_capacity(products.len());
    for product in products {
        validate_product(product)?;
        if !seen.insert(product.id) {
            return Err(ValidationError::Duplicate {
                field: "id".to_string(),
                value: product.id.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u32) -> Product {
        Product {
            id,
            name: "Vanilyalı".to_string(),
            price_kurus: 2000,
            unit: "top".to_string(),
            image_url: "/vanilla.png".to_string(),
            accent: String::new(),
        }
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Karamelli").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name(&"ç".repeat(MAX_PRODUCT_NAME_LEN)).is_ok());
        assert_eq!(
            validate_product_name(&"a".repeat(MAX_PRODUCT_NAME_LEN + 1)),
            Err(ValidationError::TooLong {
                field: "name".to_string(),
                max: MAX_PRODUCT_NAME_LEN
            })
        );
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price_kurus(1).is_ok());
        assert!(validate_price_kurus(0).is_err());
        assert!(validate_price_kurus(-100).is_err());
        assert!(validate_price_kurus(MAX_PRICE_KURUS).is_ok());
        assert_eq!(
            validate_price_kurus(MAX_PRICE_KURUS + 1),
            Err(ValidationError::OutOfRange {
                field: "price".to_string(),
                min: 1,
                max: MAX_PRICE_KURUS
            })
        );
    }

    #[test]
    fn test_validate_image_url() {
        assert!(validate_image_url("/img/a.png").is_ok());
        assert!(validate_image_url("https://cdn.example.com/a.png").is_ok());
        assert!(matches!(
            validate_image_url("a.png"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            validate_image_url(" "),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_validate_product_checks_unit() {
        let mut p = product(1);
        p.unit = " ".to_string();
        assert_eq!(
            validate_product(&p),
            Err(ValidationError::Required {
                field: "unit".to_string()
            })
        );
    }

    #[test]
    fn test_validate_catalog_rejects_duplicate_ids() {
        assert!(validate_catalog(&[product(1), product(2)]).is_ok());
        assert_eq!(
            validate_catalog(&[product(1), product(1)]),
            Err(ValidationError::Duplicate {
                field: "id".to_string(),
                value: "1".to_string()
            })
        );
    }
}
