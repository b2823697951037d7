//! # Product Card
//!
//! Serving selection state for a single catalog card.

use crate::basket::{BasketAction, BasketOutcome, BasketState};
use crate::types::{Product, Serving};

/// A product card: the product plus the serving the customer picked.
///
/// A card without a product renders nothing, so [`ProductCard::new`]
/// returns `None` for an absent product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    product: Product,
    selected: Serving,
}

impl ProductCard {
    pub fn new(product: Option<Product>) -> Option<Self> {
        product.map(|product| ProductCard {
            product,
            selected: Serving::default(),
        })
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn selected(&self) -> Serving {
        self.selected
    }

    pub fn is_selected(&self, serving: Serving) -> bool {
        self.selected == serving
    }

    /// Selecting a serving deselects the other one.
    pub fn select(&mut self, serving: Serving) {
        self.selected = serving;
    }

    pub fn price_label(&self) -> String {
        self.product.price_label()
    }

    pub fn price_label_with(&self, symbol: &str) -> String {
        self.product.price_label_with(symbol)
    }

    /// The action the "add to basket" button dispatches.
    pub fn add_action(&self) -> BasketAction {
        BasketAction::AddItem {
            product: self.product.clone(),
            serving: self.selected,
        }
    }

    /// Adds the product with the selected serving to `basket`.
    pub fn add_to(&self, basket: &mut BasketState) -> BasketOutcome {
        basket.add_item(&self.product, self.selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basket::LineKey;
    use crate::money::Money;

    fn card() -> ProductCard {
        ProductCard::new(Some(Product {
            id: 5,
            name: "Fıstıklı".to_string(),
            price_kurus: 3000,
            unit: "top".to_string(),
            image_url: "/pistachio.png".to_string(),
            accent: "bg-green-100".to_string(),
        }))
        .unwrap()
    }

    #[test]
    fn test_no_product_no_card() {
        assert!(ProductCard::new(None).is_none());
    }

    #[test]
    fn test_cone_is_preselected() {
        let card = card();
        assert!(card.is_selected(Serving::Cone));
        assert!(!card.is_selected(Serving::Cup));
    }

    #[test]
    fn test_selecting_toggles_serving() {
        let mut card = card();

        card.select(Serving::Cup);
        assert!(card.is_selected(Serving::Cup));
        assert!(!card.is_selected(Serving::Cone));

        card.select(Serving::Cone);
        assert!(card.is_selected(Serving::Cone));
        assert!(!card.is_selected(Serving::Cup));
    }

    #[test]
    fn test_price_label() {
        assert_eq!(card().price_label(), "₺30 / top");
    }

    #[test]
    fn test_add_uses_selected_serving() {
        let mut card = card();
        let mut basket = BasketState::new();

        card.add_to(&mut basket);
        card.select(Serving::Cup);
        card.add_to(&mut basket);

        assert_eq!(basket.line_count(), 2);
        assert_eq!(basket.items()[0].serving, Serving::Cone);
        assert_eq!(basket.items()[1].serving, Serving::Cup);
        assert_eq!(basket.total_amount(), Money::from_kurus(6000));
        assert_eq!(basket.quantity_of(&LineKey::new(5, Serving::Cup)), 1);
    }

    #[test]
    fn test_add_action_carries_product() {
        let card = card();
        match card.add_action() {
            BasketAction::AddItem { product, serving } => {
                assert_eq!(product.id, 5);
                assert_eq!(serving, Serving::Cone);
            }
            other => panic!("unexpected action {other:?}"),
        }
    }
}
