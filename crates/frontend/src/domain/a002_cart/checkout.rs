use contracts::domain::a002_cart::Cart;

use crate::shared::site_config::{format_price, whatsapp_link, SITE};

/// Текст заказа для WhatsApp: по строке на позицию плюс итоговая сумма.
pub fn order_message(cart: &Cart) -> String {
    let lines: Vec<String> = cart
        .items
        .iter()
        .map(|item| {
            let line_total = item.price.map(|p| p * item.quantity as f64);
            format!(
                "• {} x{} = {}",
                item.name,
                item.quantity,
                format_price(line_total)
            )
        })
        .collect();
    format!(
        "🛒 *Заказ с сайта {}*\n\n{}\n\n💰 *Итого: {}*\n\nПожалуйста, подтвердите заказ.",
        SITE.company.name,
        lines.join("\n"),
        format_price(Some(cart.total_price()))
    )
}

/// Ссылка "оформить заказ" с уже подставленным текстом.
pub fn checkout_link(cart: &Cart) -> String {
    whatsapp_link(&order_message(cart))
}

#[cfg(test)]
mod tests {
    use contracts::domain::a002_cart::CartItem;

    use super::*;

    fn cart() -> Cart {
        let mut cart = Cart::default();
        cart.add_item(CartItem::new(
            "a".to_string(),
            "Лампа настольная".to_string(),
            Some(1500.0),
            None,
        ));
        cart.add_item(CartItem::new(
            "a".to_string(),
            "Лампа настольная".to_string(),
            Some(1500.0),
            None,
        ));
        cart.add_item(CartItem::new(
            "b".to_string(),
            "Чайник".to_string(),
            None,
            None,
        ));
        cart
    }

    #[test]
    fn message_lists_every_line_and_the_total() {
        let message = order_message(&cart());
        assert!(message.contains("Заказ с сайта Paida All"));
        assert!(message.contains("• Лампа настольная x2 = 3\u{a0}000 ₸"));
        assert!(message.contains("• Чайник x1 = Цена не указана"));
        assert!(message.contains("Итого: 3\u{a0}000 ₸"));
    }

    #[test]
    fn checkout_link_points_to_whatsapp() {
        let link = checkout_link(&cart());
        assert!(link.starts_with("https://wa.me/77780855478?text="));
        assert!(!link.contains(' '));
    }
}
