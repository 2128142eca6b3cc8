//! Products section - the catalog grid.

use tienda_commerce::catalog::Product;

use super::html_escape;
use crate::config::Messages;

/// Render the product grid, or the empty-catalog notice.
pub fn render_products(products: &[Product], messages: &Messages) -> String {
    if products.is_empty() {
        return format!("<p>{}</p>", html_escape(&messages.no_products));
    }

    products
        .iter()
        .map(|product| render_product_card(product, messages))
        .collect()
}

/// Render a single product card.
pub fn render_product_card(product: &Product, messages: &Messages) -> String {
    let id = product.id;
    let name = html_escape(&product.name);
    let image = html_escape(safe_image_src(&product.image_url));
    let price = html_escape(&product.price_display());
    let add_label = html_escape(&messages.add_label);
    let remove_label = html_escape(&messages.remove_label);

    format!(
        r#"<article class="product-card" data-product-id="{id}">
    <div class="product-image-wrapper">
        <img src="{image}" alt="{name}" loading="lazy">
    </div>
    <div class="product-name">{name}</div>
    <div class="product-price">{price}</div>
    <div class="product-actions">
        <button class="btn-secondary" data-action="remove" data-id="{id}">{remove_label}</button>
        <button class="btn-primary" data-action="add" data-id="{id}">{add_label}</button>
    </div>
</article>"#
    )
}

/// Only http(s), inline images and relative paths are allowed as image sources.
fn safe_image_src(url: &str) -> &str {
    let trimmed = url.trim();
    let lower = trimmed.to_ascii_lowercase();

    let has_scheme = lower
        .split_once(':')
        .map(|(scheme, _)| {
            !scheme.is_empty()
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        })
        .unwrap_or(false);

    if !has_scheme
        || lower.starts_with("http://")
        || lower.starts_with("https://")
        || lower.starts_with("data:image/")
    {
        trimmed
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tienda_commerce::{Currency, Money};

    fn product(id: i64, name: &str, cents: i64, image: &str) -> Product {
        Product::new(id, name, Money::new(cents, Currency::USD), image)
    }

    #[test]
    fn test_empty_catalog_notice() {
        let html = render_products(&[], &Messages::default());
        assert_eq!(html, "<p>No hay productos disponibles.</p>");
    }

    #[test]
    fn test_card_contents() {
        let html = render_products(
            &[product(1, "Camiseta", 1990, "https://cdn.example.com/1.jpg")],
            &Messages::default(),
        );

        assert!(html.contains(r#"<article class="product-card" data-product-id="1">"#));
        assert!(html.contains(r#"<img src="https://cdn.example.com/1.jpg" alt="Camiseta" loading="lazy">"#));
        assert!(html.contains(r#"<div class="product-name">Camiseta</div>"#));
        assert!(html.contains(r#"<div class="product-price">$19.90</div>"#));
        assert!(html.contains(r#"data-action="remove" data-id="1">-</button>"#));
        assert!(html.contains(r#"data-action="add" data-id="1">Añadir</button>"#));
    }

    #[test]
    fn test_cards_in_given_order() {
        let html = render_products(
            &[product(7, "B", 100, ""), product(3, "A", 100, "")],
            &Messages::default(),
        );

        let seven = html.find(r#"data-product-id="7""#).unwrap();
        let three = html.find(r#"data-product-id="3""#).unwrap();
        assert!(seven < three);
        assert_eq!(html.matches("<article").count(), 2);
    }

    #[test]
    fn test_name_is_escaped() {
        let html = render_products(
            &[product(1, r#"<script>alert("x")</script>"#, 100, "")],
            &Messages::default(),
        );

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;"));
    }

    #[test]
    fn test_image_url_cannot_break_attribute() {
        let html = render_products(
            &[product(1, "A", 100, r#"/img/a.png" onerror="alert(1)"#)],
            &Messages::default(),
        );

        assert!(html.contains(r#"src="/img/a.png&quot; onerror=&quot;alert(1)""#));
    }

    #[test]
    fn test_script_urls_dropped() {
        assert_eq!(safe_image_src("javascript:alert(1)"), "");
        assert_eq!(safe_image_src(" JavaScript:alert(1)"), "");
        assert_eq!(safe_image_src("https://cdn/a.png"), "https://cdn/a.png");
        assert_eq!(safe_image_src("/img/a.png"), "/img/a.png");
        assert_eq!(safe_image_src("data:image/png;base64,AAAA"), "data:image/png;base64,AAAA");
    }
}
