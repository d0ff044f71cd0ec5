//! Product rendering for the menus.

use std::io::{self, Write};

use stockdesk_catalog::Product;

/// Write one product per line, or a placeholder for an empty listing.
pub fn write_products<'a, W: Write>(
    writer: &mut W,
    products: impl Iterator<Item = &'a Product>,
) -> io::Result<()> {
    let mut empty = true;
    for product in products {
        writeln!(writer, "{product}")?;
        empty = false;
    }
    if empty {
        writeln!(writer, "(no products)")?;
    }
    Ok(())
}

/// Render the listing as pretty-printed JSON, for piping into other tools.
pub fn products_to_json<'a>(
    products: impl Iterator<Item = &'a Product>,
) -> serde_json::Result<String> {
    let all: Vec<&Product> = products.collect();
    serde_json::to_string_pretty(&all)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockdesk_core::ProductId;

    fn sample() -> Product {
        Product::new(
            ProductId::new("P-1").unwrap(),
            "Smartphone",
            "Electronics",
            49_999,
            12,
        )
        .unwrap()
    }

    #[test]
    fn listing_prints_one_product_per_line() {
        let products = [sample()];
        let mut out = Vec::new();
        write_products(&mut out, products.iter()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Product(P-1, Smartphone, Electronics, 499.99, 12)\n"
        );
    }

    #[test]
    fn empty_listing_prints_a_placeholder() {
        let products: [Product; 0] = [];
        let mut out = Vec::new();
        write_products(&mut out, products.iter()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "(no products)\n");
    }

    #[test]
    fn json_listing_round_trips_field_values() {
        let products = [sample()];
        let json = products_to_json(products.iter()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["id"], "P-1");
        assert_eq!(parsed[0]["price_cents"], 49_999);
        assert_eq!(parsed[0]["stock_quantity"], 12);
    }
}
