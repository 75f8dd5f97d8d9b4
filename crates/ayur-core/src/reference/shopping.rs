use serde::Serialize;

/// Quantity every shopping list item is bought in.
pub const SUPPLY: &str = "1 week supply";

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ShoppingCategory {
    pub name: &'static str,
    pub items: &'static [&'static str],
}

static SHOPPING_LIST: [ShoppingCategory; 5] = [
    ShoppingCategory {
        name: "Grains",
        items: &["Rice", "Oats", "Quinoa", "Barley"],
    },
    ShoppingCategory {
        name: "Pulses",
        items: &["Moong dal", "Chana dal", "Masoor dal"],
    },
    ShoppingCategory {
        name: "Vegetables",
        items: &["Carrots", "Spinach", "Tomatoes", "Onions"],
    },
    ShoppingCategory {
        name: "Spices",
        items: &["Turmeric", "Ginger", "Cumin", "Coriander"],
    },
    ShoppingCategory {
        name: "Others",
        items: &["Ghee", "Oil", "Salt", "Jaggery"],
    },
];

/// Staples for a week of meals, grouped by category. The same list serves
/// every dosha.
pub fn shopping_list() -> &'static [ShoppingCategory] {
    &SHOPPING_LIST
}

/// Flattened list entries, e.g. `Rice (1 week supply)`.
pub fn shopping_items() -> impl Iterator<Item = String> {
    SHOPPING_LIST
        .iter()
        .flat_map(|c| c.items.iter())
        .map(|item| format!("{item} ({SUPPLY})"))
}
