use serde::Serialize;

use crate::models::dosha::Dosha;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Recipe {
    pub name: &'static str,
    pub time: &'static str,
    pub serves: u32,
    pub difficulty: &'static str,
    pub ingredients: &'static [&'static str],
    pub instructions: &'static [&'static str],
}

/// Balancing recipes for a dosha. May be empty.
pub fn recipes(dosha: Dosha) -> &'static [Recipe] {
    match dosha {
        Dosha::Vata => VATA,
        Dosha::Pitta => PITTA,
        Dosha::Kapha => KAPHA,
    }
}

static VATA: &[Recipe] = &[Recipe {
    name: "Khichdi (Vata Balancing)",
    time: "25 min",
    serves: 4,
    difficulty: "Easy",
    ingredients: &[
        "1 cup basmati rice",
        "1/2 cup moong dal",
        "1 tsp ghee",
        "1/2 tsp turmeric",
        "Salt to taste",
        "4 cups water",
    ],
    instructions: &[
        "Wash rice and dal together thoroughly",
        "Heat ghee in pressure cooker",
        "Add rice, dal, turmeric and salt",
        "Add 4 cups water and mix well",
        "Pressure cook for 3 whistles",
        "Let pressure release naturally",
        "Serve hot with additional ghee",
    ],
}];

static PITTA: &[Recipe] = &[Recipe {
    name: "Cooling Cucumber Raita",
    time: "10 min",
    serves: 4,
    difficulty: "Easy",
    ingredients: &[
        "2 cucumbers, grated",
        "1 cup fresh yogurt",
        "1 tsp roasted cumin powder",
        "Fresh mint leaves",
        "Salt to taste",
        "1 tsp honey",
    ],
    instructions: &[
        "Grate cucumbers and squeeze out excess water",
        "Beat yogurt until smooth",
        "Mix cucumbers with yogurt",
        "Add cumin powder, mint, salt and honey",
        "Chill for 30 minutes before serving",
        "Garnish with fresh mint leaves",
    ],
}];

static KAPHA: &[Recipe] = &[Recipe {
    name: "Spiced Barley Soup",
    time: "30 min",
    serves: 4,
    difficulty: "Medium",
    ingredients: &[
        "1 cup pearl barley",
        "2 tsp ginger-garlic paste",
        "1 tsp turmeric",
        "1 tsp black pepper",
        "Mixed vegetables",
        "4 cups water",
        "Salt to taste",
    ],
    instructions: &[
        "Soak barley for 2 hours",
        "Heat oil and add ginger-garlic paste",
        "Add turmeric, pepper and vegetables",
        "Add barley and water",
        "Cook until barley is soft",
        "Season with salt and serve hot",
    ],
}];
