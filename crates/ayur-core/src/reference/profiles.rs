use serde::Serialize;

use crate::models::dosha::Dosha;

/// The four meal slots for one day.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DayPlan {
    pub day: &'static str,
    pub breakfast: &'static str,
    pub lunch: &'static str,
    pub dinner: &'static str,
    pub snacks: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct DoshaProfile {
    pub dosha: Dosha,
    pub description: &'static str,
    pub traits: &'static [&'static str],
    /// Guiding principles for meals.
    pub principles: &'static [&'static str],
    pub foods_favor: &'static [&'static str],
    pub foods_avoid: &'static [&'static str],
    pub lifestyle: &'static str,
    pub cooking_tips: &'static [&'static str],
    /// Monday through Sunday.
    pub weekly_plan: [DayPlan; 7],
}

pub fn profile(dosha: Dosha) -> &'static DoshaProfile {
    match dosha {
        Dosha::Vata => &VATA,
        Dosha::Pitta => &PITTA,
        Dosha::Kapha => &KAPHA,
    }
}

const fn day(
    day: &'static str,
    breakfast: &'static str,
    lunch: &'static str,
    dinner: &'static str,
    snacks: &'static str,
) -> DayPlan {
    DayPlan {
        day,
        breakfast,
        lunch,
        dinner,
        snacks,
    }
}

static VATA: DoshaProfile = DoshaProfile {
    dosha: Dosha::Vata,
    description: "Air and Space elements. Quick thinking, creative, energetic but prone to anxiety and irregularity. Vata types are naturally thin, with dry skin and variable appetite. They are creative and enthusiastic when in balance, but can become anxious and restless when imbalanced.",
    traits: &["Quick thinking", "Creative", "Energetic", "Variable appetite", "Light sleep", "Dry skin"],
    principles: &["Warm foods", "Regular meals", "Healthy fats", "Sweet, sour, salty tastes"],
    foods_favor: &["Warm foods", "Sweet fruits", "Rice", "Nuts", "Dairy", "Ghee", "Cooked vegetables"],
    foods_avoid: &["Raw foods", "Dry foods", "Caffeine", "Beans", "Cold foods", "Bitter vegetables"],
    lifestyle: "Regular routine, warm environment, gentle exercise, oil massage, adequate sleep",
    cooking_tips: &[
        "Cook with warming spices like ginger and cinnamon",
        "Use adequate oil or ghee in cooking",
        "Prefer steaming and sautéing over raw preparations",
        "Eat meals warm and at regular times",
    ],
    weekly_plan: [
        day(
            "Monday",
            "Warm oatmeal with ghee, dates and almonds",
            "Rice with moong dal, cooked vegetables and ghee",
            "Khichdi with vegetables and warm milk",
            "Dates, nuts and herbal tea",
        ),
        day(
            "Tuesday",
            "Upma with vegetables and coconut",
            "Chapati with dal, cooked spinach and ghee",
            "Vegetable soup with bread and butter",
            "Banana with almonds and warm water",
        ),
        day(
            "Wednesday",
            "Poha with peanuts and ghee",
            "Rice with rajma and cooked carrots",
            "Moong dal khichdi with ghee",
            "Sweet lassi and dates",
        ),
        day(
            "Thursday",
            "Paratha with curd and jaggery",
            "Rice with sambhar and cooked vegetables",
            "Vegetable pulav with raita",
            "Herbal tea with digestive biscuits",
        ),
        day(
            "Friday",
            "Daliya with milk and nuts",
            "Chapati with chana dal and cooked bottle gourd",
            "Rice with rasam and steamed vegetables",
            "Coconut water and cashews",
        ),
        day(
            "Saturday",
            "Idli with sambhar and coconut chutney",
            "Rice with curd and cooked beetroot",
            "Vegetable kheer and rotis",
            "Warm milk with turmeric and honey",
        ),
        day(
            "Sunday",
            "Pancakes with ghee and honey",
            "Biryani with raita and cooked vegetables",
            "Light soup with bread and ghee",
            "Fresh fruit juice and nuts",
        ),
    ],
};

static PITTA: DoshaProfile = DoshaProfile {
    dosha: Dosha::Pitta,
    description: "Fire and Water elements. Intelligent, focused, strong digestion but prone to anger and heat. Pitta types have medium build, warm skin, and strong appetite. They are natural leaders with sharp intellect, but can become irritable and impatient when imbalanced.",
    traits: &["Intelligent", "Focused", "Strong digestion", "Competitive", "Good leadership", "Warm skin"],
    principles: &["Cool foods", "Moderate portions", "Sweet, bitter, astringent tastes"],
    foods_favor: &["Cool foods", "Sweet fruits", "Leafy greens", "Coconut", "Milk", "Cucumber", "Rice"],
    foods_avoid: &["Spicy foods", "Sour foods", "Alcohol", "Red meat", "Hot foods", "Vinegar"],
    lifestyle: "Moderate exercise, cool environment, avoid overwork, meditation, stress management",
    cooking_tips: &[
        "Use cooling spices like coriander and fennel",
        "Avoid excessive heating and frying",
        "Include fresh herbs like cilantro and mint",
        "Cook with coconut oil or moderate ghee",
    ],
    weekly_plan: [
        day(
            "Monday",
            "Cool cereal with milk and sweet fruits",
            "Rice with cooling vegetables and coconut",
            "Light salad with cooling herbs and buttermilk",
            "Sweet fruits and coconut water",
        ),
        day(
            "Tuesday",
            "Oats with banana and milk",
            "Chapati with bottle gourd curry and curd",
            "Rice with moong dal and steamed broccoli",
            "Lassi and cucumber slices",
        ),
        day(
            "Wednesday",
            "Poha with coconut and mint",
            "Rice with ridge gourd curry and buttermilk",
            "Vegetable salad with yogurt dressing",
            "Watermelon juice and almonds",
        ),
        day(
            "Thursday",
            "Upma with vegetables and coconut",
            "Rice with ash gourd curry and curd",
            "Light khichdi with ghee and coriander",
            "Coconut water and sweet grapes",
        ),
        day(
            "Friday",
            "Cornflakes with cold milk and banana",
            "Chapati with cucumber raita and mint chutney",
            "Rice with cooling dal and steamed cabbage",
            "Melon juice and pistachios",
        ),
        day(
            "Saturday",
            "Idli with coconut chutney and sambhar",
            "Rice with snake gourd curry and buttermilk",
            "Vegetable soup with bread and butter",
            "Rose milk and dates",
        ),
        day(
            "Sunday",
            "Dosa with coconut chutney and sambhar",
            "Rice with white pumpkin curry and curd",
            "Light salad with cooling herbs",
            "Fresh lime water and cashews",
        ),
    ],
};

static KAPHA: DoshaProfile = DoshaProfile {
    dosha: Dosha::Kapha,
    description: "Earth and Water elements. Calm, stable, strong immunity but prone to weight gain and sluggishness. Kapha types have heavy build, smooth skin, and steady appetite. They are naturally calm and patient, but can become lethargic and possessive when imbalanced.",
    traits: &["Calm", "Stable", "Strong immunity", "Slow metabolism", "Good memory", "Smooth skin"],
    principles: &["Light foods", "Warm spices", "Pungent, bitter, astringent tastes"],
    foods_favor: &["Spicy foods", "Light foods", "Ginger", "Honey", "Vegetables", "Herbal teas", "Barley"],
    foods_avoid: &["Heavy foods", "Dairy", "Sweet foods", "Cold foods", "Oily foods", "Nuts"],
    lifestyle: "Regular vigorous exercise, warm dry environment, early rising, active lifestyle",
    cooking_tips: &[
        "Use warming spices like black pepper and mustard seeds",
        "Minimize oil and heavy ingredients",
        "Prefer baking, roasting, and steaming",
        "Include plenty of vegetables and light proteins",
    ],
    weekly_plan: [
        day(
            "Monday",
            "Herbal tea with light spiced porridge",
            "Barley with spiced vegetables and ginger",
            "Light vegetable soup with warming spices",
            "Spiced tea and light crackers",
        ),
        day(
            "Tuesday",
            "Green tea with steamed vegetables",
            "Millet with spicy dal and cooked greens",
            "Clear broth with vegetables and herbs",
            "Ginger tea and rice cakes",
        ),
        day(
            "Wednesday",
            "Herbal decoction with light breakfast",
            "Quinoa with spiced cauliflower and radish",
            "Vegetable clear soup with black pepper",
            "Warm water with honey and lemon",
        ),
        day(
            "Thursday",
            "Spiced tea with steamed sprouts",
            "Barley with bitter gourd and turmeric",
            "Light khichdi with minimal ghee",
            "Herbal tea and puffed rice",
        ),
        day(
            "Friday",
            "Green tea with vegetable upma",
            "Millet with spiced okra and ginger",
            "Clear vegetable broth with herbs",
            "Warm water with honey and cinnamon",
        ),
        day(
            "Saturday",
            "Herbal tea with light idli and sambhar",
            "Quinoa with spiced cabbage and turmeric",
            "Light soup with warming spices",
            "Ginger tea and roasted chickpeas",
        ),
        day(
            "Sunday",
            "Spiced tea with steamed vegetables",
            "Barley with spiced eggplant and coriander",
            "Clear broth with vegetables and black pepper",
            "Herbal decoction and light snacks",
        ),
    ],
};
