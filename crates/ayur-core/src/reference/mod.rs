//! Static per-dosha content: descriptions, food guidance, weekly meal
//! plans, recipes, nutrition targets and the weekly shopping list.
//! Read-only lookup tables, mostly keyed by
//! [`Dosha`](crate::models::dosha::Dosha).

pub mod nutrition;
pub mod profiles;
pub mod recipes;
pub mod shopping;

pub use nutrition::{NutritionTargets, nutrition_targets};
pub use profiles::{DayPlan, DoshaProfile, profile};
pub use recipes::{Recipe, recipes};
pub use shopping::{ShoppingCategory, shopping_items, shopping_list};
