//! Built-in catalogs backing the input surfaces.

/// Ingredient names offered by autocomplete, in suggestion order.
pub const COMMON_INGREDIENTS: &[&str] = &[
    "egg", "cheese", "spinach", "milk", "onion", "tomato", "garlic", "chicken", "beef", "rice",
    "pasta", "potato", "carrot", "broccoli",
];

/// Dietary filters the interface offers.
pub const DIETARY_FILTERS: &[&str] = &[
    "Vegetarian",
    "Vegan",
    "Gluten-Free",
    "Under 30 Min",
    "High Protein",
];
