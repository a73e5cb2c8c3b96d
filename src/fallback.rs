use crate::model::Recipe;

/// The fixed recipes served when the generation service cannot deliver.
///
/// Content is deterministic so an offline or broken backend still yields a
/// populated screen. The two entries are part of the client contract and
/// must not change between calls.
pub fn sample_recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            title: "Spinach Omelette".to_string(),
            description: "A quick and healthy breakfast with eggs and spinach.".to_string(),
            duration: "10 min".to_string(),
            difficulty: "Easy".to_string(),
            servings: 1,
            ingredients: vec![
                "eggs".to_string(),
                "spinach".to_string(),
                "cheese".to_string(),
            ],
            steps: vec![
                "Beat eggs in a bowl.".to_string(),
                "Add chopped spinach and shredded cheese.".to_string(),
                "Cook in a non-stick pan until done.".to_string(),
            ],
            notes: Some("Great with toast or avocado!".to_string()),
            image_url: Some("https://source.unsplash.com/512x512/?omelette,food".to_string()),
        },
        Recipe {
            title: "Cheesy Quesadilla".to_string(),
            description: "Crispy tortillas stuffed with gooey cheese.".to_string(),
            duration: "15 min".to_string(),
            difficulty: "Medium".to_string(),
            servings: 2,
            ingredients: vec![
                "tortilla".to_string(),
                "cheese".to_string(),
                "onions".to_string(),
            ],
            steps: vec![
                "Heat tortilla in a pan.".to_string(),
                "Add cheese and onions, fold and grill.".to_string(),
                "Slice and serve hot.".to_string(),
            ],
            notes: Some("Try dipping in salsa or sour cream.".to_string()),
            image_url: Some("https://source.unsplash.com/512x512/?quesadilla,food".to_string()),
        },
    ]
}
