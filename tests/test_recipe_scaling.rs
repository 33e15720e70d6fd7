use recipe_scout::recipe::{prep_time_minutes, DEFAULT_SERVINGS};
use recipe_scout::{Ingredient, Recipe, ScaleDirection};

fn sample_recipe() -> Recipe {
    Recipe {
        id: "r42".to_string(),
        title: "Pancakes".to_string(),
        author: "Test Kitchen".to_string(),
        image_url: "http://img.example/42.jpg".to_string(),
        source_url: "http://example.com/pancakes".to_string(),
        servings: DEFAULT_SERVINGS,
        prep_time_minutes: prep_time_minutes(2),
        ingredients: vec![
            Ingredient {
                count: 2.0,
                unit: "cup".to_string(),
                name: "flour".to_string(),
            },
            Ingredient {
                count: 0.5,
                unit: "tsp".to_string(),
                name: "salt".to_string(),
            },
        ],
    }
}

#[test]
fn increase_scales_counts_proportionally() {
    let mut recipe = sample_recipe();
    recipe.rescale(ScaleDirection::Increase);

    assert_eq!(recipe.servings, 5);
    assert!((recipe.ingredients[0].count - 2.5).abs() < 1e-12);
    assert!((recipe.ingredients[1].count - 0.625).abs() < 1e-12);
}

#[test]
fn up_then_down_returns_near_original() {
    let mut recipe = sample_recipe();
    let original: Vec<f64> = recipe.ingredients.iter().map(|i| i.count).collect();

    recipe.rescale(ScaleDirection::Increase);
    recipe.rescale(ScaleDirection::Decrease);

    assert_eq!(recipe.servings, DEFAULT_SERVINGS);
    for (ingredient, original) in recipe.ingredients.iter().zip(original) {
        // Not exact: successive multiplication drifts
        assert!((ingredient.count - original).abs() < 1e-9);
    }
}

#[test]
fn decrease_floors_at_one_serving() {
    let mut recipe = sample_recipe();
    for _ in 0..10 {
        recipe.rescale(ScaleDirection::Decrease);
    }
    assert_eq!(recipe.servings, 1);

    let counts: Vec<f64> = recipe.ingredients.iter().map(|i| i.count).collect();
    recipe.rescale(ScaleDirection::Decrease);
    assert_eq!(recipe.servings, 1);
    // The no-op must not touch the counts either
    let after: Vec<f64> = recipe.ingredients.iter().map(|i| i.count).collect();
    assert_eq!(counts, after);
}

#[test]
fn prep_time_heuristic() {
    assert_eq!(prep_time_minutes(3), 15);
    assert_eq!(prep_time_minutes(4), 30);
    assert_eq!(prep_time_minutes(9), 45);
    assert_eq!(prep_time_minutes(10), 60);
}
