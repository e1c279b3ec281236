use larder_core::{RecipeDetails, RecipeSections};

pub fn print_recipe(details: &RecipeDetails) {
    println!("{}", details.name);
    println!(
        "{} | {} | serves {}",
        details.constraints.diet, details.constraints.cuisine, details.constraints.serving_size
    );
    println!();
    print_sections(&details.sections);
}

pub fn print_sections(sections: &RecipeSections) {
    if sections.is_empty() {
        println!("(no recipe sections found)");
        return;
    }

    let fields = [
        ("Ingredients", &sections.ingredients),
        ("Prep time", &sections.prep_time),
        ("Cook time", &sections.cook_time),
        ("Equipment", &sections.equipment),
        ("Serving size", &sections.serving_size),
        ("Calories", &sections.calories),
        ("Instructions", &sections.instructions),
        ("Tips", &sections.tips),
    ];

    for (title, body) in fields {
        if body.is_empty() {
            continue;
        }
        println!("== {} ==", title);
        println!("{}", body);
        println!();
    }
}
