diesel::table! {
    chefs (id) {
        id -> Integer,
        name -> Text,
    }
}

diesel::table! {
    chef_profiles (id) {
        id -> Integer,
        specialty -> Nullable<Text>,
        years_experience -> Nullable<Integer>,
        chef_id -> Integer,
    }
}

diesel::table! {
    recipes (id) {
        id -> Integer,
        title -> Text,
        instructions -> Text,
        chef_id -> Integer,
    }
}

diesel::table! {
    ingredients (id) {
        id -> Integer,
        name -> Text,
    }
}

diesel::table! {
    recipe_ingredients (recipe_id, ingredient_id) {
        recipe_id -> Integer,
        ingredient_id -> Integer,
        quantity -> Text,
    }
}

diesel::joinable!(chef_profiles -> chefs (chef_id));
diesel::joinable!(recipes -> chefs (chef_id));
diesel::joinable!(recipe_ingredients -> recipes (recipe_id));
diesel::joinable!(recipe_ingredients -> ingredients (ingredient_id));

diesel::allow_tables_to_appear_in_same_query!(
    chefs,
    chef_profiles,
    recipes,
    ingredients,
    recipe_ingredients,
);
