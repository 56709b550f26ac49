use diesel::prelude::*;

use crate::schema::{chef_profiles, chefs, ingredients, recipe_ingredients, recipes};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = chefs)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Chef {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = chefs)]
pub struct NewChef<'a> {
    pub name: &'a str,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = chef_profiles)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ChefProfile {
    pub id: i32,
    pub specialty: Option<String>,
    pub years_experience: Option<i32>,
    pub chef_id: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = chef_profiles)]
pub struct NewChefProfile<'a> {
    pub specialty: Option<&'a str>,
    pub years_experience: Option<i32>,
    pub chef_id: i32,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = recipes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Recipe {
    pub id: i32,
    pub title: String,
    pub instructions: String,
    pub chef_id: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = recipes)]
pub struct NewRecipe<'a> {
    pub title: &'a str,
    pub instructions: &'a str,
    pub chef_id: i32,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = ingredients)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Ingredient {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = ingredients)]
pub struct NewIngredient<'a> {
    pub name: &'a str,
}

// Junction row; (recipe_id, ingredient_id) is the composite primary key.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = recipe_ingredients)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct RecipeIngredient {
    pub recipe_id: i32,
    pub ingredient_id: i32,
    pub quantity: String,
}
