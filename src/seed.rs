//! Demonstration dataset for the `init-db` command. The schema is dropped
//! and rebuilt, then every row is inserted inside the same transaction, so
//! a failed seed leaves nothing behind and a repeated seed is a reset.

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::db;
use crate::models::{
    Chef, Ingredient, NewChef, NewChefProfile, NewIngredient, NewRecipe, Recipe, RecipeIngredient,
};
use crate::schema::{chef_profiles, chefs, ingredients, recipe_ingredients, recipes};

pub fn run(conn: &mut SqliteConnection) -> QueryResult<()> {
    conn.transaction(|conn| {
        db::reset_schema(conn)?;

        let ana = add_chef(conn, "Ana Maria")?;
        let erick = add_chef(conn, "Érick Jacquin")?;
        add_profile(conn, ana.id, "Culinária Brasileira", 25)?;
        add_profile(conn, erick.id, "Culinária Francesa", 30)?;

        let tomate = add_ingredient(conn, "tomate")?;
        let cebola = add_ingredient(conn, "cebola")?;
        let farinha = add_ingredient(conn, "farinha")?;
        let ovo = add_ingredient(conn, "ovo")?;
        let manteiga = add_ingredient(conn, "manteiga")?;

        let molho = add_recipe(
            conn,
            "Molho de Tomate Clássico",
            "Refogue a cebola, junte os tomates picados e cozinhe em fogo baixo até encorpar.",
            ana.id,
        )?;
        let bolo = add_recipe(
            conn,
            "Bolo Simples",
            "Misture os ingredientes secos, acrescente os ovos e asse por quarenta minutos.",
            ana.id,
        )?;
        let gateau = add_recipe(
            conn,
            "Petit Gâteau",
            "Derreta a manteiga com o chocolate, envolva a massa e asse por poucos minutos.",
            erick.id,
        )?;

        let associations = vec![
            association(&molho, &tomate, "5 unidades"),
            association(&molho, &cebola, "1 unidade"),
            association(&bolo, &farinha, "2 xícaras"),
            association(&bolo, &ovo, "3 unidades"),
            association(&gateau, &manteiga, "150g"),
        ];
        diesel::insert_into(recipe_ingredients::table)
            .values(&associations)
            .execute(conn)?;

        Ok(())
    })
}

fn add_chef(conn: &mut SqliteConnection, name: &str) -> QueryResult<Chef> {
    diesel::insert_into(chefs::table)
        .values(&NewChef { name })
        .returning(Chef::as_returning())
        .get_result(conn)
}

fn add_profile(
    conn: &mut SqliteConnection,
    chef_id: i32,
    specialty: &str,
    years_experience: i32,
) -> QueryResult<usize> {
    diesel::insert_into(chef_profiles::table)
        .values(&NewChefProfile {
            specialty: Some(specialty),
            years_experience: Some(years_experience),
            chef_id,
        })
        .execute(conn)
}

fn add_ingredient(conn: &mut SqliteConnection, name: &str) -> QueryResult<Ingredient> {
    diesel::insert_into(ingredients::table)
        .values(&NewIngredient { name })
        .returning(Ingredient::as_returning())
        .get_result(conn)
}

fn add_recipe(
    conn: &mut SqliteConnection,
    title: &str,
    instructions: &str,
    chef_id: i32,
) -> QueryResult<Recipe> {
    diesel::insert_into(recipes::table)
        .values(&NewRecipe {
            title,
            instructions,
            chef_id,
        })
        .returning(Recipe::as_returning())
        .get_result(conn)
}

fn association(recipe: &Recipe, ingredient: &Ingredient, quantity: &str) -> RecipeIngredient {
    RecipeIngredient {
        recipe_id: recipe.id,
        ingredient_id: ingredient.id,
        quantity: quantity.to_string(),
    }
}
