use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::models::{
    Chef, ChefProfile, Ingredient, NewIngredient, NewRecipe, Recipe, RecipeIngredient,
};
use crate::schema::{chef_profiles, chefs, ingredients, recipe_ingredients, recipes};

/// One recipe as shown on the listing page: the row itself, the owning
/// chef's name and the (ingredient name, quantity) pairs.
pub struct RecipeListing {
    pub recipe: Recipe,
    pub chef_name: String,
    pub ingredients: Vec<(String, String)>,
}

/// Everything the chef detail page needs, resolved by id.
pub struct ChefDetail {
    pub chef: Chef,
    pub profile: Option<ChefProfile>,
    pub recipes: Vec<Recipe>,
}

pub fn load_recipe_listings(conn: &mut SqliteConnection) -> QueryResult<Vec<RecipeListing>> {
    let rows = recipes::table
        .inner_join(chefs::table)
        .select((Recipe::as_select(), chefs::name))
        .load::<(Recipe, String)>(conn)?;

    rows.into_iter()
        .map(|(recipe, chef_name)| {
            let ingredients = find_recipe_ingredients(conn, recipe.id)?;
            Ok(RecipeListing {
                recipe,
                chef_name,
                ingredients,
            })
        })
        .collect()
}

pub fn find_recipe_ingredients(
    conn: &mut SqliteConnection,
    recipe_id: i32,
) -> QueryResult<Vec<(String, String)>> {
    recipe_ingredients::table
        .inner_join(ingredients::table)
        .filter(recipe_ingredients::recipe_id.eq(recipe_id))
        .select((ingredients::name, recipe_ingredients::quantity))
        .load(conn)
}

pub fn find_all_chefs(conn: &mut SqliteConnection) -> QueryResult<Vec<Chef>> {
    chefs::table.select(Chef::as_select()).load(conn)
}

pub fn load_chef_detail(
    conn: &mut SqliteConnection,
    chef_id: i32,
) -> QueryResult<Option<ChefDetail>> {
    let chef = chefs::table
        .find(chef_id)
        .select(Chef::as_select())
        .first(conn)
        .optional()?;
    let Some(chef) = chef else {
        return Ok(None);
    };

    let profile = chef_profiles::table
        .filter(chef_profiles::chef_id.eq(chef_id))
        .select(ChefProfile::as_select())
        .first(conn)
        .optional()?;
    let recipes = recipes::table
        .filter(recipes::chef_id.eq(chef_id))
        .select(Recipe::as_select())
        .load(conn)?;

    Ok(Some(ChefDetail {
        chef,
        profile,
        recipes,
    }))
}

/// Looks an ingredient up by its normalized name, inserting it on a miss.
/// The check-then-insert pair is not guarded against concurrent creation;
/// the UNIQUE constraint on the name column is the backstop.
pub fn find_or_create_ingredient(
    conn: &mut SqliteConnection,
    name: &str,
) -> QueryResult<Ingredient> {
    let existing = ingredients::table
        .filter(ingredients::name.eq(name))
        .select(Ingredient::as_select())
        .first(conn)
        .optional()?;

    match existing {
        Some(ingredient) => Ok(ingredient),
        None => diesel::insert_into(ingredients::table)
            .values(&NewIngredient { name })
            .returning(Ingredient::as_returning())
            .get_result(conn),
    }
}

/// Inserts the recipe and every ingredient association as one transaction.
/// `ingredient_pairs` must already be normalized (see `parse`).
pub fn create_recipe(
    conn: &mut SqliteConnection,
    title: &str,
    instructions: &str,
    chef_id: i32,
    ingredient_pairs: &[(String, String)],
) -> QueryResult<Recipe> {
    conn.transaction(|conn| {
        let recipe = diesel::insert_into(recipes::table)
            .values(&NewRecipe {
                title,
                instructions,
                chef_id,
            })
            .returning(Recipe::as_returning())
            .get_result(conn)?;

        for (name, quantity) in ingredient_pairs {
            let ingredient = find_or_create_ingredient(conn, name)?;
            diesel::insert_into(recipe_ingredients::table)
                .values(&RecipeIngredient {
                    recipe_id: recipe.id,
                    ingredient_id: ingredient.id,
                    quantity: quantity.clone(),
                })
                .execute(conn)?;
        }

        Ok(recipe)
    })
}

pub fn delete_recipe(conn: &mut SqliteConnection, recipe_id: i32) -> QueryResult<usize> {
    diesel::delete(recipes::table.find(recipe_id)).execute(conn)
}

pub fn delete_chef(conn: &mut SqliteConnection, chef_id: i32) -> QueryResult<usize> {
    diesel::delete(chefs::table.find(chef_id)).execute(conn)
}

pub fn delete_ingredient(conn: &mut SqliteConnection, ingredient_id: i32) -> QueryResult<usize> {
    diesel::delete(ingredients::table.find(ingredient_id)).execute(conn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use crate::models::{NewChef, NewChefProfile};
    use crate::parse::parse_ingredients;
    use diesel::result::{DatabaseErrorKind, Error};

    fn test_conn() -> SqliteConnection {
        let mut conn = db::establish_connection(":memory:");
        db::create_schema(&mut conn).unwrap();
        conn
    }

    fn add_chef(conn: &mut SqliteConnection, name: &str) -> Chef {
        diesel::insert_into(chefs::table)
            .values(&NewChef { name })
            .returning(Chef::as_returning())
            .get_result(conn)
            .unwrap()
    }

    #[test]
    fn recipes_sharing_an_ingredient_name_share_one_row() {
        let mut conn = test_conn();
        let chef = add_chef(&mut conn, "Ana Maria");

        let pairs = parse_ingredients("ovo:2 unidades");
        create_recipe(&mut conn, "Omelete", "Bater e fritar.", chef.id, &pairs).unwrap();
        let pairs = parse_ingredients("ovo:6 unidades, sal:1 pitada");
        create_recipe(&mut conn, "Ovos mexidos", "Mexer em fogo baixo.", chef.id, &pairs).unwrap();

        let total: i64 = ingredients::table.count().get_result(&mut conn).unwrap();
        assert_eq!(total, 2); // ovo reused, sal created

        let ovo = find_or_create_ingredient(&mut conn, "ovo").unwrap();
        let uses: i64 = recipe_ingredients::table
            .filter(recipe_ingredients::ingredient_id.eq(ovo.id))
            .count()
            .get_result(&mut conn)
            .unwrap();
        assert_eq!(uses, 2);
    }

    #[test]
    fn ingredient_names_are_case_and_whitespace_normalized() {
        let mut conn = test_conn();
        let chef = add_chef(&mut conn, "Ana Maria");

        let pairs = parse_ingredients(" Tomate :5 unidades");
        create_recipe(&mut conn, "Molho", "Cozinhar.", chef.id, &pairs).unwrap();
        let pairs = parse_ingredients("tomate:2 unidades");
        create_recipe(&mut conn, "Salada", "Fatiar.", chef.id, &pairs).unwrap();

        let total: i64 = ingredients::table.count().get_result(&mut conn).unwrap();
        assert_eq!(total, 1);
    }

    #[test]
    fn malformed_ingredient_field_creates_recipe_with_no_associations() {
        let mut conn = test_conn();
        let chef = add_chef(&mut conn, "Ana Maria");

        let pairs = parse_ingredients("nada aqui tem separador");
        let recipe = create_recipe(&mut conn, "Misterio", "Improvisar.", chef.id, &pairs).unwrap();

        let linked = find_recipe_ingredients(&mut conn, recipe.id).unwrap();
        assert!(linked.is_empty());
    }

    #[test]
    fn deleting_a_recipe_cascades_associations_but_keeps_ingredients() {
        let mut conn = test_conn();
        let chef = add_chef(&mut conn, "Ana Maria");

        let pairs = parse_ingredients("farinha:2 xicaras, ovo:3 unidades");
        let recipe = create_recipe(&mut conn, "Bolo", "Misturar e assar.", chef.id, &pairs).unwrap();

        assert_eq!(delete_recipe(&mut conn, recipe.id).unwrap(), 1);

        let associations: i64 = recipe_ingredients::table
            .count()
            .get_result(&mut conn)
            .unwrap();
        assert_eq!(associations, 0);
        let remaining: i64 = ingredients::table.count().get_result(&mut conn).unwrap();
        assert_eq!(remaining, 2);
    }

    #[test]
    fn deleting_an_ingredient_cascades_its_associations() {
        let mut conn = test_conn();
        let chef = add_chef(&mut conn, "Ana Maria");

        let pairs = parse_ingredients("farinha:2 xicaras, ovo:3 unidades");
        let recipe = create_recipe(&mut conn, "Bolo", "Misturar e assar.", chef.id, &pairs).unwrap();

        let farinha = find_or_create_ingredient(&mut conn, "farinha").unwrap();
        assert_eq!(delete_ingredient(&mut conn, farinha.id).unwrap(), 1);

        let linked = find_recipe_ingredients(&mut conn, recipe.id).unwrap();
        assert_eq!(linked, vec![("ovo".to_string(), "3 unidades".to_string())]);
    }

    #[test]
    fn deleting_a_chef_cascades_the_profile() {
        let mut conn = test_conn();
        let chef = add_chef(&mut conn, "Ana Maria");
        diesel::insert_into(chef_profiles::table)
            .values(&NewChefProfile {
                specialty: Some("Culinária Brasileira"),
                years_experience: Some(25),
                chef_id: chef.id,
            })
            .execute(&mut conn)
            .unwrap();

        assert_eq!(delete_chef(&mut conn, chef.id).unwrap(), 1);

        let profiles: i64 = chef_profiles::table.count().get_result(&mut conn).unwrap();
        assert_eq!(profiles, 0);
    }

    #[test]
    fn deleting_a_chef_who_owns_recipes_is_a_constraint_violation() {
        let mut conn = test_conn();
        let chef = add_chef(&mut conn, "Ana Maria");
        create_recipe(&mut conn, "Bolo", "Misturar e assar.", chef.id, &[]).unwrap();

        let err = delete_chef(&mut conn, chef.id).unwrap_err();
        assert!(matches!(
            err,
            Error::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _)
        ));
    }

    #[test]
    fn recipe_with_unknown_chef_is_rejected_by_the_foreign_key() {
        let mut conn = test_conn();

        let err = create_recipe(&mut conn, "Bolo", "Misturar.", 42, &[]).unwrap_err();
        assert!(matches!(
            err,
            Error::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _)
        ));
    }

    #[test]
    fn chef_detail_resolves_profile_and_recipes() {
        let mut conn = test_conn();
        let chef = add_chef(&mut conn, "Érick Jacquin");
        diesel::insert_into(chef_profiles::table)
            .values(&NewChefProfile {
                specialty: Some("Culinária Francesa"),
                years_experience: Some(30),
                chef_id: chef.id,
            })
            .execute(&mut conn)
            .unwrap();
        create_recipe(&mut conn, "Petit Gâteau", "Assar por pouco tempo.", chef.id, &[]).unwrap();

        let detail = load_chef_detail(&mut conn, chef.id).unwrap().unwrap();
        assert_eq!(detail.chef.name, "Érick Jacquin");
        assert_eq!(
            detail.profile.unwrap().specialty.as_deref(),
            Some("Culinária Francesa")
        );
        assert_eq!(detail.recipes.len(), 1);
    }

    #[test]
    fn chef_detail_is_none_for_unknown_id() {
        let mut conn = test_conn();
        assert!(load_chef_detail(&mut conn, 999).unwrap().is_none());
    }
}
