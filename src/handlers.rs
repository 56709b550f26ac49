use actix_web::{get, http::header, post, web, HttpResponse};
use serde::Deserialize;

use crate::db::DbPool;
use crate::error::AppError;
use crate::models::Chef;
use crate::query::{self, ChefDetail, RecipeListing};
use crate::{parse, views};

/// Form fields of the creation page, named after the original form.
#[derive(Debug, Deserialize)]
pub struct RecipeForm {
    pub titulo: String,
    pub instrucoes: String,
    pub chef_id: i32,
    pub ingredientes: String,
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

#[get("/")]
async fn index(pool: web::Data<DbPool>) -> Result<HttpResponse, AppError> {
    let listings = web::block(move || -> Result<Vec<RecipeListing>, AppError> {
        let mut conn = pool.get()?;
        Ok(query::load_recipe_listings(&mut conn)?)
    })
    .await
    .map_err(|_| AppError::Canceled)??;

    Ok(html(views::index_page(&listings)))
}

#[get("/receita/nova")]
async fn new_recipe_form(pool: web::Data<DbPool>) -> Result<HttpResponse, AppError> {
    let chefs = web::block(move || -> Result<Vec<Chef>, AppError> {
        let mut conn = pool.get()?;
        Ok(query::find_all_chefs(&mut conn)?)
    })
    .await
    .map_err(|_| AppError::Canceled)??;

    Ok(html(views::new_recipe_page(&chefs)))
}

#[post("/receita/nova")]
async fn create_recipe(
    pool: web::Data<DbPool>,
    form: web::Form<RecipeForm>,
) -> Result<HttpResponse, AppError> {
    let form = form.into_inner();

    web::block(move || -> Result<(), AppError> {
        let mut conn = pool.get()?;
        let pairs = parse::parse_ingredients(&form.ingredientes);
        query::create_recipe(&mut conn, &form.titulo, &form.instrucoes, form.chef_id, &pairs)?;
        Ok(())
    })
    .await
    .map_err(|_| AppError::Canceled)??;

    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, "/"))
        .finish())
}

#[get("/chef/{chef_id}")]
async fn chef_detail(
    pool: web::Data<DbPool>,
    chef_id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let chef_id = chef_id.into_inner();

    let detail = web::block(move || -> Result<Option<ChefDetail>, AppError> {
        let mut conn = pool.get()?;
        Ok(query::load_chef_detail(&mut conn, chef_id)?)
    })
    .await
    .map_err(|_| AppError::Canceled)??
    .ok_or(AppError::ChefNotFound)?;

    Ok(html(views::chef_page(&detail)))
}

/// Route registration shared by the server binary and the tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .service(new_recipe_form)
        .service(create_recipe)
        .service(chef_detail);
}
