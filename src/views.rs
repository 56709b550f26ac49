//! HTML rendering: each function takes resolved model data and returns a
//! full page. Markup mirrors the original templates' Portuguese surface.

use crate::models::Chef;
use crate::query::{ChefDetail, RecipeListing};

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"pt-BR\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n{body}</body>\n</html>\n"
    )
}

pub fn index_page(listings: &[RecipeListing]) -> String {
    let mut body = String::from(
        "<h1>Receitas</h1>\n<p><a href=\"/receita/nova\">Nova receita</a></p>\n",
    );

    if listings.is_empty() {
        body.push_str("<p>Nenhuma receita cadastrada.</p>\n");
    }

    for listing in listings {
        body.push_str(&format!(
            "<article>\n<h2>{}</h2>\n<p>Por <a href=\"/chef/{}\">{}</a></p>\n",
            listing.recipe.title, listing.recipe.chef_id, listing.chef_name
        ));
        if !listing.ingredients.is_empty() {
            body.push_str("<ul>\n");
            for (name, quantity) in &listing.ingredients {
                body.push_str(&format!("<li>{name}: {quantity}</li>\n"));
            }
            body.push_str("</ul>\n");
        }
        body.push_str(&format!("<p>{}</p>\n</article>\n", listing.recipe.instructions));
    }

    page("Receitas", &body)
}

pub fn new_recipe_page(chefs: &[Chef]) -> String {
    let mut body = String::from(
        "<h1>Nova receita</h1>\n<form method=\"post\" action=\"/receita/nova\">\n",
    );

    body.push_str("<p><label>Título <input type=\"text\" name=\"titulo\" required></label></p>\n");
    body.push_str(
        "<p><label>Instruções <textarea name=\"instrucoes\" required></textarea></label></p>\n",
    );

    body.push_str("<p><label>Chef <select name=\"chef_id\">\n");
    for chef in chefs {
        body.push_str(&format!(
            "<option value=\"{}\">{}</option>\n",
            chef.id, chef.name
        ));
    }
    body.push_str("</select></label></p>\n");

    body.push_str(
        "<p><label>Ingredientes (nome:quantidade, separados por vírgula) <input type=\"text\" name=\"ingredientes\"></label></p>\n",
    );
    body.push_str("<p><button type=\"submit\">Salvar</button></p>\n</form>\n");
    body.push_str("<p><a href=\"/\">Voltar</a></p>\n");

    page("Nova receita", &body)
}

pub fn chef_page(detail: &ChefDetail) -> String {
    let mut body = format!("<h1>{}</h1>\n", detail.chef.name);

    match &detail.profile {
        Some(profile) => {
            if let Some(specialty) = &profile.specialty {
                body.push_str(&format!("<p>Especialidade: {specialty}</p>\n"));
            }
            if let Some(years) = profile.years_experience {
                body.push_str(&format!("<p>Anos de experiência: {years}</p>\n"));
            }
        }
        None => body.push_str("<p>Sem perfil cadastrado.</p>\n"),
    }

    body.push_str("<h2>Receitas</h2>\n");
    if detail.recipes.is_empty() {
        body.push_str("<p>Nenhuma receita cadastrada.</p>\n");
    } else {
        body.push_str("<ul>\n");
        for recipe in &detail.recipes {
            body.push_str(&format!("<li>{}</li>\n", recipe.title));
        }
        body.push_str("</ul>\n");
    }
    body.push_str("<p><a href=\"/\">Voltar</a></p>\n");

    page(&detail.chef.name, &body)
}

pub fn not_found_page() -> String {
    page(
        "Não encontrado",
        "<h1>Não encontrado</h1>\n<p>A página pedida não existe.</p>\n<p><a href=\"/\">Voltar</a></p>\n",
    )
}

pub fn server_error_page() -> String {
    page(
        "Erro interno",
        "<h1>Erro interno</h1>\n<p>Algo deu errado ao processar o pedido.</p>\n<p><a href=\"/\">Voltar</a></p>\n",
    )
}
