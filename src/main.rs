mod handlers;
mod models;
mod screen;

use std::collections::HashMap;

use actix_web::{App, HttpResponse, HttpServer, Responder, post, web};
use anyhow::Context as _;
use dotenvy::dotenv;
use tera::{Context, Tera};
use tracing::info;
use tracing_subscriber::EnvFilter;

use handlers::products::HttpProductService;
use models::AddProductForm;
use screen::{CatalogScreen, ProductDraft};

type Screen = CatalogScreen<HttpProductService>;

async fn get_products(tmpl: web::Data<Tera>, screen: web::Data<Screen>) -> HttpResponse {
    let state = screen.snapshot().await;

    let mut context = Context::new();
    context.insert("products", &state.products);
    context.insert("draft", &state.draft);
    context.insert("error", &state.status.error);
    context.insert("success", &state.status.success);

    // แสดงผล template
    let rendered = match tmpl.render("products.html", &context) {
        Ok(html) => html,
        Err(err) => {
            println!("❌ Tera render error: {:?}", err);
            return HttpResponse::InternalServerError().body("Template render error");
        }
    };

    HttpResponse::Ok().content_type("text/html").body(rendered)
}

#[post("/api/products/add")]
async fn add_product_form(
    screen: web::Data<Screen>,
    form: web::Form<AddProductForm>,
) -> impl Responder {
    let form = form.into_inner();
    screen
        .add(ProductDraft {
            title: form.title,
            price: form.price,
            description: form.description,
            img: form.img,
        })
        .await;

    HttpResponse::Found()
        .append_header(("Location", "/products"))
        .finish()
}

#[post("/api/products/delete")]
async fn delete_product_form(
    screen: web::Data<Screen>,
    form: web::Form<HashMap<String, String>>,
) -> impl Responder {
    if let Some(id_str) = form.get("delete_id") {
        if let Ok(id) = id_str.parse::<i64>() {
            screen.delete(id).await;
            return HttpResponse::Found()
                .append_header(("Location", "/products"))
                .finish();
        }
    }
    HttpResponse::BadRequest().body("Invalid or missing delete_id")
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let tera = Tera::new("public/**/*.html").context("Failed to load templates")?;

    let screen = web::Data::new(CatalogScreen::new(HttpProductService::from_env()));

    // โหลดรายการสินค้ารอบแรกก่อนเปิดรับ request
    screen.load().await;

    info!("catalog screen listening on 127.0.0.1:8080");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(tera.clone()))
            .app_data(screen.clone())
            .route("/products", web::get().to(get_products))
            .service(add_product_form)
            .service(delete_product_form)
    })
    .bind(("127.0.0.1", 8080))?
    .run()
    .await?;

    Ok(())
}
