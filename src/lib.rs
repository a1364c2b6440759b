pub mod application;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod schema;

use actix_web::{middleware::Logger, web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use application::listing_service::ListingService;
pub use db::{create_pool, DbPool};
pub use infrastructure::listing_repo::DieselListingRepository;

/// Concrete service type the handlers are wired against.
pub type AppService = ListingService<DieselListingRepository>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) {
    let mut conn = pool.get().expect("Failed to get DB connection for migrations");
    conn.run_pending_migrations(MIGRATIONS)
        .expect("Failed to run database migrations");
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::listings::create_listing,
        handlers::listings::list_public_listings,
        handlers::listings::get_listing,
        handlers::listings::update_listing,
        handlers::listings::delete_listing,
        handlers::listings::list_seller_listings,
        handlers::admin::list_pending_listings,
        handlers::admin::approve_listing,
        handlers::admin::reject_listing,
        handlers::admin::remove_listing,
        handlers::pricing::price_quote,
    ),
    components(schemas(
        handlers::listings::ListingPayload,
        handlers::listings::ListingResponse,
        handlers::admin::ApproveRequest,
        handlers::admin::RejectRequest,
        handlers::pricing::QuoteResponse,
    )),
    tags(
        (name = "listings", description = "Seller and buyer listing operations"),
        (name = "admin", description = "Review queue and moderation"),
        (name = "pricing", description = "Price suggestion advisor"),
    )
)]
pub struct ApiDoc;

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    pool: DbPool,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    let service = web::Data::new(ListingService::new(DieselListingRepository::new(pool)));

    Ok(HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .wrap(Logger::default())
            .service(
                web::scope("/listings")
                    .route("", web::post().to(handlers::listings::create_listing))
                    .route("", web::get().to(handlers::listings::list_public_listings))
                    .route("/{id}", web::get().to(handlers::listings::get_listing))
                    .route("/{id}", web::put().to(handlers::listings::update_listing))
                    .route("/{id}", web::delete().to(handlers::listings::delete_listing)),
            )
            .service(web::scope("/sellers").route(
                "/{seller_id}/listings",
                web::get().to(handlers::listings::list_seller_listings),
            ))
            .service(
                web::scope("/admin/listings")
                    .route(
                        "/pending",
                        web::get().to(handlers::admin::list_pending_listings),
                    )
                    .route(
                        "/{id}/approve",
                        web::post().to(handlers::admin::approve_listing),
                    )
                    .route(
                        "/{id}/reject",
                        web::post().to(handlers::admin::reject_listing),
                    )
                    .route("/{id}", web::delete().to(handlers::admin::remove_listing)),
            )
            .service(
                web::scope("/pricing")
                    .route("/quote", web::get().to(handlers::pricing::price_quote)),
            )
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}
