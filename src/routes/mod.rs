use actix_web::web;

pub mod admin;
pub mod auth;
pub mod backend_health;
pub mod leagues;
pub mod matches;
pub mod predictions;
pub mod profile;
pub mod ranking;
pub mod registration;

use crate::middleware::auth::AuthMiddleware;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(registration::register)
        .service(backend_health::backend_health)
        .service(auth::login);

    // Match routes (require authentication)
    cfg.service(
        web::scope("/matches")
            .wrap(AuthMiddleware)
            .service(matches::list_matches)
            .service(matches::get_match),
    );
    // Prediction routes (require authentication)
    cfg.service(
        web::scope("/predictions")
            .wrap(AuthMiddleware)
            .service(predictions::save_prediction)
            .service(predictions::my_predictions),
    );
    // Ranking route (require authentication)
    cfg.service(
        web::scope("/ranking")
            .wrap(AuthMiddleware)
            .service(ranking::global_ranking),
    );
    // League routes (require authentication)
    cfg.service(
        web::scope("/leagues")
            .wrap(AuthMiddleware)
            .service(leagues::create_league)
            .service(leagues::list_leagues)
            .service(leagues::join_league)
            .service(leagues::get_league_standings)
            .service(leagues::get_league),
    );
    // Profile routes (require authentication)
    cfg.service(
        web::scope("/profile")
            .wrap(AuthMiddleware)
            .service(profile::get_profile)
            .service(profile::update_profile),
    );
    // Admin routes (require the admin role)
    admin::init_admin_routes(cfg);
}
