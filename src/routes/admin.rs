use actix_web::web;

use crate::handlers::admin::{match_handler, team_handler, tournament_handler, user_handler};
use crate::middleware::admin::AdminMiddleware;

pub fn init_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .wrap(AdminMiddleware)
            // Tournament management routes
            .service(
                web::resource("/tournaments")
                    .route(web::get().to(tournament_handler::list_tournaments))
                    .route(web::post().to(tournament_handler::create_tournament)),
            )
            .service(
                web::resource("/tournaments/{id}")
                    .route(web::delete().to(tournament_handler::delete_tournament)),
            )
            .service(
                web::resource("/tournaments/{id}/matches")
                    .route(web::get().to(tournament_handler::list_tournament_matches)),
            )
            // Match management routes
            .service(
                web::resource("/matches").route(web::post().to(match_handler::create_match)),
            )
            .service(
                web::resource("/matches/{id}")
                    .route(web::patch().to(match_handler::update_match))
                    .route(web::delete().to(match_handler::delete_match)),
            )
            .service(
                web::resource("/matches/{id}/result")
                    .route(web::put().to(match_handler::set_match_result)),
            )
            // Team management routes
            .service(
                web::resource("/teams")
                    .route(web::get().to(team_handler::list_teams))
                    .route(web::post().to(team_handler::create_team)),
            )
            .service(
                web::resource("/teams/{id}")
                    .route(web::patch().to(team_handler::update_team))
                    .route(web::delete().to(team_handler::delete_team)),
            )
            // User management routes
            .service(web::resource("/users").route(web::get().to(user_handler::list_users)))
            .service(
                web::resource("/users/{id}/role")
                    .route(web::patch().to(user_handler::update_user_role)),
            ),
    );
}
