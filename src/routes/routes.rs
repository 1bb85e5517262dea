use actix_web::web;

use super::admin::admin_handlers;
use super::board::board_handlers;
use super::task::task_handlers;

pub fn api_configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/projects/{code}", web::get().to(board_handlers::get_board))
            .route("/tasks", web::post().to(task_handlers::create_task))
            .route("/tasks/{id}", web::put().to(task_handlers::update_task))
            .route("/tasks/{id}", web::delete().to(task_handlers::delete_task))
            .route("/tasks/{id}/tags", web::post().to(task_handlers::attach_tag))
            .route(
                "/tasks/{id}/tags/{tag_id}",
                web::delete().to(task_handlers::detach_tag),
            ),
    );
}

pub fn admin_configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .route("/login", web::post().to(admin_handlers::login))
            .route("/logout", web::post().to(admin_handlers::logout))
            .route("/dashboard", web::get().to(admin_handlers::dashboard))
            .route("/projects", web::post().to(admin_handlers::create_project))
            .route(
                "/projects/{id}",
                web::delete().to(admin_handlers::delete_project),
            )
            .route("/users", web::post().to(admin_handlers::create_user))
            .route("/users/{id}", web::delete().to(admin_handlers::delete_user))
            .route("/tags", web::post().to(admin_handlers::create_tag))
            .route("/tags/{id}", web::delete().to(admin_handlers::delete_tag)),
    );
}
