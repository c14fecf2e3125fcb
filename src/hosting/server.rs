use super::*;
use crate::analytics::Journal;
use crate::engine::Tuning;
use crate::history::HistoryStore;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpServer;
use actix_web::middleware::Logger;
use std::sync::Arc;

pub struct Server;

impl Server {
    pub async fn run(
        store: Arc<dyn HistoryStore>,
        tuning: Tuning,
        bind: &str,
    ) -> Result<(), std::io::Error> {
        let api = Api::new(store, tuning, Arc::new(Journal));
        log::info!("starting hosting server on {}", bind);
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .configure(|cfg| api.configure(cfg))
        })
        .workers(4)
        .bind(bind)?
        .run()
        .await
    }
}
