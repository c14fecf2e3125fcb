use super::*;
use crate::analytics;
use crate::analytics::Client;
use crate::analytics::Exporter;
use crate::analytics::GameEvent;
use crate::analytics::PlayEvent;
use crate::engine::*;
use crate::game::Sequence;
use crate::history::HistoryStore;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::http::header::ContentType;
use actix_web::web;
use std::sync::Arc;

/// Shared request state and the routes that use it.
#[derive(Clone)]
pub struct Api {
    predictor: web::Data<Predictor>,
    recorder: web::Data<Recorder>,
    exporter: web::Data<dyn Exporter>,
}

impl Api {
    pub fn new(store: Arc<dyn HistoryStore>, tuning: Tuning, exporter: Arc<dyn Exporter>) -> Self {
        Self {
            predictor: web::Data::new(Predictor::new(store.clone(), tuning)),
            recorder: web::Data::new(Recorder::new(store, tuning)),
            exporter: web::Data::from(exporter),
        }
    }
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.predictor.clone())
            .app_data(self.recorder.clone())
            .app_data(self.exporter.clone())
            .route("/play", web::get().to(play))
            .route("/record", web::get().to(record))
            .route("/game", web::post().to(game));
    }
}

async fn play(
    predictor: web::Data<Predictor>,
    query: web::Query<PlayRequest>,
    req: HttpRequest,
) -> impl Responder {
    let player = Sequence::from(query.player_history.as_str());
    let opponent = Sequence::from(query.opponent_history.as_str());
    let answer = predictor.predict(&player, &opponent).await;
    let mut response = HttpResponse::Ok();
    if let Some(cookie) = session::issue(&req) {
        response.cookie(cookie);
    }
    response
        .content_type(ContentType::plaintext())
        .body(answer.to_string())
}

async fn record(
    recorder: web::Data<Recorder>,
    exporter: web::Data<dyn Exporter>,
    query: web::Query<RecordRequest>,
    req: HttpRequest,
) -> impl Responder {
    let query = query.into_inner();
    let (session, cookie) = session::resolve(&req, query.id.as_deref());
    let exchange = Exchange {
        player: query.player,
        opponent: query.opponent,
        player_history: query.player_history,
        opponent_history: query.opponent_history,
        session,
    };
    let (mut response, body) = match recorder.record(&exchange).await {
        Ok(round) => {
            let event = PlayEvent::new(&round, Client::from(&req));
            analytics::dispatch(exporter.into_inner(), event.into());
            (HttpResponse::Ok(), String::new())
        }
        Err(e @ Error::InvalidMove(..)) => (HttpResponse::BadRequest(), e.to_string()),
        Err(e) => (HttpResponse::InternalServerError(), e.to_string()),
    };
    if let Some(cookie) = cookie {
        response.cookie(cookie);
    }
    response.body(body)
}

async fn game(
    exporter: web::Data<dyn Exporter>,
    query: web::Query<SessionRequest>,
    body: web::Json<GameRequest>,
    req: HttpRequest,
) -> impl Responder {
    let body = body.into_inner();
    let (session, cookie) = session::resolve(&req, query.id.as_deref());
    let event = GameEvent::new(session, body.winner, body.user, body.server, Client::from(&req));
    analytics::dispatch(exporter.into_inner(), event.into());
    let mut response = HttpResponse::Ok();
    if let Some(cookie) = cookie {
        response.cookie(cookie);
    }
    response.finish()
}
