use super::*;
use crate::analytics::Journal;
use crate::engine::Tuning;
use crate::game::Move;
use crate::history::Memory;
use actix_web::App;
use actix_web::cookie::Cookie;
use actix_web::http::StatusCode;
use actix_web::test;
use std::sync::Arc;

fn api(store: Arc<Memory>) -> Api {
    Api::new(store, Tuning::default(), Arc::new(Journal))
}

macro_rules! service {
    ($api:expr) => {{
        let api = $api;
        test::init_service(App::new().configure(|cfg| api.configure(cfg))).await
    }};
}

#[actix_web::test]
async fn play_answers_move_name_and_issues_session() {
    let app = service!(api(Arc::new(Memory::default())));
    let req = test::TestRequest::get()
        .uri("/play?pu=rock+paper&ps=scissor+scissor")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(
        resp.response()
            .cookies()
            .any(|c| c.name() == crate::SESSION_COOKIE)
    );
    let body = test::read_body(resp).await;
    let body = std::str::from_utf8(&body).unwrap();
    assert!(Move::try_from(body).is_ok());
}

#[actix_web::test]
async fn play_keeps_existing_session() {
    let app = service!(api(Arc::new(Memory::default())));
    let req = test::TestRequest::get()
        .uri("/play")
        .cookie(Cookie::new(crate::SESSION_COOKIE, "abc"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.response().cookies().count(), 0);
}

#[actix_web::test]
async fn record_then_play_counters_habit() {
    let store = Arc::new(Memory::default());
    let app = service!(api(store.clone()));
    for _ in 0..2 {
        let req = test::TestRequest::get()
            .uri("/record?u=rock&s=paper&pu=paper+paper&ps=rock+scissor&id=abc")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
    assert_eq!(store.len().await, 2);
    let req = test::TestRequest::get()
        .uri("/play?pu=rock+paper+paper&ps=rock+scissor")
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    assert_eq!(&body[..], b"paper");
}

#[actix_web::test]
async fn record_without_player_move_is_bad_request() {
    let store = Arc::new(Memory::default());
    let app = service!(api(store.clone()));
    let req = test::TestRequest::get()
        .uri("/record?s=paper&pu=rock&ps=rock")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(store.is_empty().await);
}

#[actix_web::test]
async fn game_accepts_known_winner() {
    let app = service!(api(Arc::new(Memory::default())));
    let req = test::TestRequest::post()
        .uri("/game?id=abc")
        .set_json(serde_json::json!({ "winner": "user", "user": "3", "server": "1" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn game_rejects_unknown_winner() {
    let app = service!(api(Arc::new(Memory::default())));
    let req = test::TestRequest::post()
        .uri("/game")
        .set_json(serde_json::json!({ "winner": "nobody" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

fn sessions(rounds: Vec<crate::game::Round>) -> Vec<String> {
    rounds
        .iter()
        .map(|round| round.session().to_string())
        .collect()
}

#[actix_web::test]
async fn record_prefers_parameter_then_cookie() {
    use crate::game::Sequence;
    use crate::history::HistoryStore;
    let store = Arc::new(Memory::default());
    let app = service!(api(store.clone()));
    let uri = "/record?u=rock&s=paper&pu=rock&ps=rock";
    let explicit = test::TestRequest::get()
        .uri(&format!("{}&id=abc", uri))
        .cookie(Cookie::new(crate::SESSION_COOKIE, "xyz"))
        .to_request();
    let cookie = test::TestRequest::get()
        .uri(uri)
        .cookie(Cookie::new(crate::SESSION_COOKIE, "xyz"))
        .to_request();
    for req in [explicit, cookie] {
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.response().cookies().count(), 0);
    }
    let key = Sequence::decode("r");
    let found = store.query(&key, &key, 10).await.unwrap();
    assert_eq!(sessions(found), vec!["xyz", "abc"]);
}

#[actix_web::test]
async fn record_without_session_hands_minted_one_to_client() {
    use crate::game::Sequence;
    use crate::history::HistoryStore;
    let store = Arc::new(Memory::default());
    let app = service!(api(store.clone()));
    let uri = "/record?u=rock&s=paper&pu=rock&ps=rock";
    let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let issued = resp
        .response()
        .cookies()
        .find(|c| c.name() == crate::SESSION_COOKIE)
        .map(|c| c.value().to_string())
        .expect("minted session is returned as a cookie");
    assert!(!issued.is_empty());
    let again = test::TestRequest::get()
        .uri(uri)
        .cookie(Cookie::new(crate::SESSION_COOKIE, issued.clone()))
        .to_request();
    let resp = test::call_service(&app, again).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.response().cookies().count(), 0);
    let key = Sequence::decode("r");
    let found = store.query(&key, &key, 10).await.unwrap();
    assert_eq!(sessions(found), vec![issued.clone(), issued]);
}

#[actix_web::test]
async fn game_without_session_issues_cookie() {
    let app = service!(api(Arc::new(Memory::default())));
    let req = test::TestRequest::post()
        .uri("/game")
        .set_json(serde_json::json!({ "winner": "deuce" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(
        resp.response()
            .cookies()
            .any(|c| c.name() == crate::SESSION_COOKIE)
    );
}
