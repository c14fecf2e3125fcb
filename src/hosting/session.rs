use actix_web::HttpRequest;
use actix_web::cookie::Cookie;
use actix_web::cookie::time::Duration;

/// Session of the request: explicit `id` parameter first, then the cookie.
pub fn identify(req: &HttpRequest, explicit: Option<&str>) -> Option<String> {
    explicit
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .or_else(|| {
            req.cookie(crate::SESSION_COOKIE)
                .map(|cookie| cookie.value().to_string())
                .filter(|id| !id.is_empty())
        })
}

/// Session of the request, minting a fresh one if it carries none.
/// A minted session comes with the cookie that hands it to the client.
pub fn resolve(req: &HttpRequest, explicit: Option<&str>) -> (String, Option<Cookie<'static>>) {
    match identify(req, explicit) {
        Some(id) => (id, None),
        None => {
            let id = uuid::Uuid::now_v7().to_string();
            log::info!("issuing session {}", id);
            let cookie = Cookie::build(crate::SESSION_COOKIE, id.clone())
                .path("/")
                .max_age(Duration::days(crate::SESSION_LIFETIME_DAYS))
                .finish();
            (id, Some(cookie))
        }
    }
}

/// New session cookie for a request that carries none.
pub fn issue(req: &HttpRequest) -> Option<Cookie<'static>> {
    resolve(req, None).1
}
