use crate::analytics::Client;
use actix_web::HttpRequest;
use actix_web::http::header;

impl From<&HttpRequest> for Client {
    fn from(req: &HttpRequest) -> Self {
        let user_agent = req
            .headers()
            .get(header::USER_AGENT)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let address = req
            .connection_info()
            .realip_remote_addr()
            .unwrap_or_default()
            .to_string();
        Self {
            user_agent,
            address,
        }
    }
}
