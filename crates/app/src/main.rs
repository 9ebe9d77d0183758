use dioxus::prelude::*;

mod components;
mod routes;
mod submit;

use routes::Route;

const THEME: Asset = asset!("/assets/theme.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        server::config::load_feature_flags();
        let flags = server::config::feature_flags();
        server::health::record_start_time();

        let limiter = flags.rate_limit.then(|| {
            server::rate_limit::RateLimitState::new(5, std::time::Duration::from_secs(60))
        });
        let rest = server::rest::api_router(limiter).merge(server::openapi::docs_router());

        let router = dioxus::server::router(App)
            .merge(rest)
            .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
            .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
                tower_http::request_id::MakeRequestUuid,
            ));
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: THEME }
        Router::<Route> {}
    }
}
