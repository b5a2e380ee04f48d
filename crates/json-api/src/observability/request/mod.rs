//! Request-level logging, request IDs, and parent trace extraction.

mod parent_context;
mod request_ids;
mod spans;

use std::time::{Duration, Instant};

use salvo::{
    Request, handler,
    http::StatusCode,
    prelude::{Depot, FlowCtrl, Response},
};
use tracing::{Instrument as _, Span, error, info, warn};
use tracing_opentelemetry::OpenTelemetrySpanExt as _;

use super::{metrics, settings};

const REQUEST_ID_DEPOT_KEY: &str = "request_id";

/// What a finished request looked like, for logs and metrics.
#[derive(Debug)]
struct Outcome<'a> {
    request_id: &'a str,
    method: &'a str,
    path: &'a str,
    route: &'a str,
    status: StatusCode,
    duration: Duration,
}

#[handler]
pub(crate) async fn request_logging(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    if req.uri().path() == "/metrics" {
        ctrl.call_next(req, depot, res).await;
        return;
    }

    let started = Instant::now();
    let _in_flight = metrics::InFlightRequestGuard::track();

    let request_id =
        request_ids::resolve_request_id(req.header::<String>(request_ids::REQUEST_ID_HEADER));

    depot.insert(REQUEST_ID_DEPOT_KEY, request_id.clone());
    request_ids::set_request_id_header(res, &request_id);

    let method = req.method().to_string();
    let path = req.uri().path().to_owned();
    let route = spans::route_template(&path);

    let span = tracing::info_span!(
        parent: None,
        "http.request",
        otel.name = %format!("{method} {route}"),
        otel.kind = "server",
        request_id = %request_id,
        method = %method,
        path = %path,
        remote_addr = %req.remote_addr(),
        status = tracing::field::Empty,
        duration_ms = tracing::field::Empty
    );

    if settings::propagate_parent()
        && let Some(parent) = parent_context::extract_parent_context(req.headers())
        && let Err(source) = span.set_parent(parent)
    {
        warn!("failed to set parent context on request span: {source}");
    }

    ctrl.call_next(req, depot, res)
        .instrument(span.clone())
        .await;

    report(
        &span,
        &Outcome {
            request_id: &request_id,
            method: &method,
            path: &path,
            route: &route,
            status: request_ids::response_status_or_ok(res.status_code),
            duration: started.elapsed(),
        },
    );
}

fn report(span: &Span, outcome: &Outcome<'_>) {
    let status = outcome.status.as_u16();
    let duration_ms = outcome.duration.as_millis();
    let threshold_ms = u128::from(settings::slow_request_threshold_ms());

    metrics::observe_request(
        outcome.method,
        outcome.route,
        status,
        outcome.duration.as_secs_f64(),
    );

    span.record("status", status);
    span.record("duration_ms", duration_ms);

    span.in_scope(|| {
        info!(status, duration_ms, "request.completed");

        if outcome.status.is_server_error() {
            error!(
                status,
                method = %outcome.method,
                path = %outcome.path,
                request_id = %outcome.request_id,
                "server error response"
            );
        } else if outcome.status.is_client_error() {
            warn!(
                status,
                method = %outcome.method,
                path = %outcome.path,
                request_id = %outcome.request_id,
                "client error response"
            );
        }

        if duration_ms > threshold_ms {
            warn!(
                method = %outcome.method,
                path = %outcome.path,
                request_id = %outcome.request_id,
                duration_ms,
                threshold_ms,
                "slow request detected"
            );
        }
    });
}

#[cfg(test)]
mod tests {
    use salvo::{prelude::*, test::TestClient};

    use super::*;

    #[handler]
    async fn ok() -> &'static str {
        "ok"
    }

    fn service() -> Service {
        Service::new(
            Router::new()
                .hoop(request_logging)
                .push(Router::with_path("orders/{id}").get(ok)),
        )
    }

    fn request_id(res: &Response) -> Option<String> {
        res.headers()
            .get(request_ids::REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(ToOwned::to_owned)
    }

    #[tokio::test]
    async fn test_request_id_is_echoed() {
        let res = TestClient::get("http://example.com/orders/7")
            .add_header(request_ids::REQUEST_ID_HEADER, "abc-123", true)
            .send(&service())
            .await;

        assert_eq!(request_id(&res).as_deref(), Some("abc-123"));
    }

    #[tokio::test]
    async fn test_request_id_is_generated_when_missing() {
        let res = TestClient::get("http://example.com/orders/7")
            .send(&service())
            .await;

        assert!(
            request_id(&res).is_some_and(|id| !id.is_empty()),
            "expected a generated request id"
        );
    }
}
