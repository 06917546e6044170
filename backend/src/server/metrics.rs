//! Optional Prometheus middleware.
//!
//! `App::wrap` needs one concrete middleware type whether or not metrics
//! initialised, so both outcomes produce the same boxed service.

use std::sync::Arc;

use actix_service::{
    Service, ServiceExt as _, Transform,
    boxed::{self, BoxService},
};
use actix_web::body::{BoxBody, MessageBody};
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::middleware::Compat;
use actix_web_prom::PrometheusMetrics;
use futures_util::future::{LocalBoxFuture, ready};

type BoxedResponseService = BoxService<ServiceRequest, ServiceResponse<BoxBody>, actix_web::Error>;

/// Records request metrics when Prometheus is configured; otherwise only
/// boxes the response body.
#[derive(Clone, Default)]
pub(crate) struct MetricsLayer {
    prometheus: Option<Arc<PrometheusMetrics>>,
}

impl MetricsLayer {
    pub(crate) fn new(prometheus: Option<PrometheusMetrics>) -> Self {
        Self {
            prometheus: prometheus.map(Arc::new),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for MetricsLayer
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = BoxedResponseService;
    type Future = LocalBoxFuture<'static, Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        let Some(prometheus) = self.prometheus.as_deref().cloned() else {
            let passthrough = service.map(ServiceResponse::map_into_boxed_body);
            return Box::pin(ready(Ok(boxed::service(passthrough))));
        };
        let pending = Compat::new(prometheus).new_transform(service);
        Box::pin(async move { pending.await.map(boxed::service) })
    }
}
