//! Serve an [`Exporter`] to scrapers over HTTP.

use std::{
    convert::Infallible,
    future::{ready, Ready},
    sync::Arc,
    task::{Context, Poll},
};

use hyper::{
    header::{HeaderValue, ALLOW, CONTENT_TYPE},
    Method, Request, Response, StatusCode,
};

use crate::exporter::{default_exporter, Exporter};

/// Content type of the text exposition format
pub const EXPOSITION_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// A [`tower::Service`] that answers every `GET` with the exporter's current rendering.
///
/// It opens no sockets of its own. Mount it in your server, for example with
/// `hyper_util::service::TowerToHyperService` on a hyper connection.
#[derive(Debug, Clone)]
pub struct ExpositionService {
    exporter: Source,
}

#[derive(Debug, Clone)]
enum Source {
    Default,
    Shared(Arc<Exporter>),
}

impl ExpositionService {
    /// Serve a particular exporter
    pub fn new(exporter: Arc<Exporter>) -> Self {
        Self {
            exporter: Source::Shared(exporter),
        }
    }

    /// Serve [`default_exporter`]
    pub fn for_default_exporter() -> Self {
        Self {
            exporter: Source::Default,
        }
    }

    fn exporter(&self) -> &Exporter {
        match &self.exporter {
            Source::Default => default_exporter(),
            Source::Shared(exporter) => exporter.as_ref(),
        }
    }

    fn respond(&self, method: &Method) -> Response<String> {
        log::debug!("exposition request: {method}");
        let (status, body) = match *method {
            Method::GET => (StatusCode::OK, self.exporter().render()),
            Method::HEAD => (StatusCode::OK, String::new()),
            _ => (StatusCode::METHOD_NOT_ALLOWED, String::new()),
        };

        let mut response = Response::new(body);
        *response.status_mut() = status;
        let headers = response.headers_mut();
        if status == StatusCode::METHOD_NOT_ALLOWED {
            headers.insert(ALLOW, HeaderValue::from_static("GET, HEAD"));
        } else {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(EXPOSITION_CONTENT_TYPE));
        }
        response
    }
}

impl<B> tower::Service<Request<B>> for ExpositionService {
    type Response = Response<String>;
    type Error = Infallible;
    type Future = Ready<Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _context: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: Request<B>) -> Self::Future {
        ready(Ok(self.respond(request.method())))
    }
}
