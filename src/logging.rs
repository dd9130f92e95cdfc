use std::fmt::{Display, Formatter};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use log::{error, info, warn, Level};
use rocket::{
    fairing::{Fairing, Info, Kind},
    http::{Status, StatusClass},
    Data, Orbit, Request, Response, Rocket,
};

use crate::config::Config;

/// Identifies one request in the logs, from first line to last.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub struct RequestId(u64);

impl Display for RequestId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "req{}", self.0)
    }
}

/// Per-request bookkeeping, created the first time anything asks for it.
#[derive(Debug)]
pub struct RequestTrace {
    pub id: RequestId,
    started: Instant,
}

impl RequestTrace {
    fn start() -> Self {
        static NEXT_ID: AtomicU64 = AtomicU64::new(1);
        Self {
            id: RequestId(NEXT_ID.fetch_add(1, Ordering::Relaxed)),
            started: Instant::now(),
        }
    }

    /// The trace of `req`.
    pub fn of<'r>(req: &'r Request<'_>) -> &'r RequestTrace {
        req.local_cache(RequestTrace::start)
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Level a finished request is reported at.
fn level_for(status: Status) -> Level {
    match status.class() {
        StatusClass::ServerError => Level::Error,
        StatusClass::ClientError => Level::Warn,
        _ => Level::Info,
    }
}

/// Logs every request to the election API, and how it was answered.
#[derive(Debug, Copy, Clone)]
pub struct LoggerFairing;

#[rocket::async_trait]
impl Fairing for LoggerFairing {
    fn info(&self) -> Info {
        Info {
            name: "Logger",
            kind: Kind::Liftoff | Kind::Request | Kind::Response | Kind::Shutdown,
        }
    }

    async fn on_liftoff(&self, rocket: &Rocket<Orbit>) {
        let config = rocket.config();
        let scheme = if config.tls_enabled() { "https" } else { "http" };
        match rocket.state::<Config>() {
            Some(election) => info!(
                "Election '{}' open on {scheme}://{}:{}",
                election.election_name(),
                config.address,
                config.port
            ),
            None => error!("Server launched without an election config"),
        }
    }

    async fn on_request(&self, req: &mut Request<'_>, _data: &mut Data<'_>) {
        let trace = RequestTrace::of(req);
        info!("->{} {} {}", trace.id, req.method(), req.uri());
    }

    async fn on_response<'r>(&self, req: &'r Request<'_>, res: &mut Response<'r>) {
        let trace = RequestTrace::of(req);
        let status = res.status();
        let route = req
            .route()
            .and_then(|route| route.name.as_deref())
            .unwrap_or("no route");
        log::log!(
            level_for(status),
            "<-{} {status} {route} ({} ms)",
            trace.id,
            trace.elapsed().as_millis()
        );
    }

    async fn on_shutdown(&self, _rocket: &Rocket<Orbit>) {
        warn!("Shutting down, all election state will be lost");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn traces_get_increasing_ids() {
        let first = RequestTrace::start();
        let second = RequestTrace::start();
        assert!(second.id > first.id);
        assert_eq!(format!("req{}", first.id.0), first.id.to_string());
    }

    #[test]
    fn failures_are_logged_louder() {
        assert_eq!(Level::Info, level_for(Status::Ok));
        assert_eq!(Level::Warn, level_for(Status::NotFound));
        assert_eq!(Level::Error, level_for(Status::InternalServerError));
    }
}
