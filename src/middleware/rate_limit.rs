//! Rate limiting middleware
//!
//! Fixed-window counters in Redis keyed by client IP and route bucket.

use std::net::SocketAddr;

use axum::{
    body::Body,
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::{
    constants::{API_BASE_PATH, rate_limits},
    error::AppError,
    state::AppState,
};

/// Route group sharing one counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bucket {
    Auth,
    Scores,
    General,
}

impl Bucket {
    fn for_path(path: &str) -> Self {
        let path = path.strip_prefix(API_BASE_PATH).unwrap_or(path);
        if path.starts_with("/auth") {
            Self::Auth
        } else if path.starts_with("/scores") || path.ends_with("/quiz/submit") {
            Self::Scores
        } else {
            Self::General
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Auth => "auth",
            Self::Scores => "scores",
            Self::General => "general",
        }
    }

    /// (max requests, window seconds)
    fn limit(self) -> (i64, i64) {
        match self {
            Self::Auth => (rate_limits::AUTH_MAX_REQUESTS, rate_limits::AUTH_WINDOW_SECS),
            Self::Scores => (rate_limits::SCORE_MAX_REQUESTS, rate_limits::SCORE_WINDOW_SECS),
            Self::General => (
                rate_limits::GENERAL_MAX_REQUESTS,
                rate_limits::GENERAL_WINDOW_SECS,
            ),
        }
    }
}

/// Opens the window with its TTL only when the key is new, then counts the
/// hit. Both run in one MULTI/EXEC so a counter can never outlive its window.
fn window_pipeline(key: &str, window: i64) -> redis::Pipeline {
    let mut pipe = redis::pipe();
    pipe.atomic()
        .cmd("SET")
        .arg(key)
        .arg(0)
        .arg("EX")
        .arg(window)
        .arg("NX")
        .ignore()
        .incr(key, 1);
    pipe
}

/// Rate limit middleware. Requests are let through when Redis is down.
pub async fn rate_limit_middleware(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let bucket = Bucket::for_path(request.uri().path());
    let (limit, window) = bucket.limit();
    let key = format!("rate_limit:{}:{}", addr.ip(), bucket.name());
    let mut redis = state.redis();

    let counted: redis::RedisResult<(i64,)> =
        window_pipeline(&key, window).query_async(&mut redis).await;
    let count = match counted {
        Ok((count,)) => count,
        Err(e) => {
            warn!(error = %e, bucket = bucket.name(), "Rate limiter unavailable, allowing request");
            return Ok(next.run(request).await);
        }
    };

    if count > limit {
        warn!(ip = %addr.ip(), bucket = bucket.name(), count, "Rate limit exceeded");
        return Err(AppError::TooManyRequests);
    }

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_for_path() {
        assert_eq!(Bucket::for_path("/api/v1/auth/login"), Bucket::Auth);
        assert_eq!(Bucket::for_path("/api/v1/scores"), Bucket::Scores);
        assert_eq!(
            Bucket::for_path("/api/v1/topics/3f1c/quiz/submit"),
            Bucket::Scores
        );
        assert_eq!(Bucket::for_path("/api/v1/topics"), Bucket::General);
        assert_eq!(Bucket::for_path("/api/v1/leaderboard"), Bucket::General);
    }

    #[test]
    fn test_window_is_opened_and_counted_atomically() {
        let packed = window_pipeline("rate_limit:127.0.0.1:auth", 60).get_packed_pipeline();
        let packed = String::from_utf8_lossy(&packed);

        let multi = packed.find("MULTI").expect("MULTI");
        let set = packed.find("SET").expect("SET");
        let incr = packed.find("INCR").expect("INCR");
        let exec = packed.find("EXEC").expect("EXEC");
        assert!(multi < set && set < incr && incr < exec);
        assert!(packed.contains("NX"));
        assert!(packed.contains("rate_limit:127.0.0.1:auth"));
    }

    #[test]
    fn test_auth_is_strictest() {
        assert!(Bucket::Auth.limit().0 < Bucket::Scores.limit().0);
        assert!(Bucket::Scores.limit().0 < Bucket::General.limit().0);
    }
}
