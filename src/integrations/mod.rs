//! Outbound integrations: LLM chat, transactional email and the serial
//! task device. Each call is a single blocking attempt.

pub mod chat;
pub mod device;
pub mod email;

use crate::errors::AppError;
use std::time::Duration;

/// Blocking HTTP agent with connect/read/write timeouts.
pub(crate) fn http_agent(timeout_secs: u64) -> ureq::Agent {
    let timeout = Duration::from_secs(timeout_secs.max(1));
    ureq::AgentBuilder::new()
        .timeout_connect(timeout)
        .timeout_read(timeout)
        .timeout_write(timeout)
        .user_agent(concat!("bizdesk/", env!("CARGO_PKG_VERSION")))
        .build()
}

pub(crate) fn http_error(service: &str, err: ureq::Error) -> AppError {
    match err {
        ureq::Error::Status(code, resp) => {
            let body = resp.into_string().unwrap_or_default();
            let body = body.trim();
            if body.is_empty() {
                AppError::Http(format!("{service}: HTTP {code}"))
            } else {
                AppError::Http(format!(
                    "{service}: HTTP {code}: {}",
                    crate::utils::formatting::truncate(body, 200)
                ))
            }
        }
        ureq::Error::Transport(t) => AppError::Http(format!("{service}: {t}")),
    }
}
