//! Webhook server: one slash-command endpoint over the transliteration
//! pipeline, plus a health check. The core is pure and synchronous, so
//! the server is too.

use arabic_name::config::ServerConfig;
use arabic_name::reply::Reply;
use arabic_name::signature::{self, SignatureError, SIGNATURE_HEADER, TIMESTAMP_HEADER};
use arabic_name::Transliterator;
use log::{debug, error, info, warn};
use std::io::Read;
use std::panic::{self, AssertUnwindSafe};
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};
use tiny_http::{Header, Method, Request, Response, Server};

const EMPTY_NAME_MESSAGE: &str = "Please send an Arabic name to transliterate.";
const FAILURE_MESSAGE: &str = "Sorry, that name could not be transliterated.";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env();
    let server = match Server::http(("0.0.0.0", config.port)) {
        Ok(server) => server,
        Err(err) => {
            error!("could not bind port {}: {}", config.port, err);
            process::exit(1);
        }
    };

    info!(
        "listening on port {} (signature verification {})",
        config.port,
        if config.signing_secret.is_some() {
            "enabled"
        } else {
            "disabled"
        }
    );

    let transliterator = Transliterator::new();

    for request in server.incoming_requests() {
        handle(&transliterator, &config, request);
    }
}

fn handle(transliterator: &Transliterator, config: &ServerConfig, mut request: Request) {
    debug!("{} {}", request.method(), request.url());

    let url = request.url().to_string();
    match (request.method().clone(), url.as_str()) {
        (Method::Get, "/health") => respond_text(request, 200, "OK"),
        (Method::Post, "/transliterate") => {
            let mut body = Vec::new();
            if request.as_reader().read_to_end(&mut body).is_err() {
                respond_json(request, 400, &Reply::ephemeral(FAILURE_MESSAGE));
                return;
            }

            if let Some(secret) = &config.signing_secret {
                if let Err(err) = verify_request(secret, &request, &body) {
                    warn!("rejected request: {}", err);
                    respond_text(request, 401, "invalid request signature");
                    return;
                }
            }

            let json = request
                .headers()
                .iter()
                .find(|h| h.field.equiv("Content-Type"))
                .map(|h| h.value.as_str().starts_with("application/json"))
                .unwrap_or(false);

            let reply = command_reply(transliterator, json, &body);
            respond_json(request, 200, &reply);
        }
        _ => respond_text(request, 404, "not found"),
    }
}

fn verify_request(secret: &str, request: &Request, body: &[u8]) -> Result<(), SignatureError> {
    let header = |name: &'static str| {
        request
            .headers()
            .iter()
            .find(|h| h.field.equiv(name))
            .map(|h| h.value.as_str().to_string())
    };

    let timestamp = header(TIMESTAMP_HEADER).ok_or(SignatureError::MissingHeaders)?;
    let provided = header(SIGNATURE_HEADER).ok_or(SignatureError::MissingHeaders)?;

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    signature::verify(secret, &timestamp, &provided, body, now)
}

/// Compute the reply for a slash-command body. The rendering runs
/// inside `catch_unwind` while the `Request` stays with the caller, so
/// an unexpected panic still produces an ephemeral reply rather than a
/// dropped connection.
fn command_reply(transliterator: &Transliterator, json: bool, body: &[u8]) -> Reply {
    let computed = panic::catch_unwind(AssertUnwindSafe(|| {
        match extract_text(json, body) {
            Some(text) if !text.trim().is_empty() => match transliterator.render(&text) {
                Some(rendering) => Reply::from_rendering(&rendering),
                None => Reply::ephemeral(EMPTY_NAME_MESSAGE),
            },
            _ => Reply::ephemeral(EMPTY_NAME_MESSAGE),
        }
    }));

    computed.unwrap_or_else(|panic| {
        error!("rendering panicked: {:?}", panic);
        Reply::ephemeral(FAILURE_MESSAGE)
    })
}

/// Pull the `text` field out of a form-encoded or JSON body.
fn extract_text(json: bool, body: &[u8]) -> Option<String> {
    if json {
        let value: serde_json::Value = serde_json::from_slice(body).ok()?;
        value.get("text")?.as_str().map(str::to_string)
    } else {
        form_urlencoded::parse(body)
            .find(|(key, _)| *key == "text")
            .map(|(_, value)| value.into_owned())
    }
}

fn respond_text(request: Request, status: u16, body: &str) {
    let response = Response::from_string(body).with_status_code(status);
    if let Err(err) = request.respond(response) {
        warn!("failed to send response: {}", err);
    }
}

fn respond_json(request: Request, status: u16, reply: &Reply) {
    let body = match serde_json::to_string(reply) {
        Ok(body) => body,
        Err(err) => {
            error!("failed to serialize reply: {}", err);
            respond_text(request, 500, "internal error");
            return;
        }
    };

    let mut response = Response::from_string(body).with_status_code(status);
    if let Ok(header) = Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]) {
        response = response.with_header(header);
    }

    if let Err(err) = request.respond(response) {
        warn!("failed to send response: {}", err);
    }
}
