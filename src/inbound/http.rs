use crate::configuration::ApplicationSettings;
use crate::domain::contact::ports::ContactService;
use crate::inbound::http::cors::{cors_headers, preflight};
use crate::inbound::http::errors::AppError;
use crate::inbound::http::handlers::{health_check, send, thank_you};
use actix_web::dev::Server;
use actix_web::http::Method;
use actix_web::{web, App, HttpServer};
use listenfd::ListenFd;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

mod cors;
mod errors;
mod handlers;
mod responses;
pub mod state;

pub use state::SharedContactState;

pub struct Application<CS>
where
    CS: ContactService,
{
    port: u16,
    server: Server,
    contact_state: SharedContactState<CS>,
}

fn run<CS: ContactService>(
    listener: TcpListener,
    contact_state: SharedContactState<CS>,
) -> Result<Server, std::io::Error> {
    let contact_state = web::Data::new(contact_state);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(cors_headers())
            .wrap(TracingLogger::default())
            .app_data(json_config())
            .app_data(contact_state.clone())
            .route("/health_check", web::get().to(health_check))
            .service(
                web::resource("/api/send")
                    .route(web::post().to(send::<CS>))
                    .route(web::method(Method::OPTIONS).to(preflight)),
            )
            .service(
                web::resource("/api/thankyou")
                    .route(web::post().to(thank_you::<CS>))
                    .route(web::method(Method::OPTIONS).to(preflight)),
            )
    })
    .listen(listener)?
    .run();

    Ok(server)
}

/// Largest accepted request body, in bytes.
const JSON_PAYLOAD_LIMIT: usize = 100 * 1024;

/// Rejected JSON bodies get the same `{ status, error }` shape as every other failure.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_PAYLOAD_LIMIT)
        .error_handler(|err, _req| {
            tracing::warn!(error = %err, "Rejecting malformed request body");
            AppError::MalformedPayload(err.to_string()).into()
        })
}

impl<CS> Application<CS>
where
    CS: ContactService,
{
    pub async fn build(
        contact_service: CS,
        configuration: ApplicationSettings,
    ) -> Result<Self, std::io::Error> {
        let listener = listener(&configuration)?;
        let port = listener.local_addr()?.port();

        let contact_state = SharedContactState::new(contact_service);
        let server = run(listener, contact_state.clone())?;

        Ok(Self {
            port,
            server,
            contact_state,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn contact_state(&self) -> SharedContactState<CS> {
        self.contact_state.clone()
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

fn listener(configuration: &ApplicationSettings) -> Result<TcpListener, std::io::Error> {
    if configuration.managed_listener {
        return inherited_listener(ListenFd::from_env());
    }
    let address = format!("{}:{}", configuration.host, configuration.port);
    TcpListener::bind(address)
}

/// Adopts the first socket passed on by socket activation.
///
/// `listenfd` ignores descriptors meant for another process (`LISTEN_PID`) and
/// refuses anything that is not a TCP socket.
fn inherited_listener(mut fds: ListenFd) -> Result<TcpListener, std::io::Error> {
    let listener = fds.take_tcp_listener(0)?.ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "managed listener requested but no socket was passed in LISTEN_FDS",
        )
    })?;
    listener.set_nonblocking(true)?;
    Ok(listener)
}
