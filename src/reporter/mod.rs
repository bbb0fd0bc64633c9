mod templates;

use std::convert::Infallible;
use std::future::Future;
use std::sync::Arc;

use askama::Template;
use tokio::signal::unix::{signal, SignalKind};
use tracing::{error, info};
use warp::http::StatusCode;
use warp::reply::{Reply, Response};
use warp::{Filter, Rejection};

use crate::config::Config;
use crate::errors::Error;
use crate::metadata::{collect_readings, HttpMetadataClient, MetadataSource};
use crate::utils::get_version_string;
use templates::ReportTemplate;

pub async fn run(config: Config) -> Result<(), Error> {
    let client = HttpMetadataClient::new(&config.metadata_url, config.fetch_timeout)?;
    info!(
        metadata_url = %config.metadata_url,
        timeout_ms = config.fetch_timeout.as_millis() as u64,
        "reporter: using metadata service"
    );

    let api = routes(Arc::new(client)).with(warp::log("instance_details::access"));
    let (addr, server) =
        warp::serve(api).try_bind_with_graceful_shutdown(config.listen, shutdown_signal()?)?;
    info!("reporter: listening on {}", addr);

    server.await;
    info!("reporter: shut down");
    Ok(())
}

/// Resolves on SIGINT or SIGTERM. The SIGTERM handler is installed before this returns.
fn shutdown_signal() -> Result<impl Future<Output = ()> + Send + 'static, Error> {
    let mut terminate = signal(SignalKind::terminate()).map_err(Error::Signal)?;
    Ok(async move {
        let interrupt = async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("reporter: failed to listen for SIGINT: {}", e);
                futures::future::pending::<()>().await;
            }
        };
        tokio::select! {
            _ = interrupt => info!("reporter: received SIGINT, shutting down"),
            _ = terminate.recv() => info!("reporter: received SIGTERM, shutting down"),
        }
    })
}

/// `GET /` renders the instance details page
pub fn routes(
    source: Arc<dyn MetadataSource>,
) -> impl Filter<Extract = (Response,), Error = Rejection> + Clone {
    warp::get()
        .and(warp::path::end())
        .and(with_source(source))
        .then(render_report)
}

fn with_source(
    source: Arc<dyn MetadataSource>,
) -> impl Filter<Extract = (Arc<dyn MetadataSource>,), Error = Infallible> + Clone {
    warp::any().map(move || source.clone())
}

async fn render_report(source: Arc<dyn MetadataSource>) -> Response {
    let page = ReportTemplate {
        readings: collect_readings(source.as_ref()).await,
        version: get_version_string(),
    };
    match page.render() {
        Ok(body) => warp::reply::html(body).into_response(),
        Err(e) => {
            error!("reporter: {}", Error::from(e));
            warp::reply::with_status("failed to render page", StatusCode::INTERNAL_SERVER_ERROR)
                .into_response()
        }
    }
}
