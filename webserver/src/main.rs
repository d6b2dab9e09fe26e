//! Tournament planner HTTP server entry point

use clap::Parser;
use shared::logging;
use tokio::signal;

use planner::{DisabledExportArchive, ExportArchive, Planner, RealExportArchive, RealScheduleStore};
use webserver::{ServerArgs, WebServer, WebServerResult, WebServerState};

const COMPONENT: &str = "webserver";

#[tokio::main]
async fn main() -> WebServerResult<()> {
    // .env is optional; real environment variables win
    dotenv::dotenv().ok();
    let args = ServerArgs::parse();

    logging::init_tracing(Some(&args.log_level));
    logging::log_startup(COMPONENT, &format!("tournament planner on {}:{}", args.host, args.port));

    let result = match args.export_dir.clone() {
        Some(dir) => {
            tracing::info!(dir = %dir.display(), "💾 Archiving exports");
            serve(&args, RealExportArchive::new(dir)).await
        }
        None => serve(&args, DisabledExportArchive).await,
    };

    match &result {
        Ok(()) => logging::log_success(COMPONENT, "WebServer stopped gracefully"),
        Err(e) => logging::log_error(COMPONENT, "WebServer", e),
    }
    result
}

async fn serve<A>(args: &ServerArgs, archive: A) -> WebServerResult<()>
where
    A: ExportArchive + 'static,
{
    let planner = Planner::new(args.planner_config()?, RealScheduleStore::new(), archive);
    let state = WebServerState::new(args.bind_address()?, args.static_dir.clone());

    WebServer::new(state, planner).run(shutdown_signal()).await
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => logging::log_shutdown(COMPONENT, "Received Ctrl+C signal"),
        Err(err) => logging::log_error(COMPONENT, "Signal handling", &err),
    }
}
