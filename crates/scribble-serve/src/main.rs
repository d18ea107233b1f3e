//! Scribble dev server: serves the page and wasm bundle over HTTP with gzip.
//!
//! Only used while developing; the drawing surface itself is a static page.

mod app;
mod args;

use args::Command;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let argv: Vec<String> = std::env::args().skip(1).collect();
    let args = match args::parse_args(&argv) {
        Ok(Command::Serve(args)) => args,
        Ok(Command::Help) => {
            println!("{}", args::USAGE);
            return;
        }
        Err(e) => {
            eprintln!("scribble-serve: {e}");
            eprintln!("{}", args::USAGE);
            std::process::exit(2);
        }
    };

    let listener = match tokio::net::TcpListener::bind(("0.0.0.0", args.port)).await {
        Ok(listener) => listener,
        Err(e) => {
            log::error!("failed to bind port {}: {e}", args.port);
            std::process::exit(1);
        }
    };

    log::info!(
        "serving {} on http://127.0.0.1:{}/",
        args.dir.display(),
        args.port
    );
    let served = axum::serve(listener, app::app(&args.dir))
        .with_graceful_shutdown(shutdown_signal())
        .await;
    if let Err(e) = served {
        log::error!("server failed: {e}");
        std::process::exit(1);
    }
    log::info!("shut down");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("failed to listen for ctrl-c: {e}");
        // Without a signal handler, serve until the process is killed.
        std::future::pending::<()>().await;
    }
}
