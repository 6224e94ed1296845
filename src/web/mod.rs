//! Web form surface
//!
//! Single-page HTML form plus a JSON endpoint, both backed by the same
//! predictor as the terminal form.

pub mod handlers;
pub mod page;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::AppState;

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::info;

use crate::error::Result;
use crate::predictor::Predictor;

/// Start the web server and serve until the process is stopped.
pub async fn start_server(predictor: Predictor, addr: SocketAddr) -> Result<()> {
    let app = create_router(AppState::new(predictor));

    let listener = TcpListener::bind(addr).await?;
    info!("web form listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
