use std::time::Duration;

use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;
use crate::site::resolver::Resolver;

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.server.listen_addr).await?;
    info!("Listening on {}", cfg.server.listen_addr);

    let resolver = Resolver::new(cfg.site.clone());
    let deadline = Duration::from_secs(cfg.server.request_timeout_secs);

    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let resolver = resolver.clone();
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, resolver, deadline);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
