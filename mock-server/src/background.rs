//! Runs a router on its own thread with a current-thread Tokio runtime, so
//! servers can be driven from plain synchronous `#[test]` functions.

use std::io;
use std::net::SocketAddr;

use axum::Router;
use tokio::{net::TcpListener, sync::oneshot};

/// A router served on an ephemeral `127.0.0.1` port until dropped.
pub(crate) struct Background {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
}

impl Background {
    pub(crate) fn serve(app: Router) -> io::Result<Self> {
        // Bound before returning so early requests queue in the backlog.
        let std_listener = std::net::TcpListener::bind("127.0.0.1:0")?;
        let addr = std_listener.local_addr()?;
        std_listener.set_nonblocking(true)?;

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        let (shutdown, signal) = oneshot::channel::<()>();

        std::thread::spawn(move || {
            let served = runtime.block_on(async move {
                let listener = TcpListener::from_std(std_listener)?;
                axum::serve(listener, app)
                    .with_graceful_shutdown(async move {
                        let _ = signal.await;
                    })
                    .await
            });
            if let Err(err) = served {
                log::error!("server on {addr} stopped: {err}");
            }
        });

        Ok(Self {
            addr,
            shutdown: Some(shutdown),
        })
    }

    pub(crate) fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub(crate) fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for Background {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}
