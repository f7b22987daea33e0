use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("127.0.0.1:{port}");
    let tasks = mock_server::seed_tasks()?;
    let listener = TcpListener::bind(&addr).await?;
    log::info!("serving {} tasks on http://{addr}", tasks.len());
    mock_server::run(listener, tasks).await?;
    Ok(())
}
