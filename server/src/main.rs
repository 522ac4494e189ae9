use blog_server_node::cli::{build_cli, log_config, server_config, PORT_ENV_VAR};
use blog_server_node::server::ServerNode;
use log::{info, LevelFilter};

fn setup_logger(level: LevelFilter, log_file: &str) -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d %H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .chain(fern::log_file(log_file)?)
        .apply()?;
    Ok(())
}

#[rocket::main]
async fn main() -> Result<(), rocket::Error> {
    let matches = build_cli().get_matches();

    let logs = log_config(&matches).unwrap_or_else(|e| e.exit());
    if let Err(e) = setup_logger(logs.level, &logs.file) {
        eprintln!("failed to set up logger: {}", e);
    }

    let env_port = std::env::var(PORT_ENV_VAR).ok();
    let config = server_config(&matches, env_port.as_deref()).unwrap_or_else(|e| e.exit());
    info!(
        "starting blog server on {}:{} with {:?} ids",
        config.address, config.port, config.id_scheme
    );

    let server_node = ServerNode::new(config);
    server_node.build().launch().await?;
    Ok(())
}
