use log::{error, info};

/// Usage: `docgen [config.json]`
///
/// Without a path the configuration comes from defaults and the
/// environment (`AI_GATEWAY_API_KEY`, `AI_GATEWAY_URL`,
/// `AI_GATEWAY_MODEL`, `DOCGEN_BIND_ADDR`).
#[tokio::main]
async fn main()
{   env_logger::init();

    let config = match std::env::args().nth(1)
    {   Some(path) => docgen::config::ServerConfig::from_json_file(&path)
      , None => docgen::config::ServerConfig::from_env()
    };
    let config = match config
    {   Ok(config) => config
      , Err(e) => {
          error!("{}", e);
          std::process::exit(1);
        }
    };

    info!(
      "Starting docgen (model {}, gateway {})",
      config.gateway.model, config.gateway.api_base
    );

    if let Err(e) = docgen::server::serve(config).await
    {   error!("Server stopped: {}", e);
        std::process::exit(1);
    }
}
