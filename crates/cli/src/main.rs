use catalog_infra::CatalogConfig;

fn main() -> anyhow::Result<()> {
    catalog_observability::init();

    let config = CatalogConfig::from_env()?;
    let store = config.build_store();

    tracing::info!("catalog shell ready; reading commands from stdin");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    catalog_cli::run(&store, stdin.lock(), stdout.lock())
}
