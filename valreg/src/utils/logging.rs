use anyhow::Result;

/// Installs the stderr subscriber. `RUST_LOG` adds to the default directives.
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("valreg=info".parse()?)
                .add_directive("valreg_core=info".parse()?)
                .add_directive("valreg_rpc=warn".parse()?),
        )
        .init();
    Ok(())
}
