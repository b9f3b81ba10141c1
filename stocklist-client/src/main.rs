use anyhow::Context;
use clap::Parser;
use stocklist_client::app::{self, Cli};
use stocklist_client::infra::logging::{LogTarget, init_logger};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let target = if cli.print {
        LogTarget::Stderr
    } else {
        cli.log_file
            .clone()
            .map(LogTarget::File)
            .unwrap_or_else(LogTarget::default_file)
    };
    init_logger(target)?;

    // One thread: every catalog message is handled in order on this runtime.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("build async runtime")?;

    runtime.block_on(app::run(cli))
}
