use anyhow::Context;
use slotwindow::core::cli::CliPaths;
use slotwindow::core::context::AppContext;
use slotwindow::host::repl::BookingRepl;
use slotwindow::logging::LogTarget;

fn main() -> anyhow::Result<()> {
    let paths = CliPaths::from_env().map_err(anyhow::Error::msg)?;
    let ctx = AppContext::new_with_paths(paths.config_path, paths.logs_dir)
        .context("initializing the booking demo")?;

    let mut repl = BookingRepl::new(&ctx);
    if let Err(err) = repl.run(&ctx) {
        ctx.logger
            .error(format!("{err}"), LogTarget::ConsoleAndFile);
        std::process::exit(1);
    }
    Ok(())
}
