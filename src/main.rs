use clap::Parser;
use miette::Result;
use pepcheck::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    // Without this, piping to `head`, `grep -q`, etc. causes a panic on broken pipe.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    // Install miette's fancy error handler for readable diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;

    match cli.command {
        Commands::Validate(args) => pepcheck::cli::commands::validate::run(args, &global),
        Commands::Inspect(args) => pepcheck::cli::commands::inspect::run(args, &global),
        Commands::Convert(args) => pepcheck::cli::commands::convert::run(args, &global),
        Commands::Filters => pepcheck::cli::commands::filters::run(&global),
    }
}
