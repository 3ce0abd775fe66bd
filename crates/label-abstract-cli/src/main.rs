use clap::{Parser, Subcommand};
use label_abstract_cli::commands::{ApplyArgs, LabelArgs, run_apply, run_label};
use label_abstract_cli::utils::ui;
use miette::Result as MietteResult;

#[derive(Parser)]
#[command(name = "abstract-config-labels")]
#[command(about = "Rewrite verbose config parameter descriptions into short UI labels")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Deterministic output for end-to-end tests (no colors).
    #[arg(long, global = true, hide = true)]
    e2e: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Abstract the parameter labels of every configured locale file
    Apply(ApplyArgs),

    /// Print the abstracted label for each given description
    Label(LabelArgs),
}

fn main() -> MietteResult<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))
    .ok();

    let cli = Cli::parse();
    ui::set_e2e_mode(cli.e2e);

    let result = match cli.command {
        Commands::Apply(args) => run_apply(args).map(|_| ()),
        Commands::Label(args) => run_label(args),
    };

    result.map_err(miette::Report::new)
}
