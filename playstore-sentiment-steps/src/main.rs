mod analysis;
mod dashboard;
mod menu;
mod popular_apps;
mod progress;
mod report;
mod utils;

use {
    std::path::PathBuf,
    clap::{Parser, Subcommand},
    tracing::info,
    playstore_sentiment_core::{
        config::Config,
        play_store::PlayStore,
    },
    crate::{
        dashboard::{report_failure, Dashboard},
        menu::Menu,
        utils::init_logging,
    },
};

#[derive(Parser, Debug)]
#[command(version, about = "Sentiment analysis of Google Play Store reviews")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch, classify and export the newest reviews of an app.
    Analyze {
        app_id: String,
        /// Number of reviews requested from the store.
        #[arg(long)]
        count: Option<usize>,
        /// Directory the CSV export is written to.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Show store details of one of the popular apps.
    Popular {
        #[arg(long)]
        app: Option<String>,
    },
    /// Interactive session (default).
    Interactive,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let cli = Cli::parse();
    let mut config = Config::load();

    if let Some(Command::Analyze { count, output, .. }) = &cli.command {
        if let Some(count) = count {
            config.analysis.review_count = *count;
        }
        if let Some(output) = output {
            config.export = config.export.with_output_dir(output.clone());
        }
    }

    let play_store = PlayStore::new(config.play_store());
    let dashboard = Dashboard::new(play_store, config);
    let mut out = std::io::stdout();

    let result = match cli.command.unwrap_or(Command::Interactive) {
        Command::Analyze { app_id, .. } => dashboard.analyze(&mut out, &app_id).await.map(|_| ()),
        Command::Popular { app } => dashboard.popular(&mut out, app.as_deref()).await,
        Command::Interactive => return Menu::new(dashboard).run().await,
    };

    match result {
        Ok(()) => {
            info!("finished");
            Ok(())
        }
        Err(err) => {
            if report_failure(&mut out, &err)? {
                Ok(())
            } else {
                Err(err)
            }
        }
    }
}
