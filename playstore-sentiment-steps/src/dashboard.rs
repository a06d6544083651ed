use {
    std::{io::Write, path::PathBuf},
    anyhow::{Context, Result},
    tracing::{error, info, warn},
    playstore_sentiment_core::{
        config::Config,
        entity::Sentiment,
        error::PipelineError,
        export::ExportArtifact,
        source::{AppMetadataSource, ReviewSource},
    },
    crate::{
        analysis::{run_analysis, warning_message},
        popular_apps::{render_catalog, select_popular_app},
        progress::Working,
        report::{
            render_app_details,
            render_bar_chart,
            render_shares,
            render_statistics,
            render_table,
            render_word_cloud,
            top_terms,
            SentimentCounts,
        },
    },
};

pub struct Dashboard<S> {
    source: S,
    config: Config,
}

impl<S: ReviewSource + AppMetadataSource> Dashboard<S> {
    pub fn new(source: S, config: Config) -> Self {
        Self {
            source,
            config,
        }
    }

    /// Runs one analysis, prints the report and writes the CSV export.
    /// Returns where the export was written.
    pub async fn analyze<W: Write>(&self, out: &mut W, app_id: &str) -> Result<PathBuf> {
        let working = Working::start("fetching and analysing reviews");
        let analysis = run_analysis(&self.source, app_id, self.config.analysis.review_count).await;
        working.finish();
        let analysis = analysis?;

        let report = &self.config.report;
        let counts = SentimentCounts::from_predictions(&analysis.reviews);

        writeln!(
            out,
            "Analysis finished for {} ({} reviews, {} terms)\n",
            analysis.app_id,
            analysis.reviews.len(),
            analysis.vocabulary_size,
        )?;
        writeln!(out, "{}", render_statistics(&counts))?;
        writeln!(out, "{}", render_bar_chart(&analysis.app_id, &counts))?;
        writeln!(out, "{}", render_shares(&counts))?;
        for sentiment in [Sentiment::Positive, Sentiment::Negative] {
            let terms = top_terms(&analysis.reviews, sentiment, report.top_terms);
            writeln!(out, "{}", render_word_cloud(sentiment, &terms))?;
        }
        writeln!(out, "{}", render_table(&analysis.reviews, report.table_rows()))?;

        let export = &self.config.export;
        let artifact = ExportArtifact::csv(export.file_name(), &analysis.reviews)?;
        let path = artifact.write_to_dir(&export.output_dir())?;

        writeln!(out, "Results saved to {} ({})", path.display(), artifact.content_type())?;
        Ok(path)
    }

    pub async fn popular<W: Write>(&self, out: &mut W, name: Option<&str>) -> Result<()> {
        let app = select_popular_app(name)?;
        writeln!(out, "{}", render_catalog(app))?;

        let working = Working::start(format!("fetching details for {}", app.name));
        let details = self.source.app_details(app.app_id).await;
        working.finish();
        let details = details.with_context(|| format!("failed to load details for {}", app.app_id))?;

        info!("loaded details for {}", app.app_id);
        writeln!(out, "{}", render_app_details(&details, self.config.report.description_preview_chars))?;
        Ok(())
    }
}

/// Shows the user what went wrong. Returns `true` when the error is one of
/// the recognised conditions that only halt the current request.
pub fn report_failure<W: Write>(out: &mut W, err: &anyhow::Error) -> std::io::Result<bool> {
    let message = err.downcast_ref::<PipelineError>().and_then(warning_message);

    match message {
        Some(message) => {
            warn!("{}", err);
            writeln!(out, "Warning: {}", message)?;
            Ok(true)
        }
        None => {
            error!("request failed: {:#}", err);
            writeln!(out, "Error: something went wrong while processing the request.")?;
            Ok(false)
        }
    }
}
