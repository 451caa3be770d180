//! The two entry points shared by the CLI, the HTTP endpoint and the dashboard.

use std::sync::Arc;

use tracing::{error, info, info_span};

use crate::config::Config;
use crate::error::{PipelineError, Result};
use crate::metrics::PipelineMetrics;
use crate::regression::LinearVisitorModel;
use crate::resolver::fuzzy::WeightedRatio;
use crate::resolver::{PopulationResolver, ReferenceTable};
use crate::table::{BuilderSettings, HttpPageFetcher, PageFetcher, TableBuilder};
use crate::types::{CleanedDataset, PredictionReport};

/// Everything a pipeline run needs; cheap to clone and share across requests
#[derive(Clone)]
pub struct AppContext {
    pub reference: Arc<ReferenceTable>,
    pub fetcher: Arc<dyn PageFetcher>,
    pub settings: BuilderSettings,
    pub fuzzy_threshold: u8,
}

impl AppContext {
    pub fn new(
        reference: Arc<ReferenceTable>,
        fetcher: Arc<dyn PageFetcher>,
        settings: BuilderSettings,
        fuzzy_threshold: u8,
    ) -> Self {
        Self {
            reference,
            fetcher,
            settings,
            fuzzy_threshold,
        }
    }

    /// Load the reference table and set up the HTTP fetcher from config
    pub fn from_config(config: &Config) -> Result<Self> {
        let reference = Arc::new(ReferenceTable::from_csv_path(&config.reference_csv)?);
        Ok(Self::new(
            reference,
            Arc::new(HttpPageFetcher::new(config.source.user_agent.clone())),
            BuilderSettings {
                source_url: config.source.url.clone(),
                visitors_column: config.source.visitors_column.clone(),
            },
            config.fuzzy_threshold,
        ))
    }

    /// Same context, different page source
    pub fn with_fetcher(mut self, fetcher: Arc<dyn PageFetcher>) -> Self {
        self.fetcher = fetcher;
        self
    }

    fn table_builder(&self) -> TableBuilder {
        let resolver = PopulationResolver::with_scorer(
            self.reference.clone(),
            Arc::new(WeightedRatio),
            self.fuzzy_threshold,
        );
        TableBuilder::new(self.fetcher.clone(), resolver, self.settings.clone())
    }
}

/// Fetch and clean the museums table. Every call is a full, independent run.
pub fn get_museum_dataset(ctx: &AppContext) -> Result<CleanedDataset> {
    let span = info_span!("museum_dataset", url = %ctx.settings.source_url);
    let _enter = span.enter();

    let result = ctx.table_builder().build();
    PipelineMetrics::record_run(result.is_ok());
    if let Err(e) = &result {
        error!("Pipeline failed: {}", e);
    }
    result
}

/// Parse a comma-separated list of integer populations
pub fn parse_populations(pops: &str) -> Result<Vec<i64>> {
    pops.split(',')
        .map(|p| {
            let p = p.trim();
            p.parse::<i64>()
                .map_err(|_| PipelineError::InvalidPopulation(p.to_string()))
        })
        .collect()
}

/// Fit the regression on `dataset` and predict visitors for each population in `pops`
pub fn make_predictions(dataset: &CleanedDataset, pops: &str) -> Result<PredictionReport> {
    let mut model = LinearVisitorModel::new();
    let fit = model.fit(dataset)?;

    let populations: Vec<f64> = parse_populations(pops)?
        .into_iter()
        .map(|p| p as f64)
        .collect();
    let predictions = model.predict(&populations)?;

    info!(
        rows = dataset.len(),
        slope = fit.slope,
        intercept = fit.intercept,
        r2 = fit.r2,
        "Fitted visitor model"
    );

    Ok(PredictionReport {
        slope: fit.slope,
        intercept: fit.intercept,
        r2: fit.r2,
        predictions,
    })
}

/// Fresh dataset plus predictions, as served by the predict endpoint
pub fn predict_visitors(ctx: &AppContext, pops: &str) -> Result<PredictionReport> {
    let dataset = get_museum_dataset(ctx)?;
    make_predictions(&dataset, pops)
}
