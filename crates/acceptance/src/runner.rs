//! Scenario runner: executes scenario files against a renderer and catalog

use std::path::PathBuf;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::catalog::CatalogService;
use crate::compare::BorrowStatus;
use crate::config::HarnessConfig;
use crate::context::ScenarioContext;
use crate::error::{VerifyError, VerifyResult};
use crate::page::PageRenderer;
use crate::scenario::{ScenarioSpec, ScenarioStep};
use crate::steps::BookListSteps;

/// Result of executing one scenario step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepResult {
    pub success: bool,
    pub step_name: String,
    pub duration_ms: u64,
    pub error: Option<String>,
}

/// Result of running a single scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub name: String,
    pub success: bool,
    pub duration_ms: u64,
    pub steps: Vec<StepResult>,
    pub error: Option<String>,
}

/// Result of running all scenarios
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteResult {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub duration_ms: u64,
    pub results: Vec<ScenarioResult>,
}

impl SuiteResult {
    pub fn from_results(results: Vec<ScenarioResult>, duration_ms: u64) -> Self {
        let passed = results.iter().filter(|r| r.success).count();
        Self {
            total: results.len(),
            passed,
            failed: results.len() - passed,
            skipped: 0,
            duration_ms,
            results,
        }
    }
}

pub struct ScenarioRunner<R, C> {
    steps: BookListSteps<R, C>,
    scenarios_dir: PathBuf,
    output_dir: PathBuf,
}

impl<R: PageRenderer, C: CatalogService> ScenarioRunner<R, C> {
    pub fn new(config: &HarnessConfig, renderer: R, catalog: C) -> Self {
        Self {
            steps: BookListSteps::with_blank_policy(renderer, catalog, config.blank_borrower),
            scenarios_dir: config.scenarios_dir.clone(),
            output_dir: config.output_dir.clone(),
        }
    }

    /// Run all scenarios in the scenarios directory
    pub fn run_all(&mut self) -> VerifyResult<SuiteResult> {
        let specs = ScenarioSpec::load_all(&self.scenarios_dir)?;
        Ok(self.run_specs(&specs))
    }

    /// Run scenarios matching a tag
    pub fn run_tagged(&mut self, tag: &str) -> VerifyResult<SuiteResult> {
        let specs = ScenarioSpec::load_all(&self.scenarios_dir)?;
        let filtered: Vec<ScenarioSpec> = ScenarioSpec::filter_by_tag(&specs, tag)
            .into_iter()
            .cloned()
            .collect();
        Ok(self.run_specs(&filtered))
    }

    /// Run a specific scenario by name
    pub fn run_named(&mut self, name: &str) -> VerifyResult<ScenarioResult> {
        let specs = ScenarioSpec::load_all(&self.scenarios_dir)?;
        let spec = specs
            .into_iter()
            .find(|s| s.name == name)
            .ok_or_else(|| VerifyError::ScenarioParse(format!("Scenario not found: {}", name)))?;
        Ok(self.run_spec(&spec))
    }

    /// Run a list of scenarios
    pub fn run_specs(&mut self, specs: &[ScenarioSpec]) -> SuiteResult {
        let start = Instant::now();
        info!("Running {} scenario(s)...", specs.len());

        let mut results = Vec::with_capacity(specs.len());
        for spec in specs {
            let result = self.run_spec(spec);
            if result.success {
                info!("✓ {} ({} ms)", result.name, result.duration_ms);
            } else {
                error!(
                    "✗ {} - {}",
                    result.name,
                    result.error.as_deref().unwrap_or("unknown error")
                );
            }
            results.push(result);
        }

        let suite = SuiteResult::from_results(results, start.elapsed().as_millis() as u64);
        info!(
            "Scenario results: {} passed, {} failed, {} skipped ({} ms)",
            suite.passed, suite.failed, suite.skipped, suite.duration_ms
        );
        suite
    }

    /// Run a single scenario, stopping at its first failing step
    pub fn run_spec(&mut self, spec: &ScenarioSpec) -> ScenarioResult {
        let start = Instant::now();
        debug!("Running scenario: {}", spec.name);

        let mut context = ScenarioContext::new();
        let mut step_results = Vec::with_capacity(spec.steps.len());
        let mut scenario_error = None;

        for step in &spec.steps {
            let step_start = Instant::now();
            let step_name = step.name();
            debug!("Executing step: {}", step_name);

            let outcome = self.execute_step(step, &mut context);
            let duration_ms = step_start.elapsed().as_millis() as u64;

            match outcome {
                Ok(()) => step_results.push(StepResult {
                    success: true,
                    step_name,
                    duration_ms,
                    error: None,
                }),
                Err(e) => {
                    let message = format!("{}: {}", step_name, e);
                    step_results.push(StepResult {
                        success: false,
                        step_name,
                        duration_ms,
                        error: Some(e.to_string()),
                    });
                    scenario_error = Some(message);
                    break;
                }
            }
        }

        ScenarioResult {
            name: spec.name.clone(),
            success: scenario_error.is_none(),
            duration_ms: start.elapsed().as_millis() as u64,
            steps: step_results,
            error: scenario_error,
        }
    }

    fn execute_step(
        &mut self,
        step: &ScenarioStep,
        context: &mut ScenarioContext,
    ) -> VerifyResult<()> {
        match step {
            ScenarioStep::BrowseBookList => self.steps.browse_book_list(),
            ScenarioStep::ExpectBook(expected) => self.steps.book_list_contains(expected),
            ScenarioStep::ExpectEmpty => self.steps.library_is_empty(),
            ScenarioStep::ExpectBorrower { borrower, isbn } => {
                self.steps.lists_borrower(borrower, isbn)
            }
            ScenarioStep::ExpectBorrowStatus {
                isbns,
                status,
                borrower,
            } => self.steps.books_have_borrow_status(
                isbns.to_vec().as_slice(),
                BorrowStatus::from_phrase(status),
                borrower,
            ),
            ScenarioStep::ExpectCovers => self.steps.every_book_has_cover(),
            ScenarioStep::OpenDetails { isbn } => self.steps.navigate_to_details(isbn, context),
            ScenarioStep::ExpectDetailsVisible => self.steps.all_details_visible(context),
            ScenarioStep::Log { message } => {
                info!("[SCENARIO LOG] {}", message);
                Ok(())
            }
        }
    }

    /// Write suite results to a JSON file
    pub fn write_results(&self, results: &SuiteResult) -> VerifyResult<PathBuf> {
        std::fs::create_dir_all(&self.output_dir)?;

        let path = self.output_dir.join("scenario-results.json");
        let json = serde_json::to_string_pretty(results)?;
        std::fs::write(&path, json)?;

        info!("Results written to: {}", path.display());
        Ok(path)
    }
}
