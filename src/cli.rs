use std::{fs::File, io::BufReader, path::PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use optimos_pareto::{DominanceMode, Report, Rule, Run, RunSummary, Solution};
use tracing::{info, instrument, warn};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Fold the final solutions of the report into the Pareto front and log it.
    #[clap(name = "front")]
    Front(ReportArgs),

    /// Classify the initial solution against the final Pareto front.
    #[clap(name = "classify")]
    Classify(ReportArgs),
}

#[derive(Parser)]
pub struct ReportArgs {
    /// Optimos JSON report.
    #[clap(long = "report", env = "REPORT_PATH")]
    pub path: PathBuf,

    #[clap(long = "dominance", env = "DOMINANCE", value_enum, default_value = "strict")]
    pub dominance: DominanceMode,
}

impl ReportArgs {
    #[instrument(skip_all, fields(path = %self.path.display()))]
    fn summarize(&self) -> anyhow::Result<RunSummary> {
        let file = File::open(&self.path)
            .with_context(|| format!("failed to open `{}`", self.path.display()))?;
        let run = Run::try_from(Report::from_reader(BufReader::new(file))?)
            .with_context(|| format!("failed to read `{}`", self.path.display()))?;
        let rule: Rule = self.dominance.resolve(run.solutions());
        info!(%rule, n_finals = run.finals().len(), "loaded");
        run.summarize(&rule).context("failed to build the Pareto front")
    }
}

pub fn front(args: &ReportArgs) -> anyhow::Result<()> {
    let summary = args.summarize()?;
    for solution in &summary.front {
        log_solution("optimal", solution);
    }
    for solution in &summary.others {
        log_solution("non-optimal", solution);
    }
    Ok(())
}

pub fn classify(args: &ReportArgs) -> anyhow::Result<()> {
    match args.summarize()?.initial_status {
        Some(status) => info!(%status, "initial solution"),
        None => warn!("the report has no initial solution"),
    }
    Ok(())
}

fn log_solution(kind: &str, solution: &Solution) {
    info!(
        label = %solution.label(),
        cycle_time = %solution.cycle_time(),
        cost = %solution.cost(),
        "{kind}",
    );
}
