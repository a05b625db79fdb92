use clap::Args;
use ipo_flip::analysis::{
    render_report, sample_candidates, AnalysisConfig, AnalysisEngine, IpoCandidate,
};
use ipo_flip::error::AppError;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

#[derive(Args, Debug, Default)]
pub(crate) struct ReportArgs {
    /// JSON file with an array of candidate records (defaults to the built-in samples)
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    /// Also write the report to this file after printing it
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let candidates = match &args.input {
        Some(path) => load_candidates(path)?,
        None => sample_candidates(),
    };

    for candidate in &candidates {
        candidate.validate()?;
    }

    let engine = AnalysisEngine::new(AnalysisConfig::default());
    let report = render_report(&engine, &candidates);
    println!("{report}");

    if let Some(path) = &args.output {
        std::fs::write(path, &report)?;
        println!("\nreport written to {}", path.display());
    }

    Ok(())
}

fn load_candidates(path: &Path) -> Result<Vec<IpoCandidate>, AppError> {
    let file = File::open(path)?;
    let candidates = serde_json::from_reader(BufReader::new(file))?;
    Ok(candidates)
}
