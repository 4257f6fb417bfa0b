//! Convergence Report: iteration table and residual traces of one solve
//!
//! Parses a MOCEX logfile twice: once for the MOC/CMFD iteration table and
//! once for the inner-solve residual trace of a single (outer, group) pair.
//! Each curve is printed as a plot-ready series with its axis scale.
//!
//! Without arguments the bundled sample log is used.
//!
//! Run with: cargo run --example convergence_report -- [LOGFILE] [OUTER] [GROUP]
//! Logging:  RUST_LOG=mocex_trace=debug cargo run --example convergence_report

use anyhow::{Context, Result};
use mocex_trace::parser::{LogParser, ResidualLogParser, TabularLogParser};
use mocex_trace::query::{QueryMode, Series, SeriesQuery};
use mocex_trace::record::Metric;
use tracing_subscriber::EnvFilter;

const SAMPLE: &str = include_str!("../tests/data/mocex_sample.out");

fn print_series(mode: &str, series: &Series) {
    let summary = series.summary();
    println!("  file    : {}", series.label());
    println!("  solver  : {mode}");
    println!("  metric  : {} ({:?} axis)", series.metric(), series.scale());
    println!("  length  : {}", summary.len);
    println!("  values  : {:?}", series.values());
    println!("  sum     : {:e}", summary.sum);
    if let (Some(min), Some(max)) = (summary.min, summary.max) {
        println!("  range   : [{min:e}, {max:e}]");
    }
    println!();
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let path = args.next();
    let outer: u32 = args.next().map_or(Ok(1), |s| s.parse()).context("OUTER")?;
    let group: u32 = args.next().map_or(Ok(2), |s| s.parse()).context("GROUP")?;

    let label = path.clone().unwrap_or_else(|| "mocex_sample.out".to_string());
    let tabular = TabularLogParser::new();
    let records = match &path {
        Some(p) => tabular.parse_file(p).with_context(|| format!("parsing {p}"))?,
        None => tabular.parse_str(SAMPLE)?,
    };

    println!("=== MOCEX Convergence Report ===\n");
    println!(
        "{} rows ({} MOC, {} CMFD)\n",
        records.len(),
        records.count_tag(mocex_trace::SolverTag::Moc),
        records.count_tag(mocex_trace::SolverTag::Cmfd)
    );

    println!("=== Iteration Table ===\n");
    for (mode, metric) in [
        (QueryMode::MOC, Metric::FissErr),
        (QueryMode::CMFD, Metric::FissErr),
        (QueryMode::Mix, Metric::Eigenvalue),
        (QueryMode::Mix, Metric::Seconds),
    ] {
        let series = SeriesQuery::new(mode, metric.name()).series(label.as_str(), &records)?;
        print_series(&mode.to_string(), &series);
    }

    println!("=== Residual Trace (outer {outer}, group {group}) ===\n");
    let residual = ResidualLogParser::new(outer, group);
    let values = match &path {
        Some(p) => residual.parse_file(p).with_context(|| format!("parsing {p}"))?,
        None => residual.parse_str(SAMPLE)?,
    };
    print_series("MOC", &Series::residual(label, values));

    Ok(())
}
