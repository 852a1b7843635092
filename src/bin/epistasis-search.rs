use clap::Parser;
use epistasis::cli::Cli;
use epistasis::io::{load_dataset, writer};
use epistasis::transport::SingleRankTransport;
use epistasis::{run_search, SearchConfigBuilder};
use std::fs::File;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("epistasis-search: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = SearchConfigBuilder::new()
        .with_order(cli.order)
        .with_threads(cli.threads)
        .with_noutputs(cli.noutputs)
        .build()?;

    log::info!("loading dataset from {:?}", cli.inputs);
    let dataset = load_dataset(&cli.inputs)?;
    log::info!(
        "loaded {} SNPs, {} cases, {} controls",
        dataset.n_snps(),
        dataset.n_cases(),
        dataset.n_ctrls()
    );

    let transport = SingleRankTransport;
    let results = run_search(&dataset, &config, &transport)?
        .expect("single-rank transport always returns a gathered result set");

    let out = File::create(&cli.output)?;
    writer::write(out, &results)?;
    log::info!("wrote {} result(s) to {:?}", results.len(), cli.output);
    Ok(())
}
