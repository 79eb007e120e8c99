use std::process::ExitCode;

use clap::Parser;
use cloudip::{
    cli::{Args, JobLoader},
    cloud::HttpPrefixSource,
    error::CloudIpError,
    net::SystemDnsResolver,
    runtime::execute,
};

async fn run(args: &Args) -> Result<(), CloudIpError> {
    let job = JobLoader::load(args)?;

    let resolver = SystemDnsResolver::new()?;
    let source = HttpPrefixSource::new(job.sources.clone())?;

    execute(&job, &resolver, &source).await?;

    println!("[+] Success converting Domain to Address");
    if let Some(target) = job.sink.file.as_ref() {
        println!("[+] output file : {}", target.path.display());
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.is_configuration() => {
            eprintln!("[-] {err}");
            ExitCode::from(2)
        }
        Err(err) => {
            eprintln!("[-] {err}");
            ExitCode::FAILURE
        }
    }
}
