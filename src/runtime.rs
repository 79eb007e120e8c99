use crate::{
    cloud::{CloudPrefixes, PrefixSource, classify},
    error::CloudIpError,
    input::load_domains,
    job::Job,
    net::DnsResolver,
    report::{ResultRow, emit},
};

/// Resolve and classify each domain, one at a time, in input order
///
/// A failed lookup never aborts the run: the row is kept with no address
/// and classified as unresolved.
pub async fn collect_rows<R: DnsResolver>(
    domains: &[String],
    resolver: &R,
    prefixes: &CloudPrefixes,
) -> Vec<ResultRow> {
    let mut rows = Vec::with_capacity(domains.len());

    for domain in domains {
        let address = resolver
            .resolve(domain)
            .await
            .inspect_err(|err| {
                log::warn!("{err}");
            })
            .ok();
        let remark = classify(address, prefixes);
        log::debug!(
            "{} -> {} [{}]",
            domain,
            address.map_or_else(|| "-".to_string(), |ip| ip.to_string()),
            remark
        );

        rows.push(ResultRow {
            domain: domain.clone(),
            address,
            remark,
        });
    }

    rows
}

/// Run the whole pipeline for `job` and return the rows that were emitted
pub async fn execute<R: DnsResolver, S: PrefixSource>(
    job: &Job,
    resolver: &R,
    source: &S,
) -> Result<Vec<ResultRow>, CloudIpError> {
    let domains = load_domains(&job.input)?;
    log::info!("Loaded {} domains from {}", domains.len(), job.input.display());

    let prefixes = source.fetch().await?;
    log::info!(
        "Classifying against {} syncToken={}, {} syncToken={}",
        prefixes.aws.provider,
        prefixes.aws.revision(),
        prefixes.gcp.provider,
        prefixes.gcp.revision(),
    );

    let rows = collect_rows(&domains, resolver, &prefixes).await;
    emit(&rows, &job.sink)?;

    Ok(rows)
}
