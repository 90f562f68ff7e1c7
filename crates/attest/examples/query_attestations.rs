//! Build a handful of synthetic attestations, store them in the in-memory
//! repository and select subsets with the query engine.
//!
//! Run with: `cargo run --example query_attestations`

use attest::{
    fetch_filtered, BareEnvelope, Envelope, EnvelopeRef, FetchOptions, InMemoryRepository,
    Predicate, PredicateTypeFilter, Query, QueryMode, QueryOptions, Statement, StoreOptions,
    Storer, Subject, Verification, VerifiedFilter,
};

fn envelope(name: &str, predicate_type: &str, verified: bool) -> EnvelopeRef {
    BareEnvelope::new(Statement::new(
        vec![Subject::new(name)
            .with_digest("sha256", format!("sha256-{name}"))
            .with_digest("sha512", format!("sha512-{name}"))],
        Predicate::new(predicate_type),
    ))
    .with_verification(Verification::new(verified))
    .into_ref()
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let repo = InMemoryRepository::new();
    repo.store(
        &StoreOptions::new(),
        &[
            envelope("app.tar.gz", "https://slsa.dev/provenance/v1", true),
            envelope("app.tar.gz", "https://example.com/vuln-scan/v1", true),
            envelope("lib.tar.gz", "https://slsa.dev/provenance/v1", false),
        ],
    )
    .await?;

    // Everything, then only verified provenance.
    let all = fetch_filtered(&repo, &FetchOptions::new(), &[], &[]).await?;
    println!("stored {} attestations", all.len());

    let query = Query::new()
        .with_filter(PredicateTypeFilter::new("https://slsa.dev/provenance/v1"))
        .with_filter(VerifiedFilter::new());

    for envelope in query.run(&all, &QueryOptions::new()) {
        println!(
            "verified provenance for {}",
            envelope.statement().subjects()[0].name()
        );
    }

    // The same query under OR semantics: provenance OR verified.
    let either = query.run(&all, &QueryOptions::new().with_mode(QueryMode::Or));
    println!("{} attestations match at least one criterion", either.len());

    Ok(())
}
