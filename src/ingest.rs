use std::collections::HashMap;

use crate::{
    config::Config,
    election::{Delegation, District, ElectionResults, Parties},
    error::{ReportError, ReportResult},
    io::{
        csv::{read_csv, read_result_records, ResultColumns, ResultRecord},
        geojson::{read_boundaries, BoundaryFeatures},
    },
};

/// Read the results table and boundary file named by `config` into election results.
pub fn load_results(config: &Config) -> ReportResult<ElectionResults> {
    let df = read_csv(&config.filename)?;
    let columns = ResultColumns {
        delegation_id: &config.delegation_identifier,
        delegation_name: &config.delegation_name,
        district_id: &config.district_identifier,
        votes: [&config.party_left_votes, &config.party_right_votes],
    };
    let records = read_result_records(&df, columns)?;
    let features = read_boundaries(&config.geojson, &config.delegation_identifier, &config.district_identifier)?;

    tracing::debug!(
        records = records.len(),
        features = features.len(),
        "[ingest::load_results] read results and boundaries"
    );

    build_results(config.parties(), &records, &features)
}

/// Group records into delegations in order of first appearance, attaching each district's boundary.
/// The delegation id doubles as its abbreviation.
pub(crate) fn build_results(
    parties: Parties,
    records: &[ResultRecord],
    features: &BoundaryFeatures,
) -> ReportResult<ElectionResults> {
    let mut delegations: Vec<Delegation> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        let slot = *index.entry(record.delegation_id.as_str()).or_insert_with(|| {
            delegations.push(Delegation::new(&record.delegation_name, &record.delegation_id, Vec::new()));
            delegations.len() - 1
        });
        let delegation_name = delegations[slot].name().to_string();
        let fail = |e: anyhow::Error| ReportError::ingestion(&delegation_name, &record.district_id, format!("{e:#}"));

        let boundary = features.boundary(&record.delegation_id, &record.district_id).map_err(fail)?;
        let votes = [record.votes[0].as_str(), record.votes[1].as_str()];
        let district = District::parse(&record.district_id, votes, boundary)
            .map_err(|e| fail(e.context(format!("[ingest::build_results] row {}", record.row))))?;

        delegations[slot].push(district).map_err(fail)?;
    }

    Ok(ElectionResults::new(parties.left, parties.right, delegations))
}
