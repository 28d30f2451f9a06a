use super::extractors::{FieldExtractor, Region};
use super::lines::GroupedLines;
use super::resolver::SchemaPool;
use crate::models::{KtpData, SchemaField};
use log::debug;

/// Recovers what the label matcher could not: the city and province header
/// lines, a marital status line whose label and value ran together, and
/// finally the sentinel for every field still unclaimed.
pub fn recover(
    grouped: &GroupedLines,
    pool: &mut SchemaPool,
    extractor: &FieldExtractor,
    data: &mut KtpData,
) {
    for line in grouped.unlabeled_lines() {
        if let Some((region, value)) = extractor.extract_city_province(&line.tokens()) {
            debug!("Recovered {:?} '{}' from line at y={}", region, value, line.seed_y);
            match region {
                Region::City => data.city = Some(value),
                Region::Province => data.province = Some(value),
            }
        }
    }

    if pool.contains(SchemaField::MaritalStatus) {
        let fused = grouped
            .unlabeled_lines()
            .map(|line| line.tokens())
            .find(|tokens| extractor.mentions_marital_status(tokens));

        if let Some(tokens) = fused {
            let value = extractor.extract_marital_status(&tokens);
            debug!("Recovered marital status '{}' from {:?}", value, tokens);
            data.set(SchemaField::MaritalStatus, value);
            pool.remove(SchemaField::MaritalStatus);
        }
    }

    let unresolved = pool.drain_unresolved(data);
    if !unresolved.is_empty() {
        debug!("Unresolved fields: {:?}", unresolved);
    }
}
