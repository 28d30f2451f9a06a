use crate::models::*;
use crate::processing::*;
use crate::utils::KtpError;
use log::info;
use std::path::Path;

pub struct KtpReader {
    rules: ExtractionRules,
}

impl KtpReader {
    pub fn new() -> Self {
        KtpReader {
            rules: ExtractionRules::default(),
        }
    }

    pub fn with_rules(rules: ExtractionRules) -> Self {
        KtpReader { rules }
    }

    // Main extraction function that orchestrates the entire process
    pub fn read(&self, items: &[TextItem]) -> KtpData {
        // Step 1: Estimate how far the card is rotated
        let angle = estimate_angle(items);

        // Step 2: Group fragments into lines and split each into label and value
        let grouped = LineGrouper::new(angle).group(items);

        // Step 3: Match labels against the schema, top of the card first
        let resolver = FieldResolver::new(&self.rules);
        let mut pool = SchemaPool::full();
        let mut data = KtpData::default();
        for line in grouped.lines.iter().filter(|line| !line.is_unlabeled()) {
            if let Some(resolution) =
                resolver.resolve(&mut pool, &line.label_tokens(), &line.value_tokens())
            {
                resolution.apply(&mut data);
            }
        }

        // Step 4: Recover header lines and fill whatever is still missing
        let extractor = FieldExtractor::new(&self.rules);
        recover(&grouped, &mut pool, &extractor, &mut data);

        // Step 5: Values printed identically on every card
        data.nationality = self.rules.nationality.clone();
        data.valid_until = self.rules.valid_until.clone();

        info!(
            "Read {} items in {} lines (angle {:?}), {} of {} fields resolved",
            items.len(),
            grouped.lines.len(),
            angle,
            SchemaField::ALL
                .iter()
                .filter(|field| data.get(**field) != SENTINEL)
                .count(),
            SchemaField::ALL.len()
        );
        data
    }

    /// Reads a full detector response, whose first item aggregates the whole
    /// document and is skipped
    pub fn read_response(&self, response: &[TextItem]) -> KtpData {
        self.read(response.get(1..).unwrap_or(&[]))
    }

    /// Loads items from a JSON file and reads them
    pub fn read_file<P: AsRef<Path>>(
        &self,
        path: P,
        skip_aggregate: bool,
    ) -> Result<KtpData, KtpError> {
        let items = load_items(path)?;
        if skip_aggregate {
            Ok(self.read_response(&items))
        } else {
            Ok(self.read(&items))
        }
    }
}

impl Default for KtpReader {
    fn default() -> Self {
        Self::new()
    }
}
