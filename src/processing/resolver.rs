use super::extractors::FieldExtractor;
use crate::models::{ExtractionRules, Extractor, KtpData, SchemaField, SENTINEL};
use crate::utils::text::{clean_text, levenshtein_distance};
use log::debug;

/// Schema fields not yet claimed by any line, kept in schema order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaPool {
    remaining: Vec<SchemaField>,
}

impl SchemaPool {
    pub fn full() -> Self {
        SchemaPool {
            remaining: SchemaField::ALL.to_vec(),
        }
    }

    pub fn remaining(&self) -> &[SchemaField] {
        &self.remaining
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    pub fn contains(&self, field: SchemaField) -> bool {
        self.remaining.contains(&field)
    }

    pub fn remove(&mut self, field: SchemaField) -> bool {
        match self.remaining.iter().position(|f| *f == field) {
            Some(idx) => {
                self.remaining.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Claims the remaining field whose label is closest to `label`, provided
    /// it is within `max_distance`. Earlier schema fields win ties.
    pub fn take_closest(&mut self, label: &str, max_distance: usize) -> Option<SchemaField> {
        let (idx, distance) = self
            .remaining
            .iter()
            .enumerate()
            .map(|(idx, field)| (idx, levenshtein_distance(label, field.label())))
            .min_by_key(|(_, distance)| *distance)?;

        if distance > max_distance {
            return None;
        }
        Some(self.remaining.remove(idx))
    }

    /// Sets every unclaimed field to the sentinel and empties the pool
    pub fn drain_unresolved(&mut self, data: &mut KtpData) -> Vec<SchemaField> {
        let unresolved: Vec<SchemaField> = self.remaining.drain(..).collect();
        for field in &unresolved {
            data.set(*field, SENTINEL);
        }
        unresolved
    }
}

/// A field value read from one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub field: SchemaField,
    pub value: String,
    /// Only the gender line carries a blood type
    pub blood_type: Option<String>,
}

impl Resolution {
    pub fn apply(self, data: &mut KtpData) {
        data.set(self.field, self.value);
        if let Some(blood_type) = self.blood_type {
            data.blood_type = Some(blood_type);
        }
    }
}

/// Matches line labels against the schema and extracts their values
pub struct FieldResolver<'r> {
    rules: &'r ExtractionRules,
    extractor: FieldExtractor<'r>,
}

impl<'r> FieldResolver<'r> {
    pub fn new(rules: &'r ExtractionRules) -> Self {
        FieldResolver {
            rules,
            extractor: FieldExtractor::new(rules),
        }
    }

    pub fn resolve(
        &self,
        pool: &mut SchemaPool,
        label_tokens: &[&str],
        value_tokens: &[&str],
    ) -> Option<Resolution> {
        let label = clean_text(label_tokens);
        if label.is_empty() || pool.is_empty() {
            return None;
        }

        let field = match pool.take_closest(&label, self.rules.label_distance) {
            Some(field) => field,
            None => {
                debug!("Label '{}' matches no remaining field", label);
                return None;
            }
        };
        debug!("Label '{}' resolved to {:?}", label, field);

        let resolution = match field.extractor() {
            Extractor::GenderBloodType => {
                let extracted = self.extractor.extract_gender_blood_type(value_tokens);
                Resolution {
                    field,
                    value: extracted.gender,
                    blood_type: Some(extracted.blood_type),
                }
            }
            Extractor::Religion => Resolution {
                field,
                value: self.extractor.extract_religion(value_tokens),
                blood_type: None,
            },
            Extractor::MaritalStatus => Resolution {
                field,
                value: self.extractor.extract_marital_status(value_tokens),
                blood_type: None,
            },
            Extractor::Occupation => Resolution {
                field,
                value: self.extractor.extract_occupation(value_tokens),
                blood_type: None,
            },
            Extractor::Generic => Resolution {
                field,
                value: clean_text(value_tokens),
                blood_type: None,
            },
        };
        Some(resolution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_take_closest() {
        let mut pool = SchemaPool::full();
        assert_eq!(pool.take_closest("NIK", 4), Some(SchemaField::Nik));
        assert!(!pool.contains(SchemaField::Nik));
        // already claimed, next closest is "Nama" at distance 3
        assert_eq!(pool.take_closest("NIK", 4), Some(SchemaField::Name));
        assert_eq!(pool.take_closest("Tempat/Tgl Lahir", 4), Some(SchemaField::BirthInfo));
        assert_eq!(pool.take_closest("Berlaku Hingga", 4), None);
        assert_eq!(pool.remaining().len(), 8);
    }

    #[test]
    fn test_pool_drain_unresolved() {
        let mut pool = SchemaPool::full();
        assert!(pool.remove(SchemaField::Address));
        assert!(!pool.remove(SchemaField::Address));

        let mut data = KtpData::default();
        data.set(SchemaField::Religion, "ISLAM");
        let unresolved = pool.drain_unresolved(&mut data);

        assert_eq!(unresolved.len(), 10);
        assert!(pool.is_empty());
        assert_eq!(data.religion, "-");
    }

    #[test]
    fn test_generic_field() {
        let rules = ExtractionRules::default();
        let resolver = FieldResolver::new(&rules);
        let mut pool = SchemaPool::full();

        let resolution = resolver
            .resolve(&mut pool, &["NIK", ":"], &["3201234567890123"])
            .unwrap();
        assert_eq!(resolution.field, SchemaField::Nik);
        assert_eq!(resolution.value, "3201234567890123");
        assert_eq!(resolution.blood_type, None);

        let resolution = resolver
            .resolve(&mut pool, &["Alamat"], &[":", "JL.", "MERDEKA", "NO.", "5"])
            .unwrap();
        assert_eq!(resolution.field, SchemaField::Address);
        assert_eq!(resolution.value, "JL MERDEKA NO 5");
    }

    #[test]
    fn test_gender_line_carries_blood_type() {
        let rules = ExtractionRules::default();
        let resolver = FieldResolver::new(&rules);
        let mut pool = SchemaPool::full();

        let resolution = resolver
            .resolve(
                &mut pool,
                &["Jenis", "Kelamin"],
                &["PEREMPUAN", "Gol.", "Darah", ":", "A"],
            )
            .unwrap();
        let mut data = KtpData::default();
        resolution.apply(&mut data);

        assert_eq!(data.gender, "PEREMPUAN");
        assert_eq!(data.blood_type.as_deref(), Some("A"));
    }

    #[test]
    fn test_each_field_matched_once() {
        let rules = ExtractionRules::default();
        let resolver = FieldResolver::new(&rules);
        let mut pool = SchemaPool::full();

        let first = resolver.resolve(&mut pool, &["Agama"], &["ISLAM"]).unwrap();
        assert_eq!(first.field, SchemaField::Religion);
        // "Nama" and "Alamat" are both two edits away; schema order decides
        let second = resolver.resolve(&mut pool, &["Agama"], &["KRISTEN"]).unwrap();
        assert_eq!(second.field, SchemaField::Name);
        assert_eq!(second.value, "KRISTEN");
    }

    #[test]
    fn test_unmatched_or_empty_label() {
        let rules = ExtractionRules::default();
        let resolver = FieldResolver::new(&rules);
        let mut pool = SchemaPool::full();

        assert_eq!(resolver.resolve(&mut pool, &[":", "•"], &["BUDI"]), None);
        assert_eq!(resolver.resolve(&mut pool, &["Berlaku", "Hingga"], &["SEUMUR"]), None);
        assert_eq!(pool.remaining().len(), 11);
    }
}
