use super::schema::SchemaField;
use serde::Serialize;

/// Placeholder for a field that could not be resolved
pub const SENTINEL: &str = "-";

/// Fields read from one KTP. Serializes as a flat object keyed in camelCase.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KtpData {
    pub nik: String,
    pub name: String,
    pub date_of_birth: String,
    pub gender: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_type: Option<String>,
    pub address: String,
    pub rtrw: String,
    pub kelurahan: String,
    pub kecamatan: String,
    pub religion: String,
    pub marital_status: String,
    pub occupation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    pub nationality: String,
    pub valid_until: String,
}

impl Default for KtpData {
    fn default() -> Self {
        KtpData {
            nik: SENTINEL.to_string(),
            name: SENTINEL.to_string(),
            date_of_birth: SENTINEL.to_string(),
            gender: SENTINEL.to_string(),
            blood_type: None,
            address: SENTINEL.to_string(),
            rtrw: SENTINEL.to_string(),
            kelurahan: SENTINEL.to_string(),
            kecamatan: SENTINEL.to_string(),
            religion: SENTINEL.to_string(),
            marital_status: SENTINEL.to_string(),
            occupation: SENTINEL.to_string(),
            city: None,
            province: None,
            nationality: SENTINEL.to_string(),
            valid_until: SENTINEL.to_string(),
        }
    }
}

impl KtpData {
    pub fn get(&self, field: SchemaField) -> &str {
        match field {
            SchemaField::Nik => &self.nik,
            SchemaField::Name => &self.name,
            SchemaField::BirthInfo => &self.date_of_birth,
            SchemaField::Gender => &self.gender,
            SchemaField::Address => &self.address,
            SchemaField::NeighborhoodUnit => &self.rtrw,
            SchemaField::SubDistrict => &self.kelurahan,
            SchemaField::District => &self.kecamatan,
            SchemaField::Religion => &self.religion,
            SchemaField::MaritalStatus => &self.marital_status,
            SchemaField::Occupation => &self.occupation,
        }
    }

    pub fn set(&mut self, field: SchemaField, value: impl Into<String>) {
        let slot = match field {
            SchemaField::Nik => &mut self.nik,
            SchemaField::Name => &mut self.name,
            SchemaField::BirthInfo => &mut self.date_of_birth,
            SchemaField::Gender => &mut self.gender,
            SchemaField::Address => &mut self.address,
            SchemaField::NeighborhoodUnit => &mut self.rtrw,
            SchemaField::SubDistrict => &mut self.kelurahan,
            SchemaField::District => &mut self.kecamatan,
            SchemaField::Religion => &mut self.religion,
            SchemaField::MaritalStatus => &mut self.marital_status,
            SchemaField::Occupation => &mut self.occupation,
        };
        *slot = value.into();
    }

    /// Looks a value up by its output key, including the non-schema keys
    pub fn get_key(&self, key: &str) -> Option<&str> {
        if let Some(field) = SchemaField::from_key(key) {
            return Some(self.get(field));
        }
        match key {
            "bloodType" => self.blood_type.as_deref(),
            "city" => self.city.as_deref(),
            "province" => self.province.as_deref(),
            "nationality" => Some(&self.nationality),
            "validUntil" => Some(&self.valid_until),
            _ => None,
        }
    }

    /// Present keys in card reading order
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        let mut entries = Vec::with_capacity(16);
        if let Some(province) = &self.province {
            entries.push(("province", province.as_str()));
        }
        if let Some(city) = &self.city {
            entries.push(("city", city.as_str()));
        }
        for field in SchemaField::ALL.iter() {
            entries.push((field.key(), self.get(*field)));
            if *field == SchemaField::Gender {
                if let Some(blood_type) = &self.blood_type {
                    entries.push(("bloodType", blood_type.as_str()));
                }
            }
        }
        entries.push(("nationality", &self.nationality));
        entries.push(("validUntil", &self.valid_until));
        entries
    }
}
