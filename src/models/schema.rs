/// The fixed set of labelled fields printed on a KTP
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaField {
    Nik,
    Name,
    BirthInfo,
    Gender,
    Address,
    NeighborhoodUnit,
    SubDistrict,
    District,
    Religion,
    MaritalStatus,
    Occupation,
}

/// How the value region of a matched line is turned into a field value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extractor {
    GenderBloodType,
    Religion,
    MaritalStatus,
    Occupation,
    Generic,
}

impl SchemaField {
    /// Schema order; also the tie-break order when two labels are equally close
    pub const ALL: [SchemaField; 11] = [
        SchemaField::Nik,
        SchemaField::Name,
        SchemaField::BirthInfo,
        SchemaField::Gender,
        SchemaField::Address,
        SchemaField::NeighborhoodUnit,
        SchemaField::SubDistrict,
        SchemaField::District,
        SchemaField::Religion,
        SchemaField::MaritalStatus,
        SchemaField::Occupation,
    ];

    /// Label as printed on the card
    pub fn label(&self) -> &'static str {
        match self {
            SchemaField::Nik => "NIK",
            SchemaField::Name => "Nama",
            SchemaField::BirthInfo => "Tempat / Tgl Lahir",
            SchemaField::Gender => "Jenis Kelamin",
            SchemaField::Address => "Alamat",
            SchemaField::NeighborhoodUnit => "RT RW",
            SchemaField::SubDistrict => "Kel Desa",
            SchemaField::District => "Kecamatan",
            SchemaField::Religion => "Agama",
            SchemaField::MaritalStatus => "Status Perkawinan",
            SchemaField::Occupation => "Pekerjaan",
        }
    }

    /// Key used in the flat output mapping
    pub fn key(&self) -> &'static str {
        match self {
            SchemaField::Nik => "nik",
            SchemaField::Name => "name",
            SchemaField::BirthInfo => "dateOfBirth",
            SchemaField::Gender => "gender",
            SchemaField::Address => "address",
            SchemaField::NeighborhoodUnit => "rtrw",
            SchemaField::SubDistrict => "kelurahan",
            SchemaField::District => "kecamatan",
            SchemaField::Religion => "religion",
            SchemaField::MaritalStatus => "maritalStatus",
            SchemaField::Occupation => "occupation",
        }
    }

    pub fn from_key(key: &str) -> Option<SchemaField> {
        SchemaField::ALL.iter().copied().find(|field| field.key() == key)
    }

    pub fn extractor(&self) -> Extractor {
        match self {
            SchemaField::Gender => Extractor::GenderBloodType,
            SchemaField::Religion => Extractor::Religion,
            SchemaField::MaritalStatus => Extractor::MaritalStatus,
            SchemaField::Occupation => Extractor::Occupation,
            SchemaField::Nik
            | SchemaField::Name
            | SchemaField::BirthInfo
            | SchemaField::Address
            | SchemaField::NeighborhoodUnit
            | SchemaField::SubDistrict
            | SchemaField::District => Extractor::Generic,
        }
    }
}
