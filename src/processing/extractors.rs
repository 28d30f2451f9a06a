// Field-specific extraction for values drawn from a small known vocabulary
use crate::models::{ExtractionRules, SENTINEL};
use crate::utils::text::{closest, is_numeric_token, join_tokens, levenshtein_distance};
use log::debug;

const GENDERS: &[(&str, &str)] = &[("LAKI LAKI", "LAKI-LAKI"), ("PEREMPUAN", "PEREMPUAN")];

const BLOOD_TYPES: &[&str] = &[
    "A", "A+", "A-", "AB", "AB+", "AB-", "B", "B+", "B-", "O", "O+", "O-",
];

const RELIGIONS: &[&str] = &["ISLAM", "KRISTEN", "KHATOLIK", "BUDHA", "HINDU", "KONG HU CU"];

const MARITAL_STATUSES: &[&str] = &["KAWIN", "BELUM KAWIN", "CERAI HIDUP", "CERAI MATI"];

pub const OCCUPATIONS: &[&str] = &[
    "BELUM/TIDAK BEKERJA", "MENGURUS RUMAH TANGGA", "PELAJAR/MAHASISWA", "PENSIUNAN",
    "PEGAWAI NEGERI SIPIL (PNS)", "TENTARA NASIONAL INDONESIA (TNI)", "KEPOLISIAN RI",
    "PERDAGANGAN", "PETANI/PEKEBUN", "PETERNAK", "NELAYAN/PERIKANAN", "INDUSTRI", "KONSTRUKSI",
    "TRANSPORTASI", "KARYAWAN SWASTA", "KARYAWAN BUMN", "KARYAWAN BUMD", "KARYAWAN HONORER",
    "BURUH HARIAN LEPAS", "BURUH TANI/PERKEBUNAN", "BURUH NELAYAN/PERIKANAN",
    "BURUH PETERNAKAN", "PEMBANTU RUMAH TANGGA", "TUKANG CUKUR", "TUKANG LISTRIK",
    "TUKANG BATU", "TUKANG KAYU", "TUKANG SOL SEPATU", "TUKANG LAS/PANDAI BESI",
    "TUKANG JAHIT", "PENATA RAMBUT", "PENATA RIAS", "PENATA BUSANA", "MEKANIK", "TUKANG GIGI",
    "SENIMAN", "TABIB", "PARAJI", "PERANCANG BUSANA", "PENTERJEMAH", "IMAM MASJID", "PENDETA",
    "PASTUR", "WARTAWAN", "USTADZ/MUBALIGH", "JURU MASAK", "PROMOTOR ACARA", "ANGGOTA DPR-RI",
    "ANGGOTA DPD", "ANGGOTA BPK", "PRESIDEN", "WAKIL PRESIDEN", "ANGGOTA MAHKAMAH KONSTITUSI",
    "ANGGOTA KABINET/KEMENTERIAN", "DUTA BESAR", "GUBERNUR", "WAKIL GUBERNUR", "BUPATI",
    "WAKIL BUPATI", "WALIKOTA", "WAKIL WALIKOTA", "ANGGOTA DPRD PROPINSI",
    "ANGGOTA DPRD KABUPATEN/KOTA", "DOSEN", "GURU", "PILOT", "PENGACARA", "NOTARIS", "ARSITEK",
    "AKUNTAN", "KONSULTAN", "DOKTER", "BIDAN", "PERAWAT", "APOTEKER", "PSIKIATER/PSIKOLOG",
    "PENYIAR TELEVISI", "PENYIAR RADIO", "PELAUT", "PENELITI", "SOPIR", "PIALANG",
    "PARANORMAL", "PEDAGANG", "PERANGKAT DESA", "KEPALA DESA", "BIARAWATI", "WIRASWASTA",
];

/// Administrative region named in a label-less header line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    City,
    Province,
}


/// Gender and blood type share one line on the card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenderBloodType {
    pub gender: String,
    pub blood_type: String,
}

/// Extractors for categorical fields, parameterised by the rule tolerances
pub struct FieldExtractor<'r> {
    rules: &'r ExtractionRules,
}

impl<'r> FieldExtractor<'r> {
    pub fn new(rules: &'r ExtractionRules) -> Self {
        FieldExtractor { rules }
    }

    /// Splits the value tokens at the "Gol. Darah" anchor: gender before it,
    /// blood type after it. Without either anchor both are unknown.
    pub fn extract_gender_blood_type(&self, tokens: &[&str]) -> GenderBloodType {
        let darah = closest(tokens, "Darah", self.rules.anchor_distance).map(|(idx, _)| idx);
        let gol = closest(tokens, "Gol", self.rules.anchor_distance).map(|(idx, _)| idx);

        let split = match darah.into_iter().chain(gol).min() {
            Some(split) => split,
            None => {
                debug!("No blood type anchor in {:?}", tokens);
                return GenderBloodType {
                    gender: SENTINEL.to_string(),
                    blood_type: SENTINEL.to_string(),
                };
            }
        };

        let gender_text = join_tokens(&tokens[..split]);
        let gender = GENDERS
            .iter()
            .find(|(reading, _)| {
                levenshtein_distance(&gender_text, reading) <= self.rules.gender_distance
            })
            .map(|(_, gender)| gender.to_string())
            .unwrap_or_else(|| SENTINEL.to_string());

        GenderBloodType {
            gender,
            blood_type: Self::extract_blood_type(&tokens[split..]),
        }
    }

    fn extract_blood_type(tokens: &[&str]) -> String {
        let reading = match tokens {
            [] => return SENTINEL.to_string(),
            // a detached rhesus sign belongs to the letter before it
            [.., letter, sign] if *sign == "+" || *sign == "-" => format!("{}{}", letter, sign),
            [.., last] => last.to_string(),
        };

        let normalized = match reading.as_str() {
            "0" => "O".to_string(),
            "0+" => "O+".to_string(),
            "0-" => "O-".to_string(),
            _ => reading,
        };

        if BLOOD_TYPES.contains(&normalized.as_str()) {
            normalized
        } else {
            SENTINEL.to_string()
        }
    }

    pub fn extract_religion(&self, tokens: &[&str]) -> String {
        let remaining: Vec<&str> = tokens
            .iter()
            .copied()
            .filter(|token| levenshtein_distance(token, "Agama") > self.rules.anchor_distance)
            .collect();

        first_within(&join_tokens(&remaining), RELIGIONS, self.rules.category_distance)
    }

    pub fn extract_marital_status(&self, tokens: &[&str]) -> String {
        let remaining: Vec<&str> = tokens
            .iter()
            .copied()
            .filter(|token| !self.is_marital_anchor(token))
            .collect();

        first_within(
            &join_tokens(&remaining),
            MARITAL_STATUSES,
            self.rules.category_distance,
        )
    }

    /// Whether any token reads like the "Status Perkawinan" label
    pub fn mentions_marital_status(&self, tokens: &[&str]) -> bool {
        tokens.iter().any(|token| self.is_marital_anchor(token))
    }

    fn is_marital_anchor(&self, token: &str) -> bool {
        levenshtein_distance(token, "Status") <= self.rules.anchor_distance
            || levenshtein_distance(token, "Perkawinan") <= self.rules.marriage_anchor_distance
    }

    /// Picks the closest listed occupation; label noise and numeric tokens are ignored
    pub fn extract_occupation(&self, tokens: &[&str]) -> String {
        let remaining: Vec<&str> = tokens
            .iter()
            .copied()
            .filter(|token| {
                levenshtein_distance(token, "Pekerjaan") > self.rules.anchor_distance
                    && !is_numeric_token(token)
            })
            .collect();
        let text = join_tokens(&remaining);

        closest(OCCUPATIONS, &text, self.rules.occupation_distance)
            .map(|(idx, _)| OCCUPATIONS[idx].to_string())
            .unwrap_or_else(|| SENTINEL.to_string())
    }

    /// Recovers a city or province from a header line such as "KOTA BANDUNG".
    /// The anchor word is dropped and the rest joined with spaces.
    pub fn extract_city_province(&self, tokens: &[&str]) -> Option<(Region, String)> {
        // Checked in this order; the first anchor within tolerance decides the region
        let anchors = [
            ("KOTA", self.rules.city_anchor_distance, Region::City),
            ("KABUPATEN", self.rules.regency_anchor_distance, Region::City),
            ("PROVINSI", self.rules.province_anchor_distance, Region::Province),
        ];

        anchors.iter().find_map(|(anchor, max_distance, region)| {
            closest(tokens, anchor, *max_distance).map(|(idx, _)| {
                let mut rest = tokens.to_vec();
                rest.remove(idx);
                (*region, rest.join(" "))
            })
        })
    }
}

fn first_within(text: &str, vocabulary: &[&str], max_distance: usize) -> String {
    vocabulary
        .iter()
        .find(|candidate| levenshtein_distance(text, candidate) <= max_distance)
        .map(|candidate| candidate.to_string())
        .unwrap_or_else(|| SENTINEL.to_string())
}
