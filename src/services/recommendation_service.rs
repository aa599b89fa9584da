//! Canned skincare advice per skin type.

use crate::models::prediction::SkinType;

pub const DESCRIPTION_UNAVAILABLE: &str = "Deskripsi tidak tersedia.";

const DRY_RECOMMENDATIONS: [&str; 3] = [
    "Moisturizer berbahan hyaluronic acid",
    "Hindari sabun wajah yang mengandung alkohol",
    "Gunakan hydrating toner",
];

const NORMAL_RECOMMENDATIONS: [&str; 3] = [
    "Gunakan gentle cleanser",
    "Pelembap ringan berbahan air",
    "Rutin menggunakan sunscreen",
];

const OILY_RECOMMENDATIONS: [&str; 3] = [
    "Gunakan cleanser berbahan salicylic acid",
    "Pilih moisturizer ringan berbahan gel",
    "Gunakan clay mask seminggu sekali",
];

pub fn recommendations(skin_type: SkinType) -> &'static [&'static str] {
    match skin_type {
        SkinType::Dry => &DRY_RECOMMENDATIONS,
        SkinType::Normal => &NORMAL_RECOMMENDATIONS,
        SkinType::Oily => &OILY_RECOMMENDATIONS,
    }
}

pub fn description(skin_type: SkinType) -> &'static str {
    match skin_type {
        SkinType::Dry => {
            "Kulit kering cenderung terasa kencang, terlihat kusam, dan terkadang mengelupas. Jenis kulit ini membutuhkan hidrasi ekstra."
        }
        SkinType::Normal => {
            "Kulit normal memiliki keseimbangan yang baik antara kelembapan dan minyak, serta jarang bermasalah."
        }
        SkinType::Oily => {
            "Kulit berminyak memproduksi sebum berlebih, membuatnya tampak berkilau dan rentan terhadap komedo serta jerawat."
        }
    }
}

/// Lookup by raw label. Unknown labels get no advice.
pub fn recommendations_for_label(label: &str) -> Vec<String> {
    label
        .parse::<SkinType>()
        .map(|t| recommendations(t).iter().map(|s| s.to_string()).collect())
        .unwrap_or_default()
}

/// Lookup by raw label. Unknown labels get [`DESCRIPTION_UNAVAILABLE`].
pub fn description_for_label(label: &str) -> &'static str {
    label
        .parse::<SkinType>()
        .map(description)
        .unwrap_or(DESCRIPTION_UNAVAILABLE)
}
