// State/UT code table.
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// 28 states followed by 8 union territories, by two-letter code.
pub const STATES: &[(&str, &str)] = &[
    ("AP", "Andhra Pradesh"),
    ("AR", "Arunachal Pradesh"),
    ("AS", "Assam"),
    ("BR", "Bihar"),
    ("CG", "Chhattisgarh"),
    ("GA", "Goa"),
    ("GJ", "Gujarat"),
    ("HR", "Haryana"),
    ("HP", "Himachal Pradesh"),
    ("JH", "Jharkhand"),
    ("KA", "Karnataka"),
    ("KL", "Kerala"),
    ("MP", "Madhya Pradesh"),
    ("MH", "Maharashtra"),
    ("MN", "Manipur"),
    ("ML", "Meghalaya"),
    ("MZ", "Mizoram"),
    ("NL", "Nagaland"),
    ("OR", "Odisha"),
    ("PB", "Punjab"),
    ("RJ", "Rajasthan"),
    ("SK", "Sikkim"),
    ("TN", "Tamil Nadu"),
    ("TS", "Telangana"),
    ("TR", "Tripura"),
    ("UP", "Uttar Pradesh"),
    ("UK", "Uttarakhand"),
    ("WB", "West Bengal"),
    ("AN", "Andaman and Nicobar Islands"),
    ("CH", "Chandigarh"),
    ("DN", "Dadra and Nagar Haveli and Daman and Diu"),
    ("DL", "Delhi"),
    ("JK", "Jammu and Kashmir"),
    ("LA", "Ladakh"),
    ("LD", "Lakshadweep"),
    ("PY", "Puducherry"),
];

const UNION_TERRITORIES: &[&str] = &["AN", "CH", "DN", "DL", "JK", "LA", "LD", "PY"];

static NAMES_BY_CODE: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| STATES.iter().copied().collect());

/// Full name for a state code, case-insensitive.
pub fn state_name(code: &str) -> Option<&'static str> {
    NAMES_BY_CODE
        .get(code.trim().to_ascii_uppercase().as_str())
        .copied()
}

pub fn is_union_territory(code: &str) -> bool {
    let code = code.trim().to_ascii_uppercase();
    UNION_TERRITORIES.contains(&code.as_str())
}
