// Metric catalog: the fixed universe of cross-domain metrics a state is
// ranked on, plus the display configuration of the panels they group into.
use serde::Serialize;
use std::fmt;

/// Report panel a metric belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Economy,
    Budget,
    Revenue,
    Fiscal,
    Demographics,
    Education,
    Employment,
    Healthcare,
    Health,
}

impl Domain {
    /// Default panel display order of the report card.
    pub fn ordered() -> Vec<Domain> {
        vec![
            Domain::Economy,
            Domain::Budget,
            Domain::Revenue,
            Domain::Fiscal,
            Domain::Demographics,
            Domain::Education,
            Domain::Employment,
            Domain::Healthcare,
            Domain::Health,
        ]
    }

    pub fn key(&self) -> &'static str {
        match self {
            Domain::Economy => "economy",
            Domain::Budget => "budget",
            Domain::Revenue => "revenue",
            Domain::Fiscal => "fiscal",
            Domain::Demographics => "demographics",
            Domain::Education => "education",
            Domain::Employment => "employment",
            Domain::Healthcare => "healthcare",
            Domain::Health => "health",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Domain::Economy => "Economy",
            Domain::Budget => "Budget Allocation",
            Domain::Revenue => "Revenue",
            Domain::Fiscal => "Fiscal Health",
            Domain::Demographics => "Demographics",
            Domain::Education => "Education",
            Domain::Employment => "Employment",
            Domain::Healthcare => "Healthcare Infrastructure",
            Domain::Health => "Health Outcomes (NFHS-5)",
        }
    }

    pub fn accent_color(&self) -> &'static str {
        match self {
            Domain::Economy | Domain::Revenue | Domain::Fiscal => "#10B981",
            Domain::Budget => "#FF6B35",
            Domain::Demographics => "#8B5CF6",
            Domain::Education => "#3B82F6",
            Domain::Employment => "#F59E0B",
            Domain::Healthcare | Domain::Health => "#F43F5E",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Display unit of a metric. The engine never interprets it; it only drives
/// value formatting downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Unit {
    #[serde(rename = "Rs")]
    Rupees,
    #[serde(rename = "Rs Cr")]
    RupeesCrore,
    #[serde(rename = "%")]
    Percent,
    #[serde(rename = "% GSDP")]
    PercentOfGsdp,
    #[serde(rename = "pp")]
    PercentagePoints,
    #[serde(rename = "/sq km")]
    PerSqKm,
    #[serde(rename = "per lakh")]
    PerLakh,
    #[serde(rename = "per 10K")]
    Per10K,
    #[serde(rename = "per 1000")]
    PerThousand,
}

impl Unit {
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Rupees => "Rs",
            Unit::RupeesCrore => "Rs Cr",
            Unit::Percent => "%",
            Unit::PercentOfGsdp => "% GSDP",
            Unit::PercentagePoints => "pp",
            Unit::PerSqKm => "/sq km",
            Unit::PerLakh => "per lakh",
            Unit::Per10K => "per 10K",
            Unit::PerThousand => "per 1000",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricDef {
    pub key: &'static str,
    pub label: &'static str,
    pub unit: Unit,
    pub higher_is_better: bool,
    pub domain: Domain,
}

const fn def(
    key: &'static str,
    label: &'static str,
    unit: Unit,
    higher_is_better: bool,
    domain: Domain,
) -> MetricDef {
    MetricDef { key, label, unit, higher_is_better, domain }
}

pub const METRIC_DEFS: &[MetricDef] = &[
    // Economy (gsdp.json)
    def("perCapitaGsdp", "Per Capita GSDP", Unit::Rupees, true, Domain::Economy),
    def("growthRate", "GSDP Growth", Unit::Percent, true, Domain::Economy),
    def("gsdp", "Total GSDP", Unit::RupeesCrore, true, Domain::Economy),
    // Budget (statewise.json)
    def("perCapitaTransfer", "Per Capita Transfer", Unit::Rupees, true, Domain::Budget),
    def("transfer", "Central Transfer", Unit::RupeesCrore, true, Domain::Budget),
    // Revenue (revenue.json)
    def("selfSufficiencyRatio", "Revenue Self-Sufficiency", Unit::Percent, true, Domain::Revenue),
    // Fiscal health (fiscal-health.json)
    def("fiscalDeficitPctGsdp", "Fiscal Deficit", Unit::PercentOfGsdp, false, Domain::Fiscal),
    def("debtToGsdp", "Debt-to-GSDP", Unit::Percent, false, Domain::Fiscal),
    // Demographics (population.json, literacy.json)
    def("density", "Density", Unit::PerSqKm, false, Domain::Demographics),
    def("urbanPercent", "Urban %", Unit::Percent, true, Domain::Demographics),
    def("literacyOverall", "Literacy Rate", Unit::Percent, true, Domain::Demographics),
    def("genderGap", "Literacy Gender Gap", Unit::PercentagePoints, false, Domain::Demographics),
    // Education (enrollment.json)
    def("gerSecondary", "GER Secondary", Unit::Percent, true, Domain::Education),
    def("dropoutSecondary", "Dropout (Secondary)", Unit::Percent, false, Domain::Education),
    // Employment (unemployment.json, participation.json)
    def("unemploymentRate", "Unemployment Rate", Unit::Percent, false, Domain::Employment),
    def("lfpr", "LFPR", Unit::Percent, true, Domain::Employment),
    // Healthcare infrastructure (infrastructure.json)
    def("bedsPerLakh", "Hospital Beds", Unit::PerLakh, true, Domain::Healthcare),
    def("doctorsPer10K", "Doctors", Unit::Per10K, true, Domain::Healthcare),
    // Health outcomes (health.json, disease.json)
    def("imr", "Infant Mortality", Unit::PerThousand, false, Domain::Health),
    def("fullImmunization", "Full Immunization", Unit::Percent, true, Domain::Health),
    def("stunting", "Stunting", Unit::Percent, false, Domain::Health),
];

pub fn find_metric(key: &str) -> Option<&'static MetricDef> {
    METRIC_DEFS.iter().find(|d| d.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn metric_keys_are_unique() {
        let keys: HashSet<&str> = METRIC_DEFS.iter().map(|d| d.key).collect();
        assert_eq!(keys.len(), METRIC_DEFS.len());
    }

    #[test]
    fn every_catalog_domain_is_in_display_order() {
        let order = Domain::ordered();
        for d in METRIC_DEFS {
            assert!(order.contains(&d.domain), "{} missing from order", d.domain);
        }
    }

    #[test]
    fn lower_is_better_metrics() {
        let lower: Vec<&str> = METRIC_DEFS
            .iter()
            .filter(|d| !d.higher_is_better)
            .map(|d| d.key)
            .collect();
        assert_eq!(
            lower,
            vec![
                "fiscalDeficitPctGsdp",
                "debtToGsdp",
                "density",
                "genderGap",
                "dropoutSecondary",
                "unemploymentRate",
                "imr",
                "stunting"
            ]
        );
    }

    #[test]
    fn unit_serializes_as_display_tag() {
        let json = serde_json::to_string(&Unit::PercentOfGsdp).unwrap();
        assert_eq!(json, "\"% GSDP\"");
        assert_eq!(find_metric("doctorsPer10K").map(|d| d.unit.symbol()), Some("per 10K"));
    }
}
