use crate::reports::{DomainPanel, ReportSummary, StateIdentity};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Anything keyed by a state/UT code.
pub trait StateRecord {
    fn state_id(&self) -> &str;
}

macro_rules! state_record {
    ($($ty:ty),+ $(,)?) => {
        $(impl StateRecord for $ty {
            fn state_id(&self) -> &str {
                &self.id
            }
        })+
    };
}

// Per-domain record schemas. Numeric fields are optional: upstream files
// use null (or omit the field) where a figure is not published.

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GsdpRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub gsdp: Option<f64>,
    #[serde(default)]
    pub growth_rate: Option<f64>,
    #[serde(default)]
    pub per_capita_gsdp: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub transfer: Option<f64>,
    #[serde(default)]
    pub per_capita: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub self_sufficiency_ratio: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FiscalHealthRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub fiscal_deficit_pct_gsdp: Option<f64>,
    #[serde(default)]
    pub debt_to_gsdp: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulationRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub density: Option<f64>,
    #[serde(default)]
    pub urban_percent: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiteracyRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub overall_rate: Option<f64>,
    #[serde(default)]
    pub gender_gap: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub ger_secondary: Option<f64>,
    #[serde(default)]
    pub dropout_secondary: Option<f64>,
}

/// Single-figure series (PLFS unemployment/LFPR, SRS infant mortality).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StateValue {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthInfraRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub beds_per_lakh: Option<f64>,
    #[serde(default, rename = "doctorsPer10K")]
    pub doctors_per_10k: Option<f64>,
}

/// NFHS-5 survey row.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NfhsRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub imr: Option<f64>,
    #[serde(default)]
    pub stunting: Option<f64>,
    #[serde(default)]
    pub full_immunization: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImmunizationRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub full_immunization: Option<f64>,
}

state_record!(
    GsdpRecord,
    TransferRecord,
    RevenueRecord,
    FiscalHealthRecord,
    PopulationRecord,
    LiteracyRecord,
    EnrollmentRecord,
    StateValue,
    HealthInfraRecord,
    NfhsRecord,
    ImmunizationRecord,
);

// Dataset envelopes, one per JSON file.

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GsdpData {
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub states: Vec<GsdpRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatewiseData {
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub states: Vec<TransferRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RevenueData {
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub states: Vec<RevenueRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FiscalHealthData {
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub states: Vec<FiscalHealthRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PopulationData {
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub states: Vec<PopulationRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LiteracyData {
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub states: Vec<LiteracyRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnrollmentData {
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub states: Vec<EnrollmentRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnemploymentData {
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub state_unemployment: Vec<StateValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipationData {
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub state_lfpr: Vec<StateValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfrastructureData {
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub state_infrastructure: Vec<HealthInfraRecord>,
}

/// `state_imr` is the SRS series, `state_health` the NFHS-5 survey.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthData {
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub state_imr: Vec<StateValue>,
    #[serde(default)]
    pub state_health: Vec<NfhsRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiseaseData {
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub state_immunization: Vec<ImmunizationRecord>,
}

/// Bag of whichever domain datasets managed to load. Any of them may be
/// missing; the report builder treats that as "no data", not as an error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllDomainData {
    #[serde(default)]
    pub gsdp: Option<GsdpData>,
    #[serde(default)]
    pub revenue: Option<RevenueData>,
    #[serde(default)]
    pub fiscal_health: Option<FiscalHealthData>,
    #[serde(default)]
    pub statewise: Option<StatewiseData>,
    #[serde(default)]
    pub population: Option<PopulationData>,
    #[serde(default)]
    pub literacy: Option<LiteracyData>,
    #[serde(default)]
    pub health: Option<HealthData>,
    #[serde(default)]
    pub enrollment: Option<EnrollmentData>,
    #[serde(default)]
    pub unemployment: Option<UnemploymentData>,
    #[serde(default)]
    pub participation: Option<ParticipationData>,
    #[serde(default)]
    pub infrastructure: Option<InfrastructureData>,
    #[serde(default)]
    pub disease: Option<DiseaseData>,
}

impl AllDomainData {
    pub fn loaded_count(&self) -> usize {
        [
            self.gsdp.is_some(),
            self.revenue.is_some(),
            self.fiscal_health.is_some(),
            self.statewise.is_some(),
            self.population.is_some(),
            self.literacy.is_some(),
            self.health.is_some(),
            self.enrollment.is_some(),
            self.unemployment.is_some(),
            self.participation.is_some(),
            self.infrastructure.is_some(),
            self.disease.is_some(),
        ]
        .iter()
        .filter(|loaded| **loaded)
        .count()
    }
}

/// One metric line of a report card, as exported to CSV and previewed in
/// the terminal.
#[derive(Debug, Serialize, Tabled, Clone)]
pub struct MetricRow {
    #[serde(rename = "Domain")]
    #[tabled(rename = "Domain")]
    pub domain: String,
    #[serde(rename = "Metric")]
    #[tabled(rename = "Metric")]
    pub metric: String,
    #[serde(rename = "Value")]
    #[tabled(rename = "Value")]
    pub value: String,
    #[serde(rename = "NationalAvg")]
    #[tabled(rename = "NationalAvg")]
    pub national_avg: String,
    #[serde(rename = "Rank")]
    #[tabled(rename = "Rank")]
    pub rank: String,
    #[serde(rename = "Quartile")]
    #[tabled(rename = "Quartile")]
    pub quartile: String,
}

#[derive(Debug, Tabled, Clone)]
pub struct CatalogRow {
    #[tabled(rename = "Key")]
    pub key: String,
    #[tabled(rename = "Label")]
    pub label: String,
    #[tabled(rename = "Unit")]
    pub unit: String,
    #[tabled(rename = "Direction")]
    pub direction: String,
    #[tabled(rename = "Domain")]
    pub domain: String,
}

#[derive(Debug, Tabled, Clone)]
pub struct StateRow {
    #[tabled(rename = "Code")]
    pub code: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Kind")]
    pub kind: String,
}

/// JSON export of a report card.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDocument<'a> {
    pub generated_on: NaiveDate,
    pub state: &'a StateIdentity,
    pub summary: ReportSummary,
    pub panels: &'a [DomainPanel],
}
