// Per-metric extractors. Each one knows the record shape of exactly one
// domain dataset (or a primary/fallback pair) and pulls out the requested
// state's value together with the whole population for that metric.
use crate::types::{AllDomainData, StateRecord};
use std::collections::HashMap;
use std::fmt;

/// A state's value for one metric plus every state's value from the same
/// source. Population entries may be null; the builder filters them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    pub value: Option<f64>,
    pub population: Vec<Option<f64>>,
}

impl Extraction {
    pub fn empty() -> Self {
        Self::default()
    }
}

pub type Extractor = fn(&str, &AllDomainData) -> Extraction;

/// Exact id match first, then a case-insensitive one.
pub fn find_state<'a, T: StateRecord>(records: &'a [T], state_id: &str) -> Option<&'a T> {
    records
        .iter()
        .find(|r| r.state_id() == state_id)
        .or_else(|| records.iter().find(|r| r.state_id().eq_ignore_ascii_case(state_id)))
}

/// Extraction from one record list. `None` means the dataset is absent.
fn from_records<T: StateRecord>(
    records: Option<&[T]>,
    state_id: &str,
    field: impl Fn(&T) -> Option<f64>,
) -> Extraction {
    let Some(records) = records else {
        return Extraction::empty();
    };
    Extraction {
        value: find_state(records, state_id).and_then(&field),
        population: records.iter().map(&field).collect(),
    }
}

/// Primary source if it holds the state, otherwise the fallback. Value and
/// population always come from the same source.
fn with_fallback<P: StateRecord, F: StateRecord>(
    primary: Option<&[P]>,
    primary_field: impl Fn(&P) -> Option<f64>,
    fallback: Option<&[F]>,
    fallback_field: impl Fn(&F) -> Option<f64>,
    state_id: &str,
) -> Extraction {
    if let Some(records) = primary {
        if find_state(records, state_id).is_some() {
            return from_records(Some(records), state_id, primary_field);
        }
    }
    from_records(fallback, state_id, fallback_field)
}

pub fn per_capita_gsdp(sid: &str, d: &AllDomainData) -> Extraction {
    from_records(d.gsdp.as_ref().map(|g| g.states.as_slice()), sid, |s| s.per_capita_gsdp)
}

pub fn growth_rate(sid: &str, d: &AllDomainData) -> Extraction {
    from_records(d.gsdp.as_ref().map(|g| g.states.as_slice()), sid, |s| s.growth_rate)
}

pub fn gsdp(sid: &str, d: &AllDomainData) -> Extraction {
    from_records(d.gsdp.as_ref().map(|g| g.states.as_slice()), sid, |s| s.gsdp)
}

pub fn per_capita_transfer(sid: &str, d: &AllDomainData) -> Extraction {
    from_records(d.statewise.as_ref().map(|s| s.states.as_slice()), sid, |s| s.per_capita)
}

pub fn transfer(sid: &str, d: &AllDomainData) -> Extraction {
    from_records(d.statewise.as_ref().map(|s| s.states.as_slice()), sid, |s| s.transfer)
}

pub fn self_sufficiency_ratio(sid: &str, d: &AllDomainData) -> Extraction {
    from_records(d.revenue.as_ref().map(|r| r.states.as_slice()), sid, |s| {
        s.self_sufficiency_ratio
    })
}

pub fn fiscal_deficit_pct_gsdp(sid: &str, d: &AllDomainData) -> Extraction {
    from_records(d.fiscal_health.as_ref().map(|f| f.states.as_slice()), sid, |s| {
        s.fiscal_deficit_pct_gsdp
    })
}

pub fn debt_to_gsdp(sid: &str, d: &AllDomainData) -> Extraction {
    from_records(d.fiscal_health.as_ref().map(|f| f.states.as_slice()), sid, |s| s.debt_to_gsdp)
}

pub fn density(sid: &str, d: &AllDomainData) -> Extraction {
    from_records(d.population.as_ref().map(|p| p.states.as_slice()), sid, |s| s.density)
}

pub fn urban_percent(sid: &str, d: &AllDomainData) -> Extraction {
    from_records(d.population.as_ref().map(|p| p.states.as_slice()), sid, |s| s.urban_percent)
}

pub fn literacy_overall(sid: &str, d: &AllDomainData) -> Extraction {
    from_records(d.literacy.as_ref().map(|l| l.states.as_slice()), sid, |s| s.overall_rate)
}

pub fn gender_gap(sid: &str, d: &AllDomainData) -> Extraction {
    from_records(d.literacy.as_ref().map(|l| l.states.as_slice()), sid, |s| s.gender_gap)
}

pub fn ger_secondary(sid: &str, d: &AllDomainData) -> Extraction {
    from_records(d.enrollment.as_ref().map(|e| e.states.as_slice()), sid, |s| s.ger_secondary)
}

pub fn dropout_secondary(sid: &str, d: &AllDomainData) -> Extraction {
    from_records(d.enrollment.as_ref().map(|e| e.states.as_slice()), sid, |s| {
        s.dropout_secondary
    })
}

pub fn unemployment_rate(sid: &str, d: &AllDomainData) -> Extraction {
    from_records(
        d.unemployment.as_ref().map(|u| u.state_unemployment.as_slice()),
        sid,
        |s| s.value,
    )
}

pub fn lfpr(sid: &str, d: &AllDomainData) -> Extraction {
    from_records(d.participation.as_ref().map(|p| p.state_lfpr.as_slice()), sid, |s| s.value)
}

pub fn beds_per_lakh(sid: &str, d: &AllDomainData) -> Extraction {
    from_records(
        d.infrastructure.as_ref().map(|i| i.state_infrastructure.as_slice()),
        sid,
        |s| s.beds_per_lakh,
    )
}

pub fn doctors_per_10k(sid: &str, d: &AllDomainData) -> Extraction {
    from_records(
        d.infrastructure.as_ref().map(|i| i.state_infrastructure.as_slice()),
        sid,
        |s| s.doctors_per_10k,
    )
}

/// SRS series first, NFHS-5 survey second.
pub fn imr(sid: &str, d: &AllDomainData) -> Extraction {
    let health = d.health.as_ref();
    with_fallback(
        health.map(|h| h.state_imr.as_slice()),
        |s| s.value,
        health.map(|h| h.state_health.as_slice()),
        |s| s.imr,
        sid,
    )
}

/// Immunization survey in disease.json first, NFHS-5 second.
pub fn full_immunization(sid: &str, d: &AllDomainData) -> Extraction {
    with_fallback(
        d.disease.as_ref().map(|x| x.state_immunization.as_slice()),
        |s| s.full_immunization,
        d.health.as_ref().map(|h| h.state_health.as_slice()),
        |s| s.full_immunization,
        sid,
    )
}

pub fn stunting(sid: &str, d: &AllDomainData) -> Extraction {
    from_records(d.health.as_ref().map(|h| h.state_health.as_slice()), sid, |s| s.stunting)
}

/// Explicit metric-key → extractor mapping handed to the report builder.
#[derive(Clone, Default)]
pub struct ExtractorTable {
    entries: HashMap<&'static str, Extractor>,
}

impl fmt::Debug for ExtractorTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&str> = self.entries.keys().copied().collect();
        keys.sort_unstable();
        f.debug_struct("ExtractorTable").field("keys", &keys).finish()
    }
}

impl ExtractorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// One extractor for every metric of the standard catalog.
    pub fn standard() -> Self {
        let mut table = Self::new();
        table
            .register("perCapitaGsdp", per_capita_gsdp)
            .register("growthRate", growth_rate)
            .register("gsdp", gsdp)
            .register("perCapitaTransfer", per_capita_transfer)
            .register("transfer", transfer)
            .register("selfSufficiencyRatio", self_sufficiency_ratio)
            .register("fiscalDeficitPctGsdp", fiscal_deficit_pct_gsdp)
            .register("debtToGsdp", debt_to_gsdp)
            .register("density", density)
            .register("urbanPercent", urban_percent)
            .register("literacyOverall", literacy_overall)
            .register("genderGap", gender_gap)
            .register("gerSecondary", ger_secondary)
            .register("dropoutSecondary", dropout_secondary)
            .register("unemploymentRate", unemployment_rate)
            .register("lfpr", lfpr)
            .register("bedsPerLakh", beds_per_lakh)
            .register("doctorsPer10K", doctors_per_10k)
            .register("imr", imr)
            .register("fullImmunization", full_immunization)
            .register("stunting", stunting);
        table
    }

    /// Adds or replaces the extractor for `key`.
    pub fn register(&mut self, key: &'static str, extractor: Extractor) -> &mut Self {
        self.entries.insert(key, extractor);
        self
    }

    pub fn remove(&mut self, key: &str) -> Option<Extractor> {
        self.entries.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<Extractor> {
        self.entries.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::METRIC_DEFS;
    use crate::types::{
        DiseaseData, GsdpData, GsdpRecord, HealthData, ImmunizationRecord, NfhsRecord,
        PopulationData, PopulationRecord, StateValue,
    };

    fn gsdp_row(id: &str, gsdp: Option<f64>) -> GsdpRecord {
        GsdpRecord { id: id.to_string(), gsdp, ..Default::default() }
    }

    fn srs(id: &str, value: f64) -> StateValue {
        StateValue { id: id.to_string(), value: Some(value), ..Default::default() }
    }

    fn nfhs(id: &str, imr: f64, full_immunization: f64) -> NfhsRecord {
        NfhsRecord {
            id: id.to_string(),
            imr: Some(imr),
            full_immunization: Some(full_immunization),
            ..Default::default()
        }
    }

    #[test]
    fn standard_table_covers_catalog() {
        let table = ExtractorTable::standard();
        assert_eq!(table.len(), METRIC_DEFS.len());
        for d in METRIC_DEFS {
            assert!(table.get(d.key).is_some(), "no extractor for {}", d.key);
        }
    }

    #[test]
    fn absent_dataset_yields_empty_extraction() {
        let data = AllDomainData::default();
        assert_eq!(gsdp("MH", &data), Extraction::empty());
        assert_eq!(imr("MH", &data), Extraction::empty());
        assert_eq!(full_immunization("MH", &data), Extraction::empty());
    }

    #[test]
    fn missing_state_keeps_population() {
        let data = AllDomainData {
            gsdp: Some(GsdpData {
                states: vec![gsdp_row("MH", Some(10.0)), gsdp_row("UP", None)],
                ..Default::default()
            }),
            ..Default::default()
        };
        let out = gsdp("LD", &data);
        assert_eq!(out.value, None);
        assert_eq!(out.population, vec![Some(10.0), None]);
    }

    #[test]
    fn state_lookup_falls_back_to_case_insensitive() {
        let data = AllDomainData {
            population: Some(PopulationData {
                states: vec![PopulationRecord {
                    id: "mh".to_string(),
                    density: Some(365.0),
                    ..Default::default()
                }],
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(density("MH", &data).value, Some(365.0));
    }

    #[test]
    fn exact_match_wins_over_case_insensitive() {
        let rows = vec![gsdp_row("mh", Some(1.0)), gsdp_row("MH", Some(2.0))];
        assert_eq!(find_state(&rows, "MH").and_then(|r| r.gsdp), Some(2.0));
    }

    #[test]
    fn imr_prefers_srs_series() {
        let data = AllDomainData {
            health: Some(HealthData {
                state_imr: vec![srs("KL", 6.0), srs("UP", 38.0)],
                state_health: vec![
                    nfhs("KL", 4.4, 77.8),
                    nfhs("LD", 20.0, 86.0),
                    nfhs("UP", 50.4, 69.6),
                ],
                ..Default::default()
            }),
            ..Default::default()
        };

        let kl = imr("KL", &data);
        assert_eq!(kl.value, Some(6.0));
        assert_eq!(kl.population, vec![Some(6.0), Some(38.0)]);

        // LD only exists in the survey, so the survey population is used.
        let ld = imr("LD", &data);
        assert_eq!(ld.value, Some(20.0));
        assert_eq!(ld.population, vec![Some(4.4), Some(20.0), Some(50.4)]);

        let zz = imr("ZZ", &data);
        assert_eq!(zz.value, None);
        assert_eq!(zz.population.len(), 3);
    }

    #[test]
    fn immunization_falls_back_to_nfhs() {
        let data = AllDomainData {
            disease: Some(DiseaseData {
                state_immunization: vec![ImmunizationRecord {
                    id: "GA".to_string(),
                    full_immunization: Some(81.9),
                    ..Default::default()
                }],
                ..Default::default()
            }),
            health: Some(HealthData {
                state_health: vec![nfhs("GA", 10.0, 80.0), nfhs("BR", 46.8, 71.0)],
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(full_immunization("GA", &data).population, vec![Some(81.9)]);
        let br = full_immunization("br", &data);
        assert_eq!(br.value, Some(71.0));
        assert_eq!(br.population, vec![Some(80.0), Some(71.0)]);
    }

    #[test]
    fn register_replaces_entry() {
        fn constant(_: &str, _: &AllDomainData) -> Extraction {
            Extraction { value: Some(1.0), population: vec![Some(1.0)] }
        }
        let mut table = ExtractorTable::standard();
        table.register("gsdp", constant);
        let f = table.get("gsdp").unwrap();
        assert_eq!(f("MH", &AllDomainData::default()).value, Some(1.0));
        assert!(table.remove("gsdp").is_some());
        assert!(table.get("gsdp").is_none());
    }
}
