use crate::catalog::{Domain, MetricDef, METRIC_DEFS};
use crate::extract::ExtractorTable;
use crate::rank::{compute_rank, national_average, valid_population, Quartile, Standing};
use crate::states::state_name;
use crate::types::AllDomainData;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricResult {
    pub def: MetricDef,
    pub value: Option<f64>,
    pub national_avg: Option<f64>,
    /// 1 is best; 0 when `value` is `None`.
    pub rank: usize,
    pub total_states: usize,
    /// `Bottom` when `value` is `None`; use [`MetricResult::standing`] for
    /// anything that aggregates quartiles.
    pub quartile: Quartile,
}

impl MetricResult {
    fn unavailable(def: MetricDef, national_avg: Option<f64>, total_states: usize) -> Self {
        MetricResult {
            def,
            value: None,
            national_avg,
            rank: 0,
            total_states,
            quartile: Quartile::Bottom,
        }
    }

    pub fn has_data(&self) -> bool {
        self.value.is_some()
    }

    /// Rank/quartile, or `None` when the state has no value for the metric.
    pub fn standing(&self) -> Option<Standing> {
        self.value.map(|_| Standing {
            rank: self.rank,
            total: self.total_states,
            quartile: self.quartile,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainPanel {
    pub domain: Domain,
    pub title: String,
    pub accent_color: String,
    pub metrics: Vec<MetricResult>,
    pub data_available: bool,
}

impl DomainPanel {
    pub fn metrics_with_data(&self) -> impl Iterator<Item = &MetricResult> {
        self.metrics.iter().filter(|m| m.has_data())
    }

    pub fn summary(&self) -> PanelSummary {
        PanelSummary {
            domain: self.domain,
            metrics_with_data: self.metrics_with_data().count(),
            top_quartile: count_quartile(self.metrics.iter(), Quartile::Top),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateIdentity {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateReportCard {
    pub state: StateIdentity,
    pub panels: Vec<DomainPanel>,
}

impl StateReportCard {
    pub fn panel(&self, domain: Domain) -> Option<&DomainPanel> {
        self.panels.iter().find(|p| p.domain == domain)
    }

    pub fn metric(&self, key: &str) -> Option<&MetricResult> {
        self.panels
            .iter()
            .flat_map(|p| p.metrics.iter())
            .find(|m| m.def.key == key)
    }

    pub fn summary(&self) -> ReportSummary {
        let all = || self.panels.iter().flat_map(|p| p.metrics.iter());
        ReportSummary {
            metrics_with_data: all().filter(|m| m.has_data()).count(),
            top_quartile: count_quartile(all(), Quartile::Top),
            bottom_quartile: count_quartile(all(), Quartile::Bottom),
            domains_with_data: self.panels.iter().filter(|p| p.data_available).count(),
            panels: self.panels.iter().map(DomainPanel::summary).collect(),
        }
    }
}

fn count_quartile<'a>(
    metrics: impl Iterator<Item = &'a MetricResult>,
    quartile: Quartile,
) -> usize {
    metrics
        .filter_map(MetricResult::standing)
        .filter(|s| s.quartile == quartile)
        .count()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelSummary {
    pub domain: Domain,
    pub metrics_with_data: usize,
    pub top_quartile: usize,
}

/// Headline counts for a report card. Metrics without a value never count
/// towards a quartile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub metrics_with_data: usize,
    pub top_quartile: usize,
    pub bottom_quartile: usize,
    pub domains_with_data: usize,
    pub panels: Vec<PanelSummary>,
}

/// Builds report cards from a metric catalog and an extractor table.
///
/// The builder holds no per-report state, so one instance can serve any
/// number of states (and threads).
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    catalog: Vec<MetricDef>,
    extractors: ExtractorTable,
    domain_order: Vec<Domain>,
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::standard()
    }
}

impl ReportBuilder {
    pub fn new(catalog: Vec<MetricDef>, extractors: ExtractorTable) -> Self {
        Self { catalog, extractors, domain_order: Domain::ordered() }
    }

    /// Standard catalog with the standard extractors.
    pub fn standard() -> Self {
        Self::new(METRIC_DEFS.to_vec(), ExtractorTable::standard())
    }

    /// Replaces the panel display order. Domains left out of `order` get no
    /// panel.
    pub fn with_domain_order(mut self, order: Vec<Domain>) -> Self {
        self.domain_order = order;
        self
    }

    pub fn catalog(&self) -> &[MetricDef] {
        &self.catalog
    }

    pub fn domain_order(&self) -> &[Domain] {
        &self.domain_order
    }

    pub fn evaluate(&self, def: &MetricDef, state_id: &str, data: &AllDomainData) -> MetricResult {
        let Some(extract) = self.extractors.get(def.key) else {
            debug!(metric = def.key, "no extractor registered");
            return MetricResult::unavailable(*def, None, 0);
        };

        let extraction = extract(state_id, data);
        let valid = valid_population(&extraction.population);
        let national_avg = national_average(&valid);

        let value = extraction.value.filter(|v| v.is_finite());
        let standing = value.and_then(|v| compute_rank(v, &valid, def.higher_is_better));

        match (value, standing) {
            (Some(value), Some(standing)) => MetricResult {
                def: *def,
                value: Some(value),
                national_avg,
                rank: standing.rank,
                total_states: standing.total,
                quartile: standing.quartile,
            },
            _ => MetricResult::unavailable(*def, national_avg, valid.len()),
        }
    }

    pub fn build(&self, state_id: &str, data: &AllDomainData) -> StateReportCard {
        let sid = state_id.trim().to_uppercase();

        let results: Vec<MetricResult> = self
            .catalog
            .iter()
            .map(|def| self.evaluate(def, &sid, data))
            .collect();

        let panels: Vec<DomainPanel> = self
            .domain_order
            .iter()
            .map(|domain| {
                let metrics: Vec<MetricResult> = results
                    .iter()
                    .filter(|m| m.def.domain == *domain)
                    .cloned()
                    .collect();
                let data_available = metrics.iter().any(MetricResult::has_data);
                DomainPanel {
                    domain: *domain,
                    title: domain.title().to_string(),
                    accent_color: domain.accent_color().to_string(),
                    metrics,
                    data_available,
                }
            })
            .collect();

        let name = state_name(&sid).map(str::to_string).unwrap_or_else(|| sid.clone());
        debug!(
            state = %sid,
            panels_with_data = panels.iter().filter(|p| p.data_available).count(),
            "report card built"
        );

        StateReportCard { state: StateIdentity { id: sid, name }, panels }
    }
}

/// Report card for `state_id` using the standard catalog and extractors.
pub fn build_report_card(state_id: &str, data: &AllDomainData) -> StateReportCard {
    ReportBuilder::standard().build(state_id, data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Unit;
    use crate::extract::Extraction;

    fn synthetic_def(key: &'static str, domain: Domain, higher_is_better: bool) -> MetricDef {
        MetricDef { key, label: key, unit: Unit::Percent, higher_is_better, domain }
    }

    fn fixed(_: &str, _: &AllDomainData) -> Extraction {
        Extraction {
            value: Some(20.0),
            population: vec![Some(10.0), None, Some(20.0), Some(f64::NAN), Some(30.0)],
        }
    }

    fn no_value(_: &str, _: &AllDomainData) -> Extraction {
        Extraction { value: None, population: vec![Some(4.0), Some(8.0)] }
    }

    fn synthetic_builder() -> ReportBuilder {
        let catalog = vec![
            synthetic_def("fixed", Domain::Economy, true),
            synthetic_def("missing", Domain::Economy, true),
            synthetic_def("noValue", Domain::Health, false),
        ];
        let mut table = ExtractorTable::new();
        table.register("fixed", fixed).register("noValue", no_value);
        ReportBuilder::new(catalog, table)
    }

    #[test]
    fn unregistered_metric_is_empty_not_fatal() {
        let card = synthetic_builder().build("MH", &AllDomainData::default());
        let missing = card.metric("missing").unwrap();
        assert_eq!(missing.value, None);
        assert_eq!(missing.national_avg, None);
        assert_eq!(missing.rank, 0);
        assert_eq!(missing.total_states, 0);
        assert_eq!(missing.quartile, Quartile::Bottom);
        assert_eq!(missing.standing(), None);
    }

    #[test]
    fn invalid_population_entries_are_dropped() {
        let card = synthetic_builder().build("MH", &AllDomainData::default());
        let m = card.metric("fixed").unwrap();
        assert_eq!(m.national_avg, Some(20.0));
        assert_eq!(m.rank, 2);
        assert_eq!(m.total_states, 3);
        assert_eq!(m.quartile, Quartile::LowerMiddle);
    }

    #[test]
    fn missing_value_keeps_average_and_count() {
        let card = synthetic_builder().build("MH", &AllDomainData::default());
        let m = card.metric("noValue").unwrap();
        assert_eq!(m.value, None);
        assert_eq!(m.national_avg, Some(6.0));
        assert_eq!(m.rank, 0);
        assert_eq!(m.total_states, 2);
        let health = card.panel(Domain::Health).unwrap();
        assert!(!health.data_available);
    }

    #[test]
    fn default_order_yields_every_panel() {
        let card = synthetic_builder().build("MH", &AllDomainData::default());
        let domains: Vec<Domain> = card.panels.iter().map(|p| p.domain).collect();
        assert_eq!(domains, Domain::ordered());
        let budget = card.panel(Domain::Budget).unwrap();
        assert!(budget.metrics.is_empty());
        assert!(!budget.data_available);
        assert!(card.panel(Domain::Economy).unwrap().data_available);
    }

    #[test]
    fn domain_order_can_be_overridden() {
        let builder = synthetic_builder().with_domain_order(vec![Domain::Health, Domain::Economy]);
        let card = builder.build("MH", &AllDomainData::default());
        let titles: Vec<&str> = card.panels.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Health Outcomes (NFHS-5)", "Economy"]);
    }

    #[test]
    fn summary_ignores_metrics_without_value() {
        let card = synthetic_builder().build("MH", &AllDomainData::default());
        let summary = card.summary();
        assert_eq!(summary.metrics_with_data, 1);
        assert_eq!(summary.top_quartile, 0);
        assert_eq!(summary.bottom_quartile, 0);
        assert_eq!(summary.domains_with_data, 1);
        assert_eq!(summary.panels[0].metrics_with_data, 1);
    }

    #[test]
    fn state_identity_is_normalized() {
        let card = synthetic_builder().build("  ka ", &AllDomainData::default());
        assert_eq!(card.state, StateIdentity { id: "KA".into(), name: "Karnataka".into() });
        let card = synthetic_builder().build("zz", &AllDomainData::default());
        assert_eq!(card.state.name, "ZZ");
    }
}
