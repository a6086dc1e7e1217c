use super::Relation;
use crate::metrics::{Metric, MetricValue};
use compact_str::CompactString;
use core::fmt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A single leaf predicate: a reference metric acting as the bound, and the relation
/// a candidate's value must have to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Threshold<V = MetricValue> {
    metric: Metric<V>,
    relation: Relation,
}

impl<V> Threshold<V> {
    #[must_use]
    pub const fn new(metric: Metric<V>, relation: Relation) -> Self {
        Self { metric, relation }
    }

    /// The reference metric.
    #[must_use]
    pub const fn metric(&self) -> &Metric<V> {
        &self.metric
    }

    #[must_use]
    pub const fn relation(&self) -> Relation {
        self.relation
    }
}

impl<V: Ord> Threshold<V> {
    /// Whether `candidate` is present and fulfills this threshold.
    #[must_use]
    pub fn test(&self, candidate: Option<&Metric<V>>) -> bool {
        candidate.is_some_and(|c| self.matches(c))
    }

    /// Whether `candidate` has this threshold's name and its value relates to the bound.
    ///
    /// Metrics with a different name are never compared, which is what makes it safe to
    /// probe a threshold against a collection holding many unrelated metrics.
    #[must_use]
    pub fn matches(&self, candidate: &Metric<V>) -> bool {
        candidate.name() == self.metric.name() && self.relation.relates_to(candidate, &self.metric)
    }
}

impl<V: fmt::Display> fmt::Display for Threshold<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.metric.name(), self.relation, self.metric.value())
    }
}

impl<V: Serialize> Serialize for Threshold<V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Threshold", 3)?;
        state.serialize_field("metric", self.metric.name())?;
        state.serialize_field("relation", &self.relation)?;
        state.serialize_field("value", self.metric.value())?;
        state.end()
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for Threshold<V> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(deny_unknown_fields)]
        struct ThresholdData<T> {
            metric: CompactString,
            relation: Relation,
            value: T,
        }

        let data = ThresholdData::<V>::deserialize(deserializer)?;

        Ok(Self::new(Metric::new(data.metric, data.value), data.relation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn threshold(name: &str, value: i64, relation: Relation) -> Threshold {
        Threshold::new(Metric::new(name, MetricValue::Integer(value)), relation)
    }

    fn metric(name: &str, value: i64) -> Metric {
        Metric::new(name, MetricValue::Integer(value))
    }

    #[test]
    fn test_less_equals_boundary() {
        let t = threshold("LOC", 10, Relation::LessEquals);
        assert!(t.test(Some(&metric("LOC", 10))));
        assert!(!t.test(Some(&metric("LOC", 11))));
        assert!(t.test(Some(&metric("LOC", 9))));
    }

    #[test]
    fn test_absent_candidate() {
        let t = threshold("LOC", 10, Relation::LessEquals);
        assert!(!t.test(None));
    }

    #[test]
    fn test_name_mismatch_never_matches() {
        let t = threshold("LOC", 10, Relation::LessEquals);

        // 5 <= 10 would hold, but the names differ
        assert!(!t.test(Some(&metric("WMC", 5))));
        assert!(!t.matches(&metric("loc", 5)));
    }

    #[test]
    fn test_accessors() {
        let t = threshold("NOM", 20, Relation::Greater);
        assert_eq!(t.metric(), &metric("NOM", 20));
        assert_eq!(t.relation(), Relation::Greater);
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(threshold("LOC", 10, Relation::Less), threshold("LOC", 10, Relation::Less));
        assert_ne!(threshold("LOC", 10, Relation::Less), threshold("LOC", 10, Relation::LessEquals));
        assert_ne!(threshold("LOC", 10, Relation::Less), threshold("LOC", 11, Relation::Less));
    }

    #[test]
    fn test_display() {
        assert_eq!(threshold("LOC", 10, Relation::LessEquals).to_string(), "LOC ≤ 10");
        let tcc = Threshold::new(Metric::new("TCC", MetricValue::Decimal(0.33)), Relation::Less);
        assert_eq!(tcc.to_string(), "TCC < 0.33");
    }

    #[test]
    fn test_serialize_format() {
        let json = serde_json::to_value(threshold("WMC", 47, Relation::GreaterEquals)).unwrap();
        assert_eq!(json["metric"], "WMC");
        assert_eq!(json["relation"], "greater_equals");
        assert_eq!(json["value"], 47);
        assert_eq!(json.as_object().unwrap().len(), 3);
    }

    #[test]
    fn test_deserialize_toml_inline() {
        #[derive(Deserialize)]
        struct Holder {
            t: Threshold,
        }

        let holder: Holder = toml::from_str(r#"t = { metric = "ATFD", relation = ">", value = 5 }"#).unwrap();
        assert_eq!(holder.t, threshold("ATFD", 5, Relation::Greater));
    }

    #[test]
    fn test_deserialize_rejects_unknown_fields() {
        let result: Result<Threshold, _> = serde_json::from_str(r#"{"metric": "LOC", "relation": "less", "value": 1, "weight": 2}"#);
        assert!(result.is_err(), "unknown field should be rejected");
    }

    #[test]
    fn test_deserialize_requires_all_fields() {
        let result: Result<Threshold, _> = serde_json::from_str(r#"{"metric": "LOC", "value": 1}"#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("relation"));
    }
}
