use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

/// 素性とクラスの共起回数表（素性名 → クラス名 → 回数）
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    counts: BTreeMap<String, BTreeMap<String, f64>>,
}

/// 集計済みの周辺度数
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyTotals {
    pub feature_totals: BTreeMap<String, f64>,
    pub class_totals: BTreeMap<String, f64>,
    pub grand_total: f64,
}

fn validate_count(feature: &str, class: &str, count: f64) -> Result<(), String> {
    if !count.is_finite() {
        return Err(format!(
            "Count for ({}, {}) is not finite: {}",
            feature, class, count
        ));
    }
    if count < 0.0 {
        return Err(format!(
            "Count for ({}, {}) is negative: {}",
            feature, class, count
        ));
    }
    Ok(())
}

impl FrequencyTable {
    pub fn new() -> Self {
        FrequencyTable {
            counts: BTreeMap::new(),
        }
    }

    /// 共起回数を加算する（負や非有限の値はエラー）
    pub fn add_count(&mut self, feature: &str, class: &str, count: f64) -> Result<(), String> {
        validate_count(feature, class, count)?;
        *self
            .counts
            .entry(feature.to_string())
            .or_default()
            .entry(class.to_string())
            .or_insert(0.0) += count;
        Ok(())
    }

    /// 存在しない (素性, クラス) の組は 0 とみなす
    pub fn count(&self, feature: &str, class: &str) -> f64 {
        self.counts
            .get(feature)
            .and_then(|classes| classes.get(class))
            .copied()
            .unwrap_or(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeMap<String, f64>)> {
        self.counts.iter()
    }

    pub fn from_json_value(value: &Value) -> Result<Self, String> {
        let features_obj = value
            .as_object()
            .ok_or("Frequency table must be a JSON object")?;

        let mut table = FrequencyTable::new();
        for (feature, classes) in features_obj {
            let classes_obj = classes
                .as_object()
                .ok_or_else(|| format!("Counts for feature '{}' must be an object", feature))?;
            for (class, count) in classes_obj {
                let count = count.as_f64().ok_or_else(|| {
                    format!("Count for ({}, {}) is not a number: {:?}", feature, class, count)
                })?;
                table.add_count(feature, class, count)?;
            }
        }
        Ok(table)
    }

    /// 周辺度数と総度数を一回の走査で集計する
    pub fn totals(&self) -> FrequencyTotals {
        let mut feature_totals: BTreeMap<String, f64> = BTreeMap::new();
        let mut class_totals: BTreeMap<String, f64> = BTreeMap::new();
        let mut grand_total = 0.0;

        for (feature, classes) in &self.counts {
            for (class, &count) in classes {
                *feature_totals.entry(feature.clone()).or_insert(0.0) += count;
                *class_totals.entry(class.clone()).or_insert(0.0) += count;
                grand_total += count;
            }
        }

        FrequencyTotals {
            feature_totals,
            class_totals,
            grand_total,
        }
    }
}
