use std::collections::BTreeMap;

use crate::cal_shannon_entropy::{cal_shannon_entropy, cal_shannon_entropy_from_counts};
use crate::freq_table::FrequencyTable;

/// 素性が出現しない側の条件付き分布で、どのクラス集合を走査するか。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffClassScope {
    /// 素性と共起したクラスのみ（既定）
    CooccurringOnly,
    /// 表に現れる全クラス
    AllClasses,
}

pub fn cal_information_gain(features: &FrequencyTable) -> BTreeMap<String, f64> {
    cal_information_gain_with_scope(features, OffClassScope::CooccurringOnly)
}

/// 各素性の情報利得を計算する。
/// 総共起回数が 0 の素性は結果から除外する。
pub fn cal_information_gain_with_scope(
    features: &FrequencyTable,
    scope: OffClassScope,
) -> BTreeMap<String, f64> {
    let totals = features.totals();
    let grand_total = totals.grand_total;

    let mut scores: BTreeMap<String, f64> = BTreeMap::new();
    if grand_total <= 0.0 {
        return scores;
    }

    let class_counts: Vec<f64> = totals.class_totals.values().copied().collect();
    let class_entropy = cal_shannon_entropy_from_counts(&class_counts);

    for (feature, classes) in features.iter() {
        let feature_total = totals.feature_totals[feature];
        if feature_total <= 0.0 {
            continue;
        }

        let p_present = feature_total / grand_total;

        let present_distribution: Vec<f64> = classes
            .values()
            .filter(|&&count| count > 0.0)
            .map(|&count| count / feature_total)
            .collect();
        let present_entropy = cal_shannon_entropy(&present_distribution);

        let absent_total = grand_total - feature_total;
        if absent_total <= 0.0 {
            // 素性が全観測に出現する場合は出現側の項だけで定義する
            scores.insert(feature.clone(), class_entropy - p_present * present_entropy);
            continue;
        }

        let absent_distribution: Vec<f64> = match scope {
            OffClassScope::CooccurringOnly => classes
                .iter()
                .filter(|&(_, &count)| count > 0.0)
                .map(|(class, &count)| (totals.class_totals[class] - count) / absent_total)
                .collect(),
            OffClassScope::AllClasses => totals
                .class_totals
                .iter()
                .map(|(class, &class_total)| {
                    (class_total - features.count(feature, class)) / absent_total
                })
                .collect(),
        };
        let absent_entropy = cal_shannon_entropy(&absent_distribution);

        let gain = class_entropy
            - (p_present * present_entropy + (1.0 - p_present) * absent_entropy);
        scores.insert(feature.clone(), gain);
    }

    scores
}
