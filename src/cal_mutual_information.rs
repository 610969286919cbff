use std::collections::BTreeMap;

use crate::freq_table::FrequencyTable;

/// 各 (素性, クラス) 対の自己相互情報量を計算する。
/// 共起回数が 0 の対は結果に含めない。
pub fn cal_pairwise_mutual_information(
    features: &FrequencyTable,
) -> BTreeMap<String, BTreeMap<String, f64>> {
    let totals = features.totals();
    let grand_total = totals.grand_total;

    let mut scores: BTreeMap<String, BTreeMap<String, f64>> = BTreeMap::new();
    if grand_total <= 0.0 {
        return scores;
    }

    for (feature, classes) in features.iter() {
        let feature_total = totals.feature_totals[feature];
        if feature_total <= 0.0 {
            continue;
        }

        for (class, &joint_count) in classes {
            if joint_count <= 0.0 {
                continue;
            }

            let p_feature = feature_total / grand_total;
            let p_class = totals.class_totals[class] / grand_total;
            let p_joint = joint_count / grand_total;
            let pmi = (p_joint / (p_feature * p_class)).log2();

            scores
                .entry(feature.clone())
                .or_default()
                .insert(class.clone(), pmi);
        }
    }

    scores
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-10;

    fn table(rows: &[(&str, &str, f64)]) -> FrequencyTable {
        let mut table = FrequencyTable::new();
        for &(feature, class, count) in rows {
            table.add_count(feature, class, count).unwrap();
        }
        table
    }

    #[test]
    fn test_independent_counts_have_zero_pmi() {
        let features = table(&[
            ("w1", "pos", 2.0),
            ("w1", "neg", 2.0),
            ("w2", "pos", 2.0),
            ("w2", "neg", 2.0),
        ]);

        let scores = cal_pairwise_mutual_information(&features);
        for classes in scores.values() {
            for &pmi in classes.values() {
                assert!(pmi.abs() < TOLERANCE);
            }
        }
    }

    #[test]
    fn test_perfect_correlation() {
        let features = table(&[("w1", "pos", 5.0), ("w2", "neg", 5.0)]);

        let scores = cal_pairwise_mutual_information(&features);
        // P(f,c) = 0.5, P(f) = P(c) = 0.5 なので log2(0.5 / 0.25) = 1
        assert!((scores["w1"]["pos"] - 1.0).abs() < TOLERANCE);
        assert!((scores["w2"]["neg"] - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_pmi_matches_log_marginal_identity() {
        let features = table(&[
            ("w1", "pos", 3.0),
            ("w1", "neg", 1.0),
            ("w2", "pos", 2.0),
            ("w2", "neg", 6.0),
        ]);

        let totals = features.totals();
        let scores = cal_pairwise_mutual_information(&features);

        for (feature, classes) in features.iter() {
            for (class, &joint) in classes {
                let p_joint = joint / totals.grand_total;
                let p_feature = totals.feature_totals[feature] / totals.grand_total;
                let p_class = totals.class_totals[class] / totals.grand_total;
                let expected = p_joint.log2() - p_feature.log2() - p_class.log2();
                assert!((scores[feature][class] - expected).abs() < TOLERANCE);
            }
        }
    }

    #[test]
    fn test_zero_joint_pairs_are_omitted() {
        let features = table(&[
            ("w1", "pos", 4.0),
            ("w1", "neg", 0.0),
            ("w2", "neg", 4.0),
        ]);

        let scores = cal_pairwise_mutual_information(&features);
        assert!(scores["w1"].contains_key("pos"));
        assert!(!scores["w1"].contains_key("neg"));
        assert!(!scores["w2"].contains_key("pos"));
    }

    #[test]
    fn test_empty_table_yields_empty_scores() {
        let features = FrequencyTable::new();
        assert!(cal_pairwise_mutual_information(&features).is_empty());
    }

    #[test]
    fn test_zero_grand_total_yields_empty_scores() {
        let features = table(&[("w1", "pos", 0.0), ("w2", "neg", 0.0)]);
        assert!(cal_pairwise_mutual_information(&features).is_empty());
    }

    #[test]
    fn test_deterministic_recomputation() {
        let features = table(&[
            ("w1", "pos", 3.0),
            ("w1", "neg", 5.0),
            ("w2", "pos", 7.0),
        ]);

        let first = cal_pairwise_mutual_information(&features);
        let second = cal_pairwise_mutual_information(&features);
        assert_eq!(first, second);
    }
}
