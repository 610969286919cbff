const PROBABILITY_SUM_TOLERANCE: f64 = 1e-9;

pub fn cal_shannon_entropy_from_probabilities(probabilities: &[f64]) -> f64 {
    probabilities
        .iter()
        .map(|&p| if p > 0.0 { -p * p.log2() } else { 0.0 })
        .sum()
}

pub fn cal_shannon_entropy_from_counts(counts: &[f64]) -> f64 {
    if counts.is_empty() {
        return 0.0;
    }

    let sum: f64 = counts.iter().sum();
    if sum <= 0.0 {
        return 0.0;
    }

    counts
        .iter()
        .map(|&count| {
            let p = count / sum;
            if p > 0.0 {
                -p * p.log2()
            } else {
                0.0
            }
        })
        .sum()
}

/// 合計がほぼ 1 なら確率列として、そうでなければ度数列として扱う。
/// 空の分布のエントロピーは 0 と定義する。
pub fn cal_shannon_entropy(distribution: &[f64]) -> f64 {
    let sum: f64 = distribution.iter().sum();
    if (sum - 1.0).abs() < PROBABILITY_SUM_TOLERANCE {
        cal_shannon_entropy_from_probabilities(distribution)
    } else {
        cal_shannon_entropy_from_counts(distribution)
    }
}
