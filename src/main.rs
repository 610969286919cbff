use feature_stats::{
    cal_information_gain, cal_pairwise_mutual_information, cal_shannon_entropy_from_counts,
    FrequencyTable,
};

use serde_json::Value;

fn main() {
    println!("In File: {}", "data/blog_gender_counts.json");
    let json_str =
        std::fs::read_to_string("data/blog_gender_counts.json").expect("File not found");
    let json: Value = serde_json::from_str(&json_str).expect("JSON parse error");

    let table = match FrequencyTable::from_json_value(&json) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("Failed to parse frequency table: {}", e);
            std::process::exit(1);
        }
    };

    // 1. クラス分布のエントロピー
    println!("\n=== Class Distribution ===");
    let totals = table.totals();
    match serde_json::to_string_pretty(&totals) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize totals: {}", e),
    }
    let class_counts: Vec<f64> = totals.class_totals.values().copied().collect();
    println!(
        "Class entropy: {:.4} bits",
        cal_shannon_entropy_from_counts(&class_counts)
    );

    // 2. 情報利得の高い順に表示
    println!("\n=== Information Gain ===");
    let gains = cal_information_gain(&table);
    let mut ranked: Vec<(&String, &f64)> = gains.iter().collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(a.1).unwrap_or(std::cmp::Ordering::Equal));
    for (feature, gain) in ranked {
        println!("{}: {:.4}", feature, gain);
    }

    // 3. 自己相互情報量
    println!("\n=== Pairwise Mutual Information ===");
    let pmi = cal_pairwise_mutual_information(&table);
    for (feature, classes) in &pmi {
        for (class, score) in classes {
            println!("{} x {}: {:.4}", feature, class, score);
        }
    }
}
