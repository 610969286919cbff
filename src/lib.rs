pub mod cal_information_gain;
pub mod cal_mutual_information;
pub mod cal_shannon_entropy;
pub mod freq_table;

pub use cal_information_gain::{
    cal_information_gain, cal_information_gain_with_scope, OffClassScope,
};
pub use cal_mutual_information::cal_pairwise_mutual_information;
pub use cal_shannon_entropy::{
    cal_shannon_entropy, cal_shannon_entropy_from_counts, cal_shannon_entropy_from_probabilities,
};
pub use freq_table::{FrequencyTable, FrequencyTotals};
