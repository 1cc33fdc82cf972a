pub mod experience;
pub mod explanation;
pub mod location;
pub mod pipeline;
pub mod scoring;
pub mod skills;
pub mod title;
pub mod weights;

pub use explanation::generate_match_explanation;
pub use pipeline::{
    match_label, match_stats, rank_jobs, rank_jobs_with_threshold, MatchStats, RankedJobMatch,
};
pub use scoring::calculate_match;
