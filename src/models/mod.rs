pub mod buckets;
pub mod punch;
pub mod punch_type;
