pub mod entities {
    pub mod statistics;
}
pub mod aggregator {
    pub mod report_aggregator;
}
pub mod services {
    pub mod report_service;
}

pub use entities::statistics::{CountByKey, Statistics, TopStudent};
