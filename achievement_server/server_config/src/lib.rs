pub mod init_chain {
    pub mod traits;
    pub mod chain {
        pub mod builder;
    }
    pub mod handlers {
        pub mod logger_init_handler;
        pub mod config_init_handler;
        pub mod db_init_handler;
    }
}

pub use init_chain::chain::builder::{InitChain, InitChainBuilder};
pub use init_chain::handlers::config_init_handler::ConfigInitHandler;
pub use init_chain::handlers::db_init_handler::DbInitHandler;
pub use init_chain::handlers::logger_init_handler::LoggerInitHandler;
pub use init_chain::traits::{InitContext, InitHandler};
