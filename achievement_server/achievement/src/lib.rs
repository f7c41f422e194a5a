pub mod entities {
    pub mod status;
    pub mod db_model {
        pub mod reference_db_model;
        pub mod detail_db_model;
    }
    pub mod inner_model {
        pub mod detail_content;
        pub mod achievement_view;
    }
    pub mod request_body {
        pub mod achievement_req_body;
        pub mod reject_req_body;
        pub mod attachment_req_body;
        pub mod validator;
    }
}
pub mod error {
    pub mod achievement_error;
}
pub mod stores {
    pub mod reference_store;
    pub mod detail_store;
    pub mod directory_store;
    pub mod object_storage;
}
pub mod repositories {
    pub mod reference_db_repo;
    pub mod detail_db_repo;
    pub mod directory_db_repo;
}
pub mod access {
    pub mod access_resolver;
}
pub mod services {
    pub mod achievement_service;
    pub mod history;
}

pub use entities::status::{AchievementStatus, LifecycleEvent};
pub use error::achievement_error::AchievementError;
