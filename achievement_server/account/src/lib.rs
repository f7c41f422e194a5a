pub mod entities {
    pub mod db_model {
        pub mod user_db_model;
        pub mod role_db_model;
        pub mod permission_db_model;
        pub mod role_permission_db_model;
        pub mod student_db_model;
        pub mod lecturer_db_model;
    }
    pub mod inner_model {
        pub mod page;
        pub mod user_view;
        pub mod student_view;
        pub mod lecturer_view;
    }
    pub mod request_body {
        pub mod auth_req_body;
        pub mod user_req_body;
        pub mod student_req_body;
        pub mod validator;
    }
}
pub mod error {
    pub mod account_error;
}
pub mod repositories {
    pub mod user_repository;
    pub mod role_repository;
    pub mod student_repository;
    pub mod lecturer_repository;
}
pub mod services {
    pub mod auth_service;
    pub mod user_service;
    pub mod student_service;
    pub mod lecturer_service;
}
pub mod utils {
    pub mod password_hasher;
}

pub use error::account_error::AccountError;
pub use entities::inner_model::page::Page;
