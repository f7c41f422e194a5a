/*
 * Copyright (c) Huawei Technologies Co., Ltd. 2025. All rights reserved.
 * Global Trust Authority is licensed under the Mulan PSL v2.
 * You can use this software according to the terms and conditions of the Mulan PSL v2.
 * You may obtain a copy of Mulan PSL v2 at:
 *     http://license.coscl.org.cn/MulanPSL2
 * THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY KIND, EITHER EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO NON-INFRINGEMENT, MERCHANTABILITY OR FIT FOR A PARTICULAR
 * PURPOSE.
 * See the Mulan PSL v2 for more details.
 */

mod controllers {
    pub mod achievement_controller;
    pub mod auth_controller;
    pub mod lecturer_controller;
    pub mod report_controller;
    pub mod student_controller;
    pub mod user_controller;
}
mod middlewares {
    pub mod auth_filter;
    pub mod default_filter;
    pub mod principal;
}
mod routes {
    pub mod routes;
}
mod utils {
    pub mod app_state;
    pub mod env_setting_center;
    pub mod response;
}

use std::io;
use actix_web::{middleware, web, App, HttpServer};
use log::{error, info};
use server_config::{ConfigInitHandler, DbInitHandler, InitChainBuilder, InitContext, LoggerInitHandler};
use crate::middlewares::default_filter::DefaultFilter;
use crate::routes::routes::configure_routes;
use crate::utils::app_state::AppState;
use crate::utils::env_setting_center::{get_address, get_env_by_key, get_env_value_or_default, load_env};
use crate::utils::response::default_not_found_page;

const MAX_JSON_SIZE_DEFAULT: usize = 10 * 1024 * 1024; // 10MB
const WORKERS_DEFAULT: usize = 4;

fn startup_error(message: String) -> io::Error {
    error!("startup failed: {}", message);
    io::Error::new(io::ErrorKind::Other, message)
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    println!("Program started!");
    load_env();
    let chain = InitChainBuilder::new()
        .add_handler(LoggerInitHandler::new())
        .add_handler(ConfigInitHandler::new())
        .add_handler(DbInitHandler::new())
        .build();
    let mut context = InitContext::new();
    chain.execute(&mut context).await.map_err(startup_error)?;

    let config = context.config().map_err(startup_error)?.clone();
    let db = context.db().map_err(startup_error)?;
    let jwt_secret = get_env_by_key("JWT_SECRET").map_err(startup_error)?;
    let state = web::Data::new(AppState::build(&config, db, &jwt_secret).map_err(startup_error)?);
    let max_json_size = get_env_value_or_default("MAX_JSON_SIZE", MAX_JSON_SIZE_DEFAULT);
    let address = get_address().map_err(startup_error)?;

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(
                web::JsonConfig::default()
                    .limit(max_json_size)
                    .error_handler(|err, _| actix_web::error::ErrorBadRequest(format!("invalid JSON payload: {}", err))),
            )
            .wrap(middleware::Logger::default())
            .wrap(DefaultFilter)
            .configure(configure_routes)
            .default_service(web::route().to(default_not_found_page))
    })
    .workers(get_env_value_or_default("ACHIEVEMENT_WORKERS", WORKERS_DEFAULT));

    info!("listening on {}", address);
    server.bind(address)?.run().await
}
