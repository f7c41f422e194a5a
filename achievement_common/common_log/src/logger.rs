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

use log::LevelFilter;
use log4rs::append::rolling_file::policy::compound::roll::fixed_window::FixedWindowRoller;
use log4rs::append::rolling_file::policy::compound::trigger::size::SizeTrigger as SizeBasedTriggerPolicy;
use log4rs::append::rolling_file::policy::compound::CompoundPolicy;
use log4rs::append::rolling_file::RollingFileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::Handle;
use std::env;
use std::path::PathBuf;
use crate::config::{LogConfig, LoggerConfig};

const ROOT_APPENDER: &str = "root_appender";
const DEFAULT_LOG_DIR: &str = ".";

pub struct Logger {
    #[allow(dead_code)]
    handle: Handle,
}

impl Logger {
    pub fn new_from_yaml(config_path: impl Into<PathBuf>) -> Result<Self, Box<dyn std::error::Error>> {
        let config = LogConfig::from_yaml(config_path)?;
        Self::new_from_config(config)
    }

    pub fn new_from_config(config: LogConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let final_config = Self::build_config(&config, &Self::output_dir())?;
        let handle = log4rs::init_config(final_config)?;
        Ok(Self { handle })
    }

    /// Build the log4rs configuration: one appender per module logger plus the root appender.
    pub(crate) fn build_config(config: &LogConfig, output_dir: &str) -> Result<Config, Box<dyn std::error::Error>> {
        let mut builder = Config::builder();

        for logger_config in config.loggers.iter().filter(|l| l.path_prefix != "root") {
            let appender = Self::create_appender(logger_config, output_dir)?;
            let appender_name = format!("{}_appender", logger_config.path_prefix);
            builder = builder.appender(Appender::builder().build(&appender_name, Box::new(appender)));

            let logger = log4rs::config::Logger::builder()
                .appender(appender_name)
                .additive(false)
                .build(logger_config.path_prefix.clone(), Self::parse_level(&logger_config.level));
            builder = builder.logger(logger);
        }

        let final_config = match config.get_root_config() {
            Some(root_config) => {
                let root_appender = Self::create_appender(root_config, output_dir)?;
                builder = builder.appender(Appender::builder().build(ROOT_APPENDER, Box::new(root_appender)));
                let root = Root::builder()
                    .appender(ROOT_APPENDER)
                    .build(Self::parse_level(&root_config.level));
                builder.build(root)?
            },
            None => builder.build(Root::builder().build(LevelFilter::Info))?,
        };
        Ok(final_config)
    }

    fn output_dir() -> String {
        env::var("LOG_OUTPUT_DIR").unwrap_or_else(|_| DEFAULT_LOG_DIR.to_string())
    }

    fn create_appender(
        config: &LoggerConfig,
        output_dir: &str,
    ) -> Result<RollingFileAppender, Box<dyn std::error::Error>> {
        let log_directory = format!("{}/{}", output_dir, config.log_directory);
        std::fs::create_dir_all(&log_directory)?;

        let log_file = format!("{}/{}", log_directory, config.log_file_name);
        let archived_log_pattern = format!("{}/{}.{{}}.gz", log_directory, config.log_file_name);

        let size_trigger = SizeBasedTriggerPolicy::new(config.max_file_size);
        let roller = FixedWindowRoller::builder().build(&archived_log_pattern, config.max_zip_count)?;
        let compound_policy = CompoundPolicy::new(Box::new(size_trigger), Box::new(roller));

        let appender = RollingFileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(
                "{d(%Y-%m-%d %H:%M:%S:%3f)} {l} [{M}:{L}] - {m}{n}",
            )))
            .build(log_file, Box::new(compound_policy))?;

        Ok(appender)
    }

    pub(crate) fn parse_level(level: &str) -> LevelFilter {
        match level.to_lowercase().as_str() {
            "trace" => LevelFilter::Trace,
            "debug" => LevelFilter::Debug,
            "info" => LevelFilter::Info,
            "warn" => LevelFilter::Warn,
            "error" => LevelFilter::Error,
            "off" => LevelFilter::Off,
            _ => LevelFilter::Info,
        }
    }
}
