/// Logging settings builder
///
/// Nothing here is environment-driven: the server always logs through a single
/// rolling file under `${path.logs}`.

use crate::settings::types::*;

/// Timestamped line layout for the rolling appender
pub const LOG_PATTERN: &str =
    "%d{yyyy'-'MM'-'dd'T'HH:mm:ss.SSSXXX} %-5p [%-35.35t] [%-36.36c]: %m%n";

pub fn build_logging_settings() -> LoggingSettings {
    LoggingSettings {
        appender: AppenderSection {
            rolling: RollingFileAppender {
                file: "${path.logs}/elasticsearch.log".to_string(),
                max_backup_index: "10".to_string(),
                max_file_size: "100MB".to_string(),
                layout: PatternLayout {
                    conversion_pattern: LOG_PATTERN.to_string(),
                    kind: "pattern".to_string(),
                },
                kind: "rollingFile".to_string(),
            },
        },
        level: "INFO".to_string(),
        logger: LoggerOverrides {
            // action execution errors
            action: "DEBUG".to_string(),
            // the AWS SDK is noisy at INFO
            amazonaws: "WARN".to_string(),
        },
        root_logger: "${es.logger.level},R".to_string(),
    }
}
