//! Engine tuning configuration
//!
//! Algorithm bounds for the search routines. Restaurant-facing policy
//! (weekday rules, advance window) is data, passed per call as
//! [`shared::models::ReservationSettings`]; this struct only tunes the
//! engine itself.
//!
//! # 环境变量
//!
//! | 环境变量 | 默认值 | 说明 |
//! |----------|--------|------|
//! | MAX_COMBINATION_TABLES | 3 | 多桌组合搜索深度上限 |
//! | ALTERNATIVE_LIMIT | 2 | 返回的候选桌数量 |
//! | SUGGESTION_OFFSETS_MIN | -60,60,120 | 替代时段偏移（分钟） |

/// Engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Search-depth cap for the combination optimizer
    pub max_combination_tables: usize,
    /// How many next-best tables an assignment reports
    pub alternative_limit: usize,
    /// Minute offsets probed for alternate-slot suggestions
    pub suggestion_offsets_min: Vec<i64>,
}

impl EngineConfig {
    /// Load configuration from environment variables, with defaults
    /// for anything unset.
    pub fn from_env() -> Self {
        Self {
            max_combination_tables: std::env::var("MAX_COMBINATION_TABLES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3),
            alternative_limit: std::env::var("ALTERNATIVE_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(2),
            suggestion_offsets_min: std::env::var("SUGGESTION_OFFSETS_MIN")
                .ok()
                .map(|v| parse_offsets(&v))
                .unwrap_or_else(default_offsets),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

fn default_offsets() -> Vec<i64> {
    vec![-60, 60, 120]
}

fn parse_offsets(raw: &str) -> Vec<i64> {
    let offsets: Vec<i64> = raw
        .split(',')
        .filter_map(|part| part.trim().parse().ok())
        .collect();
    if offsets.is_empty() {
        default_offsets()
    } else {
        offsets
    }
}
