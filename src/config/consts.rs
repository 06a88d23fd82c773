// src/config/consts.rs

// Local cache
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const LAST_ANALYSIS_FILE: &str = "last_analysis.json";

// Input
pub const DEFAULT_INPUT: &str = "data/apps.csv";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const CHARTS_SUBDIR: &str = "charts";
pub const REPORT_FILE: &str = "report.md";
pub const JSON_FILE: &str = "analysis.json";

// Validator defaults (overridable per taxonomy file)
pub const MIN_CHARS: usize = 2;
pub const MAX_WORDS: usize = 5;

// Aggregation
pub const MIN_STACK_SIZE: usize = 3;
pub const MIN_STACK_FLOOR: usize = 2;

// Insights
pub const RARE_THRESHOLD: usize = 2;
pub const CO_INTEGRATIONS_SHOWN: usize = 3;
pub const CATEGORY_TOP_MEMBERS: usize = 5;
pub const LIFT_COMPLEMENTARY: f64 = 2.0;
pub const LIFT_EXCLUSIVE: f64 = 0.5;
pub const PRIMARY_RATIO: f64 = 0.5;
pub const DEPENDENT_RATIO: f64 = 0.1;

// Report cut-offs: apps a pair / stack needs before it is listed
pub const MIN_PAIR_COUNT: usize = 1;
pub const MIN_STACK_COUNT: usize = 1;

// Report
pub const TOP_CONNECTED: usize = 10;
pub const HEATMAP_NAMES: usize = 20;
pub const TOP_N: usize = 20;
pub const TOP_STACKS: usize = 10;
pub const TOP_RELATIONSHIPS: usize = 10;
