/// 取餐看板配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | BOARD_FILE | orders.json | 看板数据文件路径 |
/// | NOTICE_TTL_MS | 3000 | 操作提示自动消失时间(毫秒) |
/// | LOG_DIR | 未设置 | 设置后同时写入按天滚动的日志文件 |
///
/// # 示例
///
/// ```ignore
/// BOARD_FILE=/data/orders.json LOG_DIR=./logs cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 看板数据文件路径
    pub board_file: String,
    /// 操作提示自动消失时间(毫秒)
    pub notice_ttl_ms: u64,
    /// 日志目录，未设置时日志仅进入界面日志面板
    pub log_dir: Option<String>,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            board_file: std::env::var("BOARD_FILE").unwrap_or_else(|_| "orders.json".into()),
            notice_ttl_ms: std::env::var("NOTICE_TTL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    #[cfg(test)]
    pub fn with_overrides(board_file: impl Into<String>, notice_ttl_ms: u64) -> Self {
        let mut config = Self::from_env();
        config.board_file = board_file.into();
        config.notice_ttl_ms = notice_ttl_ms;
        config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
