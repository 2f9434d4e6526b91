use std::fmt;

use crate::client::ClientError;

#[derive(Debug, Clone)]
pub enum LinkdeckError {
    Config(String),
    TokenStore(String),
    Validation(String),
    Api(String),
    Terminal(String),
    Io(String),
}

impl LinkdeckError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            LinkdeckError::Config(_) => "E001",
            LinkdeckError::TokenStore(_) => "E002",
            LinkdeckError::Validation(_) => "E003",
            LinkdeckError::Api(_) => "E004",
            LinkdeckError::Terminal(_) => "E005",
            LinkdeckError::Io(_) => "E006",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            LinkdeckError::Config(_) => "Configuration Error",
            LinkdeckError::TokenStore(_) => "Token Store Error",
            LinkdeckError::Validation(_) => "Validation Error",
            LinkdeckError::Api(_) => "API Error",
            LinkdeckError::Terminal(_) => "Terminal Error",
            LinkdeckError::Io(_) => "I/O Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            LinkdeckError::Config(msg)
            | LinkdeckError::TokenStore(msg)
            | LinkdeckError::Validation(msg)
            | LinkdeckError::Api(msg)
            | LinkdeckError::Terminal(msg)
            | LinkdeckError::Io(msg) => msg,
        }
    }

    /// 格式化为彩色输出
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于 CLI/TUI 状态栏）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for LinkdeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for LinkdeckError {}

// 便捷的构造函数
impl LinkdeckError {
    pub fn config<T: Into<String>>(msg: T) -> Self {
        LinkdeckError::Config(msg.into())
    }

    pub fn token_store<T: Into<String>>(msg: T) -> Self {
        LinkdeckError::TokenStore(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        LinkdeckError::Validation(msg.into())
    }

    pub fn api<T: Into<String>>(msg: T) -> Self {
        LinkdeckError::Api(msg.into())
    }

    pub fn terminal<T: Into<String>>(msg: T) -> Self {
        LinkdeckError::Terminal(msg.into())
    }

    pub fn io<T: Into<String>>(msg: T) -> Self {
        LinkdeckError::Io(msg.into())
    }
}

impl From<std::io::Error> for LinkdeckError {
    fn from(err: std::io::Error) -> Self {
        LinkdeckError::Io(err.to_string())
    }
}

impl From<toml::de::Error> for LinkdeckError {
    fn from(err: toml::de::Error) -> Self {
        LinkdeckError::Config(err.to_string())
    }
}

impl From<url::ParseError> for LinkdeckError {
    fn from(err: url::ParseError) -> Self {
        LinkdeckError::Config(format!("invalid base URL: {}", err))
    }
}

impl From<ClientError> for LinkdeckError {
    fn from(err: ClientError) -> Self {
        LinkdeckError::Api(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LinkdeckError>;
