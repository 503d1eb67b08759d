use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 浏览器相关错误
    #[error("浏览器错误: {0}")]
    Browser(#[from] BrowserError),
    /// API 调用错误
    #[error("API错误: {0}")]
    Api(#[from] ApiError),
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 通知推送错误
    #[error("通知错误: {0}")]
    Notify(#[from] NotifyError),
}

/// 浏览器相关错误
#[derive(Debug, Error)]
pub enum BrowserError {
    /// 连接浏览器失败
    #[error("无法连接到浏览器 (端口: {port}): {source}")]
    ConnectionFailed {
        port: u16,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 启动浏览器失败
    #[error("启动无头浏览器失败: {message}")]
    LaunchFailed { message: String },
    /// 导航失败
    #[error("导航到 {url} 失败: {source}")]
    NavigationFailed {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// API 调用错误
#[derive(Debug, Error)]
pub enum ApiError {
    /// 网络请求失败
    #[error("API请求失败 ({endpoint}): {source}")]
    RequestFailed {
        endpoint: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// API 返回非 2xx 状态码
    #[error("API返回错误状态 ({endpoint}): {status}")]
    BadStatus { endpoint: String, status: u16 },
    /// 响应解析失败
    #[error("响应解析失败 ({endpoint}): {message}")]
    ParseFailed { endpoint: String, message: String },
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 文件不存在
    #[error("文件不存在: {path}")]
    NotFound { path: String },
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 必填字段为空
    #[error("配置项 {field} 不能为空")]
    EmptyField { field: &'static str },
    /// 字段取值非法
    #[error("配置项 {field} 取值非法: {value}")]
    InvalidValue { field: &'static str, value: String },
}

/// 通知推送错误
#[derive(Debug, Error)]
pub enum NotifyError {
    /// 推送请求失败
    #[error("{channel} 推送失败: {source}")]
    SendFailed {
        channel: String,
        #[source]
        source: reqwest::Error,
    },
    /// 推送接口返回错误
    #[error("{channel} 推送返回错误状态: {status}")]
    Rejected { channel: String, status: u16 },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建浏览器连接错误
    pub fn browser_connection_failed(
        port: u16,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Browser(BrowserError::ConnectionFailed {
            port,
            source: Box::new(source),
        })
    }

    /// 创建页面导航错误
    pub fn navigation_failed(
        url: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Browser(BrowserError::NavigationFailed {
            url: url.into(),
            source: Box::new(source),
        })
    }

    /// 创建API请求失败错误
    pub fn api_request_failed(
        endpoint: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Api(ApiError::RequestFailed {
            endpoint: endpoint.into(),
            source: Box::new(source),
        })
    }

    /// 创建API状态码错误
    pub fn api_bad_status(endpoint: impl Into<String>, status: u16) -> Self {
        AppError::Api(ApiError::BadStatus {
            endpoint: endpoint.into(),
            status,
        })
    }

    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建推送失败错误
    pub fn notify_failed(channel: impl Into<String>, source: reqwest::Error) -> Self {
        AppError::Notify(NotifyError::SendFailed {
            channel: channel.into(),
            source,
        })
    }

    /// 创建推送被拒绝错误
    pub fn notify_rejected(channel: impl Into<String>, status: u16) -> Self {
        AppError::Notify(NotifyError::Rejected {
            channel: channel.into(),
            status,
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_context() {
        let err = AppError::api_bad_status("http://export.arxiv.org/api/query", 503);
        let msg = err.to_string();
        assert!(msg.contains("export.arxiv.org"));
        assert!(msg.contains("503"));
    }

    #[test]
    fn test_config_error_names_field() {
        let err: AppError = ConfigError::EmptyField { field: "subject" }.into();
        assert_eq!(err.to_string(), "配置错误: 配置项 subject 不能为空");
    }
}
