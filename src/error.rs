use thiserror::Error;

/// `InitError` はウィンドウと描画先を用意する段階での失敗を表す.
///
/// どれも回復できないので, 受け取った側は確保済みの資源を解放して終了する. 各値は SDL が返したエラー文字列を持つ.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InitError {
    #[error("SDL initialization failed: {0}")]
    Subsystem(String),

    #[error("Window creation failed: {0}")]
    Window(String),

    #[error("Renderer creation failed: {0}")]
    Renderer(String),
}

impl InitError {
    /// 初期化に失敗したときのプロセスの終了コード. どの失敗でも同じ.
    pub const EXIT_CODE: u8 = 1;
}

#[cfg(test)]
mod tests {
    use super::InitError;

    #[test]
    fn test_error_display() {
        let err = InitError::Subsystem("No available video device".into());
        assert_eq!(
            err.to_string(),
            "SDL initialization failed: No available video device"
        );

        let err = InitError::Window("Couldn't find matching GLX visual".into());
        assert_eq!(
            err.to_string(),
            "Window creation failed: Couldn't find matching GLX visual"
        );

        let err = InitError::Renderer("Couldn't find matching render driver".into());
        assert!(err.to_string().ends_with("Couldn't find matching render driver"));
    }

    #[test]
    fn failure_exit_code_is_one() {
        assert_eq!(InitError::EXIT_CODE, 1);
    }
}
