//! JavaScript Bridge バインディング
//!
//! QRコードのデコード・エンコードはJavaScriptライブラリに委譲する。

use wasm_bindgen::prelude::*;

#[wasm_bindgen(module = "/js/qr-bridge.js")]
extern "C" {
    /// カメラを起動し、フレームごとに検出結果を通知する
    ///
    /// # Arguments
    /// * `video` - プレビュー表示先
    /// * `on_decode` - 検出されたペイロード文字列の配列（空配列あり）を受け取る
    /// * `on_error` - カメラ・デコード失敗のメッセージを受け取る
    #[wasm_bindgen(js_name = "startScanner", catch)]
    pub async fn start_scanner_js(
        video: &web_sys::HtmlVideoElement,
        on_decode: &js_sys::Function,
        on_error: &js_sys::Function,
    ) -> Result<JsValue, JsValue>;

    /// カメラを停止
    #[wasm_bindgen(js_name = "stopScanner")]
    pub fn stop_scanner_js();

    /// テキストをQR画像（PNGのData URL）にする
    #[wasm_bindgen(js_name = "renderQrDataUrl", catch)]
    pub async fn render_qr_data_url_js(text: &str, size: u32) -> Result<JsValue, JsValue>;
}

#[wasm_bindgen(module = "/js/download.js")]
extern "C" {
    /// バイト列をファイルとしてダウンロード
    #[wasm_bindgen(js_name = "downloadBytes")]
    pub fn download_bytes_js(data: &[u8], filename: &str, mime_type: &str);

    #[wasm_bindgen(js_name = "copyText", catch)]
    pub async fn copy_text_js(text: &str) -> Result<JsValue, JsValue>;
}

/// QR画像のData URLを取得
pub async fn render_qr_data_url(text: &str, size: u32) -> Result<String, String> {
    let value = render_qr_data_url_js(text, size)
        .await
        .map_err(|e| format!("QR rendering failed: {:?}", e))?;
    value
        .as_string()
        .ok_or_else(|| "QR rendering failed: not a string".to_string())
}

/// クリップボードへコピー
pub async fn copy_text(text: &str) -> Result<(), String> {
    copy_text_js(text)
        .await
        .map(|_| ())
        .map_err(|e| format!("Clipboard write failed: {:?}", e))
}
