//! QR画像・バックアップのダウンロード

use base64::Engine;
use qr_manager_common::BACKUP_FILE_NAME;

use super::js_bindings::{download_bytes_js, render_qr_data_url};

/// "data:image/png;base64,...." からバイト列を取り出す
pub fn png_bytes_from_data_url(data_url: &str) -> Result<Vec<u8>, String> {
    let (header, data) = data_url
        .split_once(',')
        .ok_or_else(|| "Data URL has no payload".to_string())?;
    if !header.ends_with(";base64") {
        return Err(format!("Data URL is not base64: {}", header));
    }
    base64::engine::general_purpose::STANDARD
        .decode(data)
        .map_err(|e| format!("Base64 decode failed: {}", e))
}

/// テキストをQR画像にしてPNGでダウンロード
pub async fn download_qr_png(text: &str, size: u32, filename: &str) -> Result<(), String> {
    let data_url = render_qr_data_url(text, size).await?;
    let bytes = png_bytes_from_data_url(&data_url)?;
    download_bytes_js(&bytes, filename, "image/png");
    tracing::info!(filename, "QR image downloaded");
    Ok(())
}

/// エクスポートJSONを `qr-codes-backup.json` としてダウンロード
pub fn download_records_json(json: &str) {
    download_bytes_js(json.as_bytes(), BACKUP_FILE_NAME, "application/json");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_bytes_from_data_url() {
        // "PNG" をbase64化したもの
        let bytes = png_bytes_from_data_url("data:image/png;base64,UE5H").expect("デコード失敗");
        assert_eq!(bytes, b"PNG");
    }

    #[test]
    fn test_png_bytes_rejects_missing_payload() {
        assert!(png_bytes_from_data_url("data:image/png;base64").is_err());
    }

    #[test]
    fn test_png_bytes_rejects_non_base64_header() {
        assert!(png_bytes_from_data_url("data:text/plain,hello").is_err());
    }
}
