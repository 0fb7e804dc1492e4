//! ダウンロードファイル名

use regex::Regex;

/// エクスポートファイル名
pub const BACKUP_FILE_NAME: &str = "qr-codes-backup.json";

/// スキャン画面の画像サイズ（px）
pub const SCAN_IMAGE_SIZE: u32 = 512;

/// 詳細表示の画像サイズ（px）
pub const PREVIEW_IMAGE_SIZE: u32 = 256;

/// スキャン画面からの画像: `qr-scan-<epochミリ秒>.png`
pub fn scan_image_file_name(epoch_millis: i64) -> String {
    format!("qr-scan-{}.png", epoch_millis)
}

/// 保存済みレコードの画像: `qr-<slug>.png`
pub fn record_image_file_name(title: &str) -> String {
    format!("qr-{}.png", slugify_title(title))
}

/// 空白の連続を "-" にして小文字化
pub fn slugify_title(title: &str) -> String {
    lazy_static::lazy_static! {
        static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
    }
    WHITESPACE.replace_all(title, "-").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_image_file_name() {
        assert_eq!(scan_image_file_name(1700000000123), "qr-scan-1700000000123.png");
    }

    #[test]
    fn test_record_image_file_name() {
        assert_eq!(record_image_file_name("Office  Wi-Fi"), "qr-office-wi-fi.png");
        assert_eq!(record_image_file_name("Untitled QR"), "qr-untitled-qr.png");
    }

    #[test]
    fn test_slugify_keeps_edges() {
        assert_eq!(slugify_title(" My\tCard "), "-my-card-");
        assert_eq!(slugify_title("ABC"), "abc");
    }
}
