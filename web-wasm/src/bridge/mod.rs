//! JavaScript側の外部機能（カメラ読み取り・QR画像生成・ダウンロード・クリップボード）

pub mod js_bindings;
pub mod image;

pub use image::{download_qr_png, download_records_json, png_bytes_from_data_url};
