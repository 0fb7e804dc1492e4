//! QR Manager Common Library
//!
//! CLIとWeb(WASM)で共有される型とロジック

pub mod types;
pub mod error;
pub mod storage;
pub mod store;
pub mod filter;
pub mod session;
pub mod shortcuts;
pub mod filename;

pub use types::{new_id, now_millis, ScanRecord, Theme, UNTITLED_TITLE, RECORDS_KEY, THEME_KEY};
pub use error::{Error, ImportError, Result};
pub use storage::{KeyValueBackend, MemoryBackend, Persisted};
pub use store::RecordStore;
pub use filter::{all_tags, visible, ALL_TAGS_LABEL, RecordFilter, TagFilter};
pub use session::{parse_tags, suggest_tags, is_link, SaveDraft, ScanSession, ScanState};
pub use shortcuts::{dispatch, dispatch_global, dispatch_screen, is_text_entry, KeyInput, Screen, Shortcut, ShortcutAction, ShortcutContext};
pub use filename::{BACKUP_FILE_NAME, SCAN_IMAGE_SIZE, PREVIEW_IMAGE_SIZE, scan_image_file_name, record_image_file_name, slugify_title};
