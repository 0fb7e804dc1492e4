use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "qr-manager")]
#[command(about = "QRコードのスキャン履歴アーカイブ管理ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// データディレクトリ（デフォルト: 設定ファイル or OS標準）
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 保存済みQRコードを一覧表示
    List {
        /// タイトル・内容の部分一致（大文字小文字を区別しない）
        #[arg(short, long, default_value = "")]
        search: String,

        /// タグで絞り込み
        #[arg(short, long, default_value = "All")]
        tag: String,

        /// お気に入りのみ
        #[arg(short, long)]
        favorites: bool,
    },

    /// 選択可能なタグ一覧
    Tags,

    /// 1件の詳細を表示
    Show {
        #[arg(required = true)]
        id: String,
    },

    /// 読み取った内容を保存
    Add {
        /// QRコードの内容
        #[arg(required = true)]
        text: String,

        /// タイトル（省略時: Untitled QR）
        #[arg(short, long, default_value = "")]
        title: String,

        /// カンマ区切りのタグ（省略時: 内容から推定）
        #[arg(long)]
        tags: Option<String>,
    },

    /// お気に入りを切り替え
    Favorite {
        #[arg(required = true)]
        id: String,
    },

    /// 削除
    Delete {
        #[arg(required = true)]
        id: String,

        /// 確認なしで削除
        #[arg(short, long)]
        yes: bool,
    },

    /// JSONでエクスポート
    Export {
        /// 出力ファイル（デフォルト: qr-codes-backup.json）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// JSONをインポート（末尾に追加、IDは振り直し）
    Import {
        #[arg(required = true)]
        input: PathBuf,
    },

    /// テーマ設定
    Theme {
        /// dark/light を切り替え
        #[arg(long)]
        toggle: bool,
    },

    /// 設定
    Config {
        /// データディレクトリを設定
        #[arg(long)]
        set_data_dir: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
