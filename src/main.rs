use anyhow::Context;
use clap::Parser;
use dialoguer::Confirm;
use qr_manager::{archive, cli, config, error, file_store, logging};
use qr_manager_common::{visible, Persisted, RecordFilter, TagFilter, Theme, THEME_KEY};
use cli::{Cli, Commands};
use config::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let config = Config::load().context("設定ファイルの読み込みに失敗")?;
    let data_dir = config.resolve_data_dir(cli.data_dir.as_deref())?;
    tracing::debug!(data_dir = %data_dir.display(), "using data directory");

    let mut store = file_store::open_store(&data_dir);

    match cli.command {
        Commands::List { search, tag, favorites } => {
            let filter = RecordFilter {
                search,
                tag: TagFilter::from_label(&tag),
                favorites_only: favorites,
            };
            let records = visible(store.records(), &filter);
            if records.is_empty() {
                println!("No QR codes found.");
            }
            for record in records {
                println!("{}", archive::format_record_line(record));
            }
        }

        Commands::Tags => {
            for tag in store.all_tags() {
                println!("{}", tag);
            }
        }

        Commands::Show { id } => {
            let record = store
                .get(&id)
                .ok_or_else(|| error::QrManagerError::RecordNotFound(id.clone()))?;
            println!("{}", archive::format_record_detail(record));
        }

        Commands::Add { text, title, tags } => {
            let record = archive::add_scan(&mut store, &text, &title, tags.as_deref())?;
            println!("✔ 保存しました: {} ({})", record.title, record.id);
            if !record.tags.is_empty() {
                println!("  タグ: {}", record.tags.join(", "));
            }
        }

        Commands::Favorite { id } => match store.try_toggle_favorite(&id)? {
            Some(true) => println!("★ お気に入りに追加: {}", id),
            Some(false) => println!("☆ お気に入りを解除: {}", id),
            None => return Err(error::QrManagerError::RecordNotFound(id).into()),
        },

        Commands::Delete { id, yes } => {
            if store.get(&id).is_none() {
                return Err(error::QrManagerError::RecordNotFound(id).into());
            }
            let deleted = store.try_delete(&id, |record| {
                yes || Confirm::new()
                    .with_prompt(format!("Are you sure you want to delete \"{}\"?", record.title))
                    .default(false)
                    .interact()
                    .unwrap_or(false)
            })?;
            if deleted {
                println!("✔ 削除しました: {}", id);
            } else {
                println!("削除をキャンセルしました");
            }
        }

        Commands::Export { output } => {
            let output = output.unwrap_or_else(|| config.default_export.clone());
            let count = archive::export_to(&store, &output)
                .with_context(|| format!("エクスポート失敗: {}", output.display()))?;
            println!("✔ {}件をエクスポート: {}", count, output.display());
        }

        Commands::Import { input } => {
            let count = archive::import_from(&mut store, &input)
                .with_context(|| format!("インポート失敗: {}", input.display()))?;
            println!("✔ Imported {} QR codes.", count);
        }

        Commands::Theme { toggle } => {
            let kv = Persisted::new(file_store::FileBackend::new(&data_dir));
            let mut theme = kv.get(THEME_KEY, Theme::default());
            if toggle {
                theme = theme.toggled();
                kv.try_set(THEME_KEY, &theme)?;
            }
            println!("テーマ: {}", theme.as_str());
        }

        Commands::Config { set_data_dir, show } => {
            let mut config = config;

            if let Some(dir) = set_data_dir {
                config.set_data_dir(dir)?;
                println!("✔ データディレクトリを設定しました");
            }

            if show {
                // 変更後の設定で解決し直す
                let data_dir = config.resolve_data_dir(cli.data_dir.as_deref())?;
                let count = file_store::open_store(&data_dir).len();
                println!("設定:");
                println!("  データディレクトリ: {}", data_dir.display());
                println!("  エクスポート先: {}", config.default_export.display());
                println!("  保存件数: {}", count);
            }
        }
    }

    Ok(())
}
