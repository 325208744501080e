use colored::Colorize;
use envcli_config::{PropertyStore, VALID_PROPERTIES, is_valid_property};

fn report_unknown(key: &str) {
    println!(
        "{}",
        format!("不明なプロパティです: [{}]", key).yellow()
    );
    println!("利用可能なプロパティ: {}", VALID_PROPERTIES.join(", "));
}

pub fn handle_get(key: &str) -> anyhow::Result<()> {
    let store = PropertyStore::open_default()?;
    if !is_valid_property(key) {
        report_unknown(key);
        return Ok(());
    }

    let value = store.get(key)?;
    println!("{} = {}", key, value.cyan());
    Ok(())
}

pub fn handle_set(key: &str, value: &str) -> anyhow::Result<()> {
    let store = PropertyStore::open_default()?;
    if !is_valid_property(key) {
        report_unknown(key);
        return Ok(());
    }

    store.set(key, value)?;
    println!(
        "{}",
        format!("✓ {} を [{}] に設定しました", key, value).green()
    );
    Ok(())
}

pub fn handle_unset(key: &str) -> anyhow::Result<()> {
    let store = PropertyStore::open_default()?;
    if !is_valid_property(key) {
        report_unknown(key);
        return Ok(());
    }

    store.unset(key)?;
    println!("{}", format!("✓ {} を消去しました", key).green());
    Ok(())
}

pub fn handle_list() -> anyhow::Result<()> {
    let store = PropertyStore::open_default()?;
    let file = store.load()?;

    println!("📄 {}", store.path().display().to_string().cyan());
    for key in VALID_PROPERTIES {
        println!("  {} = {}", key, file.value_or(key, ""));
    }
    Ok(())
}
