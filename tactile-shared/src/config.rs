use std::sync::RwLock;
use std::path::Path;
use std::fs;
use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;
use toml::Table;

static GLOBAL_CONFIG: OnceCell<RwLock<Table>> = OnceCell::new();

pub fn init<P: AsRef<Path>>(path: P) -> anyhow::Result<()> {
    let path = path.as_ref();

    let content = if path.exists() {
        log::info!("Loading config from {:?}", path);
        fs::read_to_string(path)?
    } else {
        log::warn!("Config file not found at {:?}, using defaults.", path);
        String::new()
    };

    GLOBAL_CONFIG.set(RwLock::new(parse(&content)))
        .map_err(|_| anyhow::anyhow!("Config already initialized"))?;

    Ok(())
}

/// 语法错误时退回空表
pub fn parse(content: &str) -> Table {
    toml::from_str(content).unwrap_or_else(|e| {
        log::error!("Config syntax error: {}, using empty config.", e);
        Table::new()
    })
}

/// 读取某一节；未初始化、缺失或类型不匹配时都用默认值
pub fn get<T: DeserializeOwned + Default>(key: &str) -> T {
    let Some(store) = GLOBAL_CONFIG.get() else {
        log::warn!("Config not initialized, section '[{}]' uses defaults.", key);
        return T::default();
    };

    match store.read() {
        Ok(table) => section(&table, key),
        Err(_) => {
            log::error!("Config lock poisoned, section '[{}]' uses defaults.", key);
            T::default()
        }
    }
}

pub fn section<T: DeserializeOwned + Default>(table: &Table, key: &str) -> T {
    if let Some(value) = table.get(key) {
        value.clone().try_into().unwrap_or_else(|e| {
            log::warn!("Config section '[{}]' mismatch: {}. Using default.", key, e);
            T::default()
        })
    } else {
        T::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct Sample {
        width: u32,
        title: String,
    }

    #[test]
    fn reads_matching_section() {
        let table = parse("[sample]\nwidth = 500\ntitle = \"hi\"\n");
        let s: Sample = section(&table, "sample");
        assert_eq!(s, Sample { width: 500, title: "hi".into() });
    }

    #[test]
    fn mismatch_falls_back_to_default() {
        let table = parse("[sample]\nwidth = \"wide\"\n");
        let s: Sample = section(&table, "sample");
        assert_eq!(s, Sample::default());
    }

    #[test]
    fn broken_toml_is_empty() {
        assert!(parse("[sample\nwidth = ").is_empty());
    }

    #[test]
    fn missing_section_is_default() {
        let s: Sample = section(&Table::new(), "nope");
        assert_eq!(s, Sample::default());
    }
}
