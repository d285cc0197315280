//! # Build Script for String Resources / 字符串资源构建脚本
//!
//! This build script generates the string resource table from the TOML
//! catalogs in `resources/strings/`. Every `<tag>.toml` file holds the
//! translations for one locale tag (for example `it`, `zh_TW`, `pt_BR`);
//! `en.toml` is the base catalog and defines the full set of resources.
//!
//! 此构建脚本从 `resources/strings/` 中的 TOML 目录生成字符串资源表。
//! 每个 `<tag>.toml` 文件包含一个区域标签的翻译；`en.toml` 是基础目录，定义全部资源。
//!
//! ## Generated Code / 生成的代码
//!
//! - `StringRes` enum with one variant per resource and a stable integer id
//! - `lookup_<tag>()` per catalog, returning `None` for untranslated resources
//! - `base_value()` exhaustive lookup into the base catalog
//! - `CATALOG_TAGS` and the `lookup()` dispatch function

use serde::Deserialize;
use std::collections::BTreeMap;
use std::env;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

/// First id handed out to string resources.
const RESOURCE_ID_BASE: u32 = 0x7f0f_0000;

/// Tag of the base catalog.
const BASE_TAG: &str = "en";

/// Represents the structure of a catalog file.
/// Maps resource names to their localized strings.
///
/// 表示目录文件的结构。将资源名称映射到其本地化字符串。
#[derive(Debug, Deserialize)]
struct Catalog(BTreeMap<String, String>);

/// Converts a snake_case string to PascalCase.
/// Used to transform resource names into enum variant names.
///
/// 将 snake_case 字符串转换为 PascalCase。
fn to_pascal_case(s: &str) -> String {
    let mut pascal = String::with_capacity(s.len());
    let mut capitalize = true;

    for c in s.chars() {
        if c == '_' {
            capitalize = true;
        } else if capitalize {
            pascal.push(c.to_ascii_uppercase());
            capitalize = false;
        } else {
            pascal.push(c);
        }
    }

    pascal
}

fn read_catalog(path: &Path) -> Catalog {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {:?}: {}", path, e));
    toml::from_str(&content).unwrap_or_else(|e| panic!("Failed to parse {:?}: {}", path, e))
}

fn main() -> std::io::Result<()> {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set");
    let dest_path = Path::new(&out_dir).join("strings.rs");
    let catalog_dir = Path::new("resources").join("strings");

    // 1. Collect catalog files, sorted so the generated code is stable.
    let mut catalog_files: Vec<PathBuf> = fs::read_dir(&catalog_dir)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("toml"))
        .collect();
    catalog_files.sort();

    // 2. The base catalog decides which resources exist.
    let base = read_catalog(&catalog_dir.join(format!("{BASE_TAG}.toml")));
    let variants: BTreeMap<&String, String> = base
        .0
        .keys()
        .map(|key| (key, to_pascal_case(key)))
        .collect();

    let mut code = String::new();

    // 3. The enum, ids and names.
    writeln!(
        code,
        "/// Identifier of a string resource shipped in the catalogs.\n\
         #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]\n\
         #[repr(u32)]\n\
         pub enum StringRes {{"
    )
    .unwrap();
    for (index, (key, variant)) in variants.iter().enumerate() {
        writeln!(code, "    /// `{key}`").unwrap();
        writeln!(code, "    {variant} = {:#x},", RESOURCE_ID_BASE + index as u32).unwrap();
    }
    writeln!(code, "}}\n").unwrap();

    writeln!(code, "impl StringRes {{").unwrap();
    writeln!(code, "    /// Every resource, in id order.").unwrap();
    writeln!(code, "    pub const ALL: &'static [StringRes] = &[").unwrap();
    for variant in variants.values() {
        writeln!(code, "        StringRes::{variant},").unwrap();
    }
    writeln!(code, "    ];\n").unwrap();
    writeln!(code, "    /// The snake_case resource name, as written in the catalogs.").unwrap();
    writeln!(code, "    pub const fn name(self) -> &'static str {{\n        match self {{").unwrap();
    for (key, variant) in &variants {
        writeln!(code, "            StringRes::{variant} => {key:?},").unwrap();
    }
    writeln!(code, "        }}\n    }}\n}}\n").unwrap();

    // 4. One lookup function per catalog.
    let mut tags = Vec::new();
    for path in &catalog_files {
        let tag = path.file_stem().unwrap().to_str().unwrap().to_string();
        let fn_tag = tag.replace('-', "_").to_lowercase();
        let catalog = read_catalog(path);

        writeln!(code, "#[allow(unreachable_patterns)]").unwrap();
        writeln!(
            code,
            "fn lookup_{fn_tag}(res: StringRes) -> Option<&'static str> {{\n    match res {{"
        )
        .unwrap();
        for (key, value) in &catalog.0 {
            match variants.get(key) {
                Some(variant) => {
                    writeln!(code, "        StringRes::{variant} => Some({value:?}),").unwrap();
                }
                None => println!(
                    "cargo:warning=Resource '{}' in {:?} not found in base ({}.toml).",
                    key, path, BASE_TAG
                ),
            }
        }
        writeln!(code, "        _ => None,\n    }}\n}}\n").unwrap();
        tags.push((tag, fn_tag));
    }

    // 5. Exhaustive base lookup; the enum is derived from the base catalog.
    writeln!(
        code,
        "fn base_value(res: StringRes) -> &'static str {{\n    match res {{"
    )
    .unwrap();
    for (key, variant) in &variants {
        writeln!(code, "        StringRes::{variant} => {:?},", base.0[*key]).unwrap();
    }
    writeln!(code, "    }}\n}}\n").unwrap();

    // 6. Catalog list and dispatch.
    writeln!(code, "const CATALOG_TAGS: &[&str] = &[").unwrap();
    for (tag, _) in &tags {
        writeln!(code, "    {tag:?},").unwrap();
    }
    writeln!(code, "];\n").unwrap();

    writeln!(
        code,
        "fn lookup(tag: &str, res: StringRes) -> Option<&'static str> {{\n    match tag {{"
    )
    .unwrap();
    for (tag, fn_tag) in &tags {
        writeln!(code, "        {tag:?} => lookup_{fn_tag}(res),").unwrap();
    }
    writeln!(code, "        _ => None,\n    }}\n}}").unwrap();

    fs::write(&dest_path, code)?;
    println!("cargo:rerun-if-changed=resources/strings/");

    Ok(())
}
