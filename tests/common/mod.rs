//! Shared fixtures: price-list workbooks written with rust_xlsxwriter

#![allow(dead_code)]

use rust_xlsxwriter::{Workbook, XlsxError};
use std::path::{Path, PathBuf};

/// A cell of a fixture sheet
#[derive(Debug, Clone, Copy)]
pub enum Fixture {
    Text(&'static str),
    Number(f64),
    Blank,
}

pub fn t(s: &'static str) -> Fixture {
    Fixture::Text(s)
}

pub fn n(x: f64) -> Fixture {
    Fixture::Number(x)
}

pub const B: Fixture = Fixture::Blank;

pub type FixtureSheet = Vec<Vec<Fixture>>;

pub const SHEET_NAMES: [&str; 5] = ["Рыбы", "Оборудование", "Корма для рыб", "Химия", "Аквариумы"];

pub fn build_workbook(sheets: &[FixtureSheet]) -> Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();

    for (index, rows) in sheets.iter().enumerate() {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_NAMES.get(index).copied().unwrap_or("Лист"))?;

        for (row, cells) in rows.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                match cell {
                    Fixture::Text(s) => {
                        worksheet.write_string(row as u32, col as u16, *s)?;
                    }
                    Fixture::Number(x) => {
                        worksheet.write_number(row as u32, col as u16, *x)?;
                    }
                    Fixture::Blank => {}
                }
            }
        }
    }

    Ok(workbook)
}

pub fn workbook_bytes(sheets: &[FixtureSheet]) -> Vec<u8> {
    build_workbook(sheets)
        .unwrap()
        .save_to_buffer()
        .unwrap()
}

pub fn save_workbook(dir: &Path, name: &str, sheets: &[FixtureSheet]) -> PathBuf {
    let path = dir.join(name);
    build_workbook(sheets).unwrap().save(&path).unwrap();
    path
}

pub fn fish_sheet() -> FixtureSheet {
    vec![
        vec![t("Прайс-лист на рыбу")],
        vec![],
        vec![B, t("Артикул"), t("Название"), t("Размер"), t("Цена"), t("Комментарий")],
        vec![t("Харациновые")],
        vec![B, t("F-100"), t("Неон голубой"), t("S"), n(45.0), t(" хит ")],
        vec![B, t("F-101"), t("Тернеция"), t("M"), n(60.0)],
        vec![t("Итого Сумма: 105")],
    ]
}

pub fn equipment_sheet() -> FixtureSheet {
    vec![
        vec![t("Артикул"), t("Название"), t("Описание"), t("Производитель"), t("Цена")],
        vec![t("~Фильтры")],
        vec![t("*Внешние")],
        vec![t("EH-2213"), t("Eheim Classic 250"), t("Внешний фильтр"), t("Eheim"), n(9500.0)],
        vec![],
        vec![t("JB-1"), t("Jebo 828"), t("Внешний фильтр"), t("Jebo"), t("0.00")],
    ]
}

pub fn feed_sheet() -> FixtureSheet {
    vec![
        vec![t("Артикул"), t("Название"), t("Описание"), t("Вес"), t("Цена")],
        vec![t("~Хлопья")],
        vec![n(1001.0), t("Tetra Min"), t("Основной корм"), t("100 мл"), n(350.0)],
        vec![t("TM-250"), t("Tetra Min"), B, t("250 мл"), n(700.0)],
    ]
}

pub fn chemistry_sheet() -> FixtureSheet {
    vec![
        vec![t("Артикул"), t("Название"), t("Объём"), t("Описание"), t("Цена")],
        vec![t("~Кондиционеры")],
        vec![t("AS-100"), t("Tetra AquaSafe"), t("100 мл"), t("Кондиционер"), n(400.0)],
    ]
}

pub fn aquariums_sheet() -> FixtureSheet {
    vec![
        vec![t("Артикул"), t("Название"), t("Объём"), t("Описание"), t("Цена")],
        vec![t("~Панорамные")],
        vec![t("AQ-60"), t("Аквариум 60"), n(60.0), t("Гнутое стекло"), n(12000.0)],
    ]
}

pub fn sample_sheets() -> Vec<FixtureSheet> {
    vec![
        fish_sheet(),
        equipment_sheet(),
        feed_sheet(),
        chemistry_sheet(),
        aquariums_sheet(),
    ]
}

/// Image lookup files for the sample workbook
pub fn write_image_files(dir: &Path) {
    std::fs::write(
        dir.join("fish.csv"),
        "F-100|https://img.example/neon.jpg\nbroken\n",
    )
    .unwrap();
    std::fs::write(
        dir.join("feed.csv"),
        "1001|https://img.example/tetramin-100.jpg\n",
    )
    .unwrap();
    std::fs::write(
        dir.join("equipment.csv"),
        "eh-2213|https://img.example/eheim.jpg\n",
    )
    .unwrap();
}
