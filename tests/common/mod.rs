#![allow(dead_code)]

use std::path::{Path, PathBuf};

use serde_json::json;

pub const PALETTE: &str = r##"
[colors]
night = "#0b1026"
daylight = "#fdf6e3"
civil = "#f4c27a"
nautical = "#5a6fa8"
astro = "#2b3467"
divider = "#ffffff"
month_label = "#333333"
sunday_label = "#666666"
time_label = "#444444"
title_text = "#000000"
temperature = "coolwarm"
precipitation = "Blues"
dial = "#ffffff"
background = "#ffffff"
"##;

/// Fresh scratch directory under `target/`.
pub fn scratch(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("it").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(dir.join("data")).unwrap();
    dir
}

/// Synthetic city data: sunrise 6.0, sunset 18.0, twilight phases half an hour apart.
pub fn write_city(dir: &Path, city: &str, days: usize) {
    let pairs = |dawn: f64, dusk: f64| vec![[dawn, dusk]; days];
    let temperature: Vec<f64> = (0..days)
        .map(|d| 10.0 * (std::f64::consts::TAU * d as f64 / days as f64).sin())
        .collect();
    let doc = json!({
        "sunrise": vec![6.0; days],
        "sunset": vec![18.0; days],
        "civil": pairs(5.5, 18.5),
        "nautical": pairs(5.0, 19.0),
        "astro": pairs(4.5, 19.5),
        "temperature": temperature,
        "precipitation": vec![1.5; days],
        "coordinates": { "latitude": 59.9139, "longitude": 10.7522 },
        "days_in_month": [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31],
        "year": 2025,
        "weather_data_year": 2024
    });
    let path = dir.join("data").join(format!("{city}_data.json"));
    std::fs::write(path, serde_json::to_string_pretty(&doc).unwrap()).unwrap();
}

/// Minimal TOML settings rendering tiny posters and wallpapers into `dir`.
pub fn write_config(dir: &Path, city: &str, extra: &str) -> PathBuf {
    let text = format!(
        r#"city_name = "{city}"
year = 2025
data_dir = "{data}"
output_dir = "{out}"

[poster]
dpi = 8.0

[wallpaper]
width = 320
height = 180
month = 3

[fonts]
dir = "{data}"
files = []
{extra}
{PALETTE}"#,
        data = dir.join("data").display(),
        out = dir.join("out").display(),
    );
    let path = dir.join("config.toml");
    std::fs::write(&path, text).unwrap();
    path
}
