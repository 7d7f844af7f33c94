//! Fixture files for configuration and CLI tests

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use serde_json::{Value, json};
use temp_dir::TempDir;

pub fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.child(name);
    fs::write(&path, content).expect("Failed to write fixture");
    path
}

pub fn write_json(dir: &TempDir, name: &str, value: &Value) -> PathBuf {
    write_file(dir, name, &value.to_string())
}

pub fn saved_recipes() -> Value {
    json!([
        { "id": "s1", "title": "Carbonara", "cuisine": "Italian", "diets": [] },
        { "id": "s2", "title": "Chana Masala", "cuisine": "Indian", "diets": ["vegetarian"] },
        { "id": "s3", "title": "Bibimbap", "cuisine": "Korean" }
    ])
}

pub fn manual_recipes() -> Value {
    json!([
        {
            "id": "m1",
            "title": "Grandma's Lasagna",
            "cuisine": "Italian",
            "image": "https://cdn.example.com/lasagna.jpg"
        },
        { "id": "m2", "title": "Veggie Tacos", "cuisines": ["Mexican"], "vegetarian": true }
    ])
}

pub fn backend_recipes() -> Value {
    json!([
        {
            "id": 11,
            "title": "Pad See Ew",
            "cuisines": ["Thai"],
            "extendedIngredients": [{ "name": "rice noodles" }]
        },
        { "id": 12, "title": "Margherita Pizza", "cuisines": ["Italian"], "vegetarian": true },
        { "id": 13, "title": "Beef Pho", "cuisines": ["Vietnamese"] }
    ])
}
