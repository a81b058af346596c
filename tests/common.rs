/// Shared helpers for test vector loading.
use ndarray::{Array, IxDyn};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub fn vectors_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("vectors")
}

#[allow(unused)]
/// Load all F64 tensors of a vector file.
///
/// Vectors come from the numpy construction in `scripts/make_vectors.py`
/// (`linspace` centers, `arange` grid).
pub fn load_vectors(name: &str) -> HashMap<String, Array<f64, IxDyn>> {
    let path = vectors_dir().join(format!("{name}.safetensors"));
    let bytes = std::fs::read(&path)
        .unwrap_or_else(|_| panic!("test vector not found: {}", path.display()));

    let n = u64::from_le_bytes(bytes[..8].try_into().unwrap()) as usize;
    let header: serde_json::Value = serde_json::from_slice(&bytes[8..8 + n]).unwrap();
    let data_start = 8 + n;

    let mut out = HashMap::new();
    for (key, val) in header.as_object().unwrap() {
        if key == "__metadata__" { continue; }
        if val["dtype"].as_str() != Some("F64") { continue; }
        let offsets = val["data_offsets"].as_array().unwrap();
        let s = offsets[0].as_u64().unwrap() as usize;
        let e = offsets[1].as_u64().unwrap() as usize;
        let raw = &bytes[data_start + s..data_start + e];
        let vals: Vec<f64> = raw.chunks_exact(8)
            .map(|b| f64::from_le_bytes(b.try_into().unwrap()))
            .collect();
        let shape: Vec<usize> = val["shape"].as_array().unwrap()
            .iter().map(|v| v.as_u64().unwrap() as usize).collect();
        let arr = Array::from_shape_vec(IxDyn(&shape), vals).unwrap();
        out.insert(key.clone(), arr);
    }
    out
}

#[allow(unused)]
/// Parameters of each reference case, in the order `(nh, endpoints, b, dt)`.
pub fn cases() -> Vec<(&'static str, usize, [f64; 2], f64, f64)> {
    vec![
        ("rcb_nh5_e1_100_b5_dt1",    5,  [1.0, 100.0], 5.0,  1.0),
        ("rcb_nh8_e0_50_b2_dt05",    8,  [0.0, 50.0],  2.0,  0.5),
        ("rcb_nh2_e05_12_b1_dt05",   2,  [0.5, 12.0],  1.0,  0.5),
        ("rcb_nh10_e5_250_b10_dt2",  10, [5.0, 250.0], 10.0, 2.0),
    ]
}

#[allow(unused)]
/// Maximum absolute difference between two arrays.
pub fn max_abs_diff(a: &Array<f64, IxDyn>, b: &Array<f64, IxDyn>) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()).fold(0.0_f64, f64::max)
}

#[allow(unused)]
/// First element of a scalar tensor.
pub fn scalar(a: &Array<f64, IxDyn>) -> f64 {
    *a.iter().next().expect("empty scalar tensor")
}
