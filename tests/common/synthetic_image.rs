use std::path::Path;

use image::{Rgb, RgbImage};

/// Write a PNG split into a left and a right half of solid colors.
pub fn write_split_png(path: &Path, width: u32, height: u32, left: [u8; 3], right: [u8; 3]) {
    let img = RgbImage::from_fn(width, height, |x, _| {
        if x < width / 2 {
            Rgb(left)
        } else {
            Rgb(right)
        }
    });
    img.save(path).expect("failed to write synthetic PNG");
}

/// Serialize an intensity matrix in the plain-text format.
pub fn matrix_text(rows: usize, cols: usize, value: u8) -> String {
    let mut text = format!("{rows} {cols}\n");
    for _ in 0..rows {
        let row: Vec<String> = (0..cols).map(|_| value.to_string()).collect();
        text.push_str(&row.join(" "));
        text.push('\n');
    }
    text
}
