use std::{
    fs::File,
    io::Write,
    path::Path,
};

use liblzma::write::XzEncoder;

pub fn write_xz(path: &Path, text: &str) {
    let mut encoder = XzEncoder::new(File::create(path).unwrap(), 6);
    encoder.write_all(text.as_bytes()).unwrap();
    encoder.finish().unwrap();
}
