use std::{
    fs::File,
    io::{
        BufReader,
        Read,
    },
    path::Path,
};

use liblzma::read::XzDecoder;

use super::{
    models::Codec,
    PrepError,
};

// Bytes are kept as decoded, so "\r\n" stays "\r\n"
pub fn read_text(path: &Path, codec: Codec) -> Result<String, PrepError> {
    let file = File::open(path)
        .map_err(|source| PrepError::OpenArchive { path: path.to_path_buf(), source })?;
    let reader = BufReader::new(file);
    let decompression_err = |e: std::io::Error| PrepError::Decompression {
        path: path.to_path_buf(),
        reason: e.to_string(),
    };

    let mut text = String::new();
    match codec {
        Codec::Xz => {
            XzDecoder::new_multi_decoder(reader)
                .read_to_string(&mut text)
                .map_err(decompression_err)?;
        }
        Codec::Zstd => {
            zstd::stream::read::Decoder::with_buffer(reader)
                .map_err(decompression_err)?
                .read_to_string(&mut text)
                .map_err(decompression_err)?;
        }
    }

    Ok(text)
}
