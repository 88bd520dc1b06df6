use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::Context;
use libnw::structs::Sequence;
use thiserror::Error;

#[derive(Error, Debug)]
#[error("no sequences found in: {path}")]
pub struct EmptyFastaError {
    path: String,
}

pub trait PathBufExt {
    fn open(&self, allow_overwrite: bool) -> anyhow::Result<BufWriter<File>>;
}

impl PathBufExt for PathBuf {
    fn open(&self, allow_overwrite: bool) -> anyhow::Result<BufWriter<File>> {
        let mut file_options = File::options();

        if allow_overwrite {
            file_options.write(true).truncate(true).create(true);
        } else {
            file_options.write(true).create_new(true);
        };

        let file = file_options
            .open(self)
            .context(format!("failed to create file: {}", self.to_string_lossy()))?;

        Ok(BufWriter::new(file))
    }
}

/// Read the first record of a fasta file.
pub fn first_fasta_record(path: impl AsRef<Path>) -> anyhow::Result<Sequence> {
    let path = path.as_ref();
    Sequence::from_fasta(path)?.into_iter().next().ok_or_else(|| {
        EmptyFastaError {
            path: path.to_string_lossy().to_string(),
        }
        .into()
    })
}
