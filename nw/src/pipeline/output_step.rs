use std::io::Write;
use std::path::PathBuf;

use libnw::align::structs::AlignmentSummary;
use libnw::align::{Judge, SequenceAligner};
use serde::Serialize;

use crate::args::{CommonArgs, OutputArgs};
use crate::util::PathBufExt;
use crate::viz::render_table;

#[derive(Serialize)]
struct JsonReport {
    x: String,
    y: String,
    judge: Judge,
    alignment: Option<AlignmentSummary>,
    identity: Option<f64>,
    table: serde_json::Value,
}

pub struct OutputStep {
    print_table: bool,
    dump_path: Option<PathBuf>,
    json_path: Option<PathBuf>,
    allow_overwrite: bool,
}

impl OutputStep {
    pub fn new(args: &OutputArgs, common_args: &CommonArgs) -> Self {
        Self {
            print_table: args.print_table,
            dump_path: args.dump_path.clone(),
            json_path: args.json_path.clone(),
            allow_overwrite: common_args.allow_overwrite,
        }
    }

    pub fn write(&self, aligner: &SequenceAligner) -> anyhow::Result<()> {
        println!("{aligner}");

        if self.print_table {
            println!();
            print!("{}", render_table(aligner));
        }

        if let Some(path) = &self.dump_path {
            let mut writer = path.open(self.allow_overwrite)?;
            aligner.cache().dump(&mut writer)?;
            writer.flush()?;
            log::info!("wrote alignment table to: {}", path.to_string_lossy());
        }

        if let Some(path) = &self.json_path {
            let alignment = aligner.summary();
            let report = JsonReport {
                x: aligner.x().to_text(),
                y: aligner.y().to_text(),
                judge: *aligner.judge(),
                identity: alignment.as_ref().map(AlignmentSummary::identity),
                alignment,
                table: aligner.cache().json(),
            };

            let mut writer = path.open(self.allow_overwrite)?;
            serde_json::to_writer_pretty(&mut writer, &report)?;
            writer.flush()?;
            log::info!("wrote json output to: {}", path.to_string_lossy());
        }

        Ok(())
    }
}
