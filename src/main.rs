//! # Wordbank
//!
//! Build tool for the bilingual vocabulary dataset.
//!
//! ## Getting started
//!
//! ```sh
//! wordbank 0.1.0
//! vocabulary dataset build tool.
//!
//! USAGE:
//!     wordbank <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     derive      Derive a language pair from another one and a translation map
//!     help        Prints this message or the help of the given subcommand(s)
//!     list        List the language pairs of the dataset
//!     merge       Merge a record file into the dataset
//!     reformat    Rewrite the dataset in canonical form
//!     split       Split a block stream into per language pair files
//! ```
//!
use structopt::StructOpt;
use wordbank::error::Error;
use wordbank::io::WriteOptions;
use wordbank::pipelines::{self, Pipeline};
use wordbank::processing::DeriveMode;

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Wordbank::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Wordbank::Derive(d) => {
            let mode = if d.strict {
                DeriveMode::Strict
            } else {
                DeriveMode::Lenient
            };
            let nb_records = pipelines::Derive::new(
                d.dataset,
                (d.template_source, d.template_target),
                d.target,
                d.target_name,
                d.map,
            )
            .mode(mode)
            .options(WriteOptions::from(&d.output))
            .dry_run(d.dry_run)
            .run()?;
            info!("dataset has {} records", nb_records);
        }

        cli::Wordbank::Merge(m) => {
            let nb_records = pipelines::Merge::new(m.dataset, m.record)
                .options(WriteOptions::from(&m.output))
                .dry_run(m.dry_run)
                .run()?;
            info!("dataset has {} records", nb_records);
        }

        cli::Wordbank::Reformat(r) => {
            let options = WriteOptions::from(&r.output);
            let nb_records = pipelines::Reformat::new(r.dataset, r.dst, options).run()?;
            info!("{} records reformatted", nb_records);
        }

        cli::Wordbank::Split(s) => {
            let report = pipelines::Splitter::new(s.src, s.dst)
                .extension(&s.extension)
                .run()?;
            for skipped in &report.skipped {
                warn!("skipped: {}", skipped);
            }
            println!(
                "{} blocks written ({} files), {} skipped",
                report.written,
                report.files,
                report.nb_skipped()
            );
        }

        cli::Wordbank::List(l) => {
            let dataset = wordbank::io::load(&l.dataset)?;
            for (summary, record) in dataset.summaries().iter().zip(dataset.iter()) {
                println!("{}", summary);
                debug!("[{}] {}", record.key(), record.category_counts());
            }
        }
    };
    Ok(())
}
