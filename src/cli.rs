//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;
use wordbank::io::{Shape, WriteOptions};

#[derive(Debug, StructOpt)]
#[structopt(name = "wordbank", about = "vocabulary dataset build tool.")]
/// Holds every command that is callable by the `wordbank` command.
pub enum Wordbank {
    #[structopt(about = "Derive a language pair from another one and a translation map")]
    Derive(Derive),
    #[structopt(about = "Merge a record file into the dataset")]
    Merge(Merge),
    #[structopt(about = "Rewrite the dataset in canonical form")]
    Reformat(Reformat),
    #[structopt(about = "Split a block stream into per language pair files")]
    Split(Split),
    #[structopt(about = "List the language pairs of the dataset")]
    List(List),
}

#[derive(Debug, StructOpt)]
// options shared by commands writing the dataset file
pub struct Output {
    #[structopt(short = "m", long = "markers", help = "emit category markers")]
    pub markers: bool,
    #[structopt(long = "legacy", help = "write a bare array instead of {\"languages\": [...]}")]
    pub legacy: bool,
}

impl From<&Output> for WriteOptions {
    fn from(o: &Output) -> Self {
        WriteOptions {
            markers: o.markers,
            shape: if o.legacy {
                Shape::Legacy
            } else {
                Shape::Wrapped
            },
        }
    }
}

#[derive(Debug, StructOpt)]
/// Derive command and parameters.
///
/// ```sh
/// wordbank derive data.json en es pt Portuguese pt_map.json
/// ```
pub struct Derive {
    #[structopt(parse(from_os_str), help = "dataset file")]
    pub dataset: PathBuf,
    #[structopt(help = "source code of the template record")]
    pub template_source: String,
    #[structopt(help = "target code of the template record")]
    pub template_target: String,
    #[structopt(help = "target code of the new record")]
    pub target: String,
    #[structopt(help = "target language name of the new record")]
    pub target_name: String,
    #[structopt(parse(from_os_str), help = "translation map (JSON object)")]
    pub map: PathBuf,
    #[structopt(short = "s", long = "strict", help = "fail on words missing from the map")]
    pub strict: bool,
    #[structopt(short = "n", long = "dry-run", help = "do not write the dataset")]
    pub dry_run: bool,
    #[structopt(flatten)]
    pub output: Output,
}

#[derive(Debug, StructOpt)]
/// Merge command and parameters.
pub struct Merge {
    #[structopt(parse(from_os_str), help = "dataset file")]
    pub dataset: PathBuf,
    #[structopt(parse(from_os_str), help = "file holding one record")]
    pub record: PathBuf,
    #[structopt(short = "n", long = "dry-run", help = "do not write the dataset")]
    pub dry_run: bool,
    #[structopt(flatten)]
    pub output: Output,
}

#[derive(Debug, StructOpt)]
/// Reformat command and parameters.
pub struct Reformat {
    #[structopt(parse(from_os_str), help = "dataset file")]
    pub dataset: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "dst",
        help = "destination file. Leave blank for in-place rewrite."
    )]
    pub dst: Option<PathBuf>,
    #[structopt(flatten)]
    pub output: Output,
}

#[derive(Debug, StructOpt)]
/// Split command and parameters.
pub struct Split {
    #[structopt(parse(from_os_str), help = "block stream file")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "output root")]
    pub dst: PathBuf,
    #[structopt(
        long = "extension",
        short = "e",
        default_value = "json",
        help = "extension of the written files"
    )]
    pub extension: String,
}

#[derive(Debug, StructOpt)]
/// List command and parameters.
pub struct List {
    #[structopt(parse(from_os_str), help = "dataset file")]
    pub dataset: PathBuf,
}
