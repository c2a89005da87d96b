use std::path::PathBuf;

use clap::{Arg, ArgAction, Command, ValueHint};

pub fn build_cli() -> Command {
    Command::new("matgen")
        .version(clap::crate_version!())
        .about("Generate random square matrix input files")
        .long_about(
            "Writes the matrix input files (A.txt, B.txt, medA.txt, ... hugeB.txt) \
             filled with uniformly random values rounded to two decimals. \
             With no arguments the fixed table is written into ./input, \
             which must already exist.",
        )
        .arg(
            Arg::new("config")
                .help("Path to a JSON generator configuration file")
                .required(false)
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output_dir")
                .short('o')
                .long("output-dir")
                .help(
                    "Directory the matrix files are written into. \
                     Overrides the output_dir specified in the configuration file.",
                )
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::DirPath),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .help("Seed the random number generator for reproducible output")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("print_config")
                .long("print-config")
                .help("Print the effective configuration as JSON and exit")
                .action(ArgAction::SetTrue),
        )
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Version {version}\n\n\
             {all-args}{after-help}",
        )
}
