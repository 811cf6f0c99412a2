use argh::FromArgs;
use std::path::PathBuf;
use std::process::ExitCode;

mod app;
mod logger;

#[derive(FromArgs, Debug)]
/// Sort the pixels of every row of an image rightwards by luminance
struct Args {
    /// sets the input file
    #[argh(option, short = 'i', default = "PathBuf::new()")]
    input: PathBuf,

    /// sets the output file
    #[argh(option, short = 'o', default = "PathBuf::new()")]
    output: PathBuf,

    /// sets threshold of sorting (0-255)
    #[argh(option, short = 't', default = "0")]
    threshold: u32,

    /// number of worker threads, 0 uses the global pool
    #[argh(option, short = 'j', default = "0")]
    threads: usize,
}

fn main() -> ExitCode {
    logger::init();

    let args: Args = argh::from_env();
    log::debug!("{args:?}");

    let result = app::Config::new(args.input, args.output, args.threshold, args.threads)
        .and_then(|config| app::run(&config));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
