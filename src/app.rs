use std::io::{BufWriter, Read, Write, stdout};

use crate::{
    common::{config::Config, error::AppError},
    domain::book::Book,
    io::{reader, writer},
    worker::processor::Processor,
};

pub fn run<I, S>(args: I) -> Result<(), AppError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(|s| s.into()).collect();
    let config = Config::from_args(&args)?;
    tracing::info!(
        input = %config.input.display(),
        skip_invalid = config.skip_invalid,
        "starting run"
    );

    let file = std::fs::File::open(&config.input).map_err(AppError::OpenInput)?;
    let stdout = stdout();
    execute(file, BufWriter::new(stdout.lock()), &config)
}

/// Runs the command script read from `input`, writing report rows to
/// `output`. Both ledgers are released once the script is exhausted.
pub fn execute<R: Read, W: Write>(input: R, output: W, config: &Config) -> Result<(), AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(input);
    let commands = reader::read_commands(&mut reader);

    let mut book = Book::new();
    let mut processor = Processor::new();
    let mut wtr = writer::report_writer(output);

    for (index, command) in commands.enumerate() {
        let event = match command {
            Ok(event) => event,
            Err(err) if config.skip_invalid => {
                tracing::warn!(row = index + 1, %err, "skipping invalid row");
                continue;
            }
            Err(err) => return Err(AppError::Parse(format!("row {}: {err}", index + 1))),
        };
        let rows = processor.process(&mut book, event)?;
        writer::write_rows(&mut wtr, &rows)?;
    }
    wtr.flush()?;

    let released = book.release();
    tracing::info!(commands = processor.processed(), released, "run finished");
    Ok(())
}
