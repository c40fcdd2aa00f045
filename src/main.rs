use clap::Parser;
use dp_aligner::cli::{Cli, USAGE};
use dp_aligner::{render, Aligner, AlignerError};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = match Cli::parse().into_run_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            if matches!(err, AlignerError::ArgumentCount(_)) {
                eprintln!("{}", USAGE);
            }
            std::process::exit(2);
        }
    };

    let aligner = Aligner::new(config.params);
    let outcome = aligner.align(config.seq1, config.seq2)?;
    println!("{}", render::console_summary(&outcome));

    render::write_outputs(&outcome, &config.output)?;
    println!(
        "\nCreated text file containing the optimal alignment (saved as {})",
        config.output.alignment_path.display()
    );
    println!(
        "\nCreated score matrix with highlighted moves (saved as {})\n",
        config.output.html_path.display()
    );

    Ok(())
}
