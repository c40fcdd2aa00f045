use dp_aligner::{Aligner, AlignmentMode, ScoringScheme, Sequence};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Global alignment with default scoring
    let aligner = Aligner::default().with_alignment_mode(AlignmentMode::Global);
    let result = aligner.align(Sequence::new("ACGTACGT"), Sequence::new("ACGTAGCT"))?;

    println!("Score: {}", result.score);
    println!("{}", result.alignment);
    println!("Stats: {:?}", result.alignment.stats());
    println!();

    // Local alignment of the classic Smith-Waterman pair
    let aligner = Aligner::default()
        .with_alignment_mode(AlignmentMode::Local)
        .with_scoring(ScoringScheme::new(2, -1, -1));
    let result = aligner.align(Sequence::new("ACACACTA"), Sequence::new("AGCACACA"))?;

    println!("Score: {}", result.score);
    println!("{}", result.alignment);
    println!("Moves: {:?}", result.alignment.moves);
    println!("\n{}", result.matrix);

    Ok(())
}
