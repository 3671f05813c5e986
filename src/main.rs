use alignment_matrix::{
    AlignmentMatrixError, FormatterConfig, MatrixFormatter, ScoreMatrix, TraceDirection,
    TraceMatrix, MATRIX_INF,
};

const QUERY: &[u8] = b"ACGT";
const DATABASE: &[u8] = b"AGT";

#[rustfmt::skip]
fn sample_scores() -> Result<ScoreMatrix, AlignmentMatrixError> {
    ScoreMatrix::new(
        vec![
            0, 1, 2, 3,
            1, 0, 1, 2,
            2, 1, 1, 2,
            3, 2, 1, 2,
            MATRIX_INF, 3, 2, 1,
        ],
        QUERY.len() + 1,
        DATABASE.len() + 1,
    )
}

#[rustfmt::skip]
fn sample_traces() -> Result<TraceMatrix, AlignmentMatrixError> {
    let (n, d, u, l) = (
        TraceDirection::NONE,
        TraceDirection::DIAGONAL,
        TraceDirection::UP,
        TraceDirection::LEFT,
    );
    TraceMatrix::new(
        vec![
            n, l, l,     l,
            u, d, l,     l,
            u, u, d,     d | l,
            u, u, d,     d | u | l,
            n, u, u | l, d,
        ],
        QUERY.len() + 1,
        DATABASE.len() + 1,
    )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Format and width come from ALIGNMENT_MATRIX_FORMAT / ALIGNMENT_MATRIX_WIDTH.
    let config = FormatterConfig::from_env()?;

    let scores = sample_scores()?;
    let traces = sample_traces()?;

    println!("Score matrix ({}):", config.format);
    print!("{}", MatrixFormatter::from_config(&scores, &config).render(QUERY, DATABASE)?);
    println!();
    println!("Trace matrix ({}):", config.format);
    print!("{}", MatrixFormatter::from_config(&traces, &config).render(QUERY, DATABASE)?);

    Ok(())
}
