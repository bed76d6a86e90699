use equation_split::{Decomposer, FailurePolicy};
use std::io::{BufRead, BufReader};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let decomposer =
        Decomposer::new().with_failure_policy(FailurePolicy::Continue);
    let stdin = std::io::stdin();
    let mut expressions = Vec::new();

    for line in BufReader::new(stdin.lock()).lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match decomposer.decompose(&line) {
            Ok(equation) => {
                let verdict = if equation.holds() { "holds" } else { "wrong" };
                println!("{} ({})", equation, verdict);
            },
            Err(e) => eprintln!("Unable to parse \"{}\": {}", line, e),
        }

        expressions.push(line);
    }

    let answers = decomposer.solution(&expressions)?;
    println!("{} answers", answers.len());

    Ok(())
}
